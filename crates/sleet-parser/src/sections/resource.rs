//! Resources: a URI template with its model, parameters and actions.

use log::trace;

use sleet_core::{
    ast::{PayloadKind, Resource},
    sourcemap::{ResourceSourceMap, SourceMap},
};

use crate::{
    block::Block,
    context::Context,
    error::{Diagnostic, ErrorCode, WarningCode},
    sections::{self, action, closes_section, heading_at, item_at, parameters, payload},
    signature::{HeadingSignature, ItemSignature},
    uri::UriTemplate,
};

/// The resource an action or parameter section belongs to.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResourceScope<'a> {
    pub uri: &'a str,
    pub template: &'a UriTemplate,
    /// Heading level of the resource.
    pub level: u8,
}

/// Parse the resource opened by the heading at the cursor.
///
/// Returns `None` when the resource heading is fatally malformed.
pub(crate) fn parse(cx: &mut Context<'_>) -> Option<(Resource, ResourceSourceMap)> {
    let block = cx.peek()?;
    let (level, signature) = heading_at(cx, &block)?;
    let mut resource = Resource::default();
    let mut map = ResourceSourceMap::default();

    match signature {
        HeadingSignature::Resource { name, uri } => {
            if !uri.starts_with('/') {
                let message = if uri.is_empty() {
                    format!("resource '{name}' is missing a URI template")
                } else {
                    format!("invalid URI template '{uri}' of resource '{name}'")
                };
                cx.emit(
                    Diagnostic::error(message)
                        .with_code(ErrorCode::Application)
                        .with_label(block.body, "expected a URI template starting with '/'"),
                );
                return None;
            }

            resource.name = name.to_string();
            if !name.is_empty() {
                map.name = SourceMap::from(block.body);
            }
            resource.uri_template = uri.to_string();
            map.uri_template = SourceMap::from(block.body);
            cx.advance();
            trace!(name, uri; "Parsing resource");

            let template = check_uri_template(cx, uri, &block);
            let scope = ResourceScope {
                uri,
                template: &template,
                level,
            };

            (resource.description, map.description) = sections::description(cx, |cx, block| {
                if let Some((heading_level, signature)) = heading_at(cx, block) {
                    return closes_section(level, heading_level, &signature);
                }
                item_at(cx, block, 0).is_some_and(|signature| signature.is_keyword())
            });

            body(cx, &scope, &mut resource, &mut map);
        }
        HeadingSignature::ResourceAction { uri, .. } => {
            resource.uri_template = uri.to_string();
            map.uri_template = SourceMap::from(block.body);
            trace!(uri; "Parsing resource with a single action");

            let template = check_uri_template(cx, uri, &block);
            let scope = ResourceScope {
                uri,
                template: &template,
                level,
            };

            let (action, action_map) = action::parse(cx, &scope);
            resource.actions.push(action);
            map.actions.push(action_map);

            body(cx, &scope, &mut resource, &mut map);
        }
        _ => return None,
    }

    Some((resource, map))
}

/// Validate a URI template and record it for duplicate detection.
fn check_uri_template(cx: &mut Context<'_>, uri: &str, block: &Block) -> UriTemplate {
    let template = UriTemplate::analyze(uri);
    for problem in &template.problems {
        cx.emit(
            Diagnostic::warning(problem.clone())
                .with_code(WarningCode::Uri)
                .with_label(block.body, "malformed URI template"),
        );
    }

    if let Some(previous) = cx.note_uri_template(uri, block.body) {
        cx.emit(
            Diagnostic::warning(format!("the resource '{uri}' is already defined"))
                .with_code(WarningCode::Duplicate)
                .with_label(block.body, "duplicate resource")
                .with_secondary_label(previous, "first defined here"),
        );
    }
    template
}

fn body(
    cx: &mut Context<'_>,
    scope: &ResourceScope<'_>,
    resource: &mut Resource,
    map: &mut ResourceSourceMap,
) {
    let mut has_model = false;

    while let Some(block) = cx.peek() {
        if cx.aborted() {
            return;
        }

        if let Some((heading_level, signature)) = heading_at(cx, &block) {
            match signature {
                HeadingSignature::Action { .. } => {
                    if heading_level <= scope.level {
                        cx.emit(
                            Diagnostic::warning(format!(
                                "action is not nested under the heading of resource '{}', \
                                 it is treated as part of the resource",
                                scope.uri
                            ))
                            .with_code(WarningCode::Ambiguity)
                            .with_label(block.body, "heading level is not deeper than the resource's"),
                        );
                    }
                    let (action, action_map) = action::parse(cx, scope);
                    if resource.actions.iter().any(|a| a.method == action.method) {
                        cx.emit(
                            Diagnostic::warning(format!(
                                "action with method '{}' is already defined for resource '{}'",
                                action.method, scope.uri
                            ))
                            .with_code(WarningCode::Duplicate)
                            .with_label(block.body, "duplicate action"),
                        );
                    }
                    resource.actions.push(action);
                    map.actions.push(action_map);
                }
                HeadingSignature::Other if heading_level > scope.level => {
                    sections::ignore_until_heading(cx, "ignoring unrecognized block");
                }
                _ => return,
            }
            continue;
        }

        match item_at(cx, &block, 0) {
            Some(ItemSignature::Payload {
                kind: PayloadKind::Model,
                ..
            }) => {
                model(cx, &block, has_model, resource, map);
                has_model = true;
            }
            Some(ItemSignature::Parameters) => {
                parameters::parse(cx, scope, &mut resource.parameters, &mut map.parameters);
            }
            Some(ItemSignature::Headers) => sections::deprecated_headers(cx),
            Some(ItemSignature::Other) => sections::unrecognized_item(cx),
            None => sections::ignore_block(cx, "ignoring unrecognized block"),
            Some(_) => {
                let (text, _) = block.item_signature(cx.source());
                sections::ignore_block(
                    cx,
                    format!("ignoring '{text}' section, expected it inside an action"),
                );
            }
        }
    }
}

/// Parse a `+ Model` section and define its symbol.
fn model(
    cx: &mut Context<'_>,
    block: &Block,
    has_model: bool,
    resource: &mut Resource,
    map: &mut ResourceSourceMap,
) {
    let (mut model, mut model_map) = payload::parse(cx, "");
    if has_model {
        cx.emit(
            Diagnostic::warning(format!(
                "ignoring additional model of resource '{}'",
                resource.uri_template
            ))
            .with_code(WarningCode::Duplicate)
            .with_label(block.body, "duplicate model"),
        );
        return;
    }

    model.name = resource.name.clone();
    model_map.name = map.name.clone();

    if resource.name.is_empty() {
        cx.emit(
            Diagnostic::warning(format!(
                "the model of resource '{}' cannot be referenced, the resource has no name",
                resource.uri_template
            ))
            .with_code(WarningCode::LogicalError)
            .with_label(block.body, "model of an unnamed resource")
            .with_help("name the resource, e.g. '## Note [/notes]'"),
        );
    } else if let Err(existing) = cx.define_model(&resource.name, block.body) {
        let (previous, id) = (existing.span, existing.id.clone());
        cx.emit(
            Diagnostic::warning(format!("model '{id}' is already defined"))
                .with_code(WarningCode::Redefinition)
                .with_label(block.body, "redefined model")
                .with_secondary_label(previous, "first defined here"),
        );
    }

    resource.model = model;
    map.model = model_map;
}
