//! The document root: metadata, API name, description and resource groups.

use log::debug;

use sleet_core::{
    ast::Blueprint,
    collection::KeyValue,
    sourcemap::{BlueprintSourceMap, SourceMap},
};

use crate::{
    block::BlockKind,
    context::Context,
    error::{Diagnostic, ErrorCode, WarningCode},
    sections::{self, group, heading_at},
    signature::{self, HeadingSignature},
    span::Span,
};

const API_NAME_MESSAGE: &str = "expected API name, e.g. '# <API Name>'";

pub(crate) fn parse(cx: &mut Context<'_>) -> (Blueprint, BlueprintSourceMap) {
    let mut blueprint = Blueprint::default();
    let mut map = BlueprintSourceMap::default();

    if cx.peek().is_some_and(|block| block.is_blank()) {
        cx.advance();
    }

    metadata(cx, &mut blueprint, &mut map);
    name(cx, &mut blueprint, &mut map);
    if cx.aborted() {
        return (blueprint, map);
    }

    (blueprint.description, map.description) = sections::description(cx, |cx, block| {
        heading_at(cx, block).is_some_and(|(_, signature)| signature.is_section())
    });

    while let Some(block) = cx.peek() {
        if cx.aborted() {
            break;
        }
        match heading_at(cx, &block).map(|(_, signature)| signature) {
            Some(HeadingSignature::Group { .. }) => {
                let (group, group_map) = group::parse(cx);
                blueprint.resource_groups.push(group);
                map.resource_groups.push(group_map);
            }
            Some(HeadingSignature::Resource { .. } | HeadingSignature::ResourceAction { .. }) => {
                let (group, group_map) = group::parse_implicit(cx);
                blueprint.resource_groups.push(group);
                map.resource_groups.push(group_map);
            }
            Some(HeadingSignature::Action { method, .. }) => {
                sections::action_outside_resource(cx, method);
            }
            _ => sections::ignore_until_heading(cx, "ignoring unrecognized block"),
        }
    }

    debug!(
        name = blueprint.name.as_str(),
        groups = blueprint.resource_groups.len();
        "Blueprint parsed"
    );
    (blueprint, map)
}

/// Leading `key: value` lines.
fn metadata(cx: &mut Context<'_>, blueprint: &mut Blueprint, map: &mut BlueprintSourceMap) {
    let Some(block) = cx.peek() else {
        return;
    };
    if block.kind != BlockKind::Paragraph || block.depth != 0 || block.is_blank() {
        return;
    }

    let source = cx.source();
    let lines = block.stripped_lines(source, false);
    let mut entries = Vec::with_capacity(lines.len());
    for line in lines {
        match signature::metadata(line.slice(source)) {
            Some((key, value)) => entries.push((key, value, line)),
            None => return,
        }
    }

    for (key, value, line) in entries {
        if blueprint.metadata.contains_key(key) {
            cx.emit(
                Diagnostic::warning(format!("duplicate definition of '{key}'"))
                    .with_code(WarningCode::Duplicate)
                    .with_label(line, "duplicate metadata key"),
            );
        }
        blueprint.metadata.push(KeyValue::new(key, value));
        map.metadata.push(SourceMap::from(line));
    }
    cx.advance();
}

/// The API name heading, or the diagnostic for its absence.
fn name(cx: &mut Context<'_>, blueprint: &mut Blueprint, map: &mut BlueprintSourceMap) {
    let block = cx.peek();
    let title = block.and_then(|block| match heading_at(cx, &block)? {
        (_, HeadingSignature::Other) => Some(block),
        // A bracketed heading without a URI template is a plain title here.
        (_, HeadingSignature::Resource { uri, .. }) if !uri.starts_with('/') => Some(block),
        _ => None,
    });

    if let Some(title) = title {
        blueprint.name = title.heading_text(cx.source()).to_string();
        map.name = SourceMap::from(title.body);
        cx.advance();
        return;
    }

    let location = block.map_or(Span::empty(cx.source().len()), |block| block.body);
    if cx.options().require_blueprint_name {
        cx.emit(
            Diagnostic::error(API_NAME_MESSAGE)
                .with_code(ErrorCode::Business)
                .with_label(location, "expected a title heading here"),
        );
        return;
    }

    // An empty document is valid without a name.
    if cx.has_content() {
        cx.emit(
            Diagnostic::warning(API_NAME_MESSAGE)
                .with_code(WarningCode::ApiName)
                .with_label(location, "expected a title heading here"),
        );
    }
}
