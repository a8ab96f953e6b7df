//! Actions: an HTTP method with its parameters and transaction examples.

use log::trace;

use sleet_core::{
    ast::{Action, PayloadKind},
    sourcemap::{ActionSourceMap, SourceMap},
};

use crate::{
    context::Context,
    error::{Diagnostic, WarningCode},
    sections::{
        self, closes_section, example::ExampleBuilder, heading_at, item_at, parameters, payload,
        resource::ResourceScope,
    },
    signature::{HeadingSignature, ItemSignature},
};

/// Parse the action opened by the heading at the cursor.
pub(crate) fn parse(cx: &mut Context<'_>, scope: &ResourceScope<'_>) -> (Action, ActionSourceMap) {
    let mut action = Action::default();
    let mut map = ActionSourceMap::default();

    let Some(block) = cx.peek() else {
        return (action, map);
    };
    let Some((level, signature)) = heading_at(cx, &block) else {
        return (action, map);
    };

    match signature {
        HeadingSignature::Action { name, method, uri } => {
            action.name = name.to_string();
            if !name.is_empty() {
                map.name = SourceMap::from(block.body);
            }
            action.method = method.to_string();
            if let Some(uri) = uri {
                cx.emit(
                    Diagnostic::warning(format!(
                        "ignoring URI template '{uri}' of action '{method}', \
                         the action uses the template of its resource"
                    ))
                    .with_code(WarningCode::Ignoring)
                    .with_label(block.body, "action URI template"),
                );
            }
        }
        HeadingSignature::ResourceAction { method, .. } => {
            action.method = method.to_string();
        }
        _ => return (action, map),
    }
    map.method = SourceMap::from(block.body);
    cx.advance();
    trace!(method = action.method.as_str(), uri = scope.uri; "Parsing action");

    (action.description, map.description) = sections::description(cx, |cx, block| {
        if let Some((heading_level, signature)) = heading_at(cx, block) {
            return closes_section(level, heading_level, &signature);
        }
        item_at(cx, block, 0).is_some_and(|signature| signature.is_keyword())
    });

    let mut examples = ExampleBuilder::default();
    while let Some(next) = cx.peek() {
        if cx.aborted() {
            break;
        }

        if let Some((heading_level, signature)) = heading_at(cx, &next) {
            if closes_section(level, heading_level, &signature) {
                break;
            }
            sections::ignore_until_heading(cx, "ignoring unrecognized block");
            continue;
        }

        match item_at(cx, &next, 0) {
            Some(ItemSignature::Parameters) => {
                parameters::parse(cx, scope, &mut action.parameters, &mut map.parameters);
            }
            Some(ItemSignature::Payload {
                kind: PayloadKind::Request,
                ..
            }) => {
                let (request, request_map) = payload::parse(cx, &action.method);
                examples.request(request, request_map);
            }
            Some(ItemSignature::Payload {
                kind: PayloadKind::Response,
                ..
            }) => {
                let (response, response_map) = payload::parse(cx, &action.method);
                examples.response(response, response_map);
            }
            Some(ItemSignature::Headers) => sections::deprecated_headers(cx),
            Some(ItemSignature::Other) => sections::unrecognized_item(cx),
            None => sections::ignore_block(cx, "ignoring unrecognized block"),
            Some(_) => {
                let (text, _) = next.item_signature(cx.source());
                sections::ignore_block(
                    cx,
                    format!("ignoring '{text}' section, it is not allowed in an action"),
                );
            }
        }
    }

    (action.examples, map.examples) = examples.finish();

    if !cx.aborted() && action.responses().next().is_none() {
        cx.emit(
            Diagnostic::warning(format!(
                "no response defined for '{} {}'",
                action.method, scope.uri
            ))
            .with_code(WarningCode::EmptyDefinition)
            .with_label(block.body, "action without a response")
            .with_help("add a '+ Response <status>' section"),
        );
    }

    (action, map)
}
