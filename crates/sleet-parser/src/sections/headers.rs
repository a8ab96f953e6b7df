//! The `+ Headers` section of a payload.

use sleet_core::{
    collection::{Headers, KeyValue},
    sourcemap::SourceMap,
};

use crate::{
    block::BlockKind,
    context::Context,
    error::{Diagnostic, WarningCode},
    signature,
};

/// Parse the headers item at the cursor, one `Name: value` per line.
///
/// Headers are appended to `headers`, after any `Content-Type` taken from the
/// payload signature.
pub(crate) fn parse(cx: &mut Context<'_>, headers: &mut Headers, maps: &mut Vec<SourceMap>) {
    let Some(item) = cx.peek() else {
        return;
    };
    let end = cx.extent(cx.pos());
    cx.advance();

    let source = cx.source();
    let mut misindented = false;
    let mut found = false;
    while cx.pos() < end {
        let Some(block) = cx.peek() else {
            break;
        };
        if block.kind != BlockKind::CodeBlock && !misindented {
            misindented = true;
            cx.emit(
                Diagnostic::warning("'Headers' content is expected to be an indented code block")
                    .with_code(WarningCode::Indentation)
                    .with_label(block.body, "not indented as code"),
            );
        }

        for line in block.stripped_lines(source, false) {
            let text = line.slice(source).trim();
            if text.is_empty() {
                continue;
            }
            found = true;

            let Some((name, value)) = signature::header(text) else {
                cx.emit(
                    Diagnostic::warning(format!("unable to parse HTTP header '{text}'"))
                        .with_code(WarningCode::Formatting)
                        .with_label(line, "malformed header")
                        .with_help("use '<header name>: <header value>', one header per line"),
                );
                continue;
            };

            if headers.contains_key(name) {
                cx.emit(
                    Diagnostic::warning(format!("duplicate definition of '{name}' header"))
                        .with_code(WarningCode::Duplicate)
                        .with_label(line, "duplicate header"),
                );
            }
            headers.push(KeyValue::new(name, value));
            maps.push(SourceMap::from(line));
        }
        cx.advance();
    }

    if !found {
        cx.emit(
            Diagnostic::warning("no headers specified")
                .with_code(WarningCode::EmptyDefinition)
                .with_label(item.body, "empty 'Headers' section"),
        );
    }
}
