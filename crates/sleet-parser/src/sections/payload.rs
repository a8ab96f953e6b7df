//! Models, requests and responses.
//!
//! A payload item either nests explicit `+ Headers`, `+ Body` and `+ Schema`
//! sections, or uses the abbreviated form where indented code directly under
//! the item is the body. A paragraph of the form `[Identifier][]` makes the
//! payload a reference to a named resource model; anything but a body after
//! the reference is ignored.

use sleet_core::{
    ast::{Payload, PayloadKind, Reference},
    collection::KeyValue,
    sourcemap::{PayloadSourceMap, SourceMap},
};

use crate::{
    block::{Block, BlockKind},
    context::Context,
    error::{Diagnostic, WarningCode},
    sections::{self, Text, headers, item_at},
    signature::{self, ItemSignature},
    span::Span,
};

/// Parse the payload item at the cursor.
///
/// `method` is the method of the enclosing action, empty for models.
pub(crate) fn parse(cx: &mut Context<'_>, method: &str) -> (Payload, PayloadSourceMap) {
    let mut payload = Payload::default();
    let mut map = PayloadSourceMap::default();

    let Some(item) = cx.peek() else {
        return (payload, map);
    };
    let end = cx.extent(cx.pos());
    let (text, signature_span) = item.item_signature(cx.source());
    let ItemSignature::Payload {
        kind,
        name,
        media_type,
    } = signature::item(text)
    else {
        cx.seek(end);
        return (payload, map);
    };

    payload.name = name.to_string();
    if !name.is_empty() {
        map.name = SourceMap::from(signature_span);
    }
    if kind == PayloadKind::Response
        && !name.is_empty()
        && !name.chars().all(|c| c.is_ascii_digit())
    {
        cx.emit(
            Diagnostic::warning(format!("invalid HTTP status code '{name}'"))
                .with_code(WarningCode::Formatting)
                .with_label(item.body, "expected a numeric status code"),
        );
    }
    if let Some(media_type) = media_type {
        payload
            .headers
            .push(KeyValue::new("Content-Type", media_type));
        map.headers.push(SourceMap::from(signature_span));
    }
    cx.advance();

    let child_depth = item.depth + 1;
    let mut description = Text::default();
    let mut abbreviated_body = Text::default();
    let mut has_sections = false;
    let mut seen = Seen::default();

    while cx.pos() < end {
        let Some(block) = cx.peek() else {
            break;
        };

        match item_at(cx, &block, child_depth) {
            Some(ItemSignature::Headers) => {
                has_sections = true;
                if seen.headers {
                    duplicate_section(cx, &block, "Headers");
                } else {
                    seen.headers = true;
                    headers::parse(cx, &mut payload.headers, &mut map.headers);
                }
                continue;
            }
            Some(ItemSignature::Body) => {
                has_sections = true;
                if seen.body {
                    duplicate_section(cx, &block, "Body");
                } else {
                    seen.body = true;
                    (payload.body, map.body) = asset(cx, "Body");
                }
                continue;
            }
            Some(ItemSignature::Schema) => {
                has_sections = true;
                if seen.schema {
                    duplicate_section(cx, &block, "Schema");
                } else {
                    seen.schema = true;
                    (payload.schema, map.schema) = asset(cx, "Schema");
                }
                continue;
            }
            _ => {}
        }

        if has_sections {
            sections::ignore_block(cx, "ignoring unrecognized block in payload");
            continue;
        }

        let block_end = cx.extent(cx.pos());
        let reference = (block.kind == BlockKind::Paragraph && block.depth == child_depth)
            .then(|| find_reference(cx.source(), &block))
            .flatten();

        let referenced = payload.reference.as_ref().map(|reference| reference.id.clone());
        if let Some(found) = reference {
            match referenced {
                Some(existing) => cx.emit(
                    Diagnostic::warning(format!(
                        "ignoring reference to model '{}', the payload already refers to '{}'",
                        found.id, existing
                    ))
                    .with_code(WarningCode::Ignoring)
                    .with_label(block.body, "additional reference"),
                ),
                None => {
                    if !found.alone {
                        cx.emit(
                            Diagnostic::warning(format!(
                                "ignoring text around the reference to model '{}'",
                                found.id
                            ))
                            .with_code(WarningCode::Ignoring)
                            .with_label(block.body, "reference mixed with text")
                            .with_help("put the reference on a line of its own"),
                        );
                    }
                    cx.add_reference(&found.id, found.line);
                    map.reference = SourceMap::from(found.line);
                    payload.reference = Some(Reference::new(found.id));
                }
            }
            cx.seek(block_end);
            continue;
        }

        match referenced {
            _ if block.kind == BlockKind::CodeBlock && block.depth == child_depth => {
                abbreviated_body.push_body(cx.source(), &block);
                cx.advance();
            }
            Some(existing) => {
                let message = format!("ignoring content after the reference to model '{existing}'");
                sections::ignore_block(cx, message);
            }
            None => {
                while cx.pos() < block_end {
                    if let Some(nested) = cx.peek() {
                        description.push_block(cx.source(), &nested);
                    }
                    cx.advance();
                }
            }
        }
    }

    (payload.description, map.description) = description.into_description(cx);

    if !abbreviated_body.is_empty() {
        if seen.body {
            cx.emit(
                Diagnostic::warning("ignoring body text, the payload already has a 'Body' section")
                    .with_code(WarningCode::Duplicate)
                    .with_label(item.body, "payload with two bodies"),
            );
        } else {
            (payload.body, map.body) = abbreviated_body.into_parts();
        }
    }

    if let Some(reference) = &payload.reference {
        if !payload.body.is_empty() || !payload.schema.is_empty() {
            cx.emit(
                Diagnostic::warning(format!(
                    "ignoring the body and schema of a payload referring to model '{}'",
                    reference.id
                ))
                .with_code(WarningCode::Ignoring)
                .with_label(item.body, "payload with a model reference"),
            );
            payload.body.clear();
            payload.schema.clear();
            map.body = SourceMap::new();
            map.schema = SourceMap::new();
        }
    }

    if kind == PayloadKind::Response {
        check_body_allowed(cx, &item, method, &payload);
    }
    cx.seek(end);
    (payload, map)
}

/// A `[Identifier][]` line inside a paragraph.
#[derive(Debug)]
struct ReferenceLine {
    id: String,
    line: Span,
    /// The reference is the only line of its paragraph.
    alone: bool,
}

fn find_reference(source: &str, block: &Block) -> Option<ReferenceLine> {
    let lines = block.stripped_lines(source, false);
    lines.iter().find_map(|line| {
        signature::reference(line.slice(source)).map(|id| ReferenceLine {
            id: id.to_string(),
            line: *line,
            alone: lines.len() == 1,
        })
    })
}

#[derive(Debug, Default)]
struct Seen {
    headers: bool,
    body: bool,
    schema: bool,
}

fn duplicate_section(cx: &mut Context<'_>, block: &Block, keyword: &str) {
    let end = cx.extent(cx.pos());
    cx.emit(
        Diagnostic::warning(format!(
            "ignoring additional '{keyword}' section, only the first one is used"
        ))
        .with_code(WarningCode::Duplicate)
        .with_label(block.body, "duplicate section"),
    );
    cx.seek(end);
}

/// Parse a `+ Body` or `+ Schema` item at the cursor.
fn asset(cx: &mut Context<'_>, keyword: &str) -> (String, SourceMap) {
    let Some(item) = cx.peek() else {
        return Default::default();
    };
    let end = cx.extent(cx.pos());
    cx.advance();

    let mut text = Text::default();
    let mut misindented = false;
    while cx.pos() < end {
        let Some(block) = cx.peek() else {
            break;
        };
        if block.kind == BlockKind::CodeBlock {
            text.push_body(cx.source(), &block);
        } else {
            if !misindented {
                misindented = true;
                cx.emit(
                    Diagnostic::warning(format!(
                        "'{keyword}' content is expected to be an indented code block"
                    ))
                    .with_code(WarningCode::Indentation)
                    .with_label(block.body, "not indented as code")
                    .with_help("indent the content by 8 spaces or 2 tabs relative to the section"),
                );
            }
            text.push_block(cx.source(), &block);
        }
        cx.advance();
    }

    if text.is_empty() {
        cx.emit(
            Diagnostic::warning(format!("empty '{keyword}' section"))
                .with_code(WarningCode::EmptyDefinition)
                .with_label(item.body, "section without content"),
        );
    }
    text.into_parts()
}

/// Warn when a response carries a body its status or method forbids.
fn check_body_allowed(cx: &mut Context<'_>, item: &Block, method: &str, payload: &Payload) {
    if payload.body.is_empty() {
        return;
    }

    if let Ok(status) = payload.name.parse::<u16>() {
        if (100..200).contains(&status) || status == 204 || status == 304 {
            cx.emit(
                Diagnostic::warning(format!(
                    "the '{status}' response must not include a message body"
                ))
                .with_code(WarningCode::NotEmptyDefinition)
                .with_label(item.body, "response with a body"),
            );
            return;
        }
    }

    if method == "HEAD" {
        cx.emit(
            Diagnostic::warning("the response to a HEAD request must not include a message body")
                .with_code(WarningCode::NotEmptyDefinition)
                .with_label(item.body, "response with a body"),
        );
    }
}
