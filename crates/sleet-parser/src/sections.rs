//! Section parsers.
//!
//! Each submodule parses one kind of blueprint section starting at the
//! context cursor and leaves the cursor on the first block it does not own.
//! Parsers build the AST node and its source map side by side, so the two
//! always have the same shape.

pub(crate) mod action;
pub(crate) mod blueprint;
pub(crate) mod example;
pub(crate) mod group;
pub(crate) mod headers;
pub(crate) mod parameters;
pub(crate) mod payload;
pub(crate) mod resource;

use sleet_core::sourcemap::SourceMap;

use crate::{
    block::{Block, BlockKind},
    context::Context,
    error::{Diagnostic, WarningCode},
    signature::{self, HeadingSignature, ItemSignature},
    span::Span,
};

/// Text assembled from source lines together with where it came from.
#[derive(Debug, Default)]
pub(crate) struct Text {
    text: String,
    map: SourceMap,
}

impl Text {
    /// Append the lines of `block`, trailing blank lines included.
    pub fn push_block(&mut self, source: &str, block: &Block) {
        for line in block.stripped_lines(source, true) {
            self.push_span(source, line);
        }
    }

    /// Append the lines of `block` without its trailing blank lines.
    pub fn push_body(&mut self, source: &str, block: &Block) {
        for line in block.stripped_lines(source, false) {
            self.push_span(source, line);
        }
    }

    pub fn push_span(&mut self, source: &str, span: Span) {
        self.text.push_str(span.slice(source));
        self.map.push(span.into());
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn into_parts(self) -> (String, SourceMap) {
        (self.text, self.map)
    }

    /// Finish as a description, rendered when the options ask for it.
    pub fn into_description(self, cx: &Context<'_>) -> (String, SourceMap) {
        (cx.render(self.text), self.map)
    }
}

/// The signature of a top-level heading, or `None` for any other block.
pub(crate) fn heading_at<'s>(cx: &Context<'s>, block: &Block) -> Option<(u8, HeadingSignature<'s>)> {
    if block.depth != 0 {
        return None;
    }
    let level = block.heading_level()?;
    Some((level, signature::heading(block.heading_text(cx.source()))))
}

/// The signature of a list item at `depth`, or `None` for any other block.
pub(crate) fn item_at<'s>(cx: &Context<'s>, block: &Block, depth: usize) -> Option<ItemSignature<'s>> {
    if block.kind != BlockKind::ListItem || block.depth != depth {
        return None;
    }
    let (text, _) = block.item_signature(cx.source());
    Some(signature::item(text))
}

/// Returns `true` if the heading closes a section opened at `level`.
pub(crate) fn closes_section(level: u8, heading_level: u8, signature: &HeadingSignature<'_>) -> bool {
    signature.is_section() || heading_level <= level
}

/// Collect a description until `stop` returns `true` for the block at the
/// cursor.
pub(crate) fn description(
    cx: &mut Context<'_>,
    mut stop: impl FnMut(&Context<'_>, &Block) -> bool,
) -> (String, SourceMap) {
    let mut text = Text::default();
    while let Some(block) = cx.peek() {
        if stop(cx, &block) {
            break;
        }
        text.push_block(cx.source(), &block);
        cx.advance();
    }
    text.into_description(cx)
}

/// Skip the block at the cursor together with its nested blocks, reporting
/// it as ignored.
pub(crate) fn ignore_block(cx: &mut Context<'_>, message: impl Into<String>) {
    let Some(block) = cx.peek() else {
        return;
    };
    let end = cx.extent(cx.pos());
    cx.emit(
        Diagnostic::warning(message)
            .with_code(WarningCode::Ignoring)
            .with_label(block.body, "ignored"),
    );
    cx.seek(end);
}

/// Skip a list item whose signature is not recognised.
///
/// An item that names a payload but cannot be parsed is a formatting
/// problem rather than unknown content.
pub(crate) fn unrecognized_item(cx: &mut Context<'_>) {
    let Some(block) = cx.peek() else {
        return;
    };
    let (text, _) = block.item_signature(cx.source());
    if !signature::is_payload_keyword(text) {
        ignore_block(cx, "ignoring unrecognized block");
        return;
    }

    let end = cx.extent(cx.pos());
    cx.emit(
        Diagnostic::warning(format!("unable to parse payload signature '{text}'"))
            .with_code(WarningCode::Formatting)
            .with_label(block.body, "malformed signature")
            .with_help("expected '<Request|Response|Model> [<identifier>] [(<media type>)]'"),
    );
    cx.seek(end);
}

/// Skip the block at the cursor and everything up to the next top-level
/// heading, reporting it all as one ignored region.
pub(crate) fn ignore_until_heading(cx: &mut Context<'_>, message: impl Into<String>) {
    let Some(first) = cx.peek() else {
        return;
    };
    let mut last = first;
    cx.advance();
    while let Some(block) = cx.peek() {
        if block.depth == 0 && block.is_heading() {
            break;
        }
        last = block;
        cx.advance();
    }

    let span = Span::new(first.body.start()..last.body.end().max(first.body.end()));
    cx.emit(
        Diagnostic::warning(message)
            .with_code(WarningCode::Ignoring)
            .with_label(span, "ignored"),
    );
}

/// Skip a `+ Headers` section placed outside of a payload.
pub(crate) fn deprecated_headers(cx: &mut Context<'_>) {
    let Some(block) = cx.peek() else {
        return;
    };
    let end = cx.extent(cx.pos());
    cx.emit(
        Diagnostic::warning("the 'Headers' section at this level is deprecated and will be ignored")
            .with_code(WarningCode::Deprecated)
            .with_label(block.body, "deprecated section")
            .with_help("specify headers inside a request, response or model section"),
    );
    cx.seek(end);
}

/// Skip an action heading found outside of any resource.
pub(crate) fn action_outside_resource(cx: &mut Context<'_>, method: &str) {
    ignore_until_heading(
        cx,
        format!("ignoring action '{method}', actions must be nested in a resource"),
    );
}
