//! Classified Markdown blocks.
//!
//! The [lexer](crate::lexer) turns source text into a flat sequence of
//! [`Block`]s. List nesting is kept as a `depth` rather than as a tree, so
//! the children of a list item are simply the blocks that follow it with a
//! greater depth.

use crate::span::Span;

/// The kind of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BlockKind {
    /// An ATX heading with its level (1-6).
    Heading(u8),
    /// The first line of a list item. Its content follows as deeper blocks.
    ListItem,
    /// Lines indented four columns past the content base.
    CodeBlock,
    HorizontalRule,
    /// Plain text lines, or leading blank lines with an empty body.
    Paragraph,
}

/// A classified block of source lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Block {
    pub kind: BlockKind,
    /// List nesting depth, `0` outside any list.
    pub depth: usize,
    /// Full extent, including trailing blank lines.
    pub span: Span,
    /// Extent without trailing blank lines.
    pub body: Span,
    /// Columns stripped from every line when reading the block's text.
    pub indent: usize,
}

impl Block {
    pub fn is_heading(&self) -> bool {
        matches!(self.kind, BlockKind::Heading(_))
    }

    pub fn heading_level(&self) -> Option<u8> {
        match self.kind {
            BlockKind::Heading(level) => Some(level),
            _ => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        self.kind == BlockKind::Paragraph && self.body.is_empty()
    }

    /// Lines of the block with `indent` columns stripped.
    ///
    /// With `full`, trailing blank lines are included.
    pub fn stripped_lines(&self, source: &str, full: bool) -> Vec<Span> {
        let span = if full { self.span } else { self.body };
        line_spans(source, span)
            .into_iter()
            .map(|line| {
                let skip = strip_columns(line.slice(source), self.indent);
                Span::new(line.start() + skip..line.end())
            })
            .collect()
    }

    /// The block's body text with indentation stripped.
    pub fn text(&self, source: &str) -> String {
        self.stripped_lines(source, false)
            .iter()
            .map(|line| line.slice(source))
            .collect()
    }

    /// The first line of the block, indentation stripped and line ending
    /// removed.
    pub fn first_line<'s>(&self, source: &'s str) -> &'s str {
        let line = self
            .stripped_lines(source, false)
            .first()
            .map(|span| span.slice(source))
            .unwrap_or_default();
        line.trim_end_matches(['\n', '\r'])
    }

    /// The text of a heading without its `#` markers.
    pub fn heading_text<'s>(&self, source: &'s str) -> &'s str {
        let line = self.first_line(source).trim_start();
        let text = line.trim_start_matches('#');
        let text = text.trim();
        // Closing sequence of an ATX heading, e.g. `## Notes ##`
        let without_closing = text.trim_end_matches('#');
        if without_closing.len() != text.len()
            && (without_closing.is_empty() || without_closing.ends_with([' ', '\t']))
        {
            without_closing.trim_end()
        } else {
            text
        }
    }

    /// The signature of a list item: the text after the marker on its first
    /// line, and the span from there to the end of the block including
    /// trailing blank lines.
    pub fn item_signature<'s>(&self, source: &'s str) -> (&'s str, Span) {
        let line = self.first_line(source);
        let line_start = self
            .stripped_lines(source, false)
            .first()
            .map_or(self.body.start(), Span::start);
        let after_marker = line.get(1..).unwrap_or_default();
        let content = after_marker.trim_start_matches([' ', '\t']);
        let content_start = line_start + 1 + (after_marker.len() - content.len());
        let content_start = content_start.min(self.span.end());
        (content.trim_end(), Span::new(content_start..self.span.end()))
    }

    /// The span of a list item from its marker to the end of its first line.
    pub fn item_line(&self, source: &str) -> Span {
        let start = self
            .stripped_lines(source, false)
            .first()
            .map_or(self.body.start(), Span::start);
        Span::new(start..self.body.end())
    }
}

/// Split `span` into its lines, each including its line ending.
pub(crate) fn line_spans(source: &str, span: Span) -> Vec<Span> {
    let text = span.slice(source);
    let mut lines = Vec::new();
    let mut start = span.start();
    for line in text.split_inclusive('\n') {
        lines.push(Span::new(start..start + line.len()));
        start += line.len();
    }
    lines
}

/// Width of the leading whitespace of `line` in columns. Tabs advance to the
/// next multiple of four.
pub(crate) fn indent_columns(line: &str) -> usize {
    let mut columns = 0;
    for c in line.chars() {
        match c {
            ' ' => columns += 1,
            '\t' => columns = (columns / 4 + 1) * 4,
            _ => break,
        }
    }
    columns
}

/// Byte length of the leading whitespace covering at most `columns` columns.
pub(crate) fn strip_columns(line: &str, columns: usize) -> usize {
    let mut width = 0;
    let mut bytes = 0;
    for c in line.chars() {
        if width >= columns {
            break;
        }
        match c {
            ' ' => width += 1,
            '\t' => width = (width / 4 + 1) * 4,
            _ => break,
        }
        bytes += 1;
    }
    bytes
}
