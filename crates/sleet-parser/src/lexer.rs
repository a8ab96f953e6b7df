//! Block classifier for blueprint source text.
//!
//! [`classify`] splits the source into an ordered, non-overlapping and
//! gap-free sequence of [`Block`]s: concatenating every block span gives back
//! the input. It never fails; anything that is not a heading, list item, code
//! block or horizontal rule is paragraph text.
//!
//! Indentation follows the list model of API Blueprint documents: a list
//! item whose marker sits at column `m` owns every following line that is
//! blank or indented past `m`, and its content base is four columns past the
//! base of its container. A line indented four or more columns past the
//! current base is code, unless it continues a paragraph.

use log::debug;
use winnow::{
    ascii::{multispace0, space0},
    combinator::{alt, eof, not, preceded, repeat, terminated},
    error::{ContextError, ErrMode},
    prelude::*,
    token::{one_of, take_while},
};

use crate::{
    block::{Block, BlockKind, indent_columns},
    span::Span,
};

/// Classify `source` into blocks.
pub(crate) fn classify(source: &str) -> Vec<Block> {
    let mut lexer = Lexer::default();
    let mut offset = 0;
    for line in source.split_inclusive('\n') {
        lexer.line(line, Span::new(offset..offset + line.len()));
        offset += line.len();
    }
    lexer.close_open();

    debug!(blocks = lexer.blocks.len(), bytes = source.len(); "Classified blocks");
    lexer.blocks
}

/// An open list item.
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// Column of the list marker.
    marker: usize,
    /// Content base column of the item.
    base: usize,
}

/// A multi-line block still accepting lines.
#[derive(Debug, Clone, Copy)]
struct Open {
    kind: BlockKind,
    depth: usize,
    start: usize,
    end: usize,
    indent: usize,
}

#[derive(Debug, Default)]
struct Lexer {
    blocks: Vec<Block>,
    frames: Vec<Frame>,
    open: Option<Open>,
    /// Blank lines not yet attached to a block.
    blank: Option<Span>,
}

impl Lexer {
    fn line(&mut self, line: &str, span: Span) {
        if line.trim().is_empty() {
            self.blank = Some(match self.blank {
                Some(blank) => blank.union(span),
                None => span,
            });
            return;
        }

        let indent = indent_columns(line);
        while self.frames.last().is_some_and(|frame| indent <= frame.marker) {
            self.frames.pop();
        }
        let depth = self.frames.len();
        let base = self.frames.last().map_or(0, |frame| frame.base);

        if indent >= base + 4 {
            self.indented_line(depth, base, span);
            return;
        }

        let text = line.trim_start_matches([' ', '\t']);
        if let Some(level) = heading_level(text) {
            self.single(BlockKind::Heading(level), depth, span, indent);
        } else if is_horizontal_rule(text) {
            self.single(BlockKind::HorizontalRule, depth, span, indent);
        } else if is_list_marker(text) {
            self.single(BlockKind::ListItem, depth, span, indent);
            self.frames.push(Frame {
                marker: indent,
                base: base + 4,
            });
        } else {
            self.paragraph_line(depth, base, span);
        }
    }

    fn indented_line(&mut self, depth: usize, base: usize, span: Span) {
        match self.open {
            Some(ref mut open)
                if open.kind == BlockKind::Paragraph && open.depth == depth && self.blank.is_none() =>
            {
                open.end = span.end();
            }
            Some(ref mut open)
                if open.kind == BlockKind::CodeBlock
                    && open.depth == depth
                    && open.indent == base + 4 =>
            {
                // Blank lines between code lines belong to the code block
                open.end = span.end();
                self.blank = None;
            }
            _ => {
                self.close_open();
                self.open = Some(Open {
                    kind: BlockKind::CodeBlock,
                    depth,
                    start: span.start(),
                    end: span.end(),
                    indent: base + 4,
                });
            }
        }
    }

    fn paragraph_line(&mut self, depth: usize, base: usize, span: Span) {
        match self.open {
            Some(ref mut open)
                if open.kind == BlockKind::Paragraph && open.depth == depth && self.blank.is_none() =>
            {
                open.end = span.end();
            }
            _ => {
                self.close_open();
                self.open = Some(Open {
                    kind: BlockKind::Paragraph,
                    depth,
                    start: span.start(),
                    end: span.end(),
                    indent: base,
                });
            }
        }
    }

    fn single(&mut self, kind: BlockKind, depth: usize, span: Span, indent: usize) {
        self.close_open();
        self.blocks.push(Block {
            kind,
            depth,
            span,
            body: span,
            indent,
        });
    }

    /// Emit the open block, attaching pending blank lines to it or to the
    /// last emitted block.
    fn close_open(&mut self) {
        let blank = self.blank.take();
        if let Some(open) = self.open.take() {
            let body = Span::new(open.start..open.end);
            self.blocks.push(Block {
                kind: open.kind,
                depth: open.depth,
                span: blank.map_or(body, |blank| body.union(blank)),
                body,
                indent: open.indent,
            });
            return;
        }

        let Some(blank) = blank else {
            return;
        };
        match self.blocks.last_mut() {
            Some(last) => last.span = last.span.union(blank),
            None => self.blocks.push(Block {
                kind: BlockKind::Paragraph,
                depth: 0,
                span: blank,
                body: Span::empty(blank.start()),
                indent: 0,
            }),
        }
    }
}

/// Level of an ATX heading line: one to six `#` not followed by another `#`.
fn heading_level(text: &str) -> Option<u8> {
    let mut input = text;
    let hashes = atx_marker(&mut input).ok()?;
    u8::try_from(hashes.len()).ok()
}

fn is_horizontal_rule(text: &str) -> bool {
    horizontal_rule.parse(text).is_ok()
}

fn is_list_marker(text: &str) -> bool {
    let mut input = text;
    list_marker(&mut input).is_ok()
}

fn atx_marker<'s>(input: &mut &'s str) -> ModalResult<&'s str> {
    terminated(take_while(1..=6, '#'), not('#')).parse_next(input)
}

/// Three or more `-`, `*` or `_` of one kind, optionally spaced.
fn horizontal_rule(input: &mut &str) -> ModalResult<()> {
    alt((rule_of('-'), rule_of('*'), rule_of('_'))).parse_next(input)
}

fn rule_of<'s>(mark: char) -> impl Parser<&'s str, (), ErrMode<ContextError>> {
    (
        mark,
        repeat(2.., preceded(space0, mark)).map(|()| ()),
        multispace0,
        eof,
    )
        .void()
}

fn list_marker(input: &mut &str) -> ModalResult<char> {
    terminated(
        one_of(['+', '-', '*']),
        alt((eof.void(), one_of([' ', '\t', '\n', '\r']).void())),
    )
    .parse_next(input)
}
