//! Per-parse state shared by the section parsers.

use comrak::{Options, markdown_to_html};
use indexmap::IndexMap;
use log::{debug, trace};

use crate::{
    block::Block,
    error::{Diagnostic, DiagnosticCollector, Diagnostics, ErrorCode},
    lexer,
    options::ParseOptions,
    span::Span,
    symbols::{Symbol, SymbolTable},
};

/// A `[Identifier][]` reference awaiting resolution.
#[derive(Debug, Clone)]
struct PendingReference {
    id: String,
    span: Span,
}

/// Cursor over the classified blocks of one document, together with the
/// diagnostics and symbols collected so far.
///
/// Section parsers read the block at the cursor with [`Context::peek`] and
/// move past what they consume. Every parse owns its own context, so
/// concurrent parses share nothing.
#[derive(Debug)]
pub(crate) struct Context<'s> {
    source: &'s str,
    blocks: Vec<Block>,
    options: ParseOptions,
    pos: usize,
    diagnostics: DiagnosticCollector,
    symbols: SymbolTable,
    references: Vec<PendingReference>,
    uri_templates: IndexMap<String, Span>,
}

impl<'s> Context<'s> {
    pub fn new(source: &'s str, options: ParseOptions) -> Self {
        Self {
            source,
            blocks: lexer::classify(source),
            options,
            pos: 0,
            diagnostics: DiagnosticCollector::new(),
            symbols: SymbolTable::new(),
            references: Vec::new(),
            uri_templates: IndexMap::new(),
        }
    }

    pub fn source(&self) -> &'s str {
        self.source
    }

    pub fn options(&self) -> ParseOptions {
        self.options
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    /// The block at the cursor.
    pub fn peek(&self) -> Option<Block> {
        self.blocks.get(self.pos).copied()
    }

    pub fn advance(&mut self) {
        self.pos = (self.pos + 1).min(self.blocks.len());
    }

    pub fn seek(&mut self, pos: usize) {
        self.pos = pos.min(self.blocks.len());
    }

    /// Index one past the last block nested under the block at `index`.
    pub fn extent(&self, index: usize) -> usize {
        let Some(block) = self.blocks.get(index) else {
            return self.blocks.len();
        };
        self.blocks[index + 1..]
            .iter()
            .position(|next| next.depth <= block.depth)
            .map_or(self.blocks.len(), |offset| index + 1 + offset)
    }

    /// Returns `true` if the document contains anything but blank lines.
    pub fn has_content(&self) -> bool {
        self.blocks.iter().any(|block| !block.is_blank())
    }

    pub fn emit(&mut self, diagnostic: Diagnostic) {
        trace!(diagnostic:% = diagnostic; "Emitting diagnostic");
        self.diagnostics.emit(diagnostic);
    }

    /// Returns `true` once a terminal error stopped the parse.
    pub fn aborted(&self) -> bool {
        self.diagnostics.has_error()
    }

    /// Define a named model.
    pub fn define_model(&mut self, id: &str, span: Span) -> Result<(), &Symbol> {
        self.symbols.define(id, span)
    }

    /// Record a model reference to resolve once the whole document is read.
    pub fn add_reference(&mut self, id: &str, span: Span) {
        self.references.push(PendingReference {
            id: id.to_string(),
            span,
        });
    }

    /// Record the URI template of a resource.
    ///
    /// Returns where the template was first seen if it is already known.
    pub fn note_uri_template(&mut self, uri: &str, span: Span) -> Option<Span> {
        match self.uri_templates.get(uri) {
            Some(previous) => Some(*previous),
            None => {
                self.uri_templates.insert(uri.to_string(), span);
                None
            }
        }
    }

    /// Apply description rendering when it is enabled.
    pub fn render(&self, text: String) -> String {
        if self.options.render_descriptions && !text.is_empty() {
            markdown_to_html(&text, &Options::default())
        } else {
            text
        }
    }

    /// Resolve pending references and return the diagnostics.
    pub fn finish(mut self) -> Diagnostics {
        let references = std::mem::take(&mut self.references);
        debug!(
            models = self.symbols.len(),
            references = references.len();
            "Resolving model references"
        );

        for reference in references {
            if let Some(symbol) = self.symbols.resolve(&reference.id) {
                trace!(
                    id = symbol.id.as_str(),
                    defined_at = symbol.span.start();
                    "Resolved model reference"
                );
            } else {
                self.emit(
                    Diagnostic::warning(format!("undefined model reference '{}'", reference.id))
                        .with_code(ErrorCode::Symbol)
                        .with_label(reference.span, "no resource model with this name")
                        .with_help("add a '+ Model' section to the named resource"),
                );
            }
        }

        self.diagnostics.finish()
    }
}
