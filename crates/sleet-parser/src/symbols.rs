//! Named resource models.
//!
//! A resource with a name and a `+ Model` section defines a symbol that
//! payloads elsewhere in the document may reference as `[Name][]`.
//! Identifiers compare case-insensitively and the first definition wins.

use indexmap::IndexMap;
use log::trace;

use sleet_core::identifier::fold_case;

use crate::span::Span;

/// A defined model.
#[derive(Debug, Clone)]
pub(crate) struct Symbol {
    /// The name as written in the defining resource heading.
    pub id: String,
    /// Where the model was defined.
    pub span: Span,
}

/// Models defined in one document, in definition order.
#[derive(Debug, Default)]
pub(crate) struct SymbolTable {
    symbols: IndexMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a model.
    ///
    /// Returns the existing symbol when `id` is already defined; the table is
    /// left unchanged in that case.
    pub fn define(&mut self, id: &str, span: Span) -> Result<(), &Symbol> {
        let key = fold_case(id);
        if self.symbols.contains_key(&key) {
            return Err(&self.symbols[&key]);
        }

        trace!(id = id; "Defining model symbol");
        self.symbols.insert(
            key,
            Symbol {
                id: id.to_string(),
                span,
            },
        );
        Ok(())
    }

    pub fn resolve(&self, id: &str) -> Option<&Symbol> {
        self.symbols.get(&fold_case(id))
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }
}
