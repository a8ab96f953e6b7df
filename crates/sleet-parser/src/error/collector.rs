//! Collector for accumulating diagnostics during a parse.
//!
//! Warnings are appended in emission order. Errors are terminal: the first
//! one is kept and any later error is discarded, since the parse stops
//! building nodes once an error is reported.

use log::debug;

use crate::error::{Diagnostic, Diagnostics};

/// A collector for accumulating diagnostics during a parse.
#[derive(Debug, Default)]
pub struct DiagnosticCollector {
    warnings: Vec<Diagnostic>,
    error: Option<Diagnostic>,
}

impl DiagnosticCollector {
    /// Create a new empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub fn emit(&mut self, diagnostic: Diagnostic) {
        if !diagnostic.severity().is_terminal() {
            self.warnings.push(diagnostic);
        } else if self.error.is_none() {
            self.error = Some(diagnostic);
        } else {
            debug!(message = diagnostic.message(); "Discarding error after terminal error");
        }
    }

    /// Returns `true` once a terminal error has been emitted.
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Finish collection.
    pub fn finish(self) -> Diagnostics {
        Diagnostics {
            error: self.error,
            warnings: self.warnings,
        }
    }
}
