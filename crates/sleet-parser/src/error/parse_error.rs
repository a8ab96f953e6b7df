//! Parse outcome diagnostics and the error raised from them.

use thiserror::Error;

use crate::error::Diagnostic;

/// The diagnostics of one parse: every warning plus at most one terminal
/// error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    pub error: Option<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Returns `true` when no terminal error was reported.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    /// The integer code of the terminal error, `0` when there is none.
    pub fn error_code(&self) -> u32 {
        self.error.as_ref().map_or(0, Diagnostic::code_value)
    }

    /// Convert into an error when a terminal error was reported.
    pub fn into_result(self) -> Result<Vec<Diagnostic>, ParseError> {
        match self.error {
            Some(error) => Err(ParseError {
                error,
                warnings: self.warnings,
            }),
            None => Ok(self.warnings),
        }
    }
}

/// A parse that ended with a terminal error.
///
/// Carries the terminal error together with the warnings reported before it.
#[derive(Debug, Clone, Error)]
#[error("{error}")]
pub struct ParseError {
    error: Diagnostic,
    warnings: Vec<Diagnostic>,
}

impl ParseError {
    /// The terminal error.
    pub fn error(&self) -> &Diagnostic {
        &self.error
    }

    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// The terminal error followed by every warning.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        std::iter::once(&self.error).chain(self.warnings.iter())
    }
}

impl From<Diagnostic> for ParseError {
    fn from(error: Diagnostic) -> Self {
        Self {
            error,
            warnings: Vec::new(),
        }
    }
}
