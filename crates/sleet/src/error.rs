//! Error types for sleet operations.
//!
//! This module provides the main error type [`SleetError`] which wraps the
//! failures that can occur around a parse: reading input, loading
//! configuration, a terminal parse error and the JSON boundary.

use std::io;

use thiserror::Error;

use sleet_parser::error::ParseError;

use crate::config::ConfigError;

/// The main error type for sleet operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the source text next to the terminal error so
/// that it can be rendered with snippets (see [`crate::report`]).
#[derive(Debug, Error)]
pub enum SleetError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl SleetError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
