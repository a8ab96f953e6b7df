//! Error and diagnostic system for the sleet parser.
//!
//! This module provides:
//! - Warning and error codes with stable integer values
//! - Multiple labeled spans per diagnostic
//! - Severity levels
//! - A collector holding every warning and a single terminal error
//!
//! # Overview
//!
//! Diagnostics are values. Section parsers emit them into a
//! [`DiagnosticCollector`] and keep going; the parse returns them in
//! [`Diagnostics`]. A caller that wants a `Result` converts with
//! [`Diagnostics::into_result`], which yields a [`ParseError`] when a terminal
//! error was reported.
//!
//! # Example
//!
//! ```
//! # use sleet_parser::error::{Diagnostic, WarningCode};
//! # use sleet_parser::Span;
//!
//! let diag = Diagnostic::warning("no response defined for 'GET /'")
//!     .with_code(WarningCode::EmptyDefinition)
//!     .with_label(Span::new(20..29), "action without response")
//!     .with_help("add a `+ Response <status>` section");
//! assert_eq!(diag.code_value(), 6);
//! ```

mod code;
mod collector;
mod diagnostic;
mod parse_error;

pub(crate) use collector::DiagnosticCollector;

pub use code::{Code, ErrorCode, WarningCode};
pub use diagnostic::{Diagnostic, Label, LabelRole, Severity};
pub use parse_error::{Diagnostics, ParseError};
