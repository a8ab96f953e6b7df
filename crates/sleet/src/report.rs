//! Rendering diagnostics with `miette`.
//!
//! Parser diagnostics are plain values; this module adapts them to
//! [`miette::Diagnostic`] so they can be printed with source snippets,
//! labels and help text.
//!
//! # Example
//!
//! ```
//! use sleet::{BlueprintParser, report::render_diagnostics};
//!
//! let source = "# API\n## /notes\n### GET\n";
//! let outcome = BlueprintParser::default().parse(source);
//!
//! let text = render_diagnostics(source, &outcome.diagnostics.warnings);
//! assert!(text.contains("no response defined for 'GET /notes'"));
//! ```

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, GraphicalTheme, LabeledSpan,
    SourceSpan,
};

use sleet_parser::{Span, error::Diagnostic};

use crate::SleetError;

/// Adapter for a single parser diagnostic.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    /// Source code for displaying snippets
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<miette::Severity> {
        if self.diag.severity().is_terminal() {
            Some(miette::Severity::Error)
        } else {
            Some(miette::Severity::Warning)
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_location() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for [`SleetError`] variants without source locations.
pub struct ErrorAdapter<'a>(pub &'a SleetError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            SleetError::Io(_) => "sleet::io",
            SleetError::Config(_) => "sleet::config",
            SleetError::Parse { .. } => return None,
            SleetError::Json(_) => "sleet::json",
            SleetError::InvalidInput(_) => "sleet::input",
        };
        Some(Box::new(code))
    }
}

/// Render diagnostics against `source`, one report after another.
pub fn render_diagnostics<'a>(
    source: &str,
    diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
) -> String {
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    for diagnostic in diagnostics {
        let adapter = DiagnosticAdapter::new(diagnostic, source);
        if handler.render_report(&mut out, &adapter).is_err() {
            out.push_str(&diagnostic.to_string());
            out.push('\n');
        }
    }
    out
}

/// Render an error.
///
/// A parse error is rendered with its source snippets, the terminal error
/// first.
pub fn render_error(err: &SleetError) -> String {
    match err {
        SleetError::Parse { err, src } => render_diagnostics(src, err.diagnostics()),
        other => {
            let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
            let mut out = String::new();
            if handler.render_report(&mut out, &ErrorAdapter(other)).is_err() {
                out = other.to_string();
            }
            out
        }
    }
}

fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}
