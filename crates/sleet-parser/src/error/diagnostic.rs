//! The core diagnostic type.
//!
//! A [`Diagnostic`] represents a single warning or terminal error with an
//! optional code, labeled source spans, and help text.

use std::fmt;

use crate::{error::code::Code, span::Span};

/// How much a diagnostic matters to the parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Severity {
    /// Advisory; parsing carries on.
    Warning,
    /// Terminal; node construction stops and later errors are dropped.
    Error,
}

impl Severity {
    pub fn is_terminal(self) -> bool {
        self == Severity::Error
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a [`Label`] marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LabelRole {
    /// Where the diagnostic happened. These spans are the diagnostic's
    /// locations on the wire.
    Location,
    /// Related source, such as an earlier definition. Only used when
    /// rendering.
    Context,
}

/// A message attached to a span of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label {
    role: LabelRole,
    span: Span,
    message: String,
}

impl Label {
    pub fn new(role: LabelRole, span: Span, message: impl Into<String>) -> Self {
        Self {
            role,
            span,
            message: message.into(),
        }
    }

    pub fn role(&self) -> LabelRole {
        self.role
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_location(&self) -> bool {
        self.role == LabelRole::Location
    }
}

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// warning[W006]: no response defined for 'GET /'
///   ,-[3:1]
/// 3 | ## GET /
///   : ^^^^^^^^^
///   :     `-- action without response
///   `----
///   help: add a `+ Response <status>` section
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<Code>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// A terminal error. The collector keeps only the first one of a parse.
    ///
    /// # Example
    ///
    /// ```
    /// # use sleet_parser::error::{Diagnostic, ErrorCode};
    /// # use sleet_parser::Span;
    ///
    /// let diag = Diagnostic::error("resource 'Notes' is missing URI template")
    ///     .with_code(ErrorCode::Application)
    ///     .with_label(Span::new(0..17), "expected a template starting with '/'");
    /// assert_eq!(diag.code_value(), 1);
    /// ```
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// An advisory diagnostic.
    ///
    /// # Example
    ///
    /// ```
    /// # use sleet_parser::error::{Diagnostic, WarningCode};
    /// # use sleet_parser::Span;
    ///
    /// let diag = Diagnostic::warning("duplicate definition of 'A'")
    ///     .with_code(WarningCode::Duplicate)
    ///     .with_label(Span::new(11..16), "duplicate key");
    /// assert!(!diag.severity().is_terminal());
    /// ```
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn severity(&self) -> Severity {
        self.severity
    }

    pub fn code(&self) -> Option<Code> {
        self.code
    }

    /// The integer value of the code, `0` when none was set.
    pub fn code_value(&self) -> u32 {
        self.code.map_or(0, Code::value)
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Every label, in the order added.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// The source locations of this diagnostic: the spans of its primary
    /// labels, in the order they were added.
    pub fn locations(&self) -> impl Iterator<Item = Span> + '_ {
        self.labels
            .iter()
            .filter(|label| label.is_location())
            .map(Label::span)
    }

    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    pub fn with_code(mut self, code: impl Into<Code>) -> Self {
        self.code = Some(code.into());
        self
    }

    /// Mark where the diagnostic happened.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(LabelRole::Location, span, message));
        self
    }

    /// Point at related source, e.g. an earlier definition.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::new(LabelRole::Context, span, message));
        self
    }

    /// A suggestion on how to fix the source.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{code}]: {}", self.severity, self.message),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}

impl std::error::Error for Diagnostic {}
