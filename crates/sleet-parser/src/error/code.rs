//! Diagnostic codes.
//!
//! Codes form two closed families with stable integer values that appear on
//! the wire:
//! - [`WarningCode`] - recoverable structural irregularities (`W0xx`)
//! - [`ErrorCode`] - terminal failures (`E0xx`)
//!
//! [`Code`] is the sum of both; a diagnostic carries at most one.

use std::fmt;

/// Codes for warnings. Parsing always continues after a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// No warning.
    NoWarning = 0,

    /// The blueprint has no API name.
    ApiName = 1,

    /// Something was defined twice in the same scope.
    ///
    /// Covers metadata keys, headers, resources, actions and payload
    /// sections.
    Duplicate = 2,

    /// A signature or content line does not follow the expected syntax.
    Formatting = 3,

    /// A named entity redefines an earlier one. The first definition wins.
    Redefinition = 4,

    /// A block was not recognised and was skipped.
    Ignoring = 5,

    /// A section that should have content is empty.
    ///
    /// Most notably an action without any response.
    EmptyDefinition = 6,

    /// A section that must be empty has content.
    ///
    /// For example a body on a `204 No Content` response.
    NotEmptyDefinition = 7,

    /// The blueprint is well-formed but self-contradicting.
    LogicalError = 8,

    /// A deprecated construct was used.
    Deprecated = 9,

    /// Content that should be an indented code block is plain text.
    Indentation = 10,

    /// The heading structure is ambiguous.
    Ambiguity = 11,

    /// A URI template is malformed.
    Uri = 12,
}

impl WarningCode {
    /// The stable integer value of this code.
    pub fn value(self) -> u32 {
        self as u32
    }

    /// Returns the code as a string (e.g., "W006").
    pub fn as_str(&self) -> &'static str {
        match self {
            WarningCode::NoWarning => "W000",
            WarningCode::ApiName => "W001",
            WarningCode::Duplicate => "W002",
            WarningCode::Formatting => "W003",
            WarningCode::Redefinition => "W004",
            WarningCode::Ignoring => "W005",
            WarningCode::EmptyDefinition => "W006",
            WarningCode::NotEmptyDefinition => "W007",
            WarningCode::LogicalError => "W008",
            WarningCode::Deprecated => "W009",
            WarningCode::Indentation => "W010",
            WarningCode::Ambiguity => "W011",
            WarningCode::Uri => "W012",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            WarningCode::NoWarning => "no warning",
            WarningCode::ApiName => "missing API name",
            WarningCode::Duplicate => "duplicate definition",
            WarningCode::Formatting => "unexpected formatting",
            WarningCode::Redefinition => "redefinition",
            WarningCode::Ignoring => "ignored content",
            WarningCode::EmptyDefinition => "empty definition",
            WarningCode::NotEmptyDefinition => "content where none is allowed",
            WarningCode::LogicalError => "logical error",
            WarningCode::Deprecated => "deprecated syntax",
            WarningCode::Indentation => "unexpected indentation",
            WarningCode::Ambiguity => "ambiguous structure",
            WarningCode::Uri => "malformed URI template",
        }
    }
}

/// Codes for terminal errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// No error.
    NoError = 0,

    /// The document cannot be processed, e.g. a resource without a URI
    /// template.
    Application = 1,

    /// A requirement requested through the parse options is violated.
    Business = 2,

    /// A symbol could not be resolved.
    Symbol = 3,
}

impl ErrorCode {
    /// The stable integer value of this code.
    pub fn value(self) -> u32 {
        self as u32
    }

    /// Returns the code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NoError => "E000",
            ErrorCode::Application => "E001",
            ErrorCode::Business => "E002",
            ErrorCode::Symbol => "E003",
        }
    }

    /// Returns a short description of what this code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::NoError => "no error",
            ErrorCode::Application => "application error",
            ErrorCode::Business => "business rule violated",
            ErrorCode::Symbol => "unresolved symbol",
        }
    }
}

/// Either family of code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    Warning(WarningCode),
    Error(ErrorCode),
}

impl Code {
    /// The stable integer value of this code.
    pub fn value(self) -> u32 {
        match self {
            Code::Warning(code) => code.value(),
            Code::Error(code) => code.value(),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Code::Warning(code) => code.as_str(),
            Code::Error(code) => code.as_str(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Code::Warning(code) => code.description(),
            Code::Error(code) => code.description(),
        }
    }
}

impl From<WarningCode> for Code {
    fn from(code: WarningCode) -> Self {
        Code::Warning(code)
    }
}

impl From<ErrorCode> for Code {
    fn from(code: ErrorCode) -> Self {
        Code::Error(code)
    }
}

impl fmt::Display for WarningCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
