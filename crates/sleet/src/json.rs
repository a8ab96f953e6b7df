//! The JSON boundary.
//!
//! [`to_string`] writes a parse outcome as a report object:
//!
//! ```json
//! {
//!   "ast": { "_version": "2.0", "metadata": [], "name": "", ... },
//!   "sourcemap": { "metadata": [], "name": [[0, 8]], ... },
//!   "warnings": [{ "message": "...", "code": 6, "ok": false, "location": [{ "index": 20, "length": 9 }] }],
//!   "error": { "message": "", "code": 0, "ok": true, "location": [] }
//! }
//! ```
//!
//! `sourcemap` is `null` unless the outcome carries one. `ok` is `true`
//! exactly when `code` is 0. [`from_str`] reads an AST document back into
//! the typed [`Blueprint`].

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use sleet_core::{AST_VERSION, ast::Blueprint, sourcemap::BlueprintSourceMap};
use sleet_parser::{ParseOutcome, error::Diagnostic};

use crate::SleetError;

#[derive(Serialize)]
struct Report<'a> {
    ast: AstDocument<&'a Blueprint>,
    sourcemap: Option<&'a BlueprintSourceMap>,
    warnings: Vec<DiagnosticEntry<'a>>,
    error: DiagnosticEntry<'a>,
}

/// An AST tagged with its serialization version.
#[derive(Serialize, Deserialize)]
struct AstDocument<T> {
    #[serde(rename = "_version")]
    version: String,
    #[serde(flatten)]
    blueprint: T,
}

#[derive(Serialize)]
struct Location {
    index: usize,
    length: usize,
}

#[derive(Serialize)]
struct DiagnosticEntry<'a> {
    message: &'a str,
    code: u32,
    ok: bool,
    location: Vec<Location>,
}

impl<'a> DiagnosticEntry<'a> {
    fn new(diagnostic: &'a Diagnostic) -> Self {
        let code = diagnostic.code_value();
        Self {
            message: diagnostic.message(),
            code,
            ok: code == 0,
            location: diagnostic
                .locations()
                .map(|span| Location {
                    index: span.start(),
                    length: span.len(),
                })
                .collect(),
        }
    }

    /// The entry written when there is no terminal error.
    fn none() -> Self {
        Self {
            message: "",
            code: 0,
            ok: true,
            location: Vec::new(),
        }
    }
}

/// Serialize a parse outcome as a JSON report.
///
/// # Errors
///
/// Returns [`SleetError::Json`] if serialization fails.
pub fn to_string(outcome: &ParseOutcome, pretty: bool) -> Result<String, SleetError> {
    let report = Report {
        ast: AstDocument {
            version: AST_VERSION.to_string(),
            blueprint: &outcome.ast,
        },
        sourcemap: outcome.sourcemap.as_ref(),
        warnings: outcome
            .diagnostics
            .warnings
            .iter()
            .map(DiagnosticEntry::new)
            .collect(),
        error: outcome
            .diagnostics
            .error
            .as_ref()
            .map_or_else(DiagnosticEntry::none, DiagnosticEntry::new),
    };

    debug!(
        pretty,
        warnings = report.warnings.len(),
        sourcemap = report.sourcemap.is_some();
        "Serializing parse outcome"
    );

    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    Ok(json)
}

/// Read an AST document back into a [`Blueprint`].
///
/// The document is the value of a report's `ast` key. `name`, `description`,
/// `uriTemplate` and `method` are required where they apply; other keys
/// default to empty.
///
/// # Errors
///
/// - [`SleetError::Json`] if the text is not a well-formed AST document.
/// - [`SleetError::InvalidInput`] if the version is not supported or a
///   resource has no URI template.
pub fn from_str(json: &str) -> Result<Blueprint, SleetError> {
    let document: AstDocument<Blueprint> = serde_json::from_str(json)?;
    if document.version != AST_VERSION {
        return Err(SleetError::InvalidInput(format!(
            "unsupported AST version '{}', expected '{AST_VERSION}'",
            document.version
        )));
    }

    let blueprint = document.blueprint;
    for resource in blueprint.resources() {
        trace!(uri = resource.uri_template.as_str(); "Validating resource");
        if !resource.uri_template.starts_with('/') {
            return Err(SleetError::InvalidInput(format!(
                "A resource is missing URI template ('{}' resource)",
                resource.name
            )));
        }
    }
    Ok(blueprint)
}
