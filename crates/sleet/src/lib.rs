//! Sleet - an API Blueprint parser.
//!
//! Parses API Blueprint documents into a typed AST, an optional source map
//! of the same shape and a list of diagnostics, and writes the result as
//! JSON. The parsing itself lives in `sleet-parser` and the data model in
//! `sleet-core`; this crate ties them to configuration, error reporting and
//! the JSON boundary.

pub mod config;
pub mod json;
pub mod report;

mod error;

pub use sleet_core::{AST_VERSION, ast, collection, node, sourcemap};
pub use sleet_parser::{ParseOptions, ParseOutcome, Span, error as diagnostic};

pub use error::SleetError;

use std::{fs, path::Path};

use log::{debug, info, trace};

use sleet_parser::error::Diagnostics;

use config::ParserConfig;

/// Builder for parsing API Blueprint documents.
///
/// # Examples
///
/// ```
/// use sleet::{BlueprintParser, config::ParserConfig};
///
/// let source = "# Notes API\n## Notes [/notes]\n### List [GET]\n+ Response 200\n";
///
/// // With custom config
/// let config = ParserConfig::from_toml_str("[options]\nexport_sourcemap = true\n").unwrap();
/// let parser = BlueprintParser::new(config);
///
/// let outcome = parser.parse(source);
/// assert_eq!(outcome.ast.name, "Notes API");
/// assert!(outcome.sourcemap.is_some());
///
/// // Serialize the outcome
/// let json = parser.to_json(&outcome).unwrap();
/// assert!(json.contains("\"_version\":\"2.0\""));
///
/// // Or use default config
/// let parser = BlueprintParser::default();
/// assert!(parser.parse(source).sourcemap.is_none());
/// ```
#[derive(Debug, Default)]
pub struct BlueprintParser {
    config: ParserConfig,
}

impl BlueprintParser {
    /// Create a new parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration this parser was built with.
    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse a blueprint.
    ///
    /// Never fails: warnings and the terminal error, if any, are part of
    /// the returned [`ParseOutcome`].
    pub fn parse(&self, source: &str) -> ParseOutcome {
        info!("Parsing blueprint");
        let options = self.config.parse_options();
        debug!(options:?; "Parse options");

        let outcome = sleet_parser::parse(source, options);
        trace!(ast:? = outcome.ast; "Parsed blueprint");
        outcome
    }

    /// Parse a blueprint, failing on a terminal error.
    ///
    /// On success the outcome holds only warnings.
    ///
    /// # Errors
    ///
    /// Returns [`SleetError::Parse`] carrying the terminal error, the
    /// warnings before it and the source text.
    ///
    /// # Examples
    ///
    /// ```
    /// use sleet::{BlueprintParser, SleetError};
    ///
    /// let parser = BlueprintParser::default();
    /// let err = parser.parse_strict("# API\n## Notes [notes]\n").unwrap_err();
    /// assert!(matches!(err, SleetError::Parse { .. }));
    /// ```
    pub fn parse_strict(&self, source: &str) -> Result<ParseOutcome, SleetError> {
        let (ast, sourcemap, warnings) = self
            .parse(source)
            .into_result()
            .map_err(|err| SleetError::new_parse_error(err, source))?;

        Ok(ParseOutcome {
            ast,
            sourcemap,
            diagnostics: Diagnostics {
                error: None,
                warnings,
            },
        })
    }

    /// Read and parse a blueprint file.
    ///
    /// # Errors
    ///
    /// Returns [`SleetError::Io`] if the file cannot be read.
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<ParseOutcome, SleetError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Reading blueprint file");
        let source = fs::read_to_string(path)?;
        Ok(self.parse(&source))
    }

    /// Serialize a parse outcome to JSON.
    ///
    /// The output is indented when `output.pretty` is set in the
    /// configuration. See [`json`] for the layout.
    pub fn to_json(&self, outcome: &ParseOutcome) -> Result<String, SleetError> {
        json::to_string(outcome, self.config.output().pretty())
    }
}
