//! API Blueprint parser.
//!
//! [`parse`] reads an API Blueprint document and returns its AST, a source
//! map of the same shape and the diagnostics found on the way. Parsing never
//! panics and never fails outright: a terminal error stops node construction
//! and the AST built up to that point is still returned.
//!
//! # Example
//!
//! ```
//! use sleet_parser::{ParseOptions, parse};
//!
//! let source = "# My API\n## Notes [/notes]\n### List [GET]\n+ Response 200\n";
//! let outcome = parse(source, ParseOptions::default().with_export_sourcemap(true));
//!
//! assert!(outcome.diagnostics.is_ok());
//! assert_eq!(outcome.ast.name, "My API");
//! assert_eq!(outcome.ast.resource_groups[0].resources[0].uri_template, "/notes");
//! assert!(outcome.sourcemap.is_some());
//! ```

mod block;
mod context;
mod lexer;
mod options;
mod sections;
mod signature;
mod span;
mod symbols;
mod uri;

pub mod error;

#[cfg(test)]
mod parser_tests;

use log::{debug, info};

use sleet_core::{ast::Blueprint, sourcemap::BlueprintSourceMap};

pub use options::ParseOptions;
pub use span::Span;

use context::Context;
use error::{Diagnostic, Diagnostics, ParseError};

/// Everything a parse produces.
#[derive(Debug, Clone)]
pub struct ParseOutcome {
    pub ast: Blueprint,
    /// Present when [`ParseOptions::export_sourcemap`] is set.
    pub sourcemap: Option<BlueprintSourceMap>,
    pub diagnostics: Diagnostics,
}

impl ParseOutcome {
    /// Convert into a `Result`, failing when a terminal error was reported.
    ///
    /// On success the AST is returned with the source map and warnings.
    #[allow(clippy::type_complexity)]
    pub fn into_result(
        self,
    ) -> Result<(Blueprint, Option<BlueprintSourceMap>, Vec<Diagnostic>), ParseError> {
        let warnings = self.diagnostics.into_result()?;
        Ok((self.ast, self.sourcemap, warnings))
    }
}

/// Parse an API Blueprint document.
pub fn parse(source: &str, options: ParseOptions) -> ParseOutcome {
    info!(bytes = source.len(); "Parsing blueprint");

    let mut cx = Context::new(source, options);
    let (ast, sourcemap) = sections::blueprint::parse(&mut cx);
    let diagnostics = cx.finish();

    debug!(
        warnings = diagnostics.warnings.len(),
        error_code = diagnostics.error_code();
        "Blueprint parse finished"
    );

    ParseOutcome {
        ast,
        sourcemap: options.export_sourcemap.then_some(sourcemap),
        diagnostics,
    }
}
