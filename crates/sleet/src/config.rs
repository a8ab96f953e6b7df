//! Configuration for sleet parsing and output.
//!
//! [`ParserConfig`] implements [`serde::Deserialize`] and is normally read
//! from a TOML file:
//!
//! ```toml
//! [options]
//! render_descriptions = false
//! require_blueprint_name = false
//! export_sourcemap = true
//!
//! [output]
//! pretty = true
//! ```
//!
//! Every key is optional; a missing key keeps its default.
//!
//! # Example
//!
//! ```
//! # use sleet::config::ParserConfig;
//! let config = ParserConfig::from_toml_str("[options]\nexport_sourcemap = true\n").unwrap();
//! assert!(config.options().export_sourcemap());
//! assert!(!config.output().pretty());
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use serde::Deserialize;
use thiserror::Error;

use sleet_parser::ParseOptions;

use crate::SleetError;

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

/// Top-level configuration combining parse options and output settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ParserConfig {
    /// Parse option section.
    #[serde(default)]
    options: OptionsConfig,

    /// Output section.
    #[serde(default)]
    output: OutputConfig,
}

impl ParserConfig {
    /// Creates a new [`ParserConfig`] from its sections.
    pub fn new(options: OptionsConfig, output: OutputConfig) -> Self {
        Self { options, output }
    }

    /// Parse a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid TOML or does
    /// not match the configuration layout.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Returns the parse option section.
    pub fn options(&self) -> &OptionsConfig {
        &self.options
    }

    /// Returns the output section.
    pub fn output(&self) -> &OutputConfig {
        &self.output
    }

    /// The [`ParseOptions`] this configuration selects.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::from(&self.options)
    }
}

/// Flags forwarded to the parser.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct OptionsConfig {
    #[serde(default)]
    render_descriptions: bool,

    #[serde(default)]
    require_blueprint_name: bool,

    #[serde(default)]
    export_sourcemap: bool,
}

impl OptionsConfig {
    pub fn new(
        render_descriptions: bool,
        require_blueprint_name: bool,
        export_sourcemap: bool,
    ) -> Self {
        Self {
            render_descriptions,
            require_blueprint_name,
            export_sourcemap,
        }
    }

    /// Render descriptions from Markdown to HTML.
    pub fn render_descriptions(&self) -> bool {
        self.render_descriptions
    }

    /// Treat a missing API name as a terminal error.
    pub fn require_blueprint_name(&self) -> bool {
        self.require_blueprint_name
    }

    /// Return the source map with the AST.
    pub fn export_sourcemap(&self) -> bool {
        self.export_sourcemap
    }
}

impl From<&OptionsConfig> for ParseOptions {
    fn from(config: &OptionsConfig) -> Self {
        ParseOptions::new()
            .with_render_descriptions(config.render_descriptions)
            .with_require_blueprint_name(config.require_blueprint_name)
            .with_export_sourcemap(config.export_sourcemap)
    }
}

/// JSON output settings.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct OutputConfig {
    /// Indent the JSON output.
    #[serde(default)]
    pretty: bool,
}

impl OutputConfig {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }
}

/// Project-relative configuration file.
const LOCAL_CONFIG: &str = "sleet/config.toml";

/// Load the configuration.
///
/// An explicit path must exist. Without one, the first existing file among
/// [`search_paths`] is used, and the defaults when there is none.
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be read or parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<ParserConfig, SleetError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path:?; "Loading configuration from explicit path");
        return read_config(path);
    }

    match search_paths().into_iter().find(|path| path.is_file()) {
        Some(path) => {
            info!(path:?; "Loading configuration");
            read_config(&path)
        }
        None => {
            debug!("No configuration file found, using default configuration");
            Ok(ParserConfig::default())
        }
    }
}

/// Where [`load_config`] looks when no path is given, in order: the local
/// `sleet/config.toml`, then `config.toml` in the platform configuration
/// directory.
pub fn search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG)];
    match ProjectDirs::from("com", "sleet", "sleet") {
        Some(dirs) => paths.push(dirs.config_dir().join("config.toml")),
        None => debug!("Could not determine platform-specific config directory"),
    }
    paths
}

fn read_config(path: &Path) -> Result<ParserConfig, SleetError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    Ok(ParserConfig::from_toml_str(&content)?)
}
