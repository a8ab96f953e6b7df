/// Flags controlling a parse.
///
/// Every flag is off by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParseOptions {
    /// Convert description texts from Markdown to HTML.
    pub render_descriptions: bool,
    /// Treat a missing API name as a terminal error instead of a warning.
    pub require_blueprint_name: bool,
    /// Return the source map alongside the AST.
    pub export_sourcemap: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_render_descriptions(mut self, render: bool) -> Self {
        self.render_descriptions = render;
        self
    }

    pub fn with_require_blueprint_name(mut self, require: bool) -> Self {
        self.require_blueprint_name = require;
        self
    }

    pub fn with_export_sourcemap(mut self, export: bool) -> Self {
        self.export_sourcemap = export;
        self
    }
}
