//! Struct code generator.
//!
//! Runs the full pipeline for one source file: analyze, render the
//! `structs` template, then format the result.
//!
//! # Examples
//!
//! ```
//! use structgen_codegen::CodeGenerator;
//!
//! let generator = CodeGenerator::new().unwrap();
//! let code = generator
//!     .generate(b"package p\ntype User struct {\nID int\nName string\n}")
//!     .unwrap();
//!
//! assert!(code.contains("ID   int    `json:\"i_d\"`"));
//! assert!(code.contains("func (s *User) String() string {"));
//! ```

use crate::analyzer;
use crate::formatter;
use crate::template_engine::TemplateEngine;
use crate::types::{Analysis, TemplateContext};
use structgen_core::{GeneratorOptions, Result};

/// Struct code generator.
///
/// Holds a parsed template and the generator options. Creating one parses
/// the template; reuse a generator to convert many inputs without paying
/// that cost again.
///
/// # Examples
///
/// ```
/// use structgen_codegen::CodeGenerator;
/// use structgen_core::GeneratorOptions;
///
/// let generator = CodeGenerator::with_options(GeneratorOptions {
///     tag_key: "yaml".to_string(),
///     ..Default::default()
/// })
/// .unwrap();
///
/// let code = generator.generate(b"package p\n\ntype T struct{ Name string }\n").unwrap();
/// assert!(code.contains("`yaml:\"name\"`"));
/// ```
#[derive(Debug)]
pub struct CodeGenerator<'a> {
    engine: TemplateEngine<'a>,
    options: GeneratorOptions,
}

impl CodeGenerator<'_> {
    /// Creates a generator with default options.
    ///
    /// # Errors
    ///
    /// Returns error if template engine initialization fails.
    pub fn new() -> Result<Self> {
        Self::with_options(GeneratorOptions::default())
    }

    /// Creates a generator with custom options.
    ///
    /// # Errors
    ///
    /// Returns error if the options are invalid or template engine
    /// initialization fails.
    pub fn with_options(options: GeneratorOptions) -> Result<Self> {
        options.validate()?;
        let engine = TemplateEngine::new()?;
        Ok(Self { engine, options })
    }

    /// Returns the options this generator renders with.
    #[must_use]
    pub const fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Renders an analysis into unformatted source text.
    ///
    /// # Errors
    ///
    /// Returns [`structgen_core::Error::TemplateError`] if expansion fails.
    pub fn render(&self, analysis: &Analysis) -> Result<String> {
        let context = TemplateContext::new(analysis, &self.options);
        self.engine.render(TemplateEngine::STRUCTS, &context)
    }

    /// Converts Go source bytes into formatted generated source.
    ///
    /// Stops at the first failing stage.
    ///
    /// # Errors
    ///
    /// Returns a syntax error for unparseable input, a template error if
    /// rendering fails, or a format error if the rendered text is not
    /// valid Go.
    pub fn generate(&self, source: &[u8]) -> Result<String> {
        tracing::info!(bytes = source.len(), "Generating struct code");

        let analysis = analyzer::analyze(source)?;
        let rendered = self.render(&analysis)?;
        tracing::debug!(rendered = %rendered, "Rendered template");

        let formatted = formatter::format_source(&rendered)?;

        tracing::info!(
            package = %analysis.package_name,
            structs = analysis.structs.len(),
            fields = analysis.field_count(),
            "Generated struct code"
        );

        Ok(formatted)
    }
}
