//! One-shot conversion entry points.
//!
//! [`convert`] returns a tagged [`ConversionResult`]. [`generate_code`]
//! flattens it to a single string for hosts that only have one text return
//! channel; callers on such a boundary cannot tell success from failure by
//! shape, so Rust code should prefer [`convert`] or
//! [`CodeGenerator::generate`].
//!
//! # Examples
//!
//! ```
//! use structgen_codegen::{ConversionResult, convert, generate_code};
//!
//! let source = b"package p\n\ntype X struct { val int }\n";
//! assert!(matches!(convert(source), ConversionResult::Generated(_)));
//! assert!(generate_code(source).contains("val int\n"));
//!
//! assert!(generate_code(b"package p\n\ntype X struct {").starts_with("Syntax error"));
//! ```

use crate::generator::CodeGenerator;
use serde::Serialize;
use structgen_core::Result;

/// Greeting returned by [`hello_world`].
pub const GREETING: &str = "Hello World";

/// Outcome of one conversion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionResult {
    /// Formatted generated source
    Generated(String),
    /// Error message of the first failing stage
    Failed(String),
}

impl ConversionResult {
    /// Returns `true` if the conversion succeeded.
    #[must_use]
    pub const fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }

    /// Returns the generated text or the error message.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::Generated(text) | Self::Failed(text) => text,
        }
    }
}

impl From<Result<String>> for ConversionResult {
    fn from(result: Result<String>) -> Self {
        match result {
            Ok(code) => Self::Generated(code),
            Err(e) => {
                tracing::warn!(error = %e, "Conversion failed");
                Self::Failed(e.to_string())
            }
        }
    }
}

/// Converts Go source bytes with a fresh generator and default options.
#[must_use]
pub fn convert(input: &[u8]) -> ConversionResult {
    CodeGenerator::new()
        .and_then(|generator| generator.generate(input))
        .into()
}

/// Converts Go source bytes and returns the generated text, or the error
/// message if any stage failed.
#[must_use]
pub fn generate_code(input: &[u8]) -> String {
    convert(input).into_text()
}

/// Returns a fixed greeting for connectivity checks.
#[must_use]
pub const fn hello_world() -> &'static str {
    GREETING
}
