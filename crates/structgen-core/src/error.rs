//! Error types for struct code generation.
//!
//! Every stage of the conversion pipeline reports failures through the single
//! [`Error`] type defined here. Callers that sit behind a text-only boundary
//! flatten it with `to_string()`; everyone else matches on the variant.
//!
//! # Examples
//!
//! ```
//! use structgen_core::{Error, Result};
//!
//! fn require_package(name: &str) -> Result<()> {
//!     if name.is_empty() {
//!         return Err(Error::SyntaxError {
//!             message: "1:1: expected 'package', found EOF".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = require_package("").unwrap_err();
//! assert!(err.is_syntax_error());
//! ```

use thiserror::Error;

/// Main error type for struct code generation.
///
/// All errors in the workspace use this type, one variant per pipeline stage
/// plus configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// Input is not parseable source.
    ///
    /// Raised by the analyzer. The message carries the parser diagnostic
    /// prefixed with a 1-based `line:column` position.
    #[error("Syntax error: {message}")]
    SyntaxError {
        /// Parser diagnostic, `line:column: description`
        message: String,
    },

    /// Template registration or expansion failed.
    ///
    /// The built-in template is static, so this indicates a defect in the
    /// renderer rather than bad input.
    #[error("Template error: {message}")]
    TemplateError {
        /// Description of the template failure
        message: String,
        /// Underlying template engine error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Rendered text is not valid source.
    ///
    /// Raised by the formatter when the renderer produced something the
    /// parser rejects for a particular input shape.
    #[error("Format error: {message}")]
    FormatError {
        /// Parser diagnostic for the rendered text
        message: String,
    },

    /// Configuration error.
    ///
    /// Raised when generator options are invalid.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },
}

impl Error {
    /// Returns `true` if this is a syntax error.
    ///
    /// # Examples
    ///
    /// ```
    /// use structgen_core::Error;
    ///
    /// let err = Error::SyntaxError {
    ///     message: "3:1: expected '}'".to_string(),
    /// };
    /// assert!(err.is_syntax_error());
    /// ```
    #[must_use]
    pub const fn is_syntax_error(&self) -> bool {
        matches!(self, Self::SyntaxError { .. })
    }

    /// Returns `true` if this is a template error.
    ///
    /// # Examples
    ///
    /// ```
    /// use structgen_core::Error;
    ///
    /// let err = Error::TemplateError {
    ///     message: "unclosed block".to_string(),
    ///     source: None,
    /// };
    /// assert!(err.is_template_error());
    /// ```
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is a format error.
    ///
    /// # Examples
    ///
    /// ```
    /// use structgen_core::Error;
    ///
    /// let err = Error::FormatError {
    ///     message: "4:2: unexpected type".to_string(),
    /// };
    /// assert!(err.is_format_error());
    /// ```
    #[must_use]
    pub const fn is_format_error(&self) -> bool {
        matches!(self, Self::FormatError { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use structgen_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "receiver must be an identifier".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }
}

/// Result type alias used throughout the workspace.
///
/// # Examples
///
/// ```
/// use structgen_core::{Error, Result};
///
/// fn non_empty(input: &[u8]) -> Result<&[u8]> {
///     if input.is_empty() {
///         return Err(Error::SyntaxError {
///             message: "1:1: expected 'package', found EOF".to_string(),
///         });
///     }
///     Ok(input)
/// }
///
/// assert!(non_empty(b"package p").is_ok());
/// assert!(non_empty(b"").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
