//! Generator configuration.
//!
//! Controls the three names the generated code is built from: the
//! annotation key, the method receiver and the method name. The defaults
//! produce `json:"..."` annotations and a `func (s *T) String() string`
//! method.
//!
//! # Examples
//!
//! ```
//! use structgen_core::GeneratorOptions;
//!
//! let options = GeneratorOptions::default();
//! assert_eq!(options.tag_key, "json");
//! assert!(options.validate().is_ok());
//!
//! let custom = GeneratorOptions {
//!     tag_key: "yaml".to_string(),
//!     ..Default::default()
//! };
//! assert!(custom.validate().is_ok());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Reserved words that cannot name a receiver or method.
const GO_KEYWORDS: &[&str] = &[
    "break",
    "case",
    "chan",
    "const",
    "continue",
    "default",
    "defer",
    "else",
    "fallthrough",
    "for",
    "func",
    "go",
    "goto",
    "if",
    "import",
    "interface",
    "map",
    "package",
    "range",
    "return",
    "select",
    "struct",
    "switch",
    "type",
    "var",
];

/// Options for code generation.
///
/// Missing keys in a deserialized document fall back to the defaults, so
/// an empty TOML file is a valid configuration.
///
/// # Examples
///
/// ```
/// use structgen_core::GeneratorOptions;
///
/// let options = GeneratorOptions {
///     receiver: "u".to_string(),
///     ..Default::default()
/// };
/// assert_eq!(options.method_name, "String");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorOptions {
    /// Annotation key written in front of each derived tag.
    ///
    /// Default: `json`
    pub tag_key: String,

    /// Receiver identifier of the generated method.
    ///
    /// Default: `s`
    pub receiver: String,

    /// Name of the generated string-rendering method.
    ///
    /// Default: `String`
    pub method_name: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            tag_key: "json".to_string(),
            receiver: "s".to_string(),
            method_name: "String".to_string(),
        }
    }
}

impl GeneratorOptions {
    /// Validates the options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if:
    /// - `receiver` or `method_name` is not an identifier or is a keyword
    /// - `tag_key` is empty or contains whitespace, `"`, `:` or a backtick
    ///
    /// # Examples
    ///
    /// ```
    /// use structgen_core::GeneratorOptions;
    ///
    /// let options = GeneratorOptions {
    ///     receiver: "func".to_string(),
    ///     ..Default::default()
    /// };
    /// assert!(options.validate().unwrap_err().is_config_error());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.tag_key.is_empty()
            || self
                .tag_key
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '"' | ':' | '`'))
        {
            return Err(Error::ConfigError {
                message: format!("invalid tag_key '{}'", self.tag_key),
            });
        }

        for (field, value) in [("receiver", &self.receiver), ("method_name", &self.method_name)] {
            if !is_identifier(value) {
                return Err(Error::ConfigError {
                    message: format!("{field} '{value}' is not a valid identifier"),
                });
            }
        }

        Ok(())
    }
}

/// Returns `true` if `name` is a non-keyword identifier.
///
/// # Examples
///
/// ```
/// use structgen_core::is_identifier;
///
/// assert!(is_identifier("userName"));
/// assert!(is_identifier("_tmp1"));
/// assert!(!is_identifier("1st"));
/// assert!(!is_identifier("range"));
/// ```
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    (first == '_' || first.is_alphabetic())
        && chars.all(|c| c == '_' || c.is_alphanumeric())
        && !GO_KEYWORDS.contains(&name)
}
