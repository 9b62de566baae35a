//! CLI configuration.
//!
//! Generator options are read from a TOML file passed with `--config`:
//!
//! ```toml
//! [generator]
//! tag_key = "yaml"
//! receiver = "v"
//! method_name = "Describe"
//! ```
//!
//! Missing keys fall back to the defaults.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use structgen_core::GeneratorOptions;
use tracing::debug;

/// Contents of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Generator settings
    pub generator: GeneratorOptions,
}

impl Config {
    /// Parses and validates configuration text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML, has unknown keys, or
    /// the generator options fail validation.
    pub fn parse(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).context("failed to parse configuration")?;
        config.generator.validate()?;
        Ok(config)
    }

    /// Loads configuration from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are
    /// invalid.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config =
            Self::parse(&text).with_context(|| format!("invalid config file {}", path.display()))?;

        debug!(path = %path.display(), options = ?config.generator, "Loaded configuration");
        Ok(config)
    }
}

/// Resolves generator options from an optional config file.
///
/// # Errors
///
/// Returns an error if `path` is given and the file cannot be loaded.
pub fn load_options(path: Option<&Path>) -> Result<GeneratorOptions> {
    path.map_or_else(
        || Ok(GeneratorOptions::default()),
        |path| Config::load(path).map(|config| config.generator),
    )
}
