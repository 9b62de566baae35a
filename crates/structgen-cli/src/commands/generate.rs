//! Generate command implementation.
//!
//! Reads Go source from a file or stdin, converts it, and writes the result
//! to a file or stdout.
//!
//! In text mode a failed conversion prints only the error message, on
//! stderr, and leaves the output file untouched. In JSON mode the envelope
//! is always written to the output destination.

use crate::config;
use crate::formatters::{Report, format_report};
use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use structgen_codegen::{CodeGenerator, ConversionResult};
use structgen_core::cli::{ExitCode, OutputFormat};
use tracing::{debug, info};

/// Runs the generate command.
///
/// # Arguments
///
/// * `input` - Go source file; `None` or `-` reads stdin
/// * `output` - Destination file; `None` writes stdout
/// * `config_path` - Optional TOML configuration file
/// * `output_format` - Text or JSON envelope
///
/// # Errors
///
/// Returns an error if the configuration is invalid or any file cannot be
/// read or written. A failed conversion is reported through the exit code.
pub fn run(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let options = config::load_options(config_path.as_deref())?;
    let generator = CodeGenerator::with_options(options)?;

    let source = read_input(input.as_deref())?;
    debug!(bytes = source.len(), "Read input");

    let result: ConversionResult = generator.generate(&source).into();
    let report = Report::from(result);
    let text = format_report(&report, output_format)?;

    if !report.success && output_format == OutputFormat::Text {
        eprintln!("{text}");
    } else {
        write_output(output.as_deref(), &text)?;
    }

    Ok(report.exit_code())
}

fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(path) if path != Path::new("-") => {
            fs::read(path).with_context(|| format!("failed to read {}", path.display()))
        }
        _ => {
            let mut buffer = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))?;
            info!(path = %path.display(), "Wrote output");
        }
        None => io::stdout()
            .lock()
            .write_all(text.as_bytes())
            .context("failed to write stdout")?,
    }
    Ok(())
}
