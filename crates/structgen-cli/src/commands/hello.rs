//! Hello command implementation.

use crate::formatters::{Report, format_report};
use anyhow::Result;
use std::io::{self, Write};
use structgen_codegen::hello_world;
use structgen_core::cli::{ExitCode, OutputFormat};

/// Prints the greeting.
///
/// # Errors
///
/// Returns an error if stdout cannot be written.
pub fn run(output_format: OutputFormat) -> Result<ExitCode> {
    let mut text = format_report(&Report::success(hello_world()), output_format)?;
    if output_format == OutputFormat::Text {
        text.push('\n');
    }

    io::stdout().lock().write_all(text.as_bytes())?;
    Ok(ExitCode::SUCCESS)
}
