//! Output formatters for CLI commands.
//!
//! Every command produces a [`Report`]. Text mode prints the payload or the
//! error message as-is; JSON mode wraps it in an envelope with an explicit
//! success flag, so scripts never have to guess from the text.

use anyhow::Result;
use serde::Serialize;
use structgen_codegen::ConversionResult;
use structgen_core::cli::{ExitCode, OutputFormat};

/// Outcome of a command, as printed to the user.
///
/// # Examples
///
/// ```
/// use structgen_cli::formatters::{Report, format_report};
/// use structgen_core::cli::OutputFormat;
///
/// let report = Report::success("Hello World");
/// let output = format_report(&report, OutputFormat::Json)?;
/// assert!(output.contains("\"success\": true"));
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    /// Whether the command produced its payload
    pub success: bool,
    /// Payload on success
    pub output: Option<String>,
    /// Error message on failure
    pub error: Option<String>,
}

impl Report {
    /// Creates a successful report.
    #[must_use]
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: Some(output.into()),
            error: None,
        }
    }

    /// Creates a failed report.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: None,
            error: Some(error.into()),
        }
    }

    /// Exit code the process should end with.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::CONVERSION_FAILED
        }
    }
}

impl From<ConversionResult> for Report {
    fn from(result: ConversionResult) -> Self {
        match result {
            ConversionResult::Generated(code) => Self::success(code),
            ConversionResult::Failed(message) => Self::failure(message),
        }
    }
}

/// Formats a report according to the requested output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_report(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Text => Ok(report
            .output
            .as_deref()
            .or(report.error.as_deref())
            .unwrap_or_default()
            .to_string()),
    }
}
