//! structgen CLI.
//!
//! Regenerates Go struct declarations with serialization tags and a
//! `String()` method listing their fields.
//!
//! # Examples
//!
//! ```bash
//! # Convert a file, print to stdout
//! structgen generate models.go
//!
//! # Read stdin, write a file, custom tag key from config
//! cat models.go | structgen generate -o models_gen.go --config structgen.toml
//!
//! # Machine-readable result
//! structgen --format json generate models.go
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use structgen_cli::commands;
use structgen_core::cli::{ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Go struct code generator.
#[derive(Parser, Debug)]
#[command(name = "structgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(long = "format", global = true, default_value = "text")]
    format: OutputFormat,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate tagged structs and String methods from Go source.
    ///
    /// Exits with 0 on success, 1 if the input is not valid Go, and 2 if a
    /// file or the configuration cannot be read.
    Generate {
        /// Go source file (reads stdin when omitted or `-`)
        input: Option<PathBuf>,

        /// Write the result to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print a greeting.
    Hello,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match init_logging(cli.verbose)
        .and_then(|()| execute_command(cli.command, cli.format))
    {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::INVALID_INPUT
        }
    };

    std::process::exit(exit_code.as_i32());
}

fn init_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()?;

    Ok(())
}

fn execute_command(command: Commands, output_format: OutputFormat) -> Result<ExitCode> {
    match command {
        Commands::Generate {
            input,
            output,
            config,
        } => commands::generate::run(input, output, config, output_format),
        Commands::Hello => commands::hello::run(output_format),
    }
}
