//! decorgen CLI.
//!
//! Generates generic decorator sources from symbol snapshots and reports
//! structural diagnostics.
//!
//! # Examples
//!
//! ```bash
//! # Generate sources
//! decorgen generate --input snapshot.json --out-dir generated/
//!
//! # Check which partial methods are still missing
//! decorgen analyze --input snapshot.json
//!
//! # Show extracted descriptors as JSON
//! decorgen --format json inspect --input snapshot.json
//! ```

use anyhow::Result;
use clap::Parser;
use decorgen_cli::commands;
use decorgen_cli::{Cli, Commands, ExitCode, OutputFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let output_format = cli.format.parse::<OutputFormat>()?;

    let exit_code = execute_command(cli.command, cli.config.as_deref(), output_format)?;

    std::process::exit(exit_code.as_i32());
}

/// Initializes logging to stderr.
///
/// `--verbose` forces the debug level; otherwise `RUST_LOG` applies,
/// defaulting to `info`.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Routes a command to its handler.
fn execute_command(
    command: Commands,
    config: Option<&std::path::Path>,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    match command {
        Commands::Generate { inputs, out_dir } => {
            commands::generate::run(config, &inputs, &out_dir, output_format)
        }
        Commands::Analyze { input } => commands::analyze::run(config, &input, output_format),
        Commands::Inspect { input } => commands::inspect::run(config, &input, output_format),
    }
}
