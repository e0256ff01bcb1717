//! CLI argument definitions and parsing.
//!
//! Defines the command-line interface structure using clap:
//! - `Cli` - Main CLI entry point
//! - `Commands` - Available subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// decorgen - generic decorator generator.
///
/// Reads symbol snapshots of a C# compilation, generates the forwarding half
/// of every type marked as a generic decorator, and reports the partial
/// methods a decorator still has to implement.
#[derive(Parser, Debug)]
#[command(name = "decorgen")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Generator configuration file (TOML)
    #[arg(short, long, global = true, env = "DECORGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (json, text, pretty)
    #[arg(long = "format", global = true, default_value = "pretty")]
    pub format: String,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate decorator sources from one or more snapshots.
    ///
    /// Each input is one recomputation pass of the same pipeline, in order,
    /// so later snapshots reuse cached output where nothing changed.
    /// New and modified sources are written to the output directory and
    /// removed ones are deleted.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Single pass
    /// decorgen generate --input snapshot.json --out-dir generated/
    ///
    /// # Replay an edit session
    /// decorgen generate -i before.json -i after.json -o generated/
    /// ```
    Generate {
        /// Symbol snapshot (JSON); repeat for successive passes
        #[arg(short, long = "input", required = true, num_args = 1)]
        inputs: Vec<PathBuf>,

        /// Directory the generated sources are written to
        #[arg(short, long = "out-dir")]
        out_dir: PathBuf,
    },

    /// Report missing interfaces, accessors and hooks.
    ///
    /// Exits with code 1 when any error diagnostic is reported.
    Analyze {
        /// Symbol snapshot (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Print extracted descriptors and referenced namespaces.
    Inspect {
        /// Symbol snapshot (JSON)
        #[arg(short, long)]
        input: PathBuf,
    },
}
