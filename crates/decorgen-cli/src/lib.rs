//! decorgen CLI library.
//!
//! Exposes the argument definitions, commands and formatters of the
//! `decorgen` binary so they can be tested without spawning a process.

pub mod cli;
pub mod commands;
pub mod formatters;
pub mod output;

pub use cli::{Cli, Commands};
pub use output::{ExitCode, OutputFormat};
