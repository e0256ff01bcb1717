//! Generate command implementation.
//!
//! Drives one [`GeneratorPipeline`] across the given snapshots, in order,
//! and mirrors each pass into the output directory:
//! 1. The marker attribute is written on the first pass
//! 2. New and modified sources are (re)written
//! 3. Cached sources are left alone, or restored if missing on disk
//! 4. Removed sources are deleted

use super::common::{load_compilation, load_config, remove_if_exists, write_file_atomic};
use crate::formatters::format_output;
use crate::output::{ExitCode, OutputFormat};
use anyhow::{Context, Result};
use decorgen_core::CancellationToken;
use decorgen_pipeline::{GeneratorPipeline, OutputReason, PipelineStats, RunResult};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// One file touched by a pass.
#[derive(Debug, Serialize)]
struct FileChange {
    hint_name: String,
    reason: OutputReason,
    fingerprint: String,
}

/// Summary of one pipeline pass.
#[derive(Debug, Serialize)]
struct PassSummary {
    input: String,
    marker: Option<String>,
    outputs: Vec<FileChange>,
    failures: Vec<String>,
    stats: PipelineStats,
}

/// Runs the generate command.
///
/// # Errors
///
/// Returns an error if the configuration or a snapshot cannot be loaded,
/// or the output directory cannot be written.
///
/// # Examples
///
/// ```no_run
/// use decorgen_cli::commands::generate;
/// use decorgen_cli::output::{ExitCode, OutputFormat};
/// use std::path::PathBuf;
///
/// let code = generate::run(
///     None,
///     &[PathBuf::from("snapshot.json")],
///     &PathBuf::from("generated"),
///     OutputFormat::Pretty,
/// )?;
/// assert_eq!(code, ExitCode::SUCCESS);
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn run(
    config_path: Option<&Path>,
    inputs: &[PathBuf],
    out_dir: &Path,
    output_format: OutputFormat,
) -> Result<ExitCode> {
    let config = load_config(config_path)?;
    let mut pipeline = GeneratorPipeline::new(config).context("failed to create generator pipeline")?;
    let cancel = CancellationToken::new();

    fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create output directory {}", out_dir.display()))?;

    let mut summaries = Vec::with_capacity(inputs.len());
    for input in inputs {
        let compilation = load_compilation(input)?;
        let result = pipeline
            .run(&compilation, &cancel)
            .with_context(|| format!("generation failed for {}", input.display()))?;
        apply_to_directory(&result, out_dir)?;
        summaries.push(summarize(input, result));
    }

    let totals = pipeline.stats();
    info!(
        passes = totals.runs,
        new = totals.new,
        modified = totals.modified,
        cached = totals.cached,
        removed = totals.removed,
        "generation complete"
    );

    println!("{}", format_output(&summaries, output_format)?);

    if totals.failed > 0 {
        Ok(ExitCode::DIAGNOSTICS)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Mirrors one run's outputs into `out_dir`.
fn apply_to_directory(result: &RunResult, out_dir: &Path) -> Result<()> {
    if let Some(marker) = &result.marker {
        write_file_atomic(&out_dir.join(marker.hint_name.as_str()), &marker.content)?;
    }

    for tracked in &result.tracked {
        let path = out_dir.join(tracked.hint_name.as_str());
        match tracked.reason {
            OutputReason::New | OutputReason::Modified => {
                write_file_atomic(&path, &tracked.source_text)?;
            }
            OutputReason::Cached => {
                if !path.exists() {
                    warn!(path = %path.display(), "cached output missing on disk, restoring");
                    write_file_atomic(&path, &tracked.source_text)?;
                }
            }
            OutputReason::Removed => {
                remove_if_exists(&path)?;
            }
        }
    }

    for failure in &result.failures {
        warn!(target_type = %failure.target, "{}", failure.message);
    }
    Ok(())
}

fn summarize(input: &Path, result: RunResult) -> PassSummary {
    PassSummary {
        input: input.display().to_string(),
        marker: result.marker.map(|m| m.hint_name.into_inner()),
        outputs: result
            .tracked
            .into_iter()
            .map(|t| FileChange {
                hint_name: t.hint_name.into_inner(),
                reason: t.reason,
                fingerprint: t.fingerprint.to_string(),
            })
            .collect(),
        failures: result
            .failures
            .into_iter()
            .map(|f| format!("{}: {}", f.target, f.message))
            .collect(),
        stats: result.stats,
    }
}
