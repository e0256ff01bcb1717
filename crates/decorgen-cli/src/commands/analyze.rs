//! Analyze command implementation.
//!
//! Runs the structural analyzer over one snapshot and prints its
//! diagnostics. Pretty output uses compiler-style lines; JSON and text
//! print the full report.

use super::common::{load_compilation, load_config};
use crate::formatters::format_output;
use crate::output::{ExitCode, OutputFormat};
use anyhow::Result;
use colored::Colorize;
use decorgen_analyzer::{AnalysisReport, Diagnostic, Severity, StructuralAnalyzer};
use std::path::Path;

/// Runs the analyze command.
///
/// Returns [`ExitCode::DIAGNOSTICS`] when any error diagnostic is reported.
///
/// # Errors
///
/// Returns an error if the configuration or snapshot cannot be loaded.
pub fn run(config_path: Option<&Path>, input: &Path, output_format: OutputFormat) -> Result<ExitCode> {
    let config = load_config(config_path)?;
    let compilation = load_compilation(input)?;
    let report = StructuralAnalyzer::new(config).analyze(&compilation);

    let output = match output_format {
        OutputFormat::Pretty => render_pretty(&report),
        _ => format_output(&report, output_format)?,
    };
    println!("{output}");

    if report.has_errors() {
        Ok(ExitCode::DIAGNOSTICS)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Renders diagnostics as `file:line:column: severity ID: message` lines
/// followed by a summary.
#[must_use]
pub fn render_pretty(report: &AnalysisReport) -> String {
    let mut lines: Vec<String> = report.diagnostics.iter().map(render_diagnostic).collect();

    let summary = format!(
        "{} type(s) analyzed: {} error(s), {} warning(s)",
        report.analyzed,
        report.error_count(),
        report.warning_count()
    );
    lines.push(if report.has_errors() {
        summary.red().bold().to_string()
    } else {
        summary.green().to_string()
    });
    lines.join("\n")
}

fn render_diagnostic(diagnostic: &Diagnostic) -> String {
    let severity = match diagnostic.severity {
        Severity::Error => diagnostic.severity.as_str().red().bold(),
        Severity::Warning => diagnostic.severity.as_str().yellow().bold(),
    };
    format!(
        "{}: {} {}: {}",
        diagnostic.location.to_string().dimmed(),
        severity,
        diagnostic.id.bold(),
        diagnostic.message
    )
}
