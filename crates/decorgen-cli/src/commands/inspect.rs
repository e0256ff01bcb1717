//! Inspect command implementation.
//!
//! Shows what extraction sees for every marked type: the descriptor that
//! drives synthesis and caching, and the namespaces its interfaces refer to.

use super::common::{load_compilation, load_config};
use crate::formatters::format_output;
use crate::output::{ExitCode, OutputFormat};
use anyhow::{Context, Result};
use decorgen_core::{CancellationToken, DecoratorDescriptor, GeneratorConfig};
use decorgen_introspector::{
    Compilation, TypeSymbol, collect_resolved_namespaces, extract_decorator, target_descriptor,
};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;

/// What extraction produced for one marked type.
#[derive(Debug, Serialize)]
pub struct InspectEntry {
    /// Dotted type name
    pub target: String,
    /// Unit name the output would be emitted under
    pub hint_name: String,
    /// Extracted descriptor; `None` when generation preconditions are not met
    pub descriptor: Option<DecoratorDescriptor>,
    /// Namespaces referenced by the declared interfaces
    pub namespaces: BTreeSet<String>,
}

/// Runs the inspect command.
///
/// # Errors
///
/// Returns an error if the configuration or snapshot cannot be loaded.
pub fn run(config_path: Option<&Path>, input: &Path, output_format: OutputFormat) -> Result<ExitCode> {
    let config = load_config(config_path)?;
    let compilation = load_compilation(input)?;
    let entries = inspect(&compilation, &config)?;

    println!("{}", format_output(&entries, output_format)?);
    Ok(ExitCode::SUCCESS)
}

/// Extracts every marked type in a snapshot.
///
/// # Errors
///
/// Returns an error if extraction fails.
pub fn inspect(compilation: &Compilation, config: &GeneratorConfig) -> Result<Vec<InspectEntry>> {
    let cancel = CancellationToken::new();
    let marker = config.marker_full_name();

    compilation
        .marked_types(&marker)
        .map(|ty| {
            let descriptor = extract_decorator(compilation, ty, config, &cancel)
                .with_context(|| format!("extraction failed for {}", ty.display_name()))?;
            let target = target_descriptor(ty);
            Ok(InspectEntry {
                target: target.to_string(),
                hint_name: target.hint_name(&config.hint_extension).into_inner(),
                descriptor,
                namespaces: interface_namespaces(compilation, ty),
            })
        })
        .collect()
}

fn interface_namespaces(compilation: &Compilation, ty: &TypeSymbol) -> BTreeSet<String> {
    ty.interfaces
        .iter()
        .filter_map(|reference| compilation.resolve_interface(reference))
        .flat_map(|resolved| collect_resolved_namespaces(&resolved))
        .collect()
}
