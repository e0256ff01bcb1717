//! Common utilities shared across CLI commands.

use anyhow::{Context, Result};
use decorgen_core::GeneratorConfig;
use decorgen_introspector::Compilation;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// Loads the generator configuration, or the defaults when no file is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read, parsed or validated.
///
/// # Examples
///
/// ```
/// use decorgen_cli::commands::common::load_config;
///
/// let config = load_config(None).unwrap();
/// assert_eq!(config.accessor_prefix, "GetInner");
/// ```
pub fn load_config(path: Option<&Path>) -> Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };
    GeneratorConfig::load(path)
        .with_context(|| format!("failed to load configuration from {}", path.display()))
}

/// Reads and validates a JSON symbol snapshot.
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not a snapshot, or
/// contains invalid symbols.
pub fn load_compilation(path: &Path) -> Result<Compilation> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read snapshot {}", path.display()))?;
    let compilation = Compilation::from_json(&json)
        .with_context(|| format!("failed to parse snapshot {}", path.display()))?;
    compilation
        .validate()
        .with_context(|| format!("invalid snapshot {}", path.display()))?;
    debug!(
        path = %path.display(),
        types = compilation.types.len(),
        interfaces = compilation.interfaces.len(),
        "loaded snapshot"
    );
    Ok(compilation)
}

/// Writes a file by writing a sibling temp file and renaming it over the target.
///
/// # Errors
///
/// Returns an error if the temp file cannot be written or renamed.
pub fn write_file_atomic(path: &Path, content: &str) -> Result<()> {
    let temp_path = path.with_extension("tmp");

    let mut file = fs::File::create(&temp_path)
        .with_context(|| format!("failed to create temp file {}", temp_path.display()))?;
    file.write_all(content.as_bytes())
        .with_context(|| format!("failed to write {}", temp_path.display()))?;
    file.sync_all()
        .with_context(|| format!("failed to sync {}", temp_path.display()))?;

    fs::rename(&temp_path, path).with_context(|| {
        format!("failed to rename {} to {}", temp_path.display(), path.display())
    })?;
    Ok(())
}

/// Removes a file if it exists.
///
/// Returns `true` if a file was removed.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be removed.
pub fn remove_if_exists(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e).with_context(|| format!("failed to remove {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_remove() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("A.Deco.g.cs");

        write_file_atomic(&path, "partial class Deco {}").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "partial class Deco {}");
        assert!(!path.with_extension("tmp").exists());

        assert!(remove_if_exists(&path).unwrap());
        assert!(!remove_if_exists(&path).unwrap());
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("decorgen.toml");
        fs::write(&path, "accessor_prefix = \"Inner\"\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.accessor_prefix, "Inner");
        assert_eq!(config.marker_name, "GenericDecoratorAttribute");
    }

    #[test]
    fn test_load_config_rejects_unknown_keys() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("decorgen.toml");
        fs::write(&path, "prefix = \"Inner\"\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("decorgen.toml"));
    }

    #[test]
    fn test_load_compilation_reports_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_compilation(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }
}
