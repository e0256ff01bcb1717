//! Generator configuration.
//!
//! Controls the marker attribute the generator looks for, how accessor
//! methods are named, and how emitted source units are named. Every field
//! has a default, so an empty TOML document is a valid configuration.
//!
//! # Examples
//!
//! ```
//! use decorgen_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::default();
//! assert_eq!(config.marker_full_name(), "Decorgen.GenericDecoratorAttribute");
//!
//! let custom = GeneratorConfig::from_toml_str(r#"
//!     accessor_prefix = "Inner"
//! "#).unwrap();
//! assert_eq!(custom.accessor_prefix, "Inner");
//! assert_eq!(custom.hint_extension, ".g.cs");
//! ```

use crate::error::{Error, Result};
use crate::types::HintName;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default namespace of the marker attribute.
pub const DEFAULT_MARKER_NAMESPACE: &str = "Decorgen";

/// Default type name of the marker attribute.
pub const DEFAULT_MARKER_NAME: &str = "GenericDecoratorAttribute";

/// Default accessor method prefix.
pub const DEFAULT_ACCESSOR_PREFIX: &str = "GetInner";

/// Default suffix of emitted source units.
pub const DEFAULT_HINT_EXTENSION: &str = ".g.cs";

/// Configuration shared by extraction, synthesis, the pipeline and the analyzer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Namespace the marker attribute is declared in.
    ///
    /// Default: `Decorgen`
    pub marker_namespace: String,

    /// Type name of the marker attribute.
    ///
    /// Default: `GenericDecoratorAttribute`
    pub marker_name: String,

    /// Prefix of the per-interface accessor methods.
    ///
    /// Default: `GetInner`
    pub accessor_prefix: String,

    /// Suffix appended to every emitted hint name.
    ///
    /// Default: `.g.cs`
    pub hint_extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            marker_namespace: DEFAULT_MARKER_NAMESPACE.to_string(),
            marker_name: DEFAULT_MARKER_NAME.to_string(),
            accessor_prefix: DEFAULT_ACCESSOR_PREFIX.to_string(),
            hint_extension: DEFAULT_HINT_EXTENSION.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Creates a new configuration builder.
    ///
    /// # Examples
    ///
    /// ```
    /// use decorgen_core::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::builder()
    ///     .marker_namespace("Acme.Codegen")
    ///     .accessor_prefix("Inner")
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(config.marker_full_name(), "Acme.Codegen.GenericDecoratorAttribute");
    /// ```
    #[must_use]
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    /// Parses and validates a TOML configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the document is not valid TOML or
    /// contains unknown keys, or a validation error from [`validate`](Self::validate).
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source).map_err(|e| Error::ConfigError {
            message: format!("Invalid configuration: {e}"),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigError`] if the file cannot be read or parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| Error::ConfigError {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        tracing::debug!(path = %path.display(), "loaded generator configuration");
        Self::from_toml_str(&source)
    }

    /// Validates the configuration.
    ///
    /// Names that end up in generated source must be valid identifiers
    /// (dotted for the namespace), and the hint extension must start with `.`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ValidationError`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.marker_namespace.split('.').all(is_identifier) {
            return Err(invalid("marker_namespace", "must be a dotted identifier"));
        }
        if !is_identifier(&self.marker_name) {
            return Err(invalid("marker_name", "must be an identifier"));
        }
        if !is_identifier(&self.accessor_prefix) {
            return Err(invalid("accessor_prefix", "must be an identifier"));
        }
        if !self.hint_extension.starts_with('.') || self.hint_extension.len() < 2 {
            return Err(invalid("hint_extension", "must start with '.' and be non-empty"));
        }
        Ok(())
    }

    /// Fully qualified marker attribute name as hosts report it
    /// (without the `global::` prefix).
    #[must_use]
    pub fn marker_full_name(&self) -> String {
        format!("{}.{}", self.marker_namespace, self.marker_name)
    }

    /// Hint name of the marker attribute source unit.
    ///
    /// # Examples
    ///
    /// ```
    /// use decorgen_core::GeneratorConfig;
    ///
    /// let config = GeneratorConfig::default();
    /// assert_eq!(config.marker_hint_name().as_str(), "GenericDecoratorAttribute.g.cs");
    /// ```
    #[must_use]
    pub fn marker_hint_name(&self) -> HintName {
        HintName::new(format!("{}{}", self.marker_name, self.hint_extension))
    }
}

fn invalid(field: &str, reason: &str) -> Error {
    Error::ValidationError {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_alphabetic() || c == '_')
        && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Builder for [`GeneratorConfig`].
#[derive(Debug, Clone, Default)]
pub struct GeneratorConfigBuilder {
    config: GeneratorConfig,
}

impl GeneratorConfigBuilder {
    /// Creates a builder starting from the defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the marker attribute namespace.
    #[must_use]
    pub fn marker_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.config.marker_namespace = namespace.into();
        self
    }

    /// Sets the marker attribute type name.
    #[must_use]
    pub fn marker_name(mut self, name: impl Into<String>) -> Self {
        self.config.marker_name = name.into();
        self
    }

    /// Sets the accessor method prefix.
    #[must_use]
    pub fn accessor_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.accessor_prefix = prefix.into();
        self
    }

    /// Sets the hint name extension.
    #[must_use]
    pub fn hint_extension(mut self, extension: impl Into<String>) -> Self {
        self.config.hint_extension = extension.into();
        self
    }

    /// Validates and returns the configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error if any field is invalid.
    pub fn build(self) -> Result<GeneratorConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let config = GeneratorConfig::from_toml_str("").unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = GeneratorConfig::from_toml_str("colour = \"blue\"").unwrap_err();
        assert!(err.is_config_error());
    }

    #[test]
    fn test_invalid_prefix_is_rejected() {
        let err = GeneratorConfig::builder()
            .accessor_prefix("Get Inner")
            .build()
            .unwrap_err();
        assert!(err.is_validation_error());
        assert!(err.to_string().contains("accessor_prefix"));
    }

    #[test]
    fn test_invalid_namespace_is_rejected() {
        let err = GeneratorConfig::builder()
            .marker_namespace("Acme..Codegen")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("marker_namespace"));
    }

    #[test]
    fn test_hint_extension_must_start_with_dot() {
        let err = GeneratorConfig::builder()
            .hint_extension("cs")
            .build()
            .unwrap_err();
        assert!(err.to_string().contains("hint_extension"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "marker_namespace = \"Acme\"").unwrap();
        writeln!(file, "hint_extension = \".generated.cs\"").unwrap();

        let config = GeneratorConfig::load(file.path()).unwrap();
        assert_eq!(config.marker_full_name(), "Acme.GenericDecoratorAttribute");
        assert_eq!(
            config.marker_hint_name().as_str(),
            "GenericDecoratorAttribute.generated.cs"
        );
    }

    #[test]
    fn test_load_missing_file() {
        let err = GeneratorConfig::load("/definitely/not/here.toml").unwrap_err();
        assert!(err.is_config_error());
    }
}
