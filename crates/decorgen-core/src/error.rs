//! Error types for decorator generation.
//!
//! This module provides the error hierarchy shared by every crate in the
//! workspace. Note that "nothing to generate yet" (a decorator without
//! interfaces, an unresolved symbol) is not an error: extraction reports it
//! as `Ok(None)` and the analyzer surfaces it as a diagnostic.
//!
//! # Examples
//!
//! ```
//! use decorgen_core::{Error, Result};
//!
//! fn check_prefix(prefix: &str) -> Result<()> {
//!     if prefix.is_empty() {
//!         return Err(Error::ConfigError {
//!             message: "Accessor prefix cannot be empty".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_prefix("").unwrap_err();
//! assert!(err.is_config_error());
//! ```

use thiserror::Error;

/// Main error type for decorator generation.
///
/// All errors in the system use this type, providing consistent error handling
/// across all crates in the workspace.
#[derive(Error, Debug)]
pub enum Error {
    /// Operation was cancelled through a [`CancellationToken`](crate::CancellationToken).
    ///
    /// Cancellation abandons the current candidate only. No partial
    /// descriptor or output is produced.
    #[error("Operation cancelled: {operation}")]
    Cancelled {
        /// Name of the operation that observed the cancellation
        operation: String,
    },

    /// Configuration error.
    ///
    /// Raised when configuration is invalid, cannot be parsed, or contains
    /// values that would produce uncompilable output.
    #[error("Configuration error: {message}")]
    ConfigError {
        /// Description of the configuration problem
        message: String,
    },

    /// Template registration or rendering failed.
    #[error("Template error in '{template}': {message}")]
    TemplateError {
        /// Name of the template involved
        template: String,
        /// Description of the failure
        message: String,
    },

    /// Serialization/deserialization error.
    ///
    /// Raised when JSON conversion of snapshots, descriptors or results fails.
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Description of the serialization failure
        message: String,
        /// Underlying serde error
        #[source]
        source: Option<serde_json::Error>,
    },

    /// A symbol in the snapshot is malformed.
    #[error("Invalid symbol '{symbol}': {reason}")]
    InvalidSymbol {
        /// Display name of the offending symbol
        symbol: String,
        /// Why the symbol cannot be used
        reason: String,
    },

    /// Validation error for domain types.
    #[error("Validation error in {field}: {reason}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Detailed reason for the validation failure
        reason: String,
    },
}

impl Error {
    /// Creates a cancellation error for the named operation.
    ///
    /// # Examples
    ///
    /// ```
    /// use decorgen_core::Error;
    ///
    /// let err = Error::cancelled("extract");
    /// assert!(err.is_cancelled());
    /// assert_eq!(err.to_string(), "Operation cancelled: extract");
    /// ```
    #[must_use]
    pub fn cancelled(operation: impl Into<String>) -> Self {
        Self::Cancelled {
            operation: operation.into(),
        }
    }

    /// Returns `true` if this is a cancellation error.
    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }

    /// Returns `true` if this is a configuration error.
    ///
    /// # Examples
    ///
    /// ```
    /// use decorgen_core::Error;
    ///
    /// let err = Error::ConfigError {
    ///     message: "Invalid marker name".to_string(),
    /// };
    /// assert!(err.is_config_error());
    /// ```
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::ConfigError { .. })
    }

    /// Returns `true` if this is a template error.
    #[must_use]
    pub const fn is_template_error(&self) -> bool {
        matches!(self, Self::TemplateError { .. })
    }

    /// Returns `true` if this is a validation error.
    ///
    /// # Examples
    ///
    /// ```
    /// use decorgen_core::Error;
    ///
    /// let err = Error::ValidationError {
    ///     field: "hint_extension".to_string(),
    ///     reason: "must start with '.'".to_string(),
    /// };
    /// assert!(err.is_validation_error());
    /// ```
    #[must_use]
    pub const fn is_validation_error(&self) -> bool {
        matches!(self, Self::ValidationError { .. })
    }

    /// Returns `true` if this is an invalid symbol error.
    #[must_use]
    pub const fn is_invalid_symbol(&self) -> bool {
        matches!(self, Self::InvalidSymbol { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            message: err.to_string(),
            source: Some(err),
        }
    }
}

/// Result type alias for decorator generation.
///
/// # Examples
///
/// ```
/// use decorgen_core::{Result, Error};
///
/// fn non_empty(value: &str) -> Result<&str> {
///     if value.is_empty() {
///         return Err(Error::ValidationError {
///             field: "value".to_string(),
///             reason: "empty".to_string(),
///         });
///     }
///     Ok(value)
/// }
///
/// assert!(non_empty("a").is_ok());
/// assert!(non_empty("").is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;
