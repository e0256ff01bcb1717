//! Output format selection and process exit codes.

use decorgen_core::Error;
use std::fmt;
use std::str::FromStr;

/// How command results are printed.
///
/// # Examples
///
/// ```
/// use decorgen_cli::output::OutputFormat;
///
/// let format: OutputFormat = "json".parse().unwrap();
/// assert_eq!(format, OutputFormat::Json);
/// assert_eq!(OutputFormat::default().as_str(), "pretty");
/// assert!("yaml".parse::<OutputFormat>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OutputFormat {
    /// Pretty-printed JSON for machine parsing
    Json,
    /// Compact, uncolored output for scripts
    Text,
    /// Colored output for terminals
    #[default]
    Pretty,
}

impl OutputFormat {
    /// Returns the flag value of the format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
            Self::Pretty => "pretty",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            "pretty" => Ok(Self::Pretty),
            _ => Err(Error::ValidationError {
                field: "format".to_string(),
                reason: format!("invalid output format '{s}' (expected: json, text, or pretty)"),
            }),
        }
    }
}

/// Process exit code.
///
/// # Examples
///
/// ```
/// use decorgen_cli::output::ExitCode;
///
/// assert!(ExitCode::SUCCESS.is_success());
/// assert_eq!(ExitCode::DIAGNOSTICS.as_i32(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ExitCode(i32);

impl ExitCode {
    /// Everything succeeded.
    pub const SUCCESS: Self = Self(0);

    /// Error diagnostics were reported or a candidate failed to generate.
    pub const DIAGNOSTICS: Self = Self(1);

    /// Invalid input: unreadable snapshot or configuration.
    pub const INVALID_INPUT: Self = Self(2);

    /// Returns the code as an integer.
    #[must_use]
    pub const fn as_i32(&self) -> i32 {
        self.0
    }

    /// Returns `true` for the success code.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing_is_case_insensitive() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("Text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_invalid_format_names_field() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(err.is_validation_error());
        assert!(err.to_string().contains("xml"));
    }

    #[test]
    fn test_default_exit_code_is_success() {
        assert_eq!(ExitCode::default(), ExitCode::SUCCESS);
        assert!(!ExitCode::INVALID_INPUT.is_success());
    }
}
