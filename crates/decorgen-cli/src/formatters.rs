//! Output formatters for CLI commands.
//!
//! Every command builds a serializable report; these functions render it
//! as JSON, compact text or colored output.

use crate::output::OutputFormat;
use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

/// Formats a report according to the output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
///
/// # Examples
///
/// ```
/// use decorgen_cli::formatters::format_output;
/// use decorgen_cli::output::OutputFormat;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Written {
///     hint_name: String,
///     reason: String,
/// }
///
/// let written = Written {
///     hint_name: "Shop.StoreDecorator.g.cs".to_string(),
///     reason: "new".to_string(),
/// };
///
/// let output = format_output(&written, OutputFormat::Json)?;
/// assert!(output.contains("\"hint_name\""));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn format_output<T: Serialize>(data: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Text => Ok(serde_json::to_string(data)?),
        OutputFormat::Pretty => pretty::format(data),
    }
}

/// Colored, indented rendering of arbitrary reports.
pub mod pretty {
    use super::{Colorize, Result, Serialize};
    use serde_json::Value;

    /// Formats data as a colored key/value tree.
    pub fn format<T: Serialize>(data: &T) -> Result<String> {
        let value = serde_json::to_value(data)?;
        let mut out = String::new();
        write_value(&mut out, &value, 0);
        Ok(out)
    }

    fn write_value(out: &mut String, value: &Value, indent: usize) {
        let pad = "  ".repeat(indent);
        match value {
            Value::Null => out.push_str(&"-".dimmed().to_string()),
            Value::Bool(b) => out.push_str(&b.to_string().yellow().to_string()),
            Value::Number(n) => out.push_str(&n.to_string().cyan().to_string()),
            Value::String(s) if s.contains('\n') => {
                // Source text: print as an indented block
                for line in s.lines() {
                    out.push('\n');
                    out.push_str(&pad);
                    out.push_str("  ");
                    out.push_str(line);
                }
            }
            Value::String(s) => out.push_str(&s.green().to_string()),
            Value::Array(items) if items.is_empty() => out.push_str(&"(none)".dimmed().to_string()),
            Value::Array(items) => {
                for item in items {
                    out.push('\n');
                    out.push_str(&pad);
                    out.push_str("- ");
                    write_value(out, item, indent + 1);
                }
            }
            Value::Object(fields) => {
                for (i, (key, field)) in fields.iter().enumerate() {
                    if i > 0 || indent > 0 {
                        out.push('\n');
                        out.push_str(&pad);
                    }
                    out.push_str(&key.blue().bold().to_string());
                    out.push_str(": ");
                    write_value(out, field, indent + 1);
                }
            }
        }
    }
}
