//! Diagnostic descriptors and reported diagnostics.
//!
//! A [`DiagnosticDescriptor`] is the static definition of a rule: id,
//! severity, title, category and a message format with positional
//! `{0}`/`{1}` placeholders. A [`Diagnostic`] is one report of a rule,
//! with its message rendered and anchored at a declaration.

use decorgen_introspector::Location;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category shared by every rule.
pub const CATEGORY: &str = "Decorgen.GenericDecorator";

/// How serious a diagnostic is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Informational; generation is unaffected
    Warning,
    /// The generated code will not compile until fixed
    Error,
}

impl Severity {
    /// Lowercase name, as printed in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Static definition of a diagnostic rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticDescriptor {
    /// Stable rule id, e.g. `GDG8795`
    pub id: &'static str,
    /// One-line summary of the rule
    pub title: &'static str,
    /// Message with `{0}`, `{1}`, ... placeholders
    pub message_format: &'static str,
    /// Rule category
    pub category: &'static str,
    /// Default severity
    pub severity: Severity,
}

impl DiagnosticDescriptor {
    /// Renders the message format with positional arguments.
    ///
    /// Placeholders are substituted in a single pass, so text inside an
    /// argument is never treated as a placeholder. Placeholders without a
    /// matching argument are left as is.
    ///
    /// # Examples
    ///
    /// ```
    /// use decorgen_analyzer::rules;
    ///
    /// let message = rules::MUST_IMPLEMENT_PARTIAL_METHOD
    ///     .format_message(&["void Decorate(Action doInner)", "Shop.StoreDecorator"]);
    /// assert_eq!(message, "Implement void Decorate(Action doInner) on Shop.StoreDecorator");
    /// ```
    #[must_use]
    pub fn format_message(&self, args: &[&str]) -> String {
        let mut message = String::with_capacity(self.message_format.len());
        let mut rest = self.message_format;
        while let Some(open) = rest.find('{') {
            message.push_str(&rest[..open]);
            let tail = &rest[open..];
            let argument = tail.find('}').and_then(|close| {
                let index: usize = tail[1..close].parse().ok()?;
                args.get(index).map(|arg| (*arg, close))
            });
            match argument {
                Some((arg, close)) => {
                    message.push_str(arg);
                    rest = &tail[close + 1..];
                }
                None => {
                    message.push('{');
                    rest = &tail[1..];
                }
            }
        }
        message.push_str(rest);
        message
    }
}

/// The rule set.
pub mod rules {
    use super::{CATEGORY, DiagnosticDescriptor, Severity};

    /// A marked type declares no interface.
    pub const MUST_DECLARE_INTERFACE: DiagnosticDescriptor = DiagnosticDescriptor {
        id: "GDG0001",
        title: "Type with the generic decorator attribute must declare an interface.",
        message_format: "Add the interface declaration for the interface to be decorated.",
        category: CATEGORY,
        severity: Severity::Warning,
    };

    /// A hook or accessor partial method has no implementation part.
    pub const MUST_IMPLEMENT_PARTIAL_METHOD: DiagnosticDescriptor = DiagnosticDescriptor {
        id: "GDG8795",
        title: "Partial member must have an implementation part because it has accessibility modifiers.",
        message_format: "Implement {0} on {1}",
        category: CATEGORY,
        severity: Severity::Error,
    };

    /// Two interfaces fold to the same accessor name.
    pub const ACCESSOR_NAME_COLLISION: DiagnosticDescriptor = DiagnosticDescriptor {
        id: "GDG0002",
        title: "Decorated interfaces share an accessor name.",
        message_format: "Interfaces {0} map to the same accessor name; using {1}",
        category: CATEGORY,
        severity: Severity::Warning,
    };

    /// A decorated interface declares a property or event.
    pub const UNSUPPORTED_INTERFACE_MEMBER: DiagnosticDescriptor = DiagnosticDescriptor {
        id: "GDG0003",
        title: "Decorated interface declares a member that is not forwarded.",
        message_format: "The {0} {1} is not forwarded by {2}; implement it on the decorator",
        category: CATEGORY,
        severity: Severity::Warning,
    };

    /// Every rule, ordered by id.
    pub const ALL: [DiagnosticDescriptor; 4] = [
        MUST_DECLARE_INTERFACE,
        ACCESSOR_NAME_COLLISION,
        UNSUPPORTED_INTERFACE_MEMBER,
        MUST_IMPLEMENT_PARTIAL_METHOD,
    ];
}

/// One reported diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Rule id
    pub id: String,
    /// Severity
    pub severity: Severity,
    /// Rule title
    pub title: String,
    /// Rule category
    pub category: String,
    /// Rendered message
    pub message: String,
    /// Declaration the diagnostic is anchored at
    pub location: Location,
}

impl Diagnostic {
    /// Reports `descriptor` at `location` with message arguments.
    ///
    /// # Examples
    ///
    /// ```
    /// use decorgen_analyzer::{Diagnostic, Severity, rules};
    /// use decorgen_introspector::Location;
    ///
    /// let diagnostic = Diagnostic::new(
    ///     &rules::MUST_DECLARE_INTERFACE,
    ///     Location::new("Deco.cs", 3, 14),
    ///     &[],
    /// );
    /// assert_eq!(diagnostic.severity, Severity::Warning);
    /// assert_eq!(
    ///     diagnostic.to_string(),
    ///     "Deco.cs:3:14: warning GDG0001: Add the interface declaration for the interface to be decorated."
    /// );
    /// ```
    #[must_use]
    pub fn new(descriptor: &DiagnosticDescriptor, location: Location, args: &[&str]) -> Self {
        Self {
            id: descriptor.id.to_string(),
            severity: descriptor.severity,
            title: descriptor.title.to_string(),
            category: descriptor.category.to_string(),
            message: descriptor.format_message(args),
            location,
        }
    }

    /// Returns `true` for error-severity diagnostics.
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} {}: {}",
            self.location, self.severity, self.id, self.message
        )
    }
}
