//! Strong domain types for decorator generation.
//!
//! Implements the newtype pattern for identifiers that would otherwise be
//! plain strings, so a hint name can never be confused with a type name or
//! a namespace.
//!
//! # Examples
//!
//! ```
//! use decorgen_core::HintName;
//!
//! let hint = HintName::for_type(Some("global::MyNamespace"), "FooDecorator", ".g.cs");
//! assert_eq!(hint.as_str(), "MyNamespace.FooDecorator.g.cs");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix the fully qualified display format puts in front of namespaces.
pub const GLOBAL_PREFIX: &str = "global::";

/// Removes a leading `global::` qualifier, if present.
///
/// # Examples
///
/// ```
/// use decorgen_core::strip_global_prefix;
///
/// assert_eq!(strip_global_prefix("global::A.B"), "A.B");
/// assert_eq!(strip_global_prefix("A.B"), "A.B");
/// ```
#[must_use]
pub fn strip_global_prefix(qualified: &str) -> &str {
    qualified.strip_prefix(GLOBAL_PREFIX).unwrap_or(qualified)
}

/// Stable identifier of one emitted source unit (newtype over String).
///
/// Per-type outputs are named `<namespace>.<TypeName><extension>`, with the
/// namespace segment omitted for types in the global namespace. The hint
/// name is what the incremental pipeline tracks across runs.
///
/// # Examples
///
/// ```
/// use decorgen_core::HintName;
///
/// let global = HintName::for_type(None, "Decorator", ".g.cs");
/// assert_eq!(global.as_str(), "Decorator.g.cs");
///
/// let marker = HintName::new("GenericDecoratorAttribute.g.cs");
/// assert_eq!(marker.to_string(), "GenericDecoratorAttribute.g.cs");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HintName(String);

impl HintName {
    /// Creates a hint name from an already formatted string.
    #[inline]
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Derives the hint name for a target type.
    ///
    /// Any `global::` qualifier on the namespace is stripped.
    #[must_use]
    pub fn for_type(namespace: Option<&str>, type_name: &str, extension: &str) -> Self {
        match namespace.map(strip_global_prefix) {
            Some(ns) if !ns.is_empty() => Self(format!("{ns}.{type_name}{extension}")),
            _ => Self(format!("{type_name}{extension}")),
        }
    }

    /// Returns the hint name as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `HintName` and returns the inner `String`.
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for HintName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for HintName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for HintName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint_for_namespaced_type() {
        let hint = HintName::for_type(Some("MyNamespace"), "GenericFooDecorator", ".g.cs");
        assert_eq!(hint.as_str(), "MyNamespace.GenericFooDecorator.g.cs");
    }

    #[test]
    fn test_hint_strips_global_prefix() {
        let hint = HintName::for_type(Some("global::Outer.Inner"), "Deco", ".g.cs");
        assert_eq!(hint.as_str(), "Outer.Inner.Deco.g.cs");
    }

    #[test]
    fn test_hint_for_global_namespace() {
        assert_eq!(HintName::for_type(None, "Deco", ".g.cs").as_str(), "Deco.g.cs");
        assert_eq!(
            HintName::for_type(Some("global::"), "Deco", ".g.cs").as_str(),
            "Deco.g.cs"
        );
    }

    #[test]
    fn test_hint_ordering_is_lexical() {
        let a = HintName::new("A.g.cs");
        let b = HintName::new("B.g.cs");
        assert!(a < b);
    }

    #[test]
    fn test_hint_serializes_transparently() {
        let hint = HintName::new("X.g.cs");
        assert_eq!(serde_json::to_string(&hint).unwrap(), "\"X.g.cs\"");
    }
}
