//! Descriptor model: value snapshots of everything generation depends on.
//!
//! Descriptors are plain data copied out of the host's symbol graph at
//! extraction time. They hold no references back into it, so two
//! descriptors that compare equal mean "nothing relevant changed" and the
//! incremental pipeline can serve the previous output from cache.
//!
//! # Examples
//!
//! ```
//! use decorgen_core::{
//!     DecoratorDescriptor, InterfaceDescriptor, MemberDescriptor, ParameterDescriptor,
//!     TypeDescriptor,
//! };
//!
//! let member = MemberDescriptor {
//!     name: "GetStuff".to_string(),
//!     return_type: "string".to_string(),
//!     is_awaitable: false,
//!     parameters: vec![ParameterDescriptor::by_value("int", "arg1")],
//! };
//! let iface = InterfaceDescriptor {
//!     namespace: Some("global::Shop".to_string()),
//!     fully_qualified_name: "global::Shop.IStore".to_string(),
//!     minimally_qualified_name: "IStore".to_string(),
//!     accessor_name: "GetInnerIStore".to_string(),
//!     members: vec![member],
//! };
//! let a = DecoratorDescriptor::new(TypeDescriptor::new(Some("global::Shop"), "StoreDecorator"), vec![iface]);
//! let b = a.clone();
//! assert_eq!(a, b);
//! ```

use crate::types::{HintName, strip_global_prefix};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a generation target.
///
/// The namespace is stored in fully qualified form (`global::A.B`), or
/// `None` for the global namespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Containing namespace, fully qualified
    pub namespace: Option<String>,
    /// Simple type name
    pub name: String,
}

impl TypeDescriptor {
    /// Creates a type descriptor.
    #[must_use]
    pub fn new(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            name: name.into(),
        }
    }

    /// Namespace without the `global::` qualifier, as written in a
    /// file-scoped namespace declaration.
    ///
    /// # Examples
    ///
    /// ```
    /// use decorgen_core::TypeDescriptor;
    ///
    /// let ty = TypeDescriptor::new(Some("global::A.B"), "C");
    /// assert_eq!(ty.declared_namespace(), Some("A.B"));
    /// ```
    #[must_use]
    pub fn declared_namespace(&self) -> Option<&str> {
        self.namespace.as_deref().map(strip_global_prefix)
    }

    /// Hint name of this type's generated source unit.
    #[must_use]
    pub fn hint_name(&self, extension: &str) -> HintName {
        HintName::for_type(self.namespace.as_deref(), &self.name, extension)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.declared_namespace() {
            Some(ns) => write!(f, "{ns}.{}", self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// One interface declared by a target type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceDescriptor {
    /// Containing namespace of the interface, fully qualified
    pub namespace: Option<String>,
    /// Fully qualified display, e.g. `global::Shop.IStore<int>`
    pub fully_qualified_name: String,
    /// Minimally qualified display, e.g. `IStore<int>`
    pub minimally_qualified_name: String,
    /// Name of the generated "get inner instance" accessor, collisions resolved
    pub accessor_name: String,
    /// Methods to forward, in symbol enumeration order
    pub members: Vec<MemberDescriptor>,
}

/// One interface method to forward.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MemberDescriptor {
    /// Method name, including a type-parameter list for generic methods
    pub name: String,
    /// Fully qualified return type expression (`void` for no result)
    pub return_type: String,
    /// Whether the return type is one of the awaitable shapes
    pub is_awaitable: bool,
    /// Parameters in declaration order
    pub parameters: Vec<ParameterDescriptor>,
}

impl MemberDescriptor {
    /// Parameter declarations joined for re-emission, e.g. `ref int a, string b`.
    ///
    /// # Examples
    ///
    /// ```
    /// use decorgen_core::{MemberDescriptor, ParameterDescriptor, Passing};
    ///
    /// let member = MemberDescriptor {
    ///     name: "Swap".to_string(),
    ///     return_type: "void".to_string(),
    ///     is_awaitable: false,
    ///     parameters: vec![
    ///         ParameterDescriptor::new("ref int", "left", Passing::Ref),
    ///         ParameterDescriptor::by_value("string", "label"),
    ///     ],
    /// };
    /// assert_eq!(member.parameter_list(), "ref int left, string label");
    /// assert_eq!(member.argument_list(), "ref left, label");
    /// ```
    #[must_use]
    pub fn parameter_list(&self) -> String {
        self.parameters
            .iter()
            .map(ParameterDescriptor::declaration)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Arguments forwarded to the inner instance, by name and in order.
    #[must_use]
    pub fn argument_list(&self) -> String {
        self.parameters
            .iter()
            .map(ParameterDescriptor::argument)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// How an argument is passed at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Passing {
    /// Plain by-value argument (including `params` arrays)
    #[default]
    Value,
    /// `ref` argument
    Ref,
    /// `out` argument
    Out,
    /// `in` argument
    In,
}

impl Passing {
    /// Call-site keyword, if any.
    #[must_use]
    pub const fn keyword(self) -> Option<&'static str> {
        match self {
            Self::Value => None,
            Self::Ref => Some("ref"),
            Self::Out => Some("out"),
            Self::In => Some("in"),
        }
    }
}

/// One parameter of a forwarded method.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterDescriptor {
    /// Modifiers plus fully qualified type, e.g. `params int[]`
    pub expression: String,
    /// Parameter name
    pub name: String,
    /// Call-site passing mode
    #[serde(default)]
    pub passing: Passing,
}

impl ParameterDescriptor {
    /// Creates a parameter descriptor.
    #[must_use]
    pub fn new(expression: impl Into<String>, name: impl Into<String>, passing: Passing) -> Self {
        Self {
            expression: expression.into(),
            name: name.into(),
            passing,
        }
    }

    /// Creates a by-value parameter descriptor.
    #[must_use]
    pub fn by_value(expression: impl Into<String>, name: impl Into<String>) -> Self {
        Self::new(expression, name, Passing::Value)
    }

    /// Declaration as re-emitted in the forwarding signature.
    #[must_use]
    pub fn declaration(&self) -> String {
        if self.expression.is_empty() {
            self.name.clone()
        } else {
            format!("{} {}", self.expression, self.name)
        }
    }

    /// Argument as passed to the inner instance.
    #[must_use]
    pub fn argument(&self) -> String {
        match self.passing.keyword() {
            Some(keyword) => format!("{keyword} {}", self.name),
            None => self.name.clone(),
        }
    }
}

/// Root snapshot for one decorator: the unit of cache comparison.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DecoratorDescriptor {
    /// The annotated target type
    pub target: TypeDescriptor,
    /// Declared interfaces, in declaration order
    pub interfaces: Vec<InterfaceDescriptor>,
}

impl DecoratorDescriptor {
    /// Creates a decorator descriptor.
    #[must_use]
    pub const fn new(target: TypeDescriptor, interfaces: Vec<InterfaceDescriptor>) -> Self {
        Self { target, interfaces }
    }

    /// Total number of forwarded members across all interfaces.
    #[must_use]
    pub fn member_count(&self) -> usize {
        self.interfaces.iter().map(|i| i.members.len()).sum()
    }
}
