//! Symbol snapshot: the host compiler's resolved facts as plain data.
//!
//! A [`Compilation`] is one recomputation pass worth of facts: the named
//! types (with their attributes, declared interfaces and declared methods)
//! and the interface declarations those types refer to. Hosts build one per
//! pass, either programmatically or from JSON.
//!
//! # Examples
//!
//! ```
//! use decorgen_introspector::{Compilation, InterfaceSymbol, MethodSymbol, TypeRef, TypeSymbol};
//! use decorgen_introspector::well_known;
//!
//! let compilation = Compilation::new()
//!     .with_interface(
//!         InterfaceSymbol::new(Some("Shop"), "IStore")
//!             .method(MethodSymbol::new("Count", well_known::int())),
//!     )
//!     .with_type(
//!         TypeSymbol::class(Some("Shop"), "StoreDecorator")
//!             .attribute("Decorgen.GenericDecoratorAttribute")
//!             .implements(TypeRef::named(Some("Shop"), "IStore")),
//!     );
//!
//! assert_eq!(compilation.marked_types("Decorgen.GenericDecoratorAttribute").count(), 1);
//! ```

use decorgen_core::{Error, Result, strip_global_prefix};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Namespace in dotted form: without the `global::` alias, `None` when global.
fn normalize_namespace(namespace: Option<&str>) -> Option<String> {
    namespace
        .map(strip_global_prefix)
        .filter(|ns| !ns.is_empty())
        .map(str::to_string)
}

fn deserialize_namespace<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let namespace = Option::<String>::deserialize(deserializer)?;
    Ok(normalize_namespace(namespace.as_deref()))
}

/// A reference to a type, fully resolved by the host.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    /// No result
    Void,
    /// A named (possibly constructed generic) type
    Named(NamedType),
    /// A type parameter of the enclosing interface or method
    TypeParameter {
        /// Type parameter name
        name: String,
    },
    /// An array
    Array {
        /// Element type
        element: Box<TypeRef>,
        /// Number of dimensions
        #[serde(default = "default_rank")]
        rank: usize,
    },
    /// An unmanaged pointer
    Pointer {
        /// Pointed-at type
        pointee: Box<TypeRef>,
    },
    /// A nullable-annotated reference type (`T?`)
    Nullable {
        /// Annotated type
        underlying: Box<TypeRef>,
    },
    /// A type the host could not resolve
    Error {
        /// Name as written
        name: String,
    },
}

const fn default_rank() -> usize {
    1
}

/// A named type with its namespace, containing types and type arguments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedType {
    /// Dotted namespace (`System.Threading.Tasks`), `None` for the global namespace
    #[serde(default, deserialize_with = "deserialize_namespace")]
    pub namespace: Option<String>,
    /// Enclosing types for nested types, outermost first
    #[serde(default)]
    pub containing_types: Vec<String>,
    /// Simple name without arity
    pub name: String,
    /// Type arguments; empty for non-generic types
    #[serde(default)]
    pub type_arguments: Vec<TypeRef>,
}

/// Original (unconstructed) definition of a named type.
///
/// Two references share a definition when they differ only in type
/// arguments, e.g. `Task<int>` and `Task<string>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeDefinition<'a> {
    /// Dotted namespace
    pub namespace: Option<&'a str>,
    /// Enclosing type names
    pub containing_types: &'a [String],
    /// Simple name
    pub name: &'a str,
    /// Number of type parameters
    pub arity: usize,
}

impl NamedType {
    /// Creates a non-generic named type.
    #[must_use]
    pub fn new(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            namespace: normalize_namespace(namespace),
            containing_types: Vec::new(),
            name: name.into(),
            type_arguments: Vec::new(),
        }
    }

    /// Returns the original definition of this type.
    #[must_use]
    pub fn definition(&self) -> TypeDefinition<'_> {
        TypeDefinition {
            namespace: self.namespace.as_deref(),
            containing_types: &self.containing_types,
            name: &self.name,
            arity: self.type_arguments.len(),
        }
    }

    /// Returns `true` if `self` is a construction of the given definition.
    #[must_use]
    pub fn is_definition(&self, namespace: &str, name: &str, arity: usize) -> bool {
        self.namespace.as_deref() == Some(namespace)
            && self.containing_types.is_empty()
            && self.name == name
            && self.type_arguments.len() == arity
    }
}

impl TypeRef {
    /// Creates a non-generic named type reference.
    #[must_use]
    pub fn named(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self::Named(NamedType::new(namespace, name))
    }

    /// Creates a constructed generic type reference.
    #[must_use]
    pub fn generic(namespace: Option<&str>, name: impl Into<String>, type_arguments: Vec<Self>) -> Self {
        let mut named = NamedType::new(namespace, name);
        named.type_arguments = type_arguments;
        Self::Named(named)
    }

    /// Creates a type parameter reference.
    #[must_use]
    pub fn type_parameter(name: impl Into<String>) -> Self {
        Self::TypeParameter { name: name.into() }
    }

    /// Creates a single-dimensional array of `element`.
    #[must_use]
    pub fn array(element: Self) -> Self {
        Self::Array {
            element: Box::new(element),
            rank: 1,
        }
    }

    /// Creates a nullable-annotated reference to `underlying`.
    #[must_use]
    pub fn nullable(underlying: Self) -> Self {
        Self::Nullable {
            underlying: Box::new(underlying),
        }
    }

    /// Returns the named type, if this is one.
    #[must_use]
    pub const fn as_named(&self) -> Option<&NamedType> {
        match self {
            Self::Named(named) => Some(named),
            _ => None,
        }
    }

    /// Returns `true` if this is `void`.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        matches!(self, Self::Void)
    }

    /// Returns `true` if the host failed to resolve this type or any part of it.
    #[must_use]
    pub fn contains_error(&self) -> bool {
        match self {
            Self::Error { .. } => true,
            Self::Void | Self::TypeParameter { .. } => false,
            Self::Named(named) => named.type_arguments.iter().any(Self::contains_error),
            Self::Array { element, .. } => element.contains_error(),
            Self::Pointer { pointee } => pointee.contains_error(),
            Self::Nullable { underlying } => underlying.contains_error(),
        }
    }

    /// Replaces type parameters according to `map`.
    #[must_use]
    pub fn substitute(&self, map: &HashMap<&str, &Self>) -> Self {
        match self {
            Self::TypeParameter { name } => map
                .get(name.as_str())
                .map_or_else(|| self.clone(), |replacement| (*replacement).clone()),
            Self::Named(named) => Self::Named(NamedType {
                type_arguments: named.type_arguments.iter().map(|a| a.substitute(map)).collect(),
                ..named.clone()
            }),
            Self::Array { element, rank } => Self::Array {
                element: Box::new(element.substitute(map)),
                rank: *rank,
            },
            Self::Pointer { pointee } => Self::Pointer {
                pointee: Box::new(pointee.substitute(map)),
            },
            Self::Nullable { underlying } => Self::Nullable {
                underlying: Box::new(underlying.substitute(map)),
            },
            Self::Void | Self::Error { .. } => self.clone(),
        }
    }
}

/// Kind of a candidate type declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// A class
    #[default]
    Class,
    /// A struct
    Struct,
    /// The host could not resolve the declaration to a named type
    Error,
}

/// Source position of a declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct Location {
    /// Source file path as reported by the host
    pub file: String,
    /// 1-based line
    pub line: u32,
    /// 1-based column
    pub column: u32,
}

impl Location {
    /// Creates a location.
    #[must_use]
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// How a parameter is passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefKind {
    /// By value
    #[default]
    None,
    /// `ref`
    Ref,
    /// `out`
    Out,
    /// `in`
    In,
}

/// A method parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParameterSymbol {
    /// Parameter name
    pub name: String,
    /// Parameter type
    #[serde(rename = "type")]
    pub ty: TypeRef,
    /// Passing mode
    #[serde(default)]
    pub ref_kind: RefKind,
    /// Whether this is a `params` parameter
    #[serde(default)]
    pub is_params: bool,
}

impl ParameterSymbol {
    /// Creates a by-value parameter.
    #[must_use]
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            ref_kind: RefKind::None,
            is_params: false,
        }
    }

    /// Sets the passing mode.
    #[must_use]
    pub const fn with_ref_kind(mut self, ref_kind: RefKind) -> Self {
        self.ref_kind = ref_kind;
        self
    }

    /// Marks the parameter as `params`.
    #[must_use]
    pub const fn params(mut self) -> Self {
        self.is_params = true;
        self
    }
}

/// A method declared on an interface or on a candidate type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MethodSymbol {
    /// Method name
    pub name: String,
    /// Method type parameters
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// Parameters in declaration order
    #[serde(default)]
    pub parameters: Vec<ParameterSymbol>,
    /// Return type
    #[serde(default = "void")]
    pub return_type: TypeRef,
    /// For partial methods on a candidate type: whether an implementation part exists
    #[serde(default)]
    pub has_implementation_part: bool,
}

const fn void() -> TypeRef {
    TypeRef::Void
}

impl MethodSymbol {
    /// Creates a parameterless, non-generic method.
    #[must_use]
    pub fn new(name: impl Into<String>, return_type: TypeRef) -> Self {
        Self {
            name: name.into(),
            type_parameters: Vec::new(),
            parameters: Vec::new(),
            return_type,
            has_implementation_part: false,
        }
    }

    /// Appends a by-value parameter.
    #[must_use]
    pub fn param(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.parameters.push(ParameterSymbol::new(name, ty));
        self
    }

    /// Appends a fully specified parameter.
    #[must_use]
    pub fn param_symbol(mut self, parameter: ParameterSymbol) -> Self {
        self.parameters.push(parameter);
        self
    }

    /// Appends a method type parameter.
    #[must_use]
    pub fn type_parameter(mut self, name: impl Into<String>) -> Self {
        self.type_parameters.push(name.into());
        self
    }

    /// Marks a partial method as having an implementation part.
    #[must_use]
    pub const fn implemented(mut self) -> Self {
        self.has_implementation_part = true;
        self
    }

    fn substitute(&self, map: &HashMap<&str, &TypeRef>) -> Self {
        // Method type parameters shadow the interface's.
        let mut scoped = map.clone();
        for name in &self.type_parameters {
            scoped.remove(name.as_str());
        }
        Self {
            parameters: self
                .parameters
                .iter()
                .map(|p| ParameterSymbol {
                    ty: p.ty.substitute(&scoped),
                    ..p.clone()
                })
                .collect(),
            return_type: self.return_type.substitute(&scoped),
            ..self.clone()
        }
    }
}

/// A property declared on an interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertySymbol {
    /// Property name
    pub name: String,
    /// Property type
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// An event declared on an interface.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EventSymbol {
    /// Event name
    pub name: String,
    /// Delegate type
    #[serde(rename = "type")]
    pub ty: TypeRef,
}

/// A member of an interface declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "member", rename_all = "snake_case")]
pub enum InterfaceMember {
    /// A method; the only member kind that is forwarded
    Method(MethodSymbol),
    /// A property
    Property(PropertySymbol),
    /// An event
    Event(EventSymbol),
}

impl InterfaceMember {
    /// Member name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Method(m) => &m.name,
            Self::Property(p) => &p.name,
            Self::Event(e) => &e.name,
        }
    }

    /// Human-readable member kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Method(_) => "method",
            Self::Property(_) => "property",
            Self::Event(_) => "event",
        }
    }

    fn substitute(&self, map: &HashMap<&str, &TypeRef>) -> Self {
        match self {
            Self::Method(m) => Self::Method(m.substitute(map)),
            Self::Property(p) => Self::Property(PropertySymbol {
                ty: p.ty.substitute(map),
                ..p.clone()
            }),
            Self::Event(e) => Self::Event(EventSymbol {
                ty: e.ty.substitute(map),
                ..e.clone()
            }),
        }
    }
}

/// An interface declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterfaceSymbol {
    /// Dotted namespace
    #[serde(default, deserialize_with = "deserialize_namespace")]
    pub namespace: Option<String>,
    /// Enclosing types for nested interfaces
    #[serde(default)]
    pub containing_types: Vec<String>,
    /// Simple name
    pub name: String,
    /// Declared type parameters
    #[serde(default)]
    pub type_parameters: Vec<String>,
    /// Members in enumeration order
    #[serde(default)]
    pub members: Vec<InterfaceMember>,
}

impl InterfaceSymbol {
    /// Creates an empty, non-generic interface.
    #[must_use]
    pub fn new(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            namespace: normalize_namespace(namespace),
            containing_types: Vec::new(),
            name: name.into(),
            type_parameters: Vec::new(),
            members: Vec::new(),
        }
    }

    /// Appends a type parameter.
    #[must_use]
    pub fn type_parameter(mut self, name: impl Into<String>) -> Self {
        self.type_parameters.push(name.into());
        self
    }

    /// Appends a method.
    #[must_use]
    pub fn method(mut self, method: MethodSymbol) -> Self {
        self.members.push(InterfaceMember::Method(method));
        self
    }

    /// Appends a property.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.members.push(InterfaceMember::Property(PropertySymbol {
            name: name.into(),
            ty,
        }));
        self
    }

    /// Appends an event.
    #[must_use]
    pub fn event(mut self, name: impl Into<String>, ty: TypeRef) -> Self {
        self.members.push(InterfaceMember::Event(EventSymbol {
            name: name.into(),
            ty,
        }));
        self
    }

    fn declares(&self, reference: &NamedType) -> bool {
        self.namespace == reference.namespace
            && self.containing_types == reference.containing_types
            && self.name == reference.name
            && self.type_parameters.len() == reference.type_arguments.len()
    }
}

/// An interface reference resolved against its declaration, with type
/// arguments substituted into every member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInterface {
    /// The (possibly constructed) interface type
    pub reference: NamedType,
    /// Members with type parameters replaced by the reference's arguments
    pub members: Vec<InterfaceMember>,
}

/// A candidate type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TypeSymbol {
    /// Dotted namespace
    #[serde(default, deserialize_with = "deserialize_namespace")]
    pub namespace: Option<String>,
    /// Simple name
    pub name: String,
    /// Declaration kind
    #[serde(default)]
    pub kind: TypeKind,
    /// Fully qualified attribute class names
    #[serde(default)]
    pub attributes: Vec<String>,
    /// Directly declared interfaces, in declaration order
    #[serde(default)]
    pub interfaces: Vec<TypeRef>,
    /// Methods declared on the type itself (not generated ones)
    #[serde(default)]
    pub methods: Vec<MethodSymbol>,
    /// Declaration site
    #[serde(default)]
    pub location: Location,
}

impl TypeSymbol {
    /// Creates a class declaration with no attributes, interfaces or methods.
    #[must_use]
    pub fn class(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            namespace: normalize_namespace(namespace),
            name: name.into(),
            kind: TypeKind::Class,
            attributes: Vec::new(),
            interfaces: Vec::new(),
            methods: Vec::new(),
            location: Location::default(),
        }
    }

    /// Adds an attribute by fully qualified class name.
    #[must_use]
    pub fn attribute(mut self, full_name: impl Into<String>) -> Self {
        self.attributes.push(full_name.into());
        self
    }

    /// Adds a declared interface.
    #[must_use]
    pub fn implements(mut self, interface: TypeRef) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Adds a declared method.
    #[must_use]
    pub fn method(mut self, method: MethodSymbol) -> Self {
        self.methods.push(method);
        self
    }

    /// Sets the declaration site.
    #[must_use]
    pub fn at(mut self, location: Location) -> Self {
        self.location = location;
        self
    }

    /// Returns `true` if the type carries the attribute `full_name`
    /// (compared without any `global::` prefix).
    #[must_use]
    pub fn has_attribute(&self, full_name: &str) -> bool {
        let wanted = strip_global_prefix(full_name);
        self.attributes
            .iter()
            .any(|a| strip_global_prefix(a) == wanted)
    }

    /// Dotted display name, e.g. `Shop.StoreDecorator`.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.namespace {
            Some(ns) => format!("{ns}.{}", self.name),
            None => self.name.clone(),
        }
    }
}

/// One pass worth of host facts.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Compilation {
    /// Candidate type declarations
    #[serde(default)]
    pub types: Vec<TypeSymbol>,
    /// Interface declarations
    #[serde(default)]
    pub interfaces: Vec<InterfaceSymbol>,
}

impl Compilation {
    /// Creates an empty compilation.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a compilation from JSON.
    ///
    /// # Errors
    ///
    /// Returns a serialization error if the JSON does not describe a compilation.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Adds a type declaration.
    #[must_use]
    pub fn with_type(mut self, ty: TypeSymbol) -> Self {
        self.types.push(ty);
        self
    }

    /// Adds an interface declaration.
    #[must_use]
    pub fn with_interface(mut self, interface: InterfaceSymbol) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Types carrying the marker attribute, in declaration order.
    pub fn marked_types<'a>(&'a self, marker_full_name: &str) -> impl Iterator<Item = &'a TypeSymbol> {
        self.types
            .iter()
            .filter(move |t| t.has_attribute(marker_full_name))
    }

    /// Finds the declaration of a named interface reference.
    #[must_use]
    pub fn find_interface(&self, reference: &NamedType) -> Option<&InterfaceSymbol> {
        self.interfaces.iter().find(|i| i.declares(reference))
    }

    /// Resolves an interface reference and substitutes its type arguments.
    ///
    /// Returns `None` if the reference is not a named type, contains
    /// unresolved parts, or has no matching declaration.
    #[must_use]
    pub fn resolve_interface(&self, reference: &TypeRef) -> Option<ResolvedInterface> {
        if reference.contains_error() {
            return None;
        }
        let named = reference.as_named()?;
        let declaration = self.find_interface(named)?;
        let map: HashMap<&str, &TypeRef> = declaration
            .type_parameters
            .iter()
            .map(String::as_str)
            .zip(named.type_arguments.iter())
            .collect();
        Some(ResolvedInterface {
            reference: named.clone(),
            members: declaration.members.iter().map(|m| m.substitute(&map)).collect(),
        })
    }

    /// Validates structural consistency of the snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSymbol`] for a type or interface with an empty
    /// name, or an interface declared twice.
    pub fn validate(&self) -> Result<()> {
        for ty in &self.types {
            if ty.name.is_empty() {
                return Err(Error::InvalidSymbol {
                    symbol: ty.display_name(),
                    reason: "type name is empty".to_string(),
                });
            }
        }
        for (index, interface) in self.interfaces.iter().enumerate() {
            if interface.name.is_empty() {
                return Err(Error::InvalidSymbol {
                    symbol: format!("interface #{index}"),
                    reason: "interface name is empty".to_string(),
                });
            }
            let duplicate = self.interfaces[..index].iter().any(|earlier| {
                earlier.namespace == interface.namespace
                    && earlier.containing_types == interface.containing_types
                    && earlier.name == interface.name
                    && earlier.type_parameters.len() == interface.type_parameters.len()
            });
            if duplicate {
                return Err(Error::InvalidSymbol {
                    symbol: interface.name.clone(),
                    reason: "interface is declared more than once".to_string(),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::well_known;

    #[test]
    fn test_has_attribute_ignores_global_prefix() {
        let ty = TypeSymbol::class(None, "Deco").attribute("global::Decorgen.GenericDecoratorAttribute");
        assert!(ty.has_attribute("Decorgen.GenericDecoratorAttribute"));
        assert!(!ty.has_attribute("Other.Attribute"));
    }

    #[test]
    fn test_resolve_generic_interface_substitutes_arguments() {
        let compilation = Compilation::new().with_interface(
            InterfaceSymbol::new(Some("Data"), "IRepo")
                .type_parameter("TItem")
                .method(
                    MethodSymbol::new("Get", TypeRef::type_parameter("TItem"))
                        .param("id", well_known::int()),
                ),
        );
        let reference = TypeRef::generic(Some("Data"), "IRepo", vec![well_known::string()]);
        let resolved = compilation.resolve_interface(&reference).unwrap();

        let InterfaceMember::Method(get) = &resolved.members[0] else {
            panic!("expected method");
        };
        assert_eq!(get.return_type, well_known::string());
    }

    #[test]
    fn test_method_type_parameter_shadows_interface_parameter() {
        let compilation = Compilation::new().with_interface(
            InterfaceSymbol::new(None, "IBox")
                .type_parameter("T")
                .method(MethodSymbol::new("Map", TypeRef::type_parameter("T")).type_parameter("T")),
        );
        let resolved = compilation
            .resolve_interface(&TypeRef::generic(None, "IBox", vec![well_known::int()]))
            .unwrap();
        let InterfaceMember::Method(map) = &resolved.members[0] else {
            panic!("expected method");
        };
        assert_eq!(map.return_type, TypeRef::type_parameter("T"));
    }

    #[test]
    fn test_resolve_rejects_arity_mismatch_and_errors() {
        let compilation =
            Compilation::new().with_interface(InterfaceSymbol::new(None, "IRepo").type_parameter("T"));
        assert!(compilation.resolve_interface(&TypeRef::named(None, "IRepo")).is_none());
        assert!(
            compilation
                .resolve_interface(&TypeRef::Error {
                    name: "IRepo".to_string()
                })
                .is_none()
        );
    }

    #[test]
    fn test_validate_rejects_duplicate_interfaces() {
        let compilation = Compilation::new()
            .with_interface(InterfaceSymbol::new(Some("A"), "IFoo"))
            .with_interface(InterfaceSymbol::new(Some("A"), "IFoo"));
        assert!(compilation.validate().unwrap_err().is_invalid_symbol());
    }

    #[test]
    fn test_compilation_json_roundtrip_shape() {
        let json = r#"{
            "types": [{
                "namespace": "MyNamespace",
                "name": "GenericFooDecorator",
                "attributes": ["Decorgen.GenericDecoratorAttribute"],
                "interfaces": [{"kind": "named", "namespace": "MyNamespace", "name": "IMyInterface"}],
                "location": {"file": "GenericFooDecorator.cs", "line": 8, "column": 7}
            }],
            "interfaces": [{
                "namespace": "MyNamespace",
                "name": "IMyInterface",
                "members": [{
                    "member": "method",
                    "name": "GetStuffAsync",
                    "return_type": {"kind": "named", "namespace": "System.Threading.Tasks", "name": "Task",
                                    "type_arguments": [{"kind": "named", "namespace": "System", "name": "String"}]},
                    "parameters": [
                        {"name": "arg1", "type": {"kind": "named", "namespace": "System", "name": "Int32"}},
                        {"name": "arg2", "type": {"kind": "named", "namespace": "System", "name": "String"}}
                    ]
                }]
            }]
        }"#;
        let compilation = Compilation::from_json(json).unwrap();
        assert_eq!(compilation.types[0].location.line, 8);
        assert_eq!(compilation.types[0].kind, TypeKind::Class);
        let resolved = compilation
            .resolve_interface(&compilation.types[0].interfaces[0])
            .unwrap();
        assert_eq!(resolved.members.len(), 1);
        assert_eq!(resolved.members[0].name(), "GetStuffAsync");
    }
}
