//! Types for decorator source synthesis.
//!
//! The `*Context` structs are the flattened, template-ready view of a
//! [`DecoratorDescriptor`]: every joined list and every per-member lookup is
//! precomputed here so the templates stay free of logic.

use decorgen_core::hooks::hook_for;
use decorgen_core::{DecoratorDescriptor, HintName, Hook, InterfaceDescriptor, MemberDescriptor};
use serde::{Deserialize, Serialize};

/// One emitted source unit.
///
/// # Examples
///
/// ```
/// use decorgen_codegen::GeneratedSource;
/// use decorgen_core::HintName;
///
/// let source = GeneratedSource::new(HintName::new("A.Deco.g.cs"), "// <auto-generated/>\n");
/// assert_eq!(source.hint_name.as_str(), "A.Deco.g.cs");
/// assert_eq!(source.line_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSource {
    /// Stable name of the unit, e.g. `MyNamespace.GenericFooDecorator.g.cs`
    pub hint_name: HintName,
    /// Source text
    pub content: String,
}

impl GeneratedSource {
    /// Creates a source unit.
    #[must_use]
    pub fn new(hint_name: HintName, content: impl Into<String>) -> Self {
        Self {
            hint_name,
            content: content.into(),
        }
    }

    /// Number of lines in the content.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.content.lines().count()
    }
}

/// Template context for one decorator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecoratorContext {
    /// File-scoped namespace without `global::`, if any
    pub namespace: Option<String>,
    /// Partial class name
    pub class_name: String,
    /// Hook declarations, in emission order
    pub hooks: Vec<String>,
    /// Interfaces, in declaration order
    pub interfaces: Vec<InterfaceContext>,
}

/// Template context for one decorated interface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InterfaceContext {
    /// Fully qualified interface type
    pub fully_qualified_name: String,
    /// Accessor method name
    pub accessor_name: String,
    /// Forwarded members
    pub members: Vec<MemberContext>,
}

/// Template context for one forwarded member.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberContext {
    /// Method name, with type parameters for generic methods
    pub name: String,
    /// Fully qualified return type
    pub return_type: String,
    /// Interface the member is explicitly implemented for
    pub interface_name: String,
    /// Accessor of the owning interface
    pub accessor_name: String,
    /// Hook method the call routes through
    pub hook: String,
    /// Parameter declarations
    pub parameter_list: String,
    /// Forwarded arguments
    pub argument_list: String,
}

/// Template context for the marker attribute.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerContext {
    /// Namespace the attribute is declared in
    pub namespace: String,
    /// Attribute class name
    pub name: String,
}

impl From<&DecoratorDescriptor> for DecoratorContext {
    fn from(descriptor: &DecoratorDescriptor) -> Self {
        Self {
            namespace: descriptor.target.declared_namespace().map(str::to_string),
            class_name: descriptor.target.name.clone(),
            hooks: Hook::ALL.iter().map(|h| h.declaration().to_string()).collect(),
            interfaces: descriptor.interfaces.iter().map(InterfaceContext::from).collect(),
        }
    }
}

impl From<&InterfaceDescriptor> for InterfaceContext {
    fn from(interface: &InterfaceDescriptor) -> Self {
        Self {
            fully_qualified_name: interface.fully_qualified_name.clone(),
            accessor_name: interface.accessor_name.clone(),
            members: interface
                .members
                .iter()
                .map(|member| MemberContext::new(interface, member))
                .collect(),
        }
    }
}

impl MemberContext {
    fn new(interface: &InterfaceDescriptor, member: &MemberDescriptor) -> Self {
        Self {
            name: member.name.clone(),
            return_type: member.return_type.clone(),
            interface_name: interface.fully_qualified_name.clone(),
            accessor_name: interface.accessor_name.clone(),
            hook: hook_for(member.is_awaitable).to_string(),
            parameter_list: member.parameter_list(),
            argument_list: member.argument_list(),
        }
    }
}
