//! Rendering type references as source text.
//!
//! Three styles are supported:
//!
//! - [`DisplayStyle::FullyQualified`]: `global::System.Threading.Tasks.Task<string>`,
//!   used everywhere text is re-emitted into generated source.
//! - [`DisplayStyle::Minimal`]: `Task<string>`, containing types kept, used
//!   for accessor naming.
//! - [`DisplayStyle::Qualified`]: `System.Threading.Tasks.Task<string>`,
//!   used in diagnostic messages.
//!
//! Predefined types render as their keywords in every style.
//!
//! # Examples
//!
//! ```
//! use decorgen_introspector::{display_type, DisplayStyle, well_known};
//!
//! let ty = well_known::task_of(well_known::string());
//! assert_eq!(
//!     display_type(&ty, DisplayStyle::FullyQualified),
//!     "global::System.Threading.Tasks.Task<string>"
//! );
//! assert_eq!(display_type(&ty, DisplayStyle::Minimal), "Task<string>");
//! ```

use crate::symbols::{NamedType, TypeRef};
use decorgen_core::GLOBAL_PREFIX;

/// How much qualification to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayStyle {
    /// `global::`-prefixed namespace and containing types
    FullyQualified,
    /// Containing types only
    Minimal,
    /// Namespace and containing types, no `global::`
    Qualified,
}

/// Renders a type reference.
#[must_use]
pub fn display_type(ty: &TypeRef, style: DisplayStyle) -> String {
    let mut out = String::new();
    write_type(&mut out, ty, style);
    out
}

/// Renders a named type.
#[must_use]
pub fn display_named(named: &NamedType, style: DisplayStyle) -> String {
    let mut out = String::new();
    write_named(&mut out, named, style);
    out
}

fn write_type(out: &mut String, ty: &TypeRef, style: DisplayStyle) {
    match ty {
        TypeRef::Void => out.push_str("void"),
        TypeRef::Named(named) => write_named(out, named, style),
        TypeRef::TypeParameter { name } | TypeRef::Error { name } => out.push_str(name),
        TypeRef::Array { element, rank } => {
            write_type(out, element, style);
            out.push('[');
            for _ in 1..*rank {
                out.push(',');
            }
            out.push(']');
        }
        TypeRef::Pointer { pointee } => {
            write_type(out, pointee, style);
            out.push('*');
        }
        TypeRef::Nullable { underlying } => {
            write_type(out, underlying, style);
            out.push('?');
        }
    }
}

fn write_named(out: &mut String, named: &NamedType, style: DisplayStyle) {
    if let Some(keyword) = keyword_for(named) {
        out.push_str(keyword);
        return;
    }
    if let Some(inner) = nullable_value_type(named) {
        write_type(out, inner, style);
        out.push('?');
        return;
    }

    match (style, named.namespace.as_deref()) {
        (DisplayStyle::FullyQualified, Some(ns)) => {
            out.push_str(GLOBAL_PREFIX);
            out.push_str(ns);
            out.push('.');
        }
        (DisplayStyle::FullyQualified, None) => out.push_str(GLOBAL_PREFIX),
        (DisplayStyle::Qualified, Some(ns)) => {
            out.push_str(ns);
            out.push('.');
        }
        _ => {}
    }
    for containing in &named.containing_types {
        out.push_str(containing);
        out.push('.');
    }
    out.push_str(&named.name);

    if !named.type_arguments.is_empty() {
        out.push('<');
        for (index, argument) in named.type_arguments.iter().enumerate() {
            if index > 0 {
                out.push_str(", ");
            }
            write_type(out, argument, style);
        }
        out.push('>');
    }
}

fn keyword_for(named: &NamedType) -> Option<&'static str> {
    if named.namespace.as_deref() != Some("System")
        || !named.containing_types.is_empty()
        || !named.type_arguments.is_empty()
    {
        return None;
    }
    let keyword = match named.name.as_str() {
        "Boolean" => "bool",
        "Byte" => "byte",
        "SByte" => "sbyte",
        "Char" => "char",
        "Decimal" => "decimal",
        "Double" => "double",
        "Single" => "float",
        "Int16" => "short",
        "UInt16" => "ushort",
        "Int32" => "int",
        "UInt32" => "uint",
        "Int64" => "long",
        "UInt64" => "ulong",
        "Object" => "object",
        "String" => "string",
        _ => return None,
    };
    Some(keyword)
}

fn nullable_value_type(named: &NamedType) -> Option<&TypeRef> {
    if named.is_definition("System", "Nullable", 1) {
        named.type_arguments.first()
    } else {
        None
    }
}
