//! Fact extraction: symbol snapshot to descriptor.
//!
//! Extraction copies everything synthesis needs out of a [`Compilation`]
//! into a [`DecoratorDescriptor`]. It is pure and per-candidate, so the
//! pipeline can run it for independent types in parallel.
//!
//! A candidate yields no descriptor (not an error) when its declaration
//! did not resolve, when it declares no interfaces, or when one of its
//! interfaces has no declaration in the snapshot.

use crate::display::{DisplayStyle, display_type};
use crate::symbols::{Compilation, InterfaceMember, MethodSymbol, ParameterSymbol, RefKind, TypeKind, TypeSymbol};
use crate::well_known::is_awaitable;
use decorgen_core::naming::{AccessorNames, InterfaceNames, resolve_accessor_names};
use decorgen_core::{
    CancellationToken, DecoratorDescriptor, GLOBAL_PREFIX, GeneratorConfig, InterfaceDescriptor,
    MemberDescriptor, ParameterDescriptor, Passing, Result, TypeDescriptor,
};
use tracing::{debug, trace};

/// Extracts the descriptor for one marked type.
///
/// Returns `Ok(None)` when the preconditions for generation are not met.
///
/// # Errors
///
/// Returns [`decorgen_core::Error::Cancelled`] if `cancel` fires; no partial
/// descriptor is produced.
///
/// # Examples
///
/// ```
/// use decorgen_core::{CancellationToken, GeneratorConfig};
/// use decorgen_introspector::{extract_decorator, well_known};
/// use decorgen_introspector::{Compilation, InterfaceSymbol, MethodSymbol, TypeRef, TypeSymbol};
///
/// let decorator = TypeSymbol::class(Some("Shop"), "StoreDecorator")
///     .attribute("Decorgen.GenericDecoratorAttribute")
///     .implements(TypeRef::named(Some("Shop"), "IStore"));
/// let compilation = Compilation::new()
///     .with_interface(
///         InterfaceSymbol::new(Some("Shop"), "IStore")
///             .method(MethodSymbol::new("LoadAsync", well_known::task())),
///     )
///     .with_type(decorator.clone());
///
/// let descriptor = extract_decorator(
///     &compilation,
///     &decorator,
///     &GeneratorConfig::default(),
///     &CancellationToken::new(),
/// )
/// .unwrap()
/// .unwrap();
///
/// let iface = &descriptor.interfaces[0];
/// assert_eq!(iface.fully_qualified_name, "global::Shop.IStore");
/// assert_eq!(iface.accessor_name, "GetInnerIStore");
/// assert!(iface.members[0].is_awaitable);
/// ```
pub fn extract_decorator(
    compilation: &Compilation,
    ty: &TypeSymbol,
    config: &GeneratorConfig,
    cancel: &CancellationToken,
) -> Result<Option<DecoratorDescriptor>> {
    if ty.kind == TypeKind::Error {
        debug!(target_type = %ty.display_name(), "declaration did not resolve, skipping");
        return Ok(None);
    }
    if ty.interfaces.is_empty() {
        debug!(target_type = %ty.display_name(), "no interfaces declared, skipping");
        return Ok(None);
    }

    let accessors = resolve_accessors(ty, config);
    let mut interfaces = Vec::with_capacity(ty.interfaces.len());

    for (reference, accessor_name) in ty.interfaces.iter().zip(accessors.names) {
        cancel.check("extract interface")?;

        let Some(resolved) = compilation.resolve_interface(reference) else {
            debug!(
                target_type = %ty.display_name(),
                interface = %display_type(reference, DisplayStyle::Qualified),
                "interface did not resolve, skipping"
            );
            return Ok(None);
        };

        let mut members = Vec::with_capacity(resolved.members.len());
        for member in &resolved.members {
            cancel.check("extract member")?;
            if let InterfaceMember::Method(method) = member {
                members.push(describe_method(method));
            } else {
                trace!(
                    target_type = %ty.display_name(),
                    member = member.name(),
                    kind = member.kind_name(),
                    "member not forwarded"
                );
            }
        }

        interfaces.push(InterfaceDescriptor {
            namespace: qualified_namespace(resolved.reference.namespace.as_deref()),
            fully_qualified_name: display_type(reference, DisplayStyle::FullyQualified),
            minimally_qualified_name: display_type(reference, DisplayStyle::Minimal),
            accessor_name,
            members,
        });
    }

    let target = target_descriptor(ty);
    debug!(target_type = %target, interfaces = interfaces.len(), "extracted decorator");
    Ok(Some(DecoratorDescriptor::new(target, interfaces)))
}

/// Resolves accessor names for a type's declared interfaces, applying the
/// collision policy.
///
/// Only the interface references are needed, so the analyzer can call this
/// for types whose interfaces do not resolve.
#[must_use]
pub fn resolve_accessors(ty: &TypeSymbol, config: &GeneratorConfig) -> AccessorNames {
    let displays: Vec<(String, String)> = ty
        .interfaces
        .iter()
        .map(|reference| {
            (
                display_type(reference, DisplayStyle::Minimal),
                display_type(reference, DisplayStyle::FullyQualified),
            )
        })
        .collect();
    let names: Vec<InterfaceNames<'_>> = displays
        .iter()
        .map(|(minimal, full)| InterfaceNames {
            minimally_qualified: minimal,
            fully_qualified: full,
        })
        .collect();
    resolve_accessor_names(&config.accessor_prefix, &names)
}

/// Identity of a candidate type: its namespace in `global::` form and its name.
///
/// # Examples
///
/// ```
/// use decorgen_introspector::{target_descriptor, TypeSymbol};
///
/// let target = target_descriptor(&TypeSymbol::class(Some("A.B"), "Deco"));
/// assert_eq!(target.namespace.as_deref(), Some("global::A.B"));
/// assert_eq!(target.to_string(), "A.B.Deco");
/// ```
#[must_use]
pub fn target_descriptor(ty: &TypeSymbol) -> TypeDescriptor {
    TypeDescriptor::new(qualified_namespace(ty.namespace.as_deref()).as_deref(), &ty.name)
}

fn qualified_namespace(namespace: Option<&str>) -> Option<String> {
    namespace
        .filter(|ns| !ns.is_empty())
        .map(|ns| format!("{GLOBAL_PREFIX}{ns}"))
}

fn describe_method(method: &MethodSymbol) -> MemberDescriptor {
    let name = if method.type_parameters.is_empty() {
        method.name.clone()
    } else {
        format!("{}<{}>", method.name, method.type_parameters.join(", "))
    };
    MemberDescriptor {
        name,
        return_type: display_type(&method.return_type, DisplayStyle::FullyQualified),
        is_awaitable: is_awaitable(&method.return_type),
        parameters: method.parameters.iter().map(describe_parameter).collect(),
    }
}

fn describe_parameter(parameter: &ParameterSymbol) -> ParameterDescriptor {
    let passing = match parameter.ref_kind {
        RefKind::None => Passing::Value,
        RefKind::Ref => Passing::Ref,
        RefKind::Out => Passing::Out,
        RefKind::In => Passing::In,
    };
    let mut expression = String::new();
    if parameter.is_params {
        expression.push_str("params ");
    }
    if let Some(keyword) = passing.keyword() {
        expression.push_str(keyword);
        expression.push(' ');
    }
    expression.push_str(&display_type(&parameter.ty, DisplayStyle::FullyQualified));
    ParameterDescriptor::new(expression, &parameter.name, passing)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{InterfaceSymbol, TypeRef};
    use crate::well_known;

    const MARKER: &str = "Decorgen.GenericDecoratorAttribute";

    fn extract(compilation: &Compilation) -> Option<DecoratorDescriptor> {
        extract_decorator(
            compilation,
            &compilation.types[0],
            &GeneratorConfig::default(),
            &CancellationToken::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_no_interfaces_yields_nothing() {
        let compilation = Compilation::new().with_type(TypeSymbol::class(Some("A"), "Deco").attribute(MARKER));
        assert!(extract(&compilation).is_none());
    }

    #[test]
    fn test_error_kind_yields_nothing() {
        let mut ty = TypeSymbol::class(Some("A"), "Deco")
            .attribute(MARKER)
            .implements(TypeRef::named(Some("A"), "IFoo"));
        ty.kind = TypeKind::Error;
        let compilation = Compilation::new()
            .with_interface(InterfaceSymbol::new(Some("A"), "IFoo"))
            .with_type(ty);
        assert!(extract(&compilation).is_none());
    }

    #[test]
    fn test_unresolved_interface_yields_nothing() {
        let compilation = Compilation::new().with_type(
            TypeSymbol::class(Some("A"), "Deco")
                .attribute(MARKER)
                .implements(TypeRef::named(Some("A"), "IMissing")),
        );
        assert!(extract(&compilation).is_none());
    }

    #[test]
    fn test_parameter_modifiers() {
        let method = MethodSymbol::new("Parse", well_known::boolean())
            .param_symbol(ParameterSymbol::new("text", well_known::string()).with_ref_kind(RefKind::In))
            .param_symbol(ParameterSymbol::new("value", well_known::int()).with_ref_kind(RefKind::Out))
            .param_symbol(ParameterSymbol::new("rest", TypeRef::array(well_known::object())).params());
        let member = describe_method(&method);

        assert_eq!(
            member.parameter_list(),
            "in string text, out int value, params object[] rest"
        );
        assert_eq!(member.argument_list(), "in text, out value, rest");
    }

    #[test]
    fn test_generic_method_name_carries_type_parameters() {
        let method = MethodSymbol::new("Convert", TypeRef::type_parameter("TOut"))
            .type_parameter("TIn")
            .type_parameter("TOut")
            .param("input", TypeRef::type_parameter("TIn"));
        let member = describe_method(&method);
        assert_eq!(member.name, "Convert<TIn, TOut>");
        assert_eq!(member.return_type, "TOut");
    }

    #[test]
    fn test_properties_and_events_are_not_forwarded() {
        let compilation = Compilation::new()
            .with_interface(
                InterfaceSymbol::new(Some("A"), "IFoo")
                    .property("Name", well_known::string())
                    .event("Changed", well_known::action())
                    .method(MethodSymbol::new("Run", TypeRef::Void)),
            )
            .with_type(
                TypeSymbol::class(Some("A"), "Deco")
                    .attribute(MARKER)
                    .implements(TypeRef::named(Some("A"), "IFoo")),
            );
        let descriptor = extract(&compilation).unwrap();
        assert_eq!(descriptor.member_count(), 1);
        assert_eq!(descriptor.interfaces[0].members[0].name, "Run");
    }

    #[test]
    fn test_global_namespace_target() {
        let compilation = Compilation::new()
            .with_interface(InterfaceSymbol::new(None, "IFoo"))
            .with_type(
                TypeSymbol::class(None, "Deco")
                    .attribute(MARKER)
                    .implements(TypeRef::named(None, "IFoo")),
            );
        let descriptor = extract(&compilation).unwrap();
        assert_eq!(descriptor.target.namespace, None);
        assert_eq!(descriptor.interfaces[0].namespace, None);
        assert_eq!(descriptor.interfaces[0].fully_qualified_name, "global::IFoo");
    }

    #[test]
    fn test_cancelled_extraction_errors() {
        let compilation = Compilation::new()
            .with_interface(InterfaceSymbol::new(Some("A"), "IFoo"))
            .with_type(
                TypeSymbol::class(Some("A"), "Deco")
                    .attribute(MARKER)
                    .implements(TypeRef::named(Some("A"), "IFoo")),
            );
        let cancel = CancellationToken::new();
        cancel.cancel();
        let err = extract_decorator(
            &compilation,
            &compilation.types[0],
            &GeneratorConfig::default(),
            &cancel,
        )
        .unwrap_err();
        assert!(err.is_cancelled());
    }
}
