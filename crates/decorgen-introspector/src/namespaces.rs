//! Namespaces referenced by an interface.

use crate::symbols::{InterfaceMember, InterfaceSymbol, ResolvedInterface, TypeRef};
use std::collections::BTreeSet;

/// Collects every namespace an interface refers to: its own, and those of
/// all named types in member signatures, recursing into type arguments,
/// array elements, pointer targets and nullable annotations.
///
/// The global namespace is never included.
///
/// # Examples
///
/// ```
/// use decorgen_introspector::{collect_namespaces, well_known, InterfaceSymbol, MethodSymbol};
///
/// let iface = InterfaceSymbol::new(Some("Shop"), "IStore")
///     .method(MethodSymbol::new("LoadAsync", well_known::task_of(well_known::string())));
///
/// let namespaces: Vec<_> = collect_namespaces(&iface).into_iter().collect();
/// assert_eq!(namespaces, vec!["Shop", "System", "System.Threading.Tasks"]);
/// ```
#[must_use]
pub fn collect_namespaces(interface: &InterfaceSymbol) -> BTreeSet<String> {
    let mut namespaces = BTreeSet::new();
    if let Some(ns) = interface.namespace.as_deref().filter(|ns| !ns.is_empty()) {
        namespaces.insert(ns.to_string());
    }
    add_members(&mut namespaces, &interface.members);
    namespaces
}

/// Collects the namespaces of a constructed interface: its own, those of
/// its type arguments, and those of its substituted member signatures.
///
/// Unlike [`collect_namespaces`] on the declaration, type parameters are
/// already replaced, so `IRepo<Shop.Models.Item>` reports `Shop.Models`.
///
/// # Examples
///
/// ```
/// use decorgen_introspector::{
///     collect_resolved_namespaces, Compilation, InterfaceSymbol, MethodSymbol, TypeRef,
/// };
///
/// let compilation = Compilation::new().with_interface(
///     InterfaceSymbol::new(Some("Data"), "IRepo")
///         .type_parameter("T")
///         .method(MethodSymbol::new("Find", TypeRef::type_parameter("T"))),
/// );
/// let reference = TypeRef::generic(
///     Some("Data"),
///     "IRepo",
///     vec![TypeRef::named(Some("Shop.Models"), "Item")],
/// );
/// let resolved = compilation.resolve_interface(&reference).unwrap();
///
/// let namespaces: Vec<_> = collect_resolved_namespaces(&resolved).into_iter().collect();
/// assert_eq!(namespaces, vec!["Data", "Shop.Models"]);
/// ```
#[must_use]
pub fn collect_resolved_namespaces(interface: &ResolvedInterface) -> BTreeSet<String> {
    let mut namespaces = BTreeSet::new();
    add_type(&mut namespaces, &TypeRef::Named(interface.reference.clone()));
    add_members(&mut namespaces, &interface.members);
    namespaces
}

fn add_members(namespaces: &mut BTreeSet<String>, members: &[InterfaceMember]) {
    for member in members {
        match member {
            InterfaceMember::Method(method) => {
                add_type(namespaces, &method.return_type);
                for parameter in &method.parameters {
                    add_type(namespaces, &parameter.ty);
                }
            }
            InterfaceMember::Property(property) => add_type(namespaces, &property.ty),
            InterfaceMember::Event(event) => add_type(namespaces, &event.ty),
        }
    }
}

fn add_type(namespaces: &mut BTreeSet<String>, ty: &TypeRef) {
    match ty {
        TypeRef::Named(named) => {
            if let Some(ns) = named.namespace.as_deref().filter(|ns| !ns.is_empty()) {
                namespaces.insert(ns.to_string());
            }
            for argument in &named.type_arguments {
                add_type(namespaces, argument);
            }
        }
        TypeRef::Array { element, .. } => add_type(namespaces, element),
        TypeRef::Pointer { pointee } => add_type(namespaces, pointee),
        TypeRef::Nullable { underlying } => add_type(namespaces, underlying),
        TypeRef::Void | TypeRef::TypeParameter { .. } | TypeRef::Error { .. } => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbols::{Compilation, MethodSymbol, TypeRef};
    use crate::well_known;

    #[test]
    fn test_recurses_into_arguments_arrays_and_events() {
        let iface = InterfaceSymbol::new(Some("App"), "IFeed")
            .method(
                MethodSymbol::new(
                    "Stream",
                    well_known::async_enumerable(TypeRef::named(Some("App.Models"), "Item")),
                )
                .param("filters", TypeRef::array(TypeRef::named(Some("App.Query"), "Filter"))),
            )
            .property("Owner", TypeRef::nullable(TypeRef::named(Some("App.Users"), "User")))
            .event("Changed", TypeRef::named(Some("App.Events"), "ChangedHandler"));

        let namespaces: Vec<_> = collect_namespaces(&iface).into_iter().collect();
        assert_eq!(
            namespaces,
            vec![
                "App",
                "App.Events",
                "App.Models",
                "App.Query",
                "App.Users",
                "System.Collections.Generic",
            ]
        );
    }

    #[test]
    fn test_global_namespace_and_type_parameters_are_skipped() {
        let iface = InterfaceSymbol::new(None, "IBox")
            .type_parameter("T")
            .method(MethodSymbol::new("Get", TypeRef::type_parameter("T")))
            .method(MethodSymbol::new("Reset", TypeRef::Void));
        assert!(collect_namespaces(&iface).is_empty());
    }

    #[test]
    fn test_resolved_interface_includes_nested_type_arguments() {
        let compilation = Compilation::new().with_interface(
            InterfaceSymbol::new(Some("Data"), "IRepo")
                .type_parameter("T")
                .method(
                    MethodSymbol::new("FindAsync", well_known::task_of(TypeRef::type_parameter("T")))
                        .param("key", well_known::string()),
                ),
        );
        let reference = TypeRef::generic(
            Some("Data"),
            "IRepo",
            vec![TypeRef::array(TypeRef::named(Some("Shop.Models"), "Item"))],
        );
        let resolved = compilation.resolve_interface(&reference).unwrap();

        let namespaces: Vec<_> = collect_resolved_namespaces(&resolved).into_iter().collect();
        assert_eq!(
            namespaces,
            vec!["Data", "Shop.Models", "System", "System.Threading.Tasks"]
        );

        let declared: Vec<_> = collect_namespaces(&compilation.interfaces[0]).into_iter().collect();
        assert_eq!(declared, vec!["Data", "System", "System.Threading.Tasks"]);
    }
}
