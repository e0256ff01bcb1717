//! Structural signature predicates.
//!
//! Each predicate decides whether a declared method is the implemented
//! form of one required partial method. Matching compares resolved type
//! references, never rendered text: `Func<T>` only matches when the
//! parameter is `System.Func` constructed over the method's own first type
//! parameter, whatever that parameter is called.

use decorgen_core::Hook;
use decorgen_introspector::{MethodSymbol, TypeRef, well_known};

/// Returns `true` if `method` is an implemented declaration of `hook`.
///
/// # Examples
///
/// ```
/// use decorgen_analyzer::signatures::implements_hook;
/// use decorgen_core::Hook;
/// use decorgen_introspector::{MethodSymbol, TypeRef, well_known};
///
/// let decorate = MethodSymbol::new("Decorate", TypeRef::type_parameter("TResult"))
///     .type_parameter("TResult")
///     .param("inner", well_known::func(TypeRef::type_parameter("TResult")))
///     .implemented();
///
/// assert!(implements_hook(&decorate, Hook::SyncGeneric));
/// assert!(!implements_hook(&decorate, Hook::Sync));
/// ```
#[must_use]
pub fn implements_hook(method: &MethodSymbol, hook: Hook) -> bool {
    if !method.has_implementation_part
        || method.name != hook.method_name()
        || method.type_parameters.len() != hook.generic_arity()
        || method.parameters.len() != 1
    {
        return false;
    }

    let parameter = &method.parameters[0].ty;
    match hook {
        Hook::Sync => method.return_type.is_void() && *parameter == well_known::action(),
        Hook::Async => {
            method.return_type == well_known::task() && *parameter == well_known::func(well_known::task())
        }
        Hook::SyncGeneric => {
            let t = TypeRef::type_parameter(&method.type_parameters[0]);
            method.return_type == t && *parameter == well_known::func(t)
        }
        Hook::AsyncGeneric => {
            let task_of_t = well_known::task_of(TypeRef::type_parameter(&method.type_parameters[0]));
            method.return_type == task_of_t && *parameter == well_known::func(task_of_t)
        }
    }
}

/// Returns `true` if `method` is an implemented accessor named
/// `accessor_name` returning exactly `interface`.
///
/// # Examples
///
/// ```
/// use decorgen_analyzer::signatures::implements_accessor;
/// use decorgen_introspector::{MethodSymbol, TypeRef};
///
/// let store = TypeRef::named(Some("Shop"), "IStore");
/// let accessor = MethodSymbol::new("GetInnerIStore", store.clone()).implemented();
///
/// assert!(implements_accessor(&accessor, &store, "GetInnerIStore"));
/// assert!(!implements_accessor(&accessor, &store, "GetInnerILog"));
/// ```
#[must_use]
pub fn implements_accessor(method: &MethodSymbol, interface: &TypeRef, accessor_name: &str) -> bool {
    method.has_implementation_part
        && method.name == accessor_name
        && method.type_parameters.is_empty()
        && method.parameters.is_empty()
        && method.return_type == *interface
}
