//! Accessor method naming.
//!
//! Each decorated interface gets a "get inner instance" accessor named
//! `prefix + minimally-qualified interface name`. Generic arguments and
//! other punctuation are folded into `_` so the result is a valid
//! identifier. When two interfaces fold to the same name, every colliding
//! interface switches to its fully qualified name; a remaining clash gets the
//! lowest ordinal suffix (`_2`, `_3`, ...) that no other interface uses.

use crate::types::strip_global_prefix;
use std::collections::{HashMap, HashSet};

/// Names of one interface as needed for accessor naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InterfaceNames<'a> {
    /// Minimally qualified display, e.g. `IRepo<int>`
    pub minimally_qualified: &'a str,
    /// Fully qualified display, e.g. `global::Data.IRepo<int>`
    pub fully_qualified: &'a str,
}

/// Resolved accessor names for the interfaces of one decorator.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AccessorNames {
    /// One name per interface, same order as the input
    pub names: Vec<String>,
    /// Groups of interface indices whose simple accessor names collided
    pub collisions: Vec<Vec<usize>>,
}

impl AccessorNames {
    /// Returns `true` if any qualification had to be applied.
    #[must_use]
    pub fn has_collisions(&self) -> bool {
        !self.collisions.is_empty()
    }
}

/// Folds a type display into identifier characters.
///
/// # Examples
///
/// ```
/// use decorgen_core::naming::fold_identifier;
///
/// assert_eq!(fold_identifier("IRepo<int, string>"), "IRepo_int_string");
/// assert_eq!(fold_identifier("IFoo"), "IFoo");
/// ```
#[must_use]
pub fn fold_identifier(display: &str) -> String {
    let mut out = String::with_capacity(display.len());
    let mut pending_sep = false;
    for ch in display.chars() {
        if ch.is_alphanumeric() || ch == '_' {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(ch);
        } else {
            pending_sep = true;
        }
    }
    out
}

/// Accessor name for a single interface, ignoring collisions.
///
/// # Examples
///
/// ```
/// use decorgen_core::naming::accessor_method_name;
///
/// assert_eq!(accessor_method_name("GetInner", "IMyInterface"), "GetInnerIMyInterface");
/// ```
#[must_use]
pub fn accessor_method_name(prefix: &str, minimally_qualified: &str) -> String {
    format!("{prefix}{}", fold_identifier(minimally_qualified))
}

/// Resolves accessor names for all interfaces of one decorator.
///
/// # Examples
///
/// ```
/// use decorgen_core::naming::{resolve_accessor_names, InterfaceNames};
///
/// let resolved = resolve_accessor_names("GetInner", &[
///     InterfaceNames { minimally_qualified: "IStore", fully_qualified: "global::A.IStore" },
///     InterfaceNames { minimally_qualified: "IStore", fully_qualified: "global::B.IStore" },
///     InterfaceNames { minimally_qualified: "ILog", fully_qualified: "global::A.ILog" },
/// ]);
/// assert_eq!(resolved.names, vec!["GetInnerA_IStore", "GetInnerB_IStore", "GetInnerILog"]);
/// assert_eq!(resolved.collisions, vec![vec![0, 1]]);
/// ```
#[must_use]
pub fn resolve_accessor_names(prefix: &str, interfaces: &[InterfaceNames<'_>]) -> AccessorNames {
    let simple: Vec<String> = interfaces
        .iter()
        .map(|i| accessor_method_name(prefix, i.minimally_qualified))
        .collect();

    let mut groups: HashMap<&str, Vec<usize>> = HashMap::new();
    for (index, name) in simple.iter().enumerate() {
        groups.entry(name.as_str()).or_default().push(index);
    }

    let mut collisions: Vec<Vec<usize>> = groups
        .into_values()
        .filter(|indices| indices.len() > 1)
        .collect();
    collisions.sort();

    let colliding: HashSet<usize> = collisions.iter().flatten().copied().collect();
    let mut names: Vec<String> = simple
        .iter()
        .enumerate()
        .map(|(index, name)| {
            if colliding.contains(&index) {
                accessor_method_name(prefix, strip_global_prefix(interfaces[index].fully_qualified))
            } else {
                name.clone()
            }
        })
        .collect();

    // Qualified names can still clash after folding (`A.B_C` vs `A_B.C`).
    // Suffixed names skip every name some interface already owns.
    let owned: HashSet<String> = names.iter().cloned().collect();
    let mut taken: HashSet<String> = HashSet::with_capacity(names.len());
    for name in &mut names {
        if taken.insert(name.clone()) {
            continue;
        }
        let suffixed = (2usize..)
            .map(|ordinal| format!("{name}_{ordinal}"))
            .find(|candidate| !owned.contains(candidate) && !taken.contains(candidate))
            .unwrap_or_default();
        tracing::debug!(accessor = %name, renamed = %suffixed, "accessor name still collides after qualification");
        taken.insert(suffixed.clone());
        *name = suffixed;
    }

    AccessorNames { names, collisions }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names<'a>(minimal: &'a str, full: &'a str) -> InterfaceNames<'a> {
        InterfaceNames {
            minimally_qualified: minimal,
            fully_qualified: full,
        }
    }

    #[test]
    fn test_fold_identifier_generic_and_nested() {
        assert_eq!(fold_identifier("IMap<int, IList<string>>"), "IMap_int_IList_string");
        assert_eq!(fold_identifier("Outer.IInner"), "Outer_IInner");
        assert_eq!(fold_identifier("IFoo<string?>"), "IFoo_string");
    }

    #[test]
    fn test_distinct_interfaces_keep_simple_names() {
        let resolved = resolve_accessor_names(
            "GetInner",
            &[
                names("IMyInterface1", "global::Ns.IMyInterface1"),
                names("IMyInterface2", "global::Ns.IMyInterface2"),
            ],
        );
        assert_eq!(
            resolved.names,
            vec!["GetInnerIMyInterface1", "GetInnerIMyInterface2"]
        );
        assert!(!resolved.has_collisions());
    }

    #[test]
    fn test_generic_instantiations_fold_to_distinct_names() {
        let resolved = resolve_accessor_names(
            "GetInner",
            &[
                names("IRepo<int>", "global::Data.IRepo<int>"),
                names("IRepo<string>", "global::Data.IRepo<string>"),
            ],
        );
        assert_eq!(resolved.names, vec!["GetInnerIRepo_int", "GetInnerIRepo_string"]);
    }

    #[test]
    fn test_residual_collision_gets_ordinal_suffix() {
        let resolved = resolve_accessor_names(
            "GetInner",
            &[
                names("IX", "global::A.B_C.IX"),
                names("IX", "global::A_B.C.IX"),
            ],
        );
        assert_eq!(resolved.names, vec!["GetInnerA_B_C_IX", "GetInnerA_B_C_IX_2"]);
        assert_eq!(resolved.collisions, vec![vec![0, 1]]);
    }

    #[test]
    fn test_ordinal_suffix_skips_names_owned_by_other_interfaces() {
        let resolved = resolve_accessor_names(
            "GetInner",
            &[
                names("IX", "global::A.B_C.IX"),
                names("IX", "global::A_B.C.IX"),
                names("A_B_C_IX_2", "global::Z.A_B_C_IX_2"),
            ],
        );
        assert_eq!(
            resolved.names,
            vec!["GetInnerA_B_C_IX", "GetInnerA_B_C_IX_3", "GetInnerA_B_C_IX_2"]
        );
        let unique: HashSet<&String> = resolved.names.iter().collect();
        assert_eq!(unique.len(), resolved.names.len());
    }

    #[test]
    fn test_custom_prefix() {
        assert_eq!(accessor_method_name("Inner", "IFoo"), "InnerIFoo");
    }
}
