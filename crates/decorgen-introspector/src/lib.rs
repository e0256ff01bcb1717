//! Symbol snapshot model and fact extraction.
//!
//! Hosts hand the generator a [`Compilation`]: resolved type facts for the
//! annotated types and the interfaces they declare. This crate turns one
//! annotated type into a [`decorgen_core::DecoratorDescriptor`], classifying
//! awaitable return types by original definition and rendering types the way
//! generated source needs them.
//!
//! # Examples
//!
//! ```
//! use decorgen_core::{CancellationToken, GeneratorConfig};
//! use decorgen_introspector::{extract_decorator, well_known};
//! use decorgen_introspector::{Compilation, InterfaceSymbol, MethodSymbol, TypeRef, TypeSymbol};
//!
//! let config = GeneratorConfig::default();
//! let compilation = Compilation::new()
//!     .with_interface(
//!         InterfaceSymbol::new(Some("MyNamespace"), "IMyInterface")
//!             .method(
//!                 MethodSymbol::new("GetStuffAsync", well_known::task_of(well_known::string()))
//!                     .param("arg1", well_known::int()),
//!             ),
//!     )
//!     .with_type(
//!         TypeSymbol::class(Some("MyNamespace"), "GenericFooDecorator")
//!             .attribute(config.marker_full_name())
//!             .implements(TypeRef::named(Some("MyNamespace"), "IMyInterface")),
//!     );
//!
//! let marker = config.marker_full_name();
//! let ty = compilation.marked_types(&marker).next().unwrap();
//! let descriptor = extract_decorator(&compilation, ty, &config, &CancellationToken::new())
//!     .unwrap()
//!     .unwrap();
//! let member = &descriptor.interfaces[0].members[0];
//! assert_eq!(member.return_type, "global::System.Threading.Tasks.Task<string>");
//! assert_eq!(member.parameter_list(), "int arg1");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod display;
mod extract;
mod namespaces;
mod symbols;

pub mod well_known;

pub use display::{DisplayStyle, display_named, display_type};
pub use extract::{extract_decorator, resolve_accessors, target_descriptor};
pub use namespaces::{collect_namespaces, collect_resolved_namespaces};
pub use symbols::{
    Compilation, EventSymbol, InterfaceMember, InterfaceSymbol, Location, MethodSymbol,
    NamedType, ParameterSymbol, PropertySymbol, RefKind, ResolvedInterface, TypeDefinition,
    TypeKind, TypeRef, TypeSymbol,
};
