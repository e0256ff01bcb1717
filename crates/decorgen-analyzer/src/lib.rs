//! Structural diagnostics for generic decorators.
//!
//! The generated half of a decorator declares partial methods that the
//! user must implement: an accessor per decorated interface returning the
//! inner instance, and four hooks that wrap every forwarded call. This
//! crate inspects what a marked type actually declares and reports what is
//! missing, without depending on the generated source.
//!
//! | Id | Severity | Reported when |
//! |----|----------|---------------|
//! | `GDG0001` | warning | the type declares no interface |
//! | `GDG0002` | warning | two interfaces map to the same accessor name |
//! | `GDG0003` | warning | a decorated interface declares a property or event |
//! | `GDG8795` | error | an accessor or hook has no implementation part |
//!
//! # Features
//!
//! - `parallel`: analyze independent types on the rayon thread pool
//!
//! # Examples
//!
//! ```
//! use decorgen_analyzer::StructuralAnalyzer;
//! use decorgen_core::GeneratorConfig;
//! use decorgen_introspector::{Compilation, TypeSymbol};
//!
//! let compilation = Compilation::new().with_type(
//!     TypeSymbol::class(Some("Shop"), "StoreDecorator")
//!         .attribute("Decorgen.GenericDecoratorAttribute"),
//! );
//!
//! let report = StructuralAnalyzer::new(GeneratorConfig::default()).analyze(&compilation);
//! assert_eq!(report.diagnostics.len(), 1);
//! assert_eq!(report.diagnostics[0].id, "GDG0001");
//! assert!(!report.has_errors());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod analyzer;
pub mod diagnostic;
pub mod signatures;

pub use analyzer::{AnalysisReport, StructuralAnalyzer};
pub use diagnostic::{CATEGORY, Diagnostic, DiagnosticDescriptor, Severity, rules};
