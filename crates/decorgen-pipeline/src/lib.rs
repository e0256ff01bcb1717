//! Incremental generation pipeline.
//!
//! Wires extraction and synthesis into a pipeline that is re-run on every
//! host recomputation pass. Outputs are cached per type identity and only
//! regenerated when the extracted descriptor changes, so a pass where
//! nothing relevant changed reports every output as
//! [`OutputReason::Cached`].
//!
//! # Features
//!
//! - `parallel`: process independent candidates on the rayon thread pool
//!
//! # Examples
//!
//! ```
//! use decorgen_core::{CancellationToken, GeneratorConfig};
//! use decorgen_introspector::{Compilation, InterfaceSymbol, MethodSymbol, TypeRef, TypeSymbol, well_known};
//! use decorgen_pipeline::{GeneratorPipeline, OutputReason};
//!
//! let mut pipeline = GeneratorPipeline::new(GeneratorConfig::default()).unwrap();
//! let cancel = CancellationToken::new();
//!
//! let interface = InterfaceSymbol::new(Some("Shop"), "IStore")
//!     .method(MethodSymbol::new("Count", well_known::int()));
//! let decorator = TypeSymbol::class(Some("Shop"), "StoreDecorator")
//!     .implements(TypeRef::named(Some("Shop"), "IStore"));
//!
//! // Not annotated yet: only the marker attribute is produced
//! let before = Compilation::new()
//!     .with_interface(interface.clone())
//!     .with_type(decorator.clone());
//! let result = pipeline.run(&before, &cancel).unwrap();
//! assert!(result.tracked.is_empty());
//!
//! // Annotated: a new output appears
//! let after = Compilation::new()
//!     .with_interface(interface)
//!     .with_type(decorator.attribute("Decorgen.GenericDecoratorAttribute"));
//! let result = pipeline.run(&after, &cancel).unwrap();
//! assert_eq!(result.tracked[0].reason, OutputReason::New);
//! assert_eq!(result.tracked[0].hint_name.as_str(), "Shop.StoreDecorator.g.cs");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod pipeline;
pub mod result;
pub mod stats;

pub use pipeline::GeneratorPipeline;
pub use result::{CandidateFailure, Fingerprint, OutputReason, RunResult, TrackedSource};
pub use stats::PipelineStats;
