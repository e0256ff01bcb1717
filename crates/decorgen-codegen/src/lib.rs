//! Source synthesis for generic decorators.
//!
//! Renders a [`decorgen_core::DecoratorDescriptor`] into the partial class
//! that forwards every interface method through the decorator's hooks, and
//! renders the marker attribute, using Handlebars templates embedded at
//! compile time.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod generator;
pub mod template_engine;
pub mod types;

pub use generator::DecoratorGenerator;
pub use types::GeneratedSource;
