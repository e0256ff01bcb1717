//! Core types, configuration, and errors for decorator generation.
//!
//! This crate provides the foundational types shared across the decorgen
//! workspace.
//!
//! # Architecture
//!
//! The core consists of:
//! - The descriptor model (`DecoratorDescriptor` and friends): value
//!   snapshots that the incremental pipeline compares to decide cache hits
//! - Hook signatures and accessor naming rules shared by synthesis and analysis
//! - Error hierarchy, strong identifier types and cooperative cancellation
//! - Generator configuration

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod cancel;
mod config;
mod descriptor;
mod error;
mod types;

pub mod hooks;
pub mod naming;

pub use cancel::CancellationToken;
pub use config::{
    DEFAULT_ACCESSOR_PREFIX, DEFAULT_HINT_EXTENSION, DEFAULT_MARKER_NAME, DEFAULT_MARKER_NAMESPACE,
    GeneratorConfig, GeneratorConfigBuilder,
};
pub use descriptor::{
    DecoratorDescriptor, InterfaceDescriptor, MemberDescriptor, ParameterDescriptor, Passing,
    TypeDescriptor,
};
pub use error::{Error, Result};
pub use hooks::Hook;
pub use types::{GLOBAL_PREFIX, HintName, strip_global_prefix};
