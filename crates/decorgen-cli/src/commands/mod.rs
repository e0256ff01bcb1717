//! Command implementations for the decorgen CLI.
//!
//! Each command loads its inputs, runs one part of the generator, and
//! formats the result according to the requested output format.

pub mod analyze;
pub mod common;
pub mod generate;
pub mod inspect;
