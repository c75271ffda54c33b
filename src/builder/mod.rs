//! Builder API for ergonomic machine construction.
//!
//! This module provides a fluent builder and literal macros for declaring
//! machines with minimal boilerplate. Everything declared through the builder
//! goes through the same validated mutators as hand-written calls.

pub mod machine;
pub mod macros;

pub use machine::MachineBuilder;
