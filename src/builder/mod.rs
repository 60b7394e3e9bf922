//! Builder API for ergonomic automaton construction.
//!
//! This module provides a fluent builder and the `dfa!` macro for creating
//! automaton models with minimal boilerplate. Both go through the same
//! validation as [`AutomatonModel::construct`](crate::core::AutomatonModel::construct).

pub mod automaton;
pub mod error;
pub mod macros;

pub use automaton::AutomatonBuilder;
pub use error::{BuildError, Violations};
