//! Core automaton types.
//!
//! This module contains the pure functional core of the acceptor:
//! - `StateId` for state identifiers
//! - `AutomatonModel`, the validated and immutable DFA
//! - `Verdict`, the outcome of running one string
//!
//! Nothing here performs I/O. Models are built once and only borrowed
//! afterwards.

mod model;
mod state;
mod verdict;

pub use model::AutomatonModel;
pub use state::StateId;
pub use verdict::Verdict;
