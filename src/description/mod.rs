//! Automaton descriptions and the collaborators that produce them.
//!
//! An [`AutomatonDescription`] is the plain, unvalidated input to
//! [`AutomatonModel::construct`](crate::core::AutomatonModel::construct).
//! This module also reads the plain-text description format, appends input
//! strings to description files and stores versioned snapshots.

use crate::core::StateId;
use serde::{Deserialize, Serialize};

pub mod error;
mod file;
mod parser;
mod snapshot;

pub use error::DescriptionError;
pub use file::{append_inputs, read_description};
pub use parser::{parse_description, parse_description_with, DescriptionFile};
pub use snapshot::{Snapshot, SNAPSHOT_VERSION};

/// One `(state, symbol) -> next` entry of a transition function.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionSpec {
    pub from: StateId,
    pub symbol: char,
    pub to: StateId,
}

impl TransitionSpec {
    pub fn new(from: u32, symbol: char, to: u32) -> Self {
        Self {
            from: StateId::new(from),
            symbol,
            to: StateId::new(to),
        }
    }
}

/// Unvalidated description of a deterministic finite automaton.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonDescription {
    /// Number of states; states are `0..state_count`
    pub state_count: u32,
    /// Declared input symbols; duplicates are ignored
    pub alphabet: Vec<char>,
    pub initial_state: StateId,
    #[serde(default)]
    pub accepting_states: Vec<StateId>,
    #[serde(default)]
    pub transitions: Vec<TransitionSpec>,
}
