//! Structural violations found while validating a description.

use crate::core::StateId;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Where an out-of-range state id was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateRole {
    Initial,
    Accepting,
    TransitionSource,
    TransitionTarget,
}

impl fmt::Display for StateRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let role = match self {
            Self::Initial => "initial",
            Self::Accepting => "accepting",
            Self::TransitionSource => "transition source",
            Self::TransitionTarget => "transition target",
        };
        f.write_str(role)
    }
}

/// A single reason a description cannot become an automaton model.
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize, Deserialize)]
pub enum Violation {
    #[error("State space is empty; an automaton needs at least one state")]
    EmptyStateSpace,

    #[error("Transition from state {from} uses symbol {symbol:?}, which is not in the alphabet")]
    SymbolNotInAlphabet { from: StateId, symbol: char },

    #[error("The {role} state {state} is outside the state space [0, {state_count})")]
    StateOutOfRange {
        state: StateId,
        state_count: u32,
        role: StateRole,
    },

    #[error("State {from} has conflicting transitions on {symbol:?}: to {first} and to {second}")]
    ConflictingTransition {
        from: StateId,
        symbol: char,
        first: StateId,
        second: StateId,
    },
}
