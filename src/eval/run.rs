//! Traced runs of an input string.

use crate::core::{StateId, Verdict};
use serde::{Deserialize, Serialize};

/// Why a string was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Rejection {
    /// The symbol at `position` is not in the alphabet.
    UnknownSymbol { position: usize, symbol: char },

    /// No transition is defined from `state` on the symbol at `position`.
    Stuck {
        position: usize,
        state: StateId,
        symbol: char,
    },

    /// The whole string was consumed but `state` is not accepting.
    NonAccepting { state: StateId },
}

/// Record of one walk through an automaton.
///
/// The path starts with the initial state and gains one state per consumed
/// symbol, so `path().len() == consumed() + 1`. Positions count characters,
/// not bytes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Run {
    path: Vec<StateId>,
    rejection: Option<Rejection>,
}

impl Run {
    pub(crate) fn start(initial: StateId) -> Self {
        Self {
            path: vec![initial],
            rejection: None,
        }
    }

    pub(crate) fn advance(&mut self, next: StateId) {
        self.path.push(next);
    }

    pub(crate) fn reject(mut self, rejection: Rejection) -> Self {
        self.rejection = Some(rejection);
        self
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_accepted(self.rejection.is_none())
    }

    pub fn rejection(&self) -> Option<&Rejection> {
        self.rejection.as_ref()
    }

    /// States visited, initial state first.
    pub fn path(&self) -> &[StateId] {
        &self.path
    }

    /// State the automaton was in when the run ended.
    pub fn final_state(&self) -> StateId {
        // path always holds at least the initial state
        self.path[self.path.len() - 1]
    }

    /// Number of symbols consumed before the run ended.
    pub fn consumed(&self) -> usize {
        self.path.len() - 1
    }
}
