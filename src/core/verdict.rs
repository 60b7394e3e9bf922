//! Acceptance verdicts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of running one input string through an automaton.
///
/// Displays as `accepts` / `rejects`, the wording used in reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Accept,
    Reject,
}

impl Verdict {
    /// Map a membership test result to a verdict.
    pub fn from_accepted(accepted: bool) -> Self {
        if accepted {
            Self::Accept
        } else {
            Self::Reject
        }
    }

    pub fn is_accept(self) -> bool {
        matches!(self, Self::Accept)
    }

    pub fn is_reject(self) -> bool {
        matches!(self, Self::Reject)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accept => f.write_str("accepts"),
            Self::Reject => f.write_str("rejects"),
        }
    }
}
