//! Build errors for automaton construction.

use crate::validation::Violation;
use std::fmt;
use std::ops::Deref;
use thiserror::Error;

/// Errors that can occur when building an automaton model.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("State count not specified. Call .states(n) before .build()")]
    MissingStateCount,

    #[error("Initial state not specified. Call .initial(state) before .build()")]
    MissingInitialState,

    /// The description violates one or more structural invariants.
    #[error("Malformed automaton: {0}")]
    Malformed(Violations),
}

impl BuildError {
    pub(crate) fn malformed(violations: Vec<Violation>) -> Self {
        Self::Malformed(Violations(violations))
    }

    /// Violations carried by a `Malformed` error; empty for the other variants.
    pub fn violations(&self) -> &[Violation] {
        match self {
            Self::Malformed(violations) => &violations.0,
            _ => &[],
        }
    }
}

/// Every violation found in one validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl Deref for Violations {
    type Target = [Violation];

    fn deref(&self) -> &[Violation] {
        &self.0
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}
