//! State identifiers.
//!
//! States of an automaton with `n` states are numbered `0..n`. The id is a
//! plain integer wrapped in a newtype so it cannot be confused with a state
//! count or a position in the input string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a single automaton state.
///
/// # Example
///
/// ```rust
/// use acceptor::core::StateId;
///
/// let state = StateId::new(3);
/// assert_eq!(state.get(), 3);
/// assert!(state.is_within(4));
/// assert!(!state.is_within(3));
/// assert_eq!(state.to_string(), "3");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StateId(u32);

impl StateId {
    /// Wrap a raw state number.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw state number.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Check whether this id lies in `[0, state_count)`.
    pub const fn is_within(self, state_count: u32) -> bool {
        self.0 < state_count
    }
}

impl From<u32> for StateId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for StateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_id_displays_as_number() {
        assert_eq!(StateId::new(0).to_string(), "0");
        assert_eq!(StateId::new(42).to_string(), "42");
    }

    #[test]
    fn is_within_is_exclusive_of_count() {
        assert!(StateId::new(0).is_within(1));
        assert!(!StateId::new(1).is_within(1));
        assert!(!StateId::new(0).is_within(0));
    }

    #[test]
    fn state_ids_order_numerically() {
        let mut ids = vec![StateId::new(2), StateId::new(0), StateId::new(1)];
        ids.sort();
        assert_eq!(ids, vec![StateId::new(0), StateId::new(1), StateId::new(2)]);
    }

    #[test]
    fn state_id_serializes_transparently() {
        let json = serde_json::to_string(&StateId::new(7)).unwrap();
        assert_eq!(json, "7");

        let parsed: StateId = serde_json::from_str("7").unwrap();
        assert_eq!(parsed, StateId::new(7));
    }
}
