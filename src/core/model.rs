//! The immutable automaton model.

use super::state::StateId;
use crate::builder::error::BuildError;
use crate::config::ValidationPolicy;
use crate::description::{AutomatonDescription, TransitionSpec};
use crate::validation;
use std::collections::{BTreeSet, HashMap};
use tracing::debug;

/// Immutable, queryable representation of a deterministic finite automaton.
///
/// The transition table is partial: a missing `(state, symbol)` entry is an
/// ordinary negative lookup, not a defect. A model is only obtainable through
/// [`AutomatonModel::construct`] (or the builder), so every instance has
/// passed structural validation.
///
/// # Example
///
/// ```rust
/// use acceptor::core::{AutomatonModel, StateId};
/// use acceptor::description::{AutomatonDescription, TransitionSpec};
///
/// let description = AutomatonDescription {
///     state_count: 2,
///     alphabet: vec!['a'],
///     initial_state: StateId::new(0),
///     accepting_states: vec![StateId::new(1)],
///     transitions: vec![TransitionSpec::new(0, 'a', 1)],
/// };
///
/// let model = AutomatonModel::construct(&description).unwrap();
/// assert_eq!(model.lookup_transition(StateId::new(0), 'a'), Some(StateId::new(1)));
/// assert_eq!(model.lookup_transition(StateId::new(1), 'a'), None);
/// assert!(model.is_accepting(StateId::new(1)));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AutomatonModel {
    state_count: u32,
    alphabet: BTreeSet<char>,
    initial_state: StateId,
    accepting_states: BTreeSet<StateId>,
    transitions: HashMap<(StateId, char), StateId>,
}

impl AutomatonModel {
    /// Build a model from a description under the default (strict) policy.
    pub fn construct(description: &AutomatonDescription) -> Result<Self, BuildError> {
        Self::construct_with(description, ValidationPolicy::default())
    }

    /// Build a model from a description, validating it under `policy`.
    ///
    /// Every violation found is reported at once in
    /// [`BuildError::Malformed`].
    pub fn construct_with(
        description: &AutomatonDescription,
        policy: ValidationPolicy,
    ) -> Result<Self, BuildError> {
        validation::check(description, policy).map_err(BuildError::malformed)?;

        let model = Self {
            state_count: description.state_count,
            alphabet: description.alphabet.iter().copied().collect(),
            initial_state: description.initial_state,
            accepting_states: description.accepting_states.iter().copied().collect(),
            transitions: description
                .transitions
                .iter()
                .map(|t| ((t.from, t.symbol), t.to))
                .collect(),
        };

        debug!(
            states = model.state_count,
            symbols = model.alphabet.len(),
            accepting = model.accepting_states.len(),
            transitions = model.transitions.len(),
            ?policy,
            "automaton constructed"
        );

        Ok(model)
    }

    /// Membership test against the declared alphabet.
    pub fn is_symbol_in_alphabet(&self, symbol: char) -> bool {
        self.alphabet.contains(&symbol)
    }

    /// Destination of `(state, symbol)`, or `None` when no transition is defined.
    pub fn lookup_transition(&self, state: StateId, symbol: char) -> Option<StateId> {
        self.transitions.get(&(state, symbol)).copied()
    }

    /// Membership test against the accepting set.
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting_states.contains(&state)
    }

    pub fn state_count(&self) -> u32 {
        self.state_count
    }

    pub fn alphabet(&self) -> &BTreeSet<char> {
        &self.alphabet
    }

    pub fn initial_state(&self) -> StateId {
        self.initial_state
    }

    pub fn accepting_states(&self) -> &BTreeSet<StateId> {
        &self.accepting_states
    }

    pub fn transition_count(&self) -> usize {
        self.transitions.len()
    }

    /// Iterate over `(from, symbol, to)` triples in unspecified order.
    pub fn transitions(&self) -> impl Iterator<Item = (StateId, char, StateId)> + '_ {
        self.transitions
            .iter()
            .map(|(&(from, symbol), &to)| (from, symbol, to))
    }

    /// Convert back into a description.
    ///
    /// Transitions are sorted by `(from, symbol)` so the result is stable
    /// across calls.
    pub fn to_description(&self) -> AutomatonDescription {
        let mut transitions: Vec<TransitionSpec> = self
            .transitions()
            .map(|(from, symbol, to)| TransitionSpec { from, symbol, to })
            .collect();
        transitions.sort_by_key(|t| (t.from, t.symbol));

        AutomatonDescription {
            state_count: self.state_count,
            alphabet: self.alphabet.iter().copied().collect(),
            initial_state: self.initial_state,
            accepting_states: self.accepting_states.iter().copied().collect(),
            transitions,
        }
    }
}

impl TryFrom<&AutomatonDescription> for AutomatonModel {
    type Error = BuildError;

    fn try_from(description: &AutomatonDescription) -> Result<Self, Self::Error> {
        Self::construct(description)
    }
}

impl TryFrom<AutomatonDescription> for AutomatonModel {
    type Error = BuildError;

    fn try_from(description: AutomatonDescription) -> Result<Self, Self::Error> {
        Self::construct(&description)
    }
}
