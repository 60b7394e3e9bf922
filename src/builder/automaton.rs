//! Builder for constructing automaton models.

use crate::builder::error::BuildError;
use crate::config::ValidationPolicy;
use crate::core::{AutomatonModel, StateId};
use crate::description::{AutomatonDescription, TransitionSpec};

/// Builder for constructing automaton models with a fluent API.
///
/// States are given as plain numbers; the builder wraps them in
/// [`StateId`]s.
#[derive(Debug, Clone, Default)]
pub struct AutomatonBuilder {
    state_count: Option<u32>,
    alphabet: Vec<char>,
    initial: Option<u32>,
    accepting: Vec<u32>,
    transitions: Vec<TransitionSpec>,
    policy: ValidationPolicy,
}

impl AutomatonBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of states (required).
    pub fn states(mut self, count: u32) -> Self {
        self.state_count = Some(count);
        self
    }

    /// Add one symbol to the alphabet.
    pub fn symbol(mut self, symbol: char) -> Self {
        self.alphabet.push(symbol);
        self
    }

    /// Add several symbols to the alphabet.
    pub fn alphabet<I: IntoIterator<Item = char>>(mut self, symbols: I) -> Self {
        self.alphabet.extend(symbols);
        self
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: u32) -> Self {
        self.initial = Some(state);
        self
    }

    /// Mark one state as accepting.
    pub fn accept(mut self, state: u32) -> Self {
        self.accepting.push(state);
        self
    }

    /// Mark several states as accepting.
    pub fn accepting<I: IntoIterator<Item = u32>>(mut self, states: I) -> Self {
        self.accepting.extend(states);
        self
    }

    /// Add a transition `from --symbol--> to`.
    pub fn transition(mut self, from: u32, symbol: char, to: u32) -> Self {
        self.transitions.push(TransitionSpec::new(from, symbol, to));
        self
    }

    /// Add several pre-built transitions.
    pub fn transitions<I: IntoIterator<Item = TransitionSpec>>(mut self, transitions: I) -> Self {
        self.transitions.extend(transitions);
        self
    }

    /// Select the validation policy (strict by default).
    pub fn policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Produce the description without validating it.
    /// Returns an error if required fields are missing.
    pub fn description(self) -> Result<AutomatonDescription, BuildError> {
        let state_count = self.state_count.ok_or(BuildError::MissingStateCount)?;
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;

        Ok(AutomatonDescription {
            state_count,
            alphabet: self.alphabet,
            initial_state: StateId::new(initial),
            accepting_states: self.accepting.into_iter().map(StateId::new).collect(),
            transitions: self.transitions,
        })
    }

    /// Build and validate the model.
    pub fn build(self) -> Result<AutomatonModel, BuildError> {
        let policy = self.policy;
        AutomatonModel::construct_with(&self.description()?, policy)
    }
}
