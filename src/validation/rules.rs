//! Validation rules for automaton descriptions.

use crate::config::ValidationPolicy;
use crate::core::StateId;
use crate::description::{AutomatonDescription, TransitionSpec};
use crate::validation::violations::{StateRole, Violation};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Result of a single check.
pub type Check = Validation<(), NonEmptyVec<Violation>>;

fn pass() -> Check {
    Validation::success(())
}

fn violation(v: Violation) -> Check {
    Validation::fail(v)
}

/// Validate a description, accumulating ALL violations.
///
/// Returns `Validation::Success(())` if the description is well formed and
/// `Validation::Failure` with every violation otherwise. State-range checks
/// only run under [`ValidationPolicy::Strict`].
pub fn validate(description: &AutomatonDescription, policy: ValidationPolicy) -> Check {
    let mut checks = vec![check_state_space(description.state_count)];

    let alphabet: HashSet<char> = description.alphabet.iter().copied().collect();
    checks.extend(
        description
            .transitions
            .iter()
            .map(|t| check_symbol(&alphabet, t)),
    );

    checks.extend(check_determinism(&description.transitions));

    if policy.checks_state_range() {
        checks.extend(check_state_ranges(description));
    }

    Validation::all_vec(checks).map(|_| ())
}

/// Validate and flatten the outcome into a `Result`.
pub fn check(
    description: &AutomatonDescription,
    policy: ValidationPolicy,
) -> Result<(), Vec<Violation>> {
    match validate(description, policy) {
        Validation::Success(()) => Ok(()),
        Validation::Failure(errors) => Err(errors.iter().cloned().collect()),
    }
}

fn check_state_space(state_count: u32) -> Check {
    if state_count == 0 {
        violation(Violation::EmptyStateSpace)
    } else {
        pass()
    }
}

fn check_symbol(alphabet: &HashSet<char>, transition: &TransitionSpec) -> Check {
    if alphabet.contains(&transition.symbol) {
        pass()
    } else {
        violation(Violation::SymbolNotInAlphabet {
            from: transition.from,
            symbol: transition.symbol,
        })
    }
}

// Repeating an identical triple is harmless; only differing destinations
// make the table nondeterministic.
fn check_determinism(transitions: &[TransitionSpec]) -> Vec<Check> {
    let mut seen: HashMap<(StateId, char), StateId> = HashMap::new();
    let mut checks = Vec::new();

    for t in transitions {
        match seen.entry((t.from, t.symbol)) {
            Entry::Vacant(slot) => {
                slot.insert(t.to);
            }
            Entry::Occupied(slot) if *slot.get() != t.to => {
                checks.push(violation(Violation::ConflictingTransition {
                    from: t.from,
                    symbol: t.symbol,
                    first: *slot.get(),
                    second: t.to,
                }));
            }
            Entry::Occupied(_) => {}
        }
    }

    checks
}

fn check_state_ranges(description: &AutomatonDescription) -> Vec<Check> {
    let count = description.state_count;
    let in_range = |state: StateId, role: StateRole| {
        if state.is_within(count) {
            pass()
        } else {
            violation(Violation::StateOutOfRange {
                state,
                state_count: count,
                role,
            })
        }
    };

    let mut checks = vec![in_range(description.initial_state, StateRole::Initial)];
    checks.extend(
        description
            .accepting_states
            .iter()
            .map(|&s| in_range(s, StateRole::Accepting)),
    );
    for t in &description.transitions {
        checks.push(in_range(t.from, StateRole::TransitionSource));
        checks.push(in_range(t.to, StateRole::TransitionTarget));
    }

    checks
}
