//! Stateless string evaluation against an automaton model.

use super::run::{Rejection, Run};
use crate::core::{AutomatonModel, Verdict};
use tracing::{debug, trace};

/// Decides membership of strings in the language of an [`AutomatonModel`].
///
/// The evaluator holds no state. The automaton's current-state register
/// lives on the stack of each call, starts at the initial state and is
/// never carried from one string to the next, so one model can serve any
/// number of concurrent evaluations.
///
/// Evaluation is total: a symbol outside the alphabet and an undefined
/// transition both end the walk with [`Verdict::Reject`].
///
/// # Example
///
/// ```rust
/// use acceptor::core::Verdict;
/// use acceptor::dfa;
/// use acceptor::eval::Evaluator;
///
/// let model = dfa! {
///     states: 1,
///     alphabet: ['x'],
///     initial: 0,
///     accepting: [0],
///     transitions: {}
/// }
/// .unwrap();
///
/// let evaluator = Evaluator::new();
/// assert_eq!(evaluator.evaluate(&model, ""), Verdict::Accept);
/// assert_eq!(evaluator.evaluate(&model, "x"), Verdict::Reject);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Evaluator;

impl Evaluator {
    pub fn new() -> Self {
        Self
    }

    /// Run `input` through `model` and return its verdict.
    pub fn evaluate(&self, model: &AutomatonModel, input: &str) -> Verdict {
        let mut current = model.initial_state();

        for symbol in input.chars() {
            if !model.is_symbol_in_alphabet(symbol) {
                trace!(%symbol, "symbol outside alphabet");
                return Verdict::Reject;
            }
            match model.lookup_transition(current, symbol) {
                Some(next) => current = next,
                None => {
                    trace!(state = %current, %symbol, "no transition defined");
                    return Verdict::Reject;
                }
            }
        }

        Verdict::from_accepted(model.is_accepting(current))
    }

    /// Like [`evaluate`](Self::evaluate), but records the visited states and
    /// the reason for a rejection.
    pub fn trace(&self, model: &AutomatonModel, input: &str) -> Run {
        let mut run = Run::start(model.initial_state());

        for (position, symbol) in input.chars().enumerate() {
            if !model.is_symbol_in_alphabet(symbol) {
                return run.reject(Rejection::UnknownSymbol { position, symbol });
            }
            let state = run.final_state();
            match model.lookup_transition(state, symbol) {
                Some(next) => run.advance(next),
                None => {
                    return run.reject(Rejection::Stuck {
                        position,
                        state,
                        symbol,
                    })
                }
            }
        }

        let state = run.final_state();
        if model.is_accepting(state) {
            run
        } else {
            run.reject(Rejection::NonAccepting { state })
        }
    }

    /// Evaluate each input in order; verdict `i` belongs to input `i`.
    pub fn evaluate_batch<I, S>(&self, model: &AutomatonModel, inputs: I) -> Vec<Verdict>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let verdicts: Vec<Verdict> = inputs
            .into_iter()
            .map(|input| self.evaluate(model, input.as_ref()))
            .collect();

        debug!(
            total = verdicts.len(),
            accepted = verdicts.iter().filter(|v| v.is_accept()).count(),
            "batch evaluated"
        );
        verdicts
    }

    /// Evaluate a batch on the rayon thread pool, preserving input order.
    #[cfg(feature = "parallel")]
    pub fn evaluate_batch_parallel<S>(&self, model: &AutomatonModel, inputs: &[S]) -> Vec<Verdict>
    where
        S: AsRef<str> + Sync,
    {
        use rayon::prelude::*;

        let verdicts: Vec<Verdict> = inputs
            .par_iter()
            .map(|input| self.evaluate(model, input.as_ref()))
            .collect();

        debug!(total = verdicts.len(), "parallel batch evaluated");
        verdicts
    }
}
