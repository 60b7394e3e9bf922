//! String evaluation.
//!
//! [`Evaluator`] walks input strings through an [`AutomatonModel`](crate::core::AutomatonModel)
//! and never fails: every string gets a [`Verdict`](crate::core::Verdict).
//! [`Evaluator::trace`] additionally returns a [`Run`] explaining the outcome.

mod evaluator;
mod run;

pub use evaluator::Evaluator;
pub use run::{Rejection, Run};
