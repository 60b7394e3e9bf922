//! Acceptor: a deterministic finite automaton acceptor
//!
//! Acceptor follows a "pure core, imperative shell" layout. The automaton
//! model and the evaluator are pure: a model is validated once, never
//! mutated, and every evaluation is a total function of `(model, input)`.
//! Loading description files, writing reports and appending inputs live in
//! the outer modules and in the `acceptor` binary.
//!
//! # Core Concepts
//!
//! - **AutomatonModel**: validated, immutable DFA with a partial transition table
//! - **Evaluator**: decides `Accept`/`Reject` for one string; never fails
//! - **Validation**: construction reports every structural violation at once
//!
//! # Example
//!
//! ```rust
//! use acceptor::{dfa, Evaluator, Verdict};
//!
//! let even_ones = dfa! {
//!     states: 2,
//!     alphabet: ['0', '1'],
//!     initial: 0,
//!     accepting: [0],
//!     transitions: {
//!         0, '0' => 0;
//!         0, '1' => 1;
//!         1, '0' => 1;
//!         1, '1' => 0;
//!     }
//! }
//! .unwrap();
//!
//! let evaluator = Evaluator::new();
//! assert_eq!(evaluator.evaluate(&even_ones, ""), Verdict::Accept);
//! assert_eq!(evaluator.evaluate(&even_ones, "1"), Verdict::Reject);
//! assert_eq!(evaluator.evaluate(&even_ones, "1001"), Verdict::Accept);
//! assert_eq!(evaluator.evaluate(&even_ones, "1a01"), Verdict::Reject);
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod description;
pub mod eval;
pub mod report;
pub mod validation;

// Re-export commonly used types
pub use builder::{AutomatonBuilder, BuildError};
pub use config::{AcceptorConfig, ValidationPolicy};
pub use crate::core::{AutomatonModel, StateId, Verdict};
pub use description::{AutomatonDescription, DescriptionError, TransitionSpec};
pub use eval::{Evaluator, Rejection, Run};
pub use report::BatchReport;
pub use validation::Violation;
