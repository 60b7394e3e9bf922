//! Validation-based structural checks for automaton descriptions.
//!
//! Descriptions are checked with Stillwater's `Validation` type so that ALL
//! violations are reported together instead of stopping at the first one.
//! A description with three unknown symbols and a dangling initial state
//! yields four violations in a single pass.
//!
//! # Example
//!
//! ```rust
//! use acceptor::config::ValidationPolicy;
//! use acceptor::core::StateId;
//! use acceptor::description::{AutomatonDescription, TransitionSpec};
//! use acceptor::validation::{check, Violation};
//!
//! let description = AutomatonDescription {
//!     state_count: 1,
//!     alphabet: vec!['a'],
//!     initial_state: StateId::new(0),
//!     accepting_states: vec![],
//!     transitions: vec![TransitionSpec::new(0, 'b', 0)],
//! };
//!
//! let violations = check(&description, ValidationPolicy::Strict).unwrap_err();
//! assert_eq!(
//!     violations,
//!     vec![Violation::SymbolNotInAlphabet { from: StateId::new(0), symbol: 'b' }]
//! );
//! ```

pub mod rules;
pub mod violations;

pub use rules::{check, validate, Check};
pub use violations::{StateRole, Violation};
