//! Macros for compact automaton construction.

/// Build an [`AutomatonModel`](crate::core::AutomatonModel) from a literal
/// definition. Expands to an [`AutomatonBuilder`](crate::builder::AutomatonBuilder)
/// chain and evaluates to `Result<AutomatonModel, BuildError>`.
///
/// # Example
///
/// ```
/// use acceptor::dfa;
///
/// let even_ones = dfa! {
///     states: 2,
///     alphabet: ['0', '1'],
///     initial: 0,
///     accepting: [0],
///     transitions: {
///         0, '0' => 0;
///         0, '1' => 1;
///         1, '0' => 1;
///         1, '1' => 0;
///     }
/// }
/// .unwrap();
///
/// assert_eq!(even_ones.transition_count(), 4);
/// ```
#[macro_export]
macro_rules! dfa {
    (
        states: $count:expr,
        alphabet: [$($symbol:expr),* $(,)?],
        initial: $initial:expr,
        accepting: [$($accepting:expr),* $(,)?],
        transitions: { $($from:expr, $on:expr => $to:expr);* $(;)? } $(,)?
    ) => {
        $crate::builder::AutomatonBuilder::new()
            .states($count)
            $(.symbol($symbol))*
            .initial($initial)
            $(.accept($accepting))*
            $(.transition($from, $on, $to))*
            .build()
    };
}

#[cfg(test)]
mod tests {
    use crate::builder::BuildError;
    use crate::core::StateId;

    #[test]
    fn dfa_macro_builds_model() {
        let model = dfa! {
            states: 2,
            alphabet: ['a'],
            initial: 0,
            accepting: [1],
            transitions: {
                0, 'a' => 1;
                1, 'a' => 0
            }
        }
        .unwrap();

        assert_eq!(
            model.lookup_transition(StateId::new(1), 'a'),
            Some(StateId::new(0))
        );
        assert!(model.is_accepting(StateId::new(1)));
    }

    #[test]
    fn dfa_macro_accepts_empty_lists() {
        let model = dfa! {
            states: 1,
            alphabet: ['x'],
            initial: 0,
            accepting: [],
            transitions: {},
        }
        .unwrap();

        assert!(model.accepting_states().is_empty());
        assert_eq!(model.transition_count(), 0);
    }

    #[test]
    fn dfa_macro_propagates_violations() {
        let result = dfa! {
            states: 1,
            alphabet: ['x'],
            initial: 0,
            accepting: [0],
            transitions: { 0, 'y' => 0 }
        };

        assert!(matches!(result, Err(BuildError::Malformed(_))));
    }
}
