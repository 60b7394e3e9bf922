//! Parser for the plain-text description format.
//!
//! The header is a sequence of whitespace separated tokens that may span any
//! number of lines:
//!
//! ```text
//! <state count>
//! <symbol count> <symbol>...
//! <initial state>
//! <accepting count> <state>...
//! <transition count> (<state> <symbol> <next state>)...
//! ```
//!
//! Every line after the header is an input string. Empty lines and lines
//! consisting of the skip marker (`-` by default) are ignored.

use super::error::DescriptionError;
use super::{AutomatonDescription, TransitionSpec};
use crate::config::AcceptorConfig;
use crate::core::StateId;
use std::str::FromStr;
use tracing::{debug, trace};

/// A parsed description file: the automaton and the strings to run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DescriptionFile {
    pub description: AutomatonDescription,
    pub inputs: Vec<String>,
}

/// Parse a description using the default configuration.
///
/// # Example
///
/// ```rust
/// use acceptor::description::parse_description;
///
/// let text = "2\n2 0 1\n0\n1 0\n4\n0 0 0\n0 1 1\n1 0 1\n1 1 0\n11\n-\n101\n";
/// let file = parse_description(text).unwrap();
///
/// assert_eq!(file.description.state_count, 2);
/// assert_eq!(file.description.transitions.len(), 4);
/// assert_eq!(file.inputs, vec!["11", "101"]);
/// ```
pub fn parse_description(text: &str) -> Result<DescriptionFile, DescriptionError> {
    parse_description_with(text, &AcceptorConfig::default())
}

/// Parse a description, honouring the skip marker from `config`.
pub fn parse_description_with(
    text: &str,
    config: &AcceptorConfig,
) -> Result<DescriptionFile, DescriptionError> {
    let mut cursor = Cursor::new(text);

    let state_count = cursor.number::<u32>("state count")?;

    let symbol_count = cursor.number::<usize>("symbol count")?;
    let alphabet = (0..symbol_count)
        .map(|_| cursor.symbol())
        .collect::<Result<Vec<_>, _>>()?;

    let initial_state = cursor.state("initial state")?;

    let accepting_count = cursor.number::<usize>("accepting state count")?;
    let accepting_states = (0..accepting_count)
        .map(|_| cursor.state("accepting state"))
        .collect::<Result<Vec<_>, _>>()?;

    let transition_count = cursor.number::<usize>("transition count")?;
    let transitions = (0..transition_count)
        .map(|_| -> Result<TransitionSpec, DescriptionError> {
            let from = cursor.state("transition source")?;
            let symbol = cursor.symbol()?;
            let to = cursor.state("transition target")?;
            trace!(%from, %symbol, %to, "transition read");
            Ok(TransitionSpec { from, symbol, to })
        })
        .collect::<Result<Vec<_>, _>>()?;

    let inputs: Vec<String> = cursor
        .into_remaining_lines()
        .filter(|line| !line.is_empty() && *line != config.skip_marker)
        .map(str::to_string)
        .collect();

    debug!(
        states = state_count,
        symbols = alphabet.len(),
        transitions = transitions.len(),
        inputs = inputs.len(),
        "description parsed"
    );

    Ok(DescriptionFile {
        description: AutomatonDescription {
            state_count,
            alphabet,
            initial_state,
            accepting_states,
            transitions,
        },
        inputs,
    })
}

/// Token cursor over the header that remembers where the header ended.
struct Cursor<'a> {
    lines: Vec<&'a str>,
    line: usize,
    column: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().map(|l| l.trim_end_matches('\r')).collect(),
            line: 0,
            column: 0,
        }
    }

    /// Next token with its 1-based line number.
    fn token(&mut self, expected: &'static str) -> Result<(usize, &'a str), DescriptionError> {
        loop {
            let Some(&line) = self.lines.get(self.line) else {
                return Err(DescriptionError::UnexpectedEof { expected });
            };

            let rest = &line[self.column..];
            let trimmed = rest.trim_start();
            if trimmed.is_empty() {
                self.line += 1;
                self.column = 0;
                continue;
            }

            let start = self.column + (rest.len() - trimmed.len());
            let len = trimmed
                .find(char::is_whitespace)
                .unwrap_or(trimmed.len());
            self.column = start + len;

            return Ok((self.line + 1, &line[start..start + len]));
        }
    }

    fn number<T: FromStr>(&mut self, expected: &'static str) -> Result<T, DescriptionError> {
        let (line, token) = self.token(expected)?;
        token.parse().map_err(|_| DescriptionError::Parse {
            line,
            message: format!("expected {expected}, found {token:?}"),
        })
    }

    fn state(&mut self, expected: &'static str) -> Result<StateId, DescriptionError> {
        self.number::<u32>(expected).map(StateId::new)
    }

    fn symbol(&mut self) -> Result<char, DescriptionError> {
        let (line, token) = self.token("symbol")?;
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(symbol), None) => Ok(symbol),
            _ => Err(DescriptionError::Parse {
                line,
                message: format!("expected a single-character symbol, found {token:?}"),
            }),
        }
    }

    /// Lines after the header. Text left on the last header line counts as
    /// a line of its own.
    fn into_remaining_lines(self) -> impl Iterator<Item = &'a str> {
        let column = self.column;
        let tail = self
            .lines
            .get(self.line)
            .copied()
            .map(|line: &'a str| line[column..].trim_start());
        let rest = self.lines.into_iter().skip(self.line + 1);
        tail.into_iter().chain(rest)
    }
}
