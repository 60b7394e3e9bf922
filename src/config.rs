//! Configuration for loading and validating automata.
//!
//! All fields have defaults, so an empty JSON object is a valid
//! configuration.

use serde::{Deserialize, Serialize};

/// How strictly descriptions are validated at construction time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationPolicy {
    /// Every state id must lie in `[0, state_count)`.
    #[default]
    Strict,
    /// Out-of-range state ids are kept. Transitions from them never match
    /// during evaluation.
    Lenient,
}

impl ValidationPolicy {
    pub fn checks_state_range(self) -> bool {
        matches!(self, Self::Strict)
    }
}

/// Settings shared by the loader and the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptorConfig {
    #[serde(default)]
    pub policy: ValidationPolicy,

    /// Input lines equal to this marker are skipped.
    #[serde(default = "default_skip_marker")]
    pub skip_marker: String,

    /// Line that ends interactive input when appending strings.
    #[serde(default = "default_append_terminator")]
    pub append_terminator: String,
}

fn default_skip_marker() -> String {
    "-".to_string()
}

fn default_append_terminator() -> String {
    "fim".to_string()
}

impl Default for AcceptorConfig {
    fn default() -> Self {
        Self {
            policy: ValidationPolicy::default(),
            skip_marker: default_skip_marker(),
            append_terminator: default_append_terminator(),
        }
    }
}

impl AcceptorConfig {
    /// Parse a configuration from JSON, filling in defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_json_yields_defaults() {
        let config = AcceptorConfig::from_json("{}").unwrap();
        assert_eq!(config, AcceptorConfig::default());
        assert_eq!(config.policy, ValidationPolicy::Strict);
        assert_eq!(config.skip_marker, "-");
        assert_eq!(config.append_terminator, "fim");
    }

    #[test]
    fn policy_parses_lowercase() {
        let config = AcceptorConfig::from_json(r#"{"policy": "lenient"}"#).unwrap();
        assert_eq!(config.policy, ValidationPolicy::Lenient);
        assert!(!config.policy.checks_state_range());
    }

    #[test]
    fn unknown_policy_is_an_error() {
        assert!(AcceptorConfig::from_json(r#"{"policy": "loose"}"#).is_err());
    }
}
