//! Versioned snapshots of automaton descriptions.
//!
//! A snapshot is the serializable form of a validated model. JSON is meant
//! for humans and diffs, the binary form for compact storage.

use super::error::DescriptionError;
use super::AutomatonDescription;
use crate::builder::error::BuildError;
use crate::config::ValidationPolicy;
use crate::core::AutomatonModel;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Version identifier for the snapshot format
pub const SNAPSHOT_VERSION: u32 = 1;

/// Serializable snapshot of an automaton description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Snapshot format version
    pub version: u32,

    /// Unique snapshot identifier
    pub id: Uuid,

    /// When the snapshot was taken
    pub created_at: DateTime<Utc>,

    pub description: AutomatonDescription,
}

impl Snapshot {
    pub fn new(description: AutomatonDescription) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            description,
        }
    }

    /// Snapshot a constructed model.
    pub fn of(model: &AutomatonModel) -> Self {
        Self::new(model.to_description())
    }

    pub fn to_json(&self) -> Result<String, DescriptionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, DescriptionError> {
        let snapshot: Self = serde_json::from_str(json)?;
        snapshot.check_version()
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, DescriptionError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, DescriptionError> {
        let snapshot: Self = bincode::deserialize(bytes)?;
        snapshot.check_version()
    }

    /// Rebuild the model, re-running validation under `policy`.
    pub fn restore(&self, policy: ValidationPolicy) -> Result<AutomatonModel, BuildError> {
        AutomatonModel::construct_with(&self.description, policy)
    }

    fn check_version(self) -> Result<Self, DescriptionError> {
        if self.version == SNAPSHOT_VERSION {
            Ok(self)
        } else {
            Err(DescriptionError::UnsupportedVersion {
                found: self.version,
                supported: SNAPSHOT_VERSION,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateId;
    use crate::description::TransitionSpec;

    fn model() -> AutomatonModel {
        let description = AutomatonDescription {
            state_count: 2,
            alphabet: vec!['a', 'b'],
            initial_state: StateId::new(0),
            accepting_states: vec![StateId::new(1)],
            transitions: vec![
                TransitionSpec::new(0, 'a', 1),
                TransitionSpec::new(1, 'b', 0),
            ],
        };
        AutomatonModel::construct(&description).unwrap()
    }

    #[test]
    fn json_snapshot_restores_model() {
        let snapshot = Snapshot::of(&model());
        let json = snapshot.to_json().unwrap();

        let loaded = Snapshot::from_json(&json).unwrap();
        assert_eq!(loaded, snapshot);
        assert_eq!(loaded.restore(ValidationPolicy::Strict).unwrap(), model());
    }

    #[test]
    fn binary_snapshot_restores_model() {
        let snapshot = Snapshot::of(&model());
        let bytes = snapshot.to_binary().unwrap();

        let loaded = Snapshot::from_binary(&bytes).unwrap();
        assert_eq!(loaded.id, snapshot.id);
        assert_eq!(loaded.restore(ValidationPolicy::Strict).unwrap(), model());
    }

    #[test]
    fn unknown_version_is_rejected() {
        let mut snapshot = Snapshot::of(&model());
        snapshot.version = SNAPSHOT_VERSION + 1;
        let json = serde_json::to_string(&snapshot).unwrap();

        let err = Snapshot::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            DescriptionError::UnsupportedVersion { found: 2, supported: 1 }
        ));
    }

    #[test]
    fn corrupted_binary_is_an_error() {
        let err = Snapshot::from_binary(&[1, 2, 3]).unwrap_err();
        assert!(matches!(err, DescriptionError::Binary(_)));
    }

    #[test]
    fn restore_revalidates_edited_snapshots() {
        let mut snapshot = Snapshot::of(&model());
        snapshot.description.transitions.push(TransitionSpec::new(0, 'c', 0));

        assert!(matches!(
            snapshot.restore(ValidationPolicy::Lenient),
            Err(BuildError::Malformed(_))
        ));
    }
}
