//! Transition tables as configuration.
//!
//! A [`TableDocument`] is the serializable form of one entity's status
//! lifecycle: its name, the statuses new records may start in, and its rules.
//! Documents can be kept in JSON next to other service configuration or in
//! a compact binary form.

use crate::core::State;
use crate::table::{TransitionRule, TransitionTable};
use crate::validator::StateMachineValidator;
use serde::{Deserialize, Serialize};
use std::io::Read;

pub mod error;

pub use error::DocumentError;

/// Version identifier for the document format
pub const DOCUMENT_VERSION: u32 = 1;

/// Serializable definition of one entity's status lifecycle.
///
/// # Example
///
/// ```rust
/// use statusgate::document::TableDocument;
///
/// let json = r#"{
///     "version": 1,
///     "entity": "Version",
///     "initial_states": ["draft"],
///     "rules": [
///         { "from": "draft", "to": ["active"] },
///         { "from": "active", "to": ["inactive"] },
///         { "from": "inactive", "to": [] }
///     ]
/// }"#;
///
/// let document: TableDocument<String> = TableDocument::from_json(json).unwrap();
/// let (validator, initial) = document.into_parts().unwrap();
///
/// assert_eq!(validator.entity(), "Version");
/// assert_eq!(initial, vec!["draft".to_string()]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct TableDocument<S: State> {
    /// Document format version
    pub version: u32,

    /// Entity name used in error messages
    pub entity: String,

    /// Statuses a new record may start in
    #[serde(default)]
    pub initial_states: Vec<S>,

    /// One rule per source status
    pub rules: Vec<TransitionRule<S>>,
}

impl<S: State> TableDocument<S> {
    pub fn new(
        entity: impl Into<String>,
        initial_states: Vec<S>,
        rules: Vec<TransitionRule<S>>,
    ) -> Self {
        Self {
            version: DOCUMENT_VERSION,
            entity: entity.into(),
            initial_states,
            rules,
        }
    }

    /// Capture an existing validator and its initial statuses.
    pub fn from_validator(validator: &StateMachineValidator<S>, initial_states: &[S]) -> Self {
        Self::new(
            validator.entity(),
            initial_states.to_vec(),
            validator.table().rules().to_vec(),
        )
    }

    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DocumentError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let document: Self = serde_json::from_str(json)
            .map_err(|e| DocumentError::DeserializationFailed(e.to_string()))?;
        document.check_version()?;
        Ok(document)
    }

    /// Read a JSON document, e.g. from a configuration file.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DocumentError> {
        let document: Self = serde_json::from_reader(reader)
            .map_err(|e| DocumentError::DeserializationFailed(e.to_string()))?;
        document.check_version()?;
        Ok(document)
    }

    pub fn to_binary(&self) -> Result<Vec<u8>, DocumentError> {
        bincode::serialize(self).map_err(|e| DocumentError::SerializationFailed(e.to_string()))
    }

    pub fn from_binary(bytes: &[u8]) -> Result<Self, DocumentError> {
        let document: Self = bincode::deserialize(bytes)
            .map_err(|e| DocumentError::DeserializationFailed(e.to_string()))?;
        document.check_version()?;
        Ok(document)
    }

    /// Build the validator, returning it with the document's initial statuses.
    pub fn into_parts(self) -> Result<(StateMachineValidator<S>, Vec<S>), DocumentError> {
        self.check_version()?;
        let table = TransitionTable::new(self.rules)?;
        Ok((
            StateMachineValidator::from_table(table, self.entity),
            self.initial_states,
        ))
    }

    fn check_version(&self) -> Result<(), DocumentError> {
        if self.version != DOCUMENT_VERSION {
            return Err(DocumentError::UnsupportedVersion {
                found: self.version,
                supported: DOCUMENT_VERSION,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuildError;

    fn s(label: &str) -> String {
        label.to_string()
    }

    fn driver_document() -> TableDocument<String> {
        TableDocument::new(
            "Driver",
            vec![s("pending")],
            vec![
                TransitionRule::new(s("pending"), [s("approved"), s("rejected")]),
                TransitionRule::terminal(s("approved")),
                TransitionRule::terminal(s("rejected")),
            ],
        )
    }

    #[test]
    fn json_document_builds_validator() {
        let json = driver_document().to_json().unwrap();
        let document: TableDocument<String> = TableDocument::from_json(&json).unwrap();
        let (validator, initial) = document.into_parts().unwrap();

        assert_eq!(initial, vec![s("pending")]);
        assert!(validator.can_transition(&s("pending"), &s("rejected")));
        assert!(!validator.can_transition(&s("approved"), &s("pending")));
    }

    #[test]
    fn binary_document_decodes_unchanged() {
        let document = driver_document();
        let bytes = document.to_binary().unwrap();
        let decoded: TableDocument<String> = TableDocument::from_binary(&bytes).unwrap();
        assert_eq!(decoded, document);
    }

    #[test]
    fn reader_accepts_missing_initial_states() {
        let json = br#"{"version":1,"entity":"Route","rules":[{"from":"draft","to":[]}]}"#;
        let document: TableDocument<String> = TableDocument::from_reader(&json[..]).unwrap();
        assert!(document.initial_states.is_empty());
    }

    #[test]
    fn unsupported_version_is_rejected() {
        let json = r#"{"version":2,"entity":"Route","initial_states":[],"rules":[]}"#;
        let result = TableDocument::<String>::from_json(json);
        assert!(matches!(
            result,
            Err(DocumentError::UnsupportedVersion {
                found: 2,
                supported: 1
            })
        ));
    }

    #[test]
    fn malformed_json_is_reported() {
        let result = TableDocument::<String>::from_json("{\"version\":");
        assert!(matches!(
            result,
            Err(DocumentError::DeserializationFailed(_))
        ));
    }

    #[test]
    fn duplicate_rules_in_document_are_rejected() {
        let document = TableDocument::new(
            "Route",
            vec![s("draft")],
            vec![
                TransitionRule::new(s("draft"), [s("active")]),
                TransitionRule::terminal(s("draft")),
            ],
        );

        match document.into_parts() {
            Err(DocumentError::Invalid(BuildError::DuplicateRule { state })) => {
                assert_eq!(state, "draft")
            }
            other => panic!("expected duplicate rule error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn repeated_destinations_in_document_are_collapsed() {
        let json = r#"{
            "version": 1,
            "entity": "Version",
            "initial_states": ["draft"],
            "rules": [
                { "from": "draft", "to": ["active", "active"] },
                { "from": "active", "to": [] }
            ]
        }"#;

        let document: TableDocument<String> = TableDocument::from_json(json).unwrap();
        let (validator, _) = document.into_parts().unwrap();

        assert_eq!(validator.possible_next_states(&s("draft")), vec![s("active")]);
        assert_eq!(validator.table().rules()[0].to, vec![s("active")]);
    }

    #[test]
    fn from_validator_captures_rules_and_entity() {
        let (validator, initial) = driver_document().into_parts().unwrap();
        let captured = TableDocument::from_validator(&validator, &initial);
        assert_eq!(captured, driver_document());
    }
}
