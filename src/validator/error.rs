//! Transition validation errors.

use thiserror::Error;

/// Errors signalled by [`StateMachineValidator`](super::StateMachineValidator).
///
/// `UnknownState` means the table and the stored statuses have drifted apart
/// and is a defect. `InvalidTransition` and `InvalidInitialState` are
/// ordinary rejections of what a user asked for.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("Unknown current status '{state}' for {entity}")]
    UnknownState { entity: String, state: String },

    #[error("Invalid state transition for {entity}: cannot change status from '{from}' to '{to}'")]
    InvalidTransition {
        entity: String,
        from: String,
        to: String,
    },

    #[error(
        "Invalid initial status '{state}' for {entity}. Allowed: {}",
        .allowed.join(", ")
    )]
    InvalidInitialState {
        entity: String,
        state: String,
        allowed: Vec<String>,
    },
}

impl TransitionError {
    /// Whether the message can be shown to an end user as-is.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, Self::UnknownState { .. })
    }

    /// Text suitable for a rejected-request response.
    ///
    /// Unknown states are reported generically; their detail belongs in logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::UnknownState { entity, .. } => {
                format!("The status of this {entity} cannot be changed right now")
            }
            other => other.to_string(),
        }
    }

    pub fn entity(&self) -> &str {
        match self {
            Self::UnknownState { entity, .. }
            | Self::InvalidTransition { entity, .. }
            | Self::InvalidInitialState { entity, .. } => entity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_transition_names_entity_and_states() {
        let err = TransitionError::InvalidTransition {
            entity: "Version".to_string(),
            from: "draft".to_string(),
            to: "inactive".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("Version"));
        assert!(message.contains("'draft'"));
        assert!(message.contains("'inactive'"));
        assert!(err.is_user_facing());
        assert_eq!(err.public_message(), message);
    }

    #[test]
    fn initial_state_lists_allowed_values() {
        let err = TransitionError::InvalidInitialState {
            entity: "Driver".to_string(),
            state: "approved".to_string(),
            allowed: vec!["pending".to_string(), "draft".to_string()],
        };
        assert_eq!(
            err.to_string(),
            "Invalid initial status 'approved' for Driver. Allowed: pending, draft"
        );
    }

    #[test]
    fn unknown_state_is_not_exposed_publicly() {
        let err = TransitionError::UnknownState {
            entity: "Route".to_string(),
            state: "archived".to_string(),
        };
        assert!(!err.is_user_facing());
        assert!(!err.public_message().contains("archived"));
        assert_eq!(err.entity(), "Route");
    }
}
