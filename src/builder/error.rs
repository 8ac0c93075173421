//! Build errors for transition tables and validators.

use thiserror::Error;

/// Errors that can occur when building transition tables and validators.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("Entity name not specified. Call .entity(name) before .build()")]
    MissingEntityName,

    #[error("No transition rules defined. Add at least one rule")]
    NoRules,

    #[error("Duplicate transition rule for state '{state}'. Declare each source state once")]
    DuplicateRule { state: String },
}
