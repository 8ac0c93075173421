//! Structural problems a transition table can have.

use thiserror::Error;

/// A structural problem found while auditing a table.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TableIssue {
    #[error("'{from}' leads to '{to}', which has no rule of its own")]
    DanglingDestination { from: String, to: String },

    #[error("Initial status '{state}' has no rule")]
    InitialStateWithoutRule { state: String },

    #[error("'{state}' is neither an initial status nor reachable from any rule")]
    UnreachableState { state: String },

    #[error("No initial statuses declared")]
    NoInitialStates,
}
