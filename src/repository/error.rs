//! Repository errors.

use crate::validator::TransitionError;
use thiserror::Error;

/// Errors that can occur while creating records or changing their status
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("No record with id '{record_id}'")]
    NotFound { record_id: String },

    #[error("A record with id '{record_id}' already exists")]
    AlreadyExists { record_id: String },

    #[error(transparent)]
    Rejected(#[from] TransitionError),

    #[error("Status store lock poisoned")]
    StorePoisoned,
}
