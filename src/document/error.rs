//! Table document error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while reading or writing table documents
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Serialization to JSON or binary format failed
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    /// Deserialization from JSON or binary format failed
    #[error("Deserialization failed: {0}")]
    DeserializationFailed(String),

    /// Document version is not supported by this version
    #[error("Unsupported table document version {found}, supported: {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },

    /// Rules in the document do not form a valid table
    #[error("Invalid table document: {0}")]
    Invalid(#[from] BuildError),
}
