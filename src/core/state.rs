//! The `State` trait describing a status alphabet.
//!
//! A state is an opaque label. It has no internal structure and two states are
//! the same state only when they compare equal.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use thiserror::Error;

/// Trait for values that can occupy a status column.
///
/// # Required Traits
///
/// - `Clone`: states are copied into errors, history and successor lists
/// - `Eq` + `Hash`: transition tables index their rules by source state
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: tables and history are persisted
///
/// # Example
///
/// ```rust
/// use statusgate::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum BusStatus {
///     Available,
///     InService,
///     Retired,
/// }
///
/// impl State for BusStatus {
///     fn name(&self) -> &str {
///         match self {
///             Self::Available => "available",
///             Self::InService => "in_service",
///             Self::Retired => "retired",
///         }
///     }
/// }
///
/// assert_eq!(BusStatus::InService.name(), "in_service");
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Label used in error messages, logs and persisted columns.
    fn name(&self) -> &str;
}

/// Raw string labels, for tables whose alphabet is only known at runtime.
impl State for String {
    fn name(&self) -> &str {
        self.as_str()
    }
}

/// Returned when a persisted label does not name any state of an alphabet.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("'{label}' is not a known {alphabet} value")]
pub struct ParseStateError {
    pub alphabet: &'static str,
    pub label: String,
}
