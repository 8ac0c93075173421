//! Core status types.
//!
//! - State alphabets via the `State` trait
//! - Immutable status-change history
//!
//! Nothing in this module performs I/O.

mod history;
mod state;

pub use history::{StatusChange, StatusHistory};
pub use state::{ParseStateError, State};
