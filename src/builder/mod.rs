//! Builder API for declaring transition tables.
//!
//! This module provides a fluent builder and macros for declaring status
//! alphabets and their transition rules with minimal boilerplate.

pub mod error;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use table::TableBuilder;

use crate::core::State;
use crate::validator::StateMachineValidator;

/// Build a validator for a linear lifecycle: each state may only move to the
/// one after it, and the last state is terminal.
///
/// # Example
///
/// ```
/// use statusgate::builder::linear_lifecycle;
///
/// let s = |label: &str| label.to_string();
/// let validator = linear_lifecycle("Version", &[s("draft"), s("active"), s("inactive")]).unwrap();
///
/// assert!(validator.can_transition(&s("draft"), &s("active")));
/// assert!(!validator.can_transition(&s("draft"), &s("inactive")));
/// assert!(validator.table().is_terminal(&s("inactive")));
/// ```
pub fn linear_lifecycle<S: State>(
    entity: impl Into<String>,
    states: &[S],
) -> Result<StateMachineValidator<S>, BuildError> {
    let mut builder = TableBuilder::new().entity(entity);
    for (position, state) in states.iter().enumerate() {
        builder = match states.get(position + 1) {
            Some(next) => builder.rule(state.clone(), [next.clone()]),
            None => builder.terminal(state.clone()),
        };
    }
    builder.build()
}
