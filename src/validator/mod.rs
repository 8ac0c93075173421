//! Guards for status changes.
//!
//! A [`StateMachineValidator`] binds one transition table to the name of the
//! entity it governs. It holds no other state: every call sees the current
//! status as an argument and only answers whether a move is legal. Writing the
//! new status is the caller's job, normally inside the same transaction that
//! read the old one.

mod error;

pub use error::TransitionError;

use crate::builder::BuildError;
use crate::core::State;
use crate::table::{TransitionRule, TransitionTable};
use std::sync::Arc;
use tracing::{debug, warn};

/// Transition checks over one table.
///
/// Cloning is cheap; the table is shared.
///
/// # Example
///
/// ```rust
/// use statusgate::table::TransitionRule;
/// use statusgate::validator::{StateMachineValidator, TransitionError};
///
/// let s = |label: &str| label.to_string();
/// let validator = StateMachineValidator::new(
///     vec![
///         TransitionRule::new(s("draft"), [s("active")]),
///         TransitionRule::new(s("active"), [s("inactive")]),
///         TransitionRule::terminal(s("inactive")),
///     ],
///     "Version",
/// )
/// .unwrap();
///
/// assert!(validator.validate_transition(&s("draft"), &s("active")).is_ok());
/// assert!(matches!(
///     validator.validate_transition(&s("inactive"), &s("active")),
///     Err(TransitionError::InvalidTransition { .. })
/// ));
/// assert!(matches!(
///     validator.validate_transition(&s("archived"), &s("draft")),
///     Err(TransitionError::UnknownState { .. })
/// ));
/// assert_eq!(validator.possible_next_states(&s("active")), vec![s("inactive")]);
/// ```
#[derive(Clone, Debug)]
pub struct StateMachineValidator<S: State> {
    table: Arc<TransitionTable<S>>,
    entity: String,
}

impl<S: State> StateMachineValidator<S> {
    /// Build a validator from rules; fails on a duplicate source state.
    pub fn new(
        rules: Vec<TransitionRule<S>>,
        entity: impl Into<String>,
    ) -> Result<Self, BuildError> {
        let table = TransitionTable::new(rules)?;
        Ok(Self::from_table(table, entity))
    }

    pub fn from_table(table: TransitionTable<S>, entity: impl Into<String>) -> Self {
        Self {
            table: Arc::new(table),
            entity: entity.into(),
        }
    }

    pub fn entity(&self) -> &str {
        &self.entity
    }

    pub fn table(&self) -> &TransitionTable<S> {
        &self.table
    }

    /// Check that `from` may move directly to `to`.
    ///
    /// Fails with [`TransitionError::UnknownState`] when the table has no rule
    /// for `from`, and with [`TransitionError::InvalidTransition`] when the rule
    /// exists but does not list `to`.
    pub fn validate_transition(&self, from: &S, to: &S) -> Result<(), TransitionError> {
        let Some(rule) = self.table.rule_for(from) else {
            warn!(
                entity = %self.entity,
                state = from.name(),
                "status has no transition rule"
            );
            return Err(TransitionError::UnknownState {
                entity: self.entity.clone(),
                state: from.name().to_string(),
            });
        };

        if !rule.allows(to) {
            debug!(
                entity = %self.entity,
                from = from.name(),
                to = to.name(),
                "status change rejected"
            );
            return Err(TransitionError::InvalidTransition {
                entity: self.entity.clone(),
                from: from.name().to_string(),
                to: to.name().to_string(),
            });
        }

        debug!(
            entity = %self.entity,
            from = from.name(),
            to = to.name(),
            "status change allowed"
        );
        Ok(())
    }

    /// Check that a new record may start in `initial`.
    ///
    /// Membership only; order and repeats in `allowed` make no difference.
    pub fn validate_initial_state(&self, initial: &S, allowed: &[S]) -> Result<(), TransitionError> {
        if allowed.contains(initial) {
            return Ok(());
        }

        debug!(
            entity = %self.entity,
            state = initial.name(),
            "initial status rejected"
        );
        let mut names: Vec<String> = Vec::with_capacity(allowed.len());
        for state in allowed {
            let name = state.name().to_string();
            if !names.contains(&name) {
                names.push(name);
            }
        }
        Err(TransitionError::InvalidInitialState {
            entity: self.entity.clone(),
            state: initial.name().to_string(),
            allowed: names,
        })
    }

    /// Legal successors of `current`, in declaration order.
    ///
    /// Never fails: a state without a rule simply has no successors.
    pub fn possible_next_states(&self, current: &S) -> Vec<S> {
        self.table
            .successors(current)
            .map(<[S]>::to_vec)
            .unwrap_or_default()
    }

    /// Non-failing form of [`validate_transition`](Self::validate_transition).
    ///
    /// Any error, including an unknown source state, yields `false`.
    pub fn can_transition(&self, from: &S, to: &S) -> bool {
        self.validate_transition(from, to).is_ok()
    }
}
