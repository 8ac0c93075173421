//! Guarded status writes.
//!
//! This module is the shell around the pure validator: it reads the stored
//! status, asks the validator, and writes the new status in one store
//! operation. Writes are expressed as Stillwater effects over a
//! [`StatusStore`] environment, so the same repository runs against the
//! in-memory store in tests and a database-backed store in a service.
//!
//! Following the run-then-apply pattern:
//! - `create()` / `change_status()` return an effect
//! - run it against the store to perform the write
//! - pass the resulting [`StatusChange`] to `apply()` to record it

mod error;
mod store;

pub use error::RepositoryError;
pub use store::{InMemoryStore, StatusStore};

use crate::core::{State, StatusChange, StatusHistory};
use crate::validator::StateMachineValidator;
use std::marker::PhantomData;
use stillwater::effect::Effect;
use stillwater::prelude::*;
use tracing::info;

/// Creates records and changes their status through a validator.
pub struct StatusRepository<S: State + 'static, Env: StatusStore<S>> {
    validator: StateMachineValidator<S>,
    initial_states: Vec<S>,
    history: StatusHistory<S>,
    _phantom: PhantomData<Env>,
}

impl<S: State + 'static, Env: StatusStore<S>> StatusRepository<S, Env> {
    pub fn new(validator: StateMachineValidator<S>, initial_states: Vec<S>) -> Self {
        Self {
            validator,
            initial_states,
            history: StatusHistory::new(),
            _phantom: PhantomData,
        }
    }

    pub fn validator(&self) -> &StateMachineValidator<S> {
        &self.validator
    }

    pub fn initial_states(&self) -> &[S] {
        &self.initial_states
    }

    /// Changes recorded through `apply()` (pure)
    pub fn history(&self) -> &StatusHistory<S> {
        &self.history
    }

    /// Create a record in `initial`.
    ///
    /// The initial status is checked before the store is touched.
    pub fn create(
        &self,
        record_id: &str,
        initial: S,
    ) -> impl Effect<Output = StatusChange<S>, Error = RepositoryError, Env = Env> + '_ {
        if let Err(rejection) = self
            .validator
            .validate_initial_state(&initial, &self.initial_states)
        {
            return fail(RepositoryError::Rejected(rejection)).boxed();
        }

        let entity = self.validator.entity().to_string();
        let record_id = record_id.to_string();
        from_fn(
            move |store: &Env| -> Result<StatusChange<S>, RepositoryError> {
                store.insert(&record_id, initial.clone())?;
                info!(
                    entity = %entity,
                    record_id = %record_id,
                    status = initial.name(),
                    "record created"
                );
                Ok(StatusChange::created(record_id.clone(), initial.clone()))
            },
        )
        .boxed()
    }

    /// Move a record to `to`.
    ///
    /// The stored status is read, validated against the table and replaced in
    /// a single store update; a rejected change leaves the record untouched.
    pub fn change_status(
        &self,
        record_id: &str,
        to: S,
    ) -> impl Effect<Output = StatusChange<S>, Error = RepositoryError, Env = Env> + '_ {
        let validator = self.validator.clone();
        let record_id = record_id.to_string();
        from_fn(
            move |store: &Env| -> Result<StatusChange<S>, RepositoryError> {
                let from = store.update(&record_id, |current| {
                    validator.validate_transition(current, &to)?;
                    Ok(to.clone())
                })?;
                info!(
                    entity = %validator.entity(),
                    record_id = %record_id,
                    from = from.name(),
                    to = to.name(),
                    "status changed"
                );
                Ok(StatusChange::transitioned(
                    record_id.clone(),
                    from,
                    to.clone(),
                ))
            },
        )
        .boxed()
    }

    /// Record a change produced by `create()` or `change_status()`.
    pub fn apply(&mut self, change: StatusChange<S>) {
        self.history = self.history.record(change);
    }

    /// Legal next statuses for a stored record, for status-change controls.
    pub fn next_states(
        &self,
        store: &Env,
        record_id: &str,
    ) -> Result<Vec<S>, RepositoryError> {
        let current = store
            .current(record_id)?
            .ok_or_else(|| RepositoryError::NotFound {
                record_id: record_id.to_string(),
            })?;
        Ok(self.validator.possible_next_states(&current))
    }

    /// Whether a stored record could move to `to` right now.
    ///
    /// Missing records and store failures read as `false`.
    pub fn can_change(&self, store: &Env, record_id: &str, to: &S) -> bool {
        match store.current(record_id) {
            Ok(Some(current)) => self.validator.can_transition(&current, to),
            _ => false,
        }
    }
}
