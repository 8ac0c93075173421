//! Status-change history.
//!
//! Every accepted status write produces a [`StatusChange`]. A [`StatusHistory`]
//! keeps them in the order they were applied and never mutates in place.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

/// Record of a single accepted status write.
///
/// `from` is `None` when the record was created in state `to`.
///
/// # Example
///
/// ```rust
/// use statusgate::core::StatusChange;
///
/// let created = StatusChange::created("bus-17", String::from("draft"));
/// assert!(created.is_creation());
///
/// let moved = StatusChange::transitioned("bus-17", String::from("draft"), String::from("active"));
/// assert_eq!(moved.from.as_deref(), Some("draft"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StatusChange<S: State> {
    /// Unique id of this change
    pub id: Uuid,
    /// Id of the record whose status changed
    pub record_id: String,
    /// Status before the change, absent on creation
    pub from: Option<S>,
    /// Status after the change
    pub to: S,
    /// When the change was accepted
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StatusChange<S> {
    /// A record was created directly in `to`.
    pub fn created(record_id: impl Into<String>, to: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            record_id: record_id.into(),
            from: None,
            to,
            timestamp: Utc::now(),
        }
    }

    /// A record moved from `from` to `to`.
    pub fn transitioned(record_id: impl Into<String>, from: S, to: S) -> Self {
        Self {
            id: Uuid::new_v4(),
            record_id: record_id.into(),
            from: Some(from),
            to,
            timestamp: Utc::now(),
        }
    }

    pub fn is_creation(&self) -> bool {
        self.from.is_none()
    }
}

/// Ordered history of status changes.
///
/// History is immutable - [`StatusHistory::record`] returns a new history with
/// the change appended.
///
/// # Example
///
/// ```rust
/// use statusgate::core::{StatusChange, StatusHistory};
///
/// let history = StatusHistory::new()
///     .record(StatusChange::created("v1", String::from("draft")))
///     .record(StatusChange::transitioned("v1", String::from("draft"), String::from("active")));
///
/// let path: Vec<&str> = history.path().into_iter().map(String::as_str).collect();
/// assert_eq!(path, vec!["draft", "active"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StatusHistory<S: State> {
    changes: Vec<StatusChange<S>>,
}

impl<S: State> Default for StatusHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StatusHistory<S> {
    pub fn new() -> Self {
        Self {
            changes: Vec::new(),
        }
    }

    /// Record a change, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, change: StatusChange<S>) -> Self {
        let mut changes = self.changes.clone();
        changes.push(change);
        Self { changes }
    }

    /// States traversed, in order.
    ///
    /// Starts with the first change's `from` when it has one (a history that
    /// begins mid-lifecycle), followed by the `to` of every change.
    pub fn path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(from) = self.changes.first().and_then(|c| c.from.as_ref()) {
            path.push(from);
        }
        for change in &self.changes {
            path.push(&change.to);
        }
        path
    }

    /// Time between the first and last change.
    ///
    /// Returns `None` for an empty history.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.changes.first(), self.changes.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Changes that touched one record, oldest first.
    pub fn for_record(&self, record_id: &str) -> Self {
        Self {
            changes: self
                .changes
                .iter()
                .filter(|c| c.record_id == record_id)
                .cloned()
                .collect(),
        }
    }

    pub fn changes(&self) -> &[StatusChange<S>] {
        &self.changes
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum TestState {
        Draft,
        Active,
        Inactive,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Draft => "draft",
                Self::Active => "active",
                Self::Inactive => "inactive",
            }
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StatusHistory<TestState> = StatusHistory::new();
        assert!(history.is_empty());
        assert!(history.path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StatusHistory::new();
        let new_history = history.record(StatusChange::created("v1", TestState::Draft));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn path_starts_at_creation() {
        let history = StatusHistory::new()
            .record(StatusChange::created("v1", TestState::Draft))
            .record(StatusChange::transitioned(
                "v1",
                TestState::Draft,
                TestState::Active,
            ))
            .record(StatusChange::transitioned(
                "v1",
                TestState::Active,
                TestState::Inactive,
            ));

        let path = history.path();
        assert_eq!(
            path,
            vec![&TestState::Draft, &TestState::Active, &TestState::Inactive]
        );
    }

    #[test]
    fn path_includes_source_when_history_starts_mid_lifecycle() {
        let history = StatusHistory::new().record(StatusChange::transitioned(
            "v1",
            TestState::Active,
            TestState::Inactive,
        ));

        assert_eq!(history.path(), vec![&TestState::Active, &TestState::Inactive]);
    }

    #[test]
    fn for_record_filters_other_records() {
        let history = StatusHistory::new()
            .record(StatusChange::created("v1", TestState::Draft))
            .record(StatusChange::created("v2", TestState::Draft))
            .record(StatusChange::transitioned(
                "v1",
                TestState::Draft,
                TestState::Active,
            ));

        let v1 = history.for_record("v1");
        assert_eq!(v1.len(), 2);
        assert!(v1.changes().iter().all(|c| c.record_id == "v1"));
    }

    #[test]
    fn single_change_has_duration_zero() {
        let history = StatusHistory::new().record(StatusChange::created("v1", TestState::Draft));
        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn change_ids_are_unique() {
        let a = StatusChange::created("v1", TestState::Draft);
        let b = StatusChange::created("v1", TestState::Draft);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StatusHistory::new()
            .record(StatusChange::created("v1", TestState::Draft))
            .record(StatusChange::transitioned(
                "v1",
                TestState::Draft,
                TestState::Active,
            ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StatusHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(history.changes(), deserialized.changes());
    }
}
