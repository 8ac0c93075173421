//! Storage for the persisted status column.

use crate::core::State;
use crate::repository::error::RepositoryError;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

/// Where record statuses live.
///
/// `update` is the transaction boundary: the implementation must hold the row
/// for the whole read-validate-write so that no other writer can change the
/// status between the check and the write.
pub trait StatusStore<S: State>: Clone + Send + Sync + 'static {
    /// Current status of a record, `None` if the record does not exist.
    fn current(&self, record_id: &str) -> Result<Option<S>, RepositoryError>;

    /// Create a record. Fails if the id is taken.
    fn insert(&self, record_id: &str, status: S) -> Result<(), RepositoryError>;

    /// Replace a record's status with the value `update` computes from the
    /// current one, returning the previous status.
    ///
    /// Nothing is written when `update` fails.
    fn update<F>(&self, record_id: &str, update: F) -> Result<S, RepositoryError>
    where
        F: FnOnce(&S) -> Result<S, RepositoryError>;
}

/// In-process store keyed by record id.
#[derive(Clone, Debug)]
pub struct InMemoryStore<S: State> {
    rows: Arc<RwLock<HashMap<String, S>>>,
}

impl<S: State> Default for InMemoryStore<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> InMemoryStore<S> {
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        let rows = self.rows.read().map_err(|_| RepositoryError::StorePoisoned)?;
        Ok(rows.len())
    }

    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }
}

impl<S: State + 'static> StatusStore<S> for InMemoryStore<S> {
    fn current(&self, record_id: &str) -> Result<Option<S>, RepositoryError> {
        let rows = self.rows.read().map_err(|_| RepositoryError::StorePoisoned)?;
        Ok(rows.get(record_id).cloned())
    }

    fn insert(&self, record_id: &str, status: S) -> Result<(), RepositoryError> {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| RepositoryError::StorePoisoned)?;
        if rows.contains_key(record_id) {
            return Err(RepositoryError::AlreadyExists {
                record_id: record_id.to_string(),
            });
        }
        rows.insert(record_id.to_string(), status);
        Ok(())
    }

    fn update<F>(&self, record_id: &str, update: F) -> Result<S, RepositoryError>
    where
        F: FnOnce(&S) -> Result<S, RepositoryError>,
    {
        let mut rows = self
            .rows
            .write()
            .map_err(|_| RepositoryError::StorePoisoned)?;
        let row = rows
            .get_mut(record_id)
            .ok_or_else(|| RepositoryError::NotFound {
                record_id: record_id.to_string(),
            })?;
        let next = update(row)?;
        Ok(std::mem::replace(row, next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_then_read() {
        let store = InMemoryStore::new();
        store.insert("bus-1", "available".to_string()).unwrap();

        assert_eq!(
            store.current("bus-1").unwrap(),
            Some("available".to_string())
        );
        assert_eq!(store.current("bus-2").unwrap(), None);
    }

    #[test]
    fn insert_rejects_existing_id() {
        let store = InMemoryStore::new();
        store.insert("bus-1", "available".to_string()).unwrap();

        let err = store.insert("bus-1", "retired".to_string()).unwrap_err();
        assert_eq!(
            err,
            RepositoryError::AlreadyExists {
                record_id: "bus-1".to_string()
            }
        );
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn update_returns_previous_status() {
        let store = InMemoryStore::new();
        store.insert("bus-1", "available".to_string()).unwrap();

        let previous = store
            .update("bus-1", |_| Ok("in_service".to_string()))
            .unwrap();

        assert_eq!(previous, "available");
        assert_eq!(
            store.current("bus-1").unwrap(),
            Some("in_service".to_string())
        );
    }

    #[test]
    fn failed_update_writes_nothing() {
        let store = InMemoryStore::new();
        store.insert("bus-1", "available".to_string()).unwrap();

        let result = store.update("bus-1", |_| Err(RepositoryError::StorePoisoned));

        assert!(result.is_err());
        assert_eq!(
            store.current("bus-1").unwrap(),
            Some("available".to_string())
        );
    }

    #[test]
    fn update_of_missing_record_fails() {
        let store: InMemoryStore<String> = InMemoryStore::new();
        let result = store.update("ghost", |s| Ok(s.clone()));
        assert!(matches!(result, Err(RepositoryError::NotFound { .. })));
    }

    #[test]
    fn clones_share_rows() {
        let store = InMemoryStore::new();
        let other = store.clone();
        store.insert("bus-1", "available".to_string()).unwrap();
        assert!(!other.is_empty().unwrap());
    }
}
