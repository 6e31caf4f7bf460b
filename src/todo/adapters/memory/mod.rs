//! In-memory storage slot, for tests and ephemeral sessions.

use std::sync::{Arc, RwLock};

use crate::todo::ports::{StoredTasks, TaskStorage, TaskStorageError, TaskStorageResult};

/// Thread-safe in-memory storage slot.
///
/// Clones share the same slot, so a test can keep a handle and inspect what
/// the service saved.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStorage {
    slot: Arc<RwLock<Option<StoredTasks>>>,
}

impl InMemoryTaskStorage {
    /// Creates an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a slot that already holds `snapshot`.
    #[must_use]
    pub fn with_snapshot(snapshot: StoredTasks) -> Self {
        Self {
            slot: Arc::new(RwLock::new(Some(snapshot))),
        }
    }

    /// Returns a copy of the last saved payload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError::Unavailable`] when the lock is poisoned.
    pub fn snapshot(&self) -> TaskStorageResult<Option<StoredTasks>> {
        self.load()
    }
}

impl TaskStorage for InMemoryTaskStorage {
    fn load(&self) -> TaskStorageResult<Option<StoredTasks>> {
        let slot = self
            .slot
            .read()
            .map_err(|err| TaskStorageError::Unavailable(err.to_string()))?;
        Ok(slot.clone())
    }

    fn save(&self, snapshot: &StoredTasks) -> TaskStorageResult<()> {
        let mut slot = self
            .slot
            .write()
            .map_err(|err| TaskStorageError::Unavailable(err.to_string()))?;
        *slot = Some(snapshot.clone());
        Ok(())
    }
}
