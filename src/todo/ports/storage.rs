//! Storage port for the persisted task list.

use crate::todo::domain::TaskRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task storage operations.
pub type TaskStorageResult<T> = Result<T, TaskStorageError>;

/// Payload written to the storage slot: the full list plus the time it was
/// written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTasks {
    todos: Vec<TaskRecord>,
    #[serde(rename = "lastUpdated")]
    last_updated: DateTime<Utc>,
}

impl StoredTasks {
    /// Creates a payload for `todos` stamped with `last_updated`.
    #[must_use]
    pub const fn new(todos: Vec<TaskRecord>, last_updated: DateTime<Utc>) -> Self {
        Self {
            todos,
            last_updated,
        }
    }

    /// Returns the stored records.
    #[must_use]
    pub fn todos(&self) -> &[TaskRecord] {
        &self.todos
    }

    /// Returns when the payload was written.
    #[must_use]
    pub const fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    /// Consumes the payload, returning the records.
    #[must_use]
    pub fn into_todos(self) -> Vec<TaskRecord> {
        self.todos
    }
}

/// Durable slot holding the task list.
///
/// Implementations report failures; deciding to ignore them is the caller's
/// business.
pub trait TaskStorage: Send + Sync {
    /// Reads the stored payload.
    ///
    /// Returns `Ok(None)` when nothing has been saved yet.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError`] when the slot cannot be read or decoded.
    fn load(&self) -> TaskStorageResult<Option<StoredTasks>>;

    /// Replaces the stored payload.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError`] when the payload cannot be encoded or
    /// written.
    fn save(&self, snapshot: &StoredTasks) -> TaskStorageResult<()>;
}

/// Errors returned by task storage implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStorageError {
    /// Reading or writing the slot failed.
    #[error("storage I/O error: {0}")]
    Io(Arc<std::io::Error>),

    /// The payload could not be encoded or decoded.
    #[error("storage serialisation error: {0}")]
    Serialization(Arc<serde_json::Error>),

    /// The storage backend is not usable.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for TaskStorageError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(Arc::new(err))
    }
}

impl From<serde_json::Error> for TaskStorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(Arc::new(err))
    }
}
