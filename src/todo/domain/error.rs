//! Error types for the to-do domain.

use super::TaskId;
use thiserror::Error;

/// Errors returned by [`super::TaskStore`] mutations.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum StoreError {
    /// No task with the identifier exists in the store.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Error returned while parsing a priority from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

/// Error returned when an export document cannot be serialised.
#[derive(Debug, Error)]
#[error("failed to serialise task export: {0}")]
pub struct ExportError(#[from] pub serde_json::Error);
