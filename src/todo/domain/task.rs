//! Task record aggregate.

use super::{Priority, TaskId, ValidatedSubmission};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do entry.
///
/// The serialised field names (`task`, `date`, `createdAt`) are the ones
/// written to storage and to exports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRecord {
    id: TaskId,
    #[serde(rename = "task")]
    name: String,
    #[serde(rename = "date")]
    due_date: NaiveDate,
    priority: Priority,
    completed: bool,
    #[serde(rename = "createdAt")]
    created_at: DateTime<Utc>,
}

impl TaskRecord {
    /// Creates a pending task from a validated submission.
    #[must_use]
    pub fn new(id: TaskId, submission: ValidatedSubmission, created_at: DateTime<Utc>) -> Self {
        let (name, due_date, priority) = submission.into_parts();
        Self {
            id,
            name,
            due_date,
            priority,
            completed: false,
            created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns whether the task has been completed.
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Flips the completion flag and returns the new value.
    pub(crate) const fn toggle_completed(&mut self) -> bool {
        self.completed = !self.completed;
        self.completed
    }
}
