//! Commands accepted by the to-do service and their outcomes.

use crate::todo::{
    domain::{ExportDocument, Priority, TaskId, TaskRecord},
    view::FilterUpdate,
};
use chrono::NaiveDate;

/// Request payload for submitting a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTaskRequest {
    name: String,
    due_date: Option<NaiveDate>,
    priority: Priority,
}

impl SubmitTaskRequest {
    /// Creates a request with no due date yet.
    #[must_use]
    pub fn new(name: impl Into<String>, priority: Priority) -> Self {
        Self {
            name: name.into(),
            due_date: None,
            priority,
        }
    }

    /// Sets the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the raw, untrimmed name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the due date, if set.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the requested priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }
}

/// A discrete user action forwarded by a frontend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoCommand {
    /// Validate and add a new task.
    SubmitNewTask(SubmitTaskRequest),
    /// Change some filter criteria.
    SetFilter(FilterUpdate),
    /// Reset every filter criterion.
    ClearFilters,
    /// Reset the search text only.
    ClearSearch,
    /// Flip a task between pending and completed.
    ToggleTask(TaskId),
    /// Delete a task. The frontend confirms with the user beforehand.
    DeleteTask(TaskId),
    /// Serialise every task.
    ExportAll,
}

/// Result of a successfully handled command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutcome {
    /// A task was added.
    TaskAdded(TaskRecord),
    /// A task changed completion state.
    TaskToggled {
        /// The toggled task.
        id: TaskId,
        /// Completion state after the toggle.
        completed: bool,
    },
    /// A task was deleted.
    TaskDeleted(TaskRecord),
    /// Filter criteria changed.
    FiltersChanged,
    /// An export document was produced.
    Exported(ExportDocument),
}

impl CommandOutcome {
    /// Returns the confirmation message to flash to the user, if the
    /// outcome warrants one.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        match self {
            Self::TaskAdded(_) => Some("Task added."),
            Self::TaskToggled {
                completed: true, ..
            } => Some("Task completed."),
            Self::TaskToggled {
                completed: false, ..
            } => Some("Task marked as pending."),
            Self::TaskDeleted(_) => Some("Task deleted."),
            Self::FiltersChanged | Self::Exported(_) => None,
        }
    }
}
