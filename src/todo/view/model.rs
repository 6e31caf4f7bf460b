//! Renderer-agnostic view model.

use crate::todo::{
    domain::{Priority, TaskId, TaskRecord},
    view::{FilterCriteria, TaskStats, filter_and_sort, is_overdue},
};
use chrono::NaiveDate;

/// One displayable row of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskView {
    /// Task identifier, used to route toggle and delete commands back.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Due date.
    pub due_date: NaiveDate,
    /// Due date in long form, e.g. `Wednesday, 1 May 2024`.
    pub formatted_date: String,
    /// Task priority.
    pub priority: Priority,
    /// Whether the task is completed.
    pub completed: bool,
    /// Pending and due before today. Completed tasks are never overdue.
    pub overdue: bool,
}

impl TaskView {
    fn from_record(record: &TaskRecord, today: NaiveDate) -> Self {
        Self {
            id: record.id(),
            name: record.name().to_owned(),
            due_date: record.due_date(),
            formatted_date: format_due_date(record.due_date()),
            priority: record.priority(),
            completed: record.is_completed(),
            overdue: !record.is_completed() && is_overdue(record.due_date(), today),
        }
    }
}

/// Everything a frontend needs to render the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewModel {
    /// Filtered rows in display order.
    pub tasks: Vec<TaskView>,
    /// Counts over the whole store, not just the visible rows.
    pub stats: TaskStats,
    /// Criteria the rows were derived with.
    pub criteria: FilterCriteria,
}

impl ViewModel {
    /// Returns whether no rows are visible, so an empty state should be
    /// shown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Derives the view model from the store contents.
#[must_use]
pub fn build_view(
    records: &[TaskRecord],
    criteria: &FilterCriteria,
    stats: TaskStats,
    today: NaiveDate,
) -> ViewModel {
    let tasks = filter_and_sort(records, criteria)
        .into_iter()
        .map(|record| TaskView::from_record(record, today))
        .collect();
    ViewModel {
        tasks,
        stats,
        criteria: criteria.clone(),
    }
}

/// Formats a due date in the fixed display locale.
#[must_use]
pub fn format_due_date(date: NaiveDate) -> String {
    date.format("%A, %-d %B %Y").to_string()
}
