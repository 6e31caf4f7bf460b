//! Summary counts over the whole task list.

use crate::todo::domain::TaskRecord;

/// Task counts shown alongside the list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// Number of tasks in the store.
    pub total: usize,
    /// Number of completed tasks.
    pub completed: usize,
    /// Number of tasks still pending.
    pub pending: usize,
}

/// Counts total, completed and pending tasks.
#[must_use]
pub fn compute_stats(records: &[TaskRecord]) -> TaskStats {
    let total = records.len();
    let completed = records
        .iter()
        .filter(|record| record.is_completed())
        .count();
    TaskStats {
        total,
        completed,
        pending: total.saturating_sub(completed),
    }
}
