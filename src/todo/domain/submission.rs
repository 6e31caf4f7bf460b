//! Submissions that have passed validation.

use super::Priority;
use chrono::NaiveDate;

/// Task input that has passed every submission rule.
///
/// Only the validator can construct this value, so the store never sees an
/// unchecked name or date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSubmission {
    name: String,
    due_date: NaiveDate,
    priority: Priority,
}

impl ValidatedSubmission {
    /// Wraps already-validated input. `name` must be trimmed.
    pub(crate) const fn new(name: String, due_date: NaiveDate, priority: Priority) -> Self {
        Self {
            name,
            due_date,
            priority,
        }
    }

    /// Returns the trimmed task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the requested priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    pub(crate) fn into_parts(self) -> (String, NaiveDate, Priority) {
        (self.name, self.due_date, self.priority)
    }
}
