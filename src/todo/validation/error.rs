//! Field-scoped validation errors for task submissions.

use chrono::NaiveDate;
use thiserror::Error;

/// Form field a validation error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmissionField {
    /// The task name input.
    Name,
    /// The due date input.
    Date,
}

/// Reasons a task name is rejected.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NameError {
    /// The name is blank after trimming.
    #[error("task name must not be empty")]
    Empty,

    /// The trimmed name is shorter than the configured minimum.
    #[error("task name must be at least {min} characters")]
    TooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// The trimmed name is longer than the configured maximum.
    #[error("task name must be at most {max} characters")]
    TooLong {
        /// Maximum accepted length.
        max: usize,
    },

    /// A pending task already uses this name, ignoring case.
    #[error("a pending task named '{0}' already exists")]
    Duplicate(String),
}

/// Reasons a due date is rejected.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum DateError {
    /// No date was supplied.
    #[error("due date is required")]
    Missing,

    /// The date is before the current day.
    #[error("due date {date} is earlier than today ({today})")]
    Past {
        /// The rejected date.
        date: NaiveDate,
        /// The day the submission was checked on.
        today: NaiveDate,
    },
}

/// A rejected submission, carrying every failing field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmissionError {
    /// Only the name failed.
    #[error(transparent)]
    Name(NameError),

    /// Only the date failed.
    #[error(transparent)]
    Date(DateError),

    /// Both fields failed.
    #[error("{name}; {date}")]
    Both {
        /// Name failure.
        name: NameError,
        /// Date failure.
        date: DateError,
    },
}

impl SubmissionError {
    /// Returns the name failure, if any.
    #[must_use]
    pub const fn name_error(&self) -> Option<&NameError> {
        match self {
            Self::Name(name) | Self::Both { name, .. } => Some(name),
            Self::Date(_) => None,
        }
    }

    /// Returns the date failure, if any.
    #[must_use]
    pub const fn date_error(&self) -> Option<&DateError> {
        match self {
            Self::Date(date) | Self::Both { date, .. } => Some(date),
            Self::Name(_) => None,
        }
    }

    /// Returns one display message per failing field, name first.
    #[must_use]
    pub fn field_messages(&self) -> Vec<(SubmissionField, String)> {
        let name = self
            .name_error()
            .map(|error| (SubmissionField::Name, error.to_string()));
        let date = self
            .date_error()
            .map(|error| (SubmissionField::Date, error.to_string()));
        name.into_iter().chain(date).collect()
    }
}
