//! Combined submission validator.

use crate::todo::{
    domain::{Priority, TaskRecord, ValidatedSubmission},
    validation::{DateError, NameError, SubmissionError, ValidationConfig, rules},
};
use chrono::NaiveDate;

/// Validates new task submissions.
///
/// Both the name and the date rule always run, so a submission with two bad
/// fields reports both.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use tasklist::todo::domain::Priority;
/// use tasklist::todo::validation::SubmissionValidator;
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 1).expect("valid date");
/// let validator = SubmissionValidator::new();
/// let accepted = validator
///     .validate_submission("  Water plants ", Some(today), Priority::Low, &[], today)
///     .expect("valid submission");
/// assert_eq!(accepted.name(), "Water plants");
/// ```
#[derive(Debug, Clone, Default)]
pub struct SubmissionValidator {
    config: ValidationConfig,
}

impl SubmissionValidator {
    /// Creates a validator with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a validator with a custom configuration.
    #[must_use]
    pub const fn with_config(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the active configuration.
    #[must_use]
    pub const fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Checks a task name on its own, for example while the user is typing.
    ///
    /// # Errors
    ///
    /// Returns the [`NameError`] produced by [`rules::validate_name`].
    pub fn validate_name(&self, name: &str, existing: &[TaskRecord]) -> Result<(), NameError> {
        rules::validate_name(name, existing, &self.config)
    }

    /// Checks a due date on its own, returning it when accepted.
    ///
    /// # Errors
    ///
    /// Returns the [`DateError`] produced by [`rules::validate_date`].
    pub fn validate_date(
        &self,
        date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<NaiveDate, DateError> {
        rules::validate_date(date, today, &self.config)
    }

    /// Validates a full submission.
    ///
    /// # Errors
    ///
    /// Returns [`SubmissionError`] holding every failing field.
    pub fn validate_submission(
        &self,
        name: &str,
        due_date: Option<NaiveDate>,
        priority: Priority,
        existing: &[TaskRecord],
        today: NaiveDate,
    ) -> Result<ValidatedSubmission, SubmissionError> {
        match (
            self.validate_name(name, existing),
            self.validate_date(due_date, today),
        ) {
            (Ok(()), Ok(date)) => Ok(ValidatedSubmission::new(
                name.trim().to_owned(),
                date,
                priority,
            )),
            (Err(name_error), Ok(_)) => Err(SubmissionError::Name(name_error)),
            (Ok(()), Err(date_error)) => Err(SubmissionError::Date(date_error)),
            (Err(name_error), Err(date_error)) => Err(SubmissionError::Both {
                name: name_error,
                date: date_error,
            }),
        }
    }
}
