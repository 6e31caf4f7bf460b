//! Individual validation rules.
//!
//! Each rule is a pure function over its input, the current records and the
//! configuration. Rules return `Ok(())` on success or the specific field
//! error on failure.

use crate::todo::{
    domain::TaskRecord,
    validation::{DateError, NameError, ValidationConfig},
};
use chrono::NaiveDate;

/// Validates a task name against length limits and pending tasks.
///
/// Length is measured in characters after trimming. Completed tasks do not
/// block reuse of their name.
///
/// # Errors
///
/// Returns [`NameError::Empty`], [`NameError::TooShort`],
/// [`NameError::TooLong`] or [`NameError::Duplicate`], checked in that order.
pub fn validate_name(
    name: &str,
    existing: &[TaskRecord],
    config: &ValidationConfig,
) -> Result<(), NameError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(NameError::Empty);
    }

    let length = trimmed.chars().count();
    if length < config.min_name_chars {
        return Err(NameError::TooShort {
            min: config.min_name_chars,
        });
    }
    if length > config.max_name_chars {
        return Err(NameError::TooLong {
            max: config.max_name_chars,
        });
    }

    let normalized = trimmed.to_lowercase();
    let is_duplicate = existing
        .iter()
        .any(|record| !record.is_completed() && record.name().to_lowercase() == normalized);
    if is_duplicate {
        return Err(NameError::Duplicate(trimmed.to_owned()));
    }
    Ok(())
}

/// Validates a due date against the current day.
///
/// Only the calendar day is compared; a task due today is accepted. On
/// success the accepted date is returned.
///
/// # Errors
///
/// Returns [`DateError::Missing`] when no date is given, or
/// [`DateError::Past`] when the date is before `today` and the
/// configuration does not allow past dates.
pub fn validate_date(
    date: Option<NaiveDate>,
    today: NaiveDate,
    config: &ValidationConfig,
) -> Result<NaiveDate, DateError> {
    let due = date.ok_or(DateError::Missing)?;
    if !config.allow_past_dates && due < today {
        return Err(DateError::Past { date: due, today });
    }
    Ok(due)
}
