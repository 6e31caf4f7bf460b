//! Filtering and ordering of task records for display.

use crate::todo::{domain::TaskRecord, view::FilterCriteria};
use chrono::NaiveDate;
use std::cmp::Ordering;

/// Returns whether a record passes every active criterion.
#[must_use]
pub fn matches(record: &TaskRecord, criteria: &FilterCriteria) -> bool {
    criteria.status().admits(record.is_completed())
        && criteria.priority().admits(record.priority())
        && criteria
            .due_date()
            .is_none_or(|date| record.due_date() == date)
        && criteria
            .search_text()
            .is_none_or(|needle| record.name().to_lowercase().contains(needle))
}

/// Selects the records that pass `criteria`, keeping their order.
///
/// The input is only borrowed; the store is never modified.
#[must_use]
pub fn filter<'a>(records: &'a [TaskRecord], criteria: &FilterCriteria) -> Vec<&'a TaskRecord> {
    records
        .iter()
        .filter(|record| matches(record, criteria))
        .collect()
}

/// Display order: pending before completed, then higher priority first,
/// then earliest due date first.
#[must_use]
pub fn compare_for_display(left: &TaskRecord, right: &TaskRecord) -> Ordering {
    left.is_completed()
        .cmp(&right.is_completed())
        .then_with(|| right.priority().weight().cmp(&left.priority().weight()))
        .then_with(|| left.due_date().cmp(&right.due_date()))
}

/// Orders records for display. Records that compare equal keep their input
/// order.
#[must_use]
pub fn sort(mut records: Vec<&TaskRecord>) -> Vec<&TaskRecord> {
    records.sort_by(|left, right| compare_for_display(left, right));
    records
}

/// Filters then orders records for display.
#[must_use]
pub fn filter_and_sort<'a>(
    records: &'a [TaskRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a TaskRecord> {
    sort(filter(records, criteria))
}

/// Returns whether `date` falls strictly before `today`.
#[must_use]
pub fn is_overdue(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}
