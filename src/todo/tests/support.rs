//! Shared fixtures for to-do unit tests.

use crate::todo::domain::{Priority, TaskId, TaskRecord, ValidatedSubmission};
use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Local>);

impl FixedClock {
    /// Freezes the clock at local noon on `date`, so `date` is today in
    /// every timezone.
    pub fn noon_on(date: NaiveDate) -> Self {
        let noon = date.and_hms_opt(12, 0, 0).expect("valid time");
        let instant = Local
            .from_local_datetime(&noon)
            .earliest()
            .expect("local noon exists");
        Self(instant)
    }

    /// Returns the calendar day the service will treat as today.
    pub fn today(&self) -> NaiveDate {
        self.local().date_naive()
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

/// Builds a record directly, bypassing validation, for view tests.
pub fn record(id: i64, name: &str, due: NaiveDate, priority: Priority, completed: bool) -> TaskRecord {
    let submission = ValidatedSubmission::new(name.to_owned(), due, priority);
    let created_at = Utc
        .with_ymd_and_hms(2024, 4, 1, 9, 0, 0)
        .single()
        .expect("valid timestamp");
    let mut built = TaskRecord::new(TaskId::from_raw(id), submission, created_at);
    if completed {
        built.toggle_completed();
    }
    built
}

pub fn submission(name: &str, due: NaiveDate, priority: Priority) -> ValidatedSubmission {
    ValidatedSubmission::new(name.to_owned(), due, priority)
}
