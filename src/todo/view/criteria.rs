//! Transient filter criteria for the task list view.

use crate::todo::domain::{ParsePriorityError, Priority};
use chrono::NaiveDate;
use thiserror::Error;

/// Completion status filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Show every task.
    #[default]
    All,
    /// Show completed tasks only.
    Completed,
    /// Show pending tasks only.
    Pending,
}

impl StatusFilter {
    /// Returns whether a task with the given completion flag passes.
    #[must_use]
    pub const fn admits(self, completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Completed => completed,
            Self::Pending => !completed,
        }
    }

    /// Returns the canonical text form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Pending => "pending",
        }
    }
}

impl TryFrom<&str> for StatusFilter {
    type Error = ParseStatusFilterError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "all" => Ok(Self::All),
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            _ => Err(ParseStatusFilterError(value.to_owned())),
        }
    }
}

/// Error returned while parsing a status filter from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown status filter: {0}")]
pub struct ParseStatusFilterError(pub String);

/// Priority filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PriorityFilter {
    /// Show every priority.
    #[default]
    All,
    /// Show a single priority.
    Only(Priority),
}

impl PriorityFilter {
    /// Returns whether a task with the given priority passes.
    #[must_use]
    pub fn admits(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == priority,
        }
    }
}

impl TryFrom<&str> for PriorityFilter {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        Priority::try_from(value).map(Self::Only)
    }
}

/// Criteria narrowing which tasks are displayed.
///
/// Criteria are view state only and are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    status: StatusFilter,
    priority: PriorityFilter,
    due_date: Option<NaiveDate>,
    search_text: Option<String>,
}

impl FilterCriteria {
    /// Creates criteria that admit every task.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the status filter.
    #[must_use]
    pub const fn status(&self) -> StatusFilter {
        self.status
    }

    /// Returns the priority filter.
    #[must_use]
    pub const fn priority(&self) -> PriorityFilter {
        self.priority
    }

    /// Returns the exact due date filter, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns the lowercased search text, if any.
    #[must_use]
    pub fn search_text(&self) -> Option<&str> {
        self.search_text.as_deref()
    }

    /// Returns whether no narrowing is active.
    #[must_use]
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }

    /// Applies a partial update, leaving unspecified criteria as they are.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = due_date;
        }
        if let Some(search_text) = update.search_text {
            self.search_text = normalize_search(&search_text);
        }
    }

    /// Clears the search text only.
    pub fn clear_search(&mut self) {
        self.search_text = None;
    }
}

/// Partial change to [`FilterCriteria`].
///
/// # Examples
///
/// ```
/// use tasklist::todo::view::{FilterCriteria, FilterUpdate, StatusFilter};
///
/// let mut criteria = FilterCriteria::new();
/// criteria.apply(FilterUpdate::new().with_status(StatusFilter::Pending).with_search("Milk"));
/// assert_eq!(criteria.status(), StatusFilter::Pending);
/// assert_eq!(criteria.search_text(), Some("milk"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    status: Option<StatusFilter>,
    priority: Option<PriorityFilter>,
    due_date: Option<Option<NaiveDate>>,
    search_text: Option<String>,
}

impl FilterUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the status filter.
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    /// Sets the priority filter.
    #[must_use]
    pub const fn with_priority(mut self, priority: PriorityFilter) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Restricts the view to tasks due on `date`.
    #[must_use]
    pub const fn with_due_date(mut self, date: NaiveDate) -> Self {
        self.due_date = Some(Some(date));
        self
    }

    /// Removes the due date restriction.
    #[must_use]
    pub const fn without_due_date(mut self) -> Self {
        self.due_date = Some(None);
        self
    }

    /// Sets the search text. An empty string clears the search.
    #[must_use]
    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }
}

fn normalize_search(text: &str) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text.to_lowercase())
    }
}
