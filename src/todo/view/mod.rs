//! Derived views over the task store.
//!
//! Filtering, display ordering, statistics and the view model handed to
//! frontends. All functions here borrow the records and never mutate them.

mod criteria;
mod engine;
mod model;
mod stats;

pub use criteria::{
    FilterCriteria, FilterUpdate, ParseStatusFilterError, PriorityFilter, StatusFilter,
};
pub use engine::{compare_for_display, filter, filter_and_sort, is_overdue, matches, sort};
pub use model::{TaskView, ViewModel, build_view, format_due_date};
pub use stats::{TaskStats, compute_stats};
