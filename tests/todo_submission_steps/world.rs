//! Shared world state for task submission BDD scenarios.

use std::sync::Arc;

use crate::test_helpers::{FixedClock, date};
use chrono::NaiveDate;
use rstest::fixture;
use tasklist::todo::{
    adapters::memory::InMemoryTaskStorage,
    domain::TaskRecord,
    services::{TodoService, TodoServiceResult},
};

/// Service type used by the BDD world.
pub type TestTodoService = TodoService<InMemoryTaskStorage, FixedClock>;

/// Scenario world for task submission behaviour tests.
pub struct TodoWorld {
    pub clock: FixedClock,
    pub service: TestTodoService,
    pub last_task: Option<TaskRecord>,
    pub last_submit_result: Option<TodoServiceResult<TaskRecord>>,
    pub last_delete_result: Option<TodoServiceResult<TaskRecord>>,
}

impl TodoWorld {
    /// Creates a world over empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        let clock = FixedClock::noon_on(date(2024, 5, 10));
        Self {
            clock,
            service: fresh_service(clock),
            last_task: None,
            last_submit_result: None,
            last_delete_result: None,
        }
    }

    /// Resolves `today`, `yesterday` or `tomorrow` against the world clock.
    pub fn resolve_day(&self, word: &str) -> Result<NaiveDate, eyre::Report> {
        let today = self.clock.today();
        match word {
            "today" => Ok(today),
            "yesterday" => today
                .pred_opt()
                .ok_or_else(|| eyre::eyre!("no day before {today}")),
            "tomorrow" => today
                .succ_opt()
                .ok_or_else(|| eyre::eyre!("no day after {today}")),
            other => Err(eyre::eyre!("unsupported relative day '{other}'")),
        }
    }

    /// Discards every task and recorded result.
    pub fn reset(&mut self) {
        self.service = fresh_service(self.clock);
        self.last_task = None;
        self.last_submit_result = None;
        self.last_delete_result = None;
    }
}

impl Default for TodoWorld {
    fn default() -> Self {
        Self::new()
    }
}

fn fresh_service(clock: FixedClock) -> TestTodoService {
    TodoService::new(Arc::new(InMemoryTaskStorage::new()), Arc::new(clock))
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TodoWorld {
    TodoWorld::default()
}
