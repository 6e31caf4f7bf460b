//! End-to-end command flows against in-memory storage.

use std::sync::Arc;

use crate::test_helpers::{FixedClock, date};
use rstest::{fixture, rstest};
use tasklist::todo::{
    adapters::memory::InMemoryTaskStorage,
    domain::{Priority, TaskId},
    services::{CommandOutcome, SubmitTaskRequest, TodoCommand, TodoService},
    view::{FilterUpdate, PriorityFilter, StatusFilter},
};

type TestService = TodoService<InMemoryTaskStorage, FixedClock>;

#[fixture]
fn clock() -> FixedClock {
    FixedClock::noon_on(date(2024, 5, 1))
}

#[fixture]
fn service(clock: FixedClock) -> TestService {
    TodoService::new(Arc::new(InMemoryTaskStorage::new()), Arc::new(clock))
}

fn submit(
    service: &mut TestService,
    name: &str,
    due: chrono::NaiveDate,
    priority: Priority,
) -> Result<TaskId, eyre::Report> {
    let outcome = service
        .dispatch(TodoCommand::SubmitNewTask(
            SubmitTaskRequest::new(name, priority).with_due_date(due),
        ))
        .map_err(|err| eyre::eyre!("submission failed: {err}"))?;
    match outcome {
        CommandOutcome::TaskAdded(task) => Ok(task.id()),
        other => Err(eyre::eyre!("expected TaskAdded, got {other:?}")),
    }
}

#[rstest]
fn view_orders_pending_by_priority_then_date(mut service: TestService) -> Result<(), eyre::Report> {
    let early_high = submit(&mut service, "Pay invoice", date(2024, 5, 1), Priority::High)?;
    let late_high = submit(&mut service, "Renew passport", date(2024, 5, 3), Priority::High)?;
    let done_high = submit(&mut service, "Book venue", date(2024, 5, 2), Priority::High)?;
    let low = submit(&mut service, "Sort photos", date(2024, 5, 1), Priority::Low)?;
    service
        .toggle_task(done_high)
        .map_err(|err| eyre::eyre!("toggle failed: {err}"))?;

    let order: Vec<TaskId> = service.view().tasks.iter().map(|row| row.id).collect();

    eyre::ensure!(
        order == vec![early_high, late_high, low, done_high],
        "unexpected display order {order:?}"
    );
    Ok(())
}

#[rstest]
fn task_due_on_the_clock_day_is_accepted_and_not_overdue(
    mut service: TestService,
) -> Result<(), eyre::Report> {
    let due_today = submit(&mut service, "Water plants", date(2024, 5, 1), Priority::Medium)?;

    let view = service.view();
    let row = view
        .tasks
        .iter()
        .find(|row| row.id == due_today)
        .ok_or_else(|| eyre::eyre!("task missing from the view"))?;

    eyre::ensure!(!row.overdue, "a task due today is not overdue");
    eyre::ensure!(
        row.formatted_date == "Wednesday, 1 May 2024",
        "unexpected date text {}",
        row.formatted_date
    );
    Ok(())
}

#[rstest]
fn store_keeps_newest_first_regardless_of_display_order(
    mut service: TestService,
) -> Result<(), eyre::Report> {
    let first = submit(&mut service, "First added", date(2024, 5, 9), Priority::Low)?;
    let second = submit(&mut service, "Second added", date(2024, 5, 2), Priority::High)?;

    let stored: Vec<TaskId> = service.tasks().iter().map(|task| task.id()).collect();

    eyre::ensure!(stored == vec![second, first], "unexpected store order {stored:?}");
    Ok(())
}

#[rstest]
fn filters_compose_and_clear(mut service: TestService) -> Result<(), eyre::Report> {
    submit(&mut service, "Buy milk", date(2024, 5, 2), Priority::Low)?;
    submit(&mut service, "Buy bread", date(2024, 5, 2), Priority::High)?;
    submit(&mut service, "Call mum", date(2024, 5, 4), Priority::High)?;

    service.set_filter(FilterUpdate::new().with_search("buy"));
    service.set_filter(FilterUpdate::new().with_priority(PriorityFilter::Only(Priority::High)));
    let narrowed: Vec<String> = service
        .view()
        .tasks
        .into_iter()
        .map(|row| row.name)
        .collect();
    eyre::ensure!(narrowed == vec!["Buy bread".to_owned()], "got {narrowed:?}");

    service.set_filter(FilterUpdate::new().with_due_date(date(2024, 5, 4)));
    eyre::ensure!(service.view().is_empty(), "search and date should exclude all");

    service.clear_filters();
    eyre::ensure!(service.view().tasks.len() == 3, "clearing restores every row");
    Ok(())
}

#[rstest]
fn stats_follow_every_mutation(mut service: TestService) -> Result<(), eyre::Report> {
    let one = submit(&mut service, "Task one", date(2024, 5, 2), Priority::Medium)?;
    let two = submit(&mut service, "Task two", date(2024, 5, 2), Priority::Medium)?;
    service
        .toggle_task(one)
        .map_err(|err| eyre::eyre!("toggle failed: {err}"))?;

    let stats = service.stats();
    eyre::ensure!(
        (stats.total, stats.completed, stats.pending) == (2, 1, 1),
        "unexpected stats {stats:?}"
    );

    service
        .delete_task(two)
        .map_err(|err| eyre::eyre!("delete failed: {err}"))?;
    let after_delete = service.stats();
    eyre::ensure!(
        (after_delete.total, after_delete.completed, after_delete.pending) == (1, 1, 0),
        "unexpected stats {after_delete:?}"
    );
    Ok(())
}

#[rstest]
fn status_filter_shows_completed_only(mut service: TestService) -> Result<(), eyre::Report> {
    let done = submit(&mut service, "Finished job", date(2024, 5, 2), Priority::Low)?;
    submit(&mut service, "Open job", date(2024, 5, 2), Priority::Low)?;
    service
        .toggle_task(done)
        .map_err(|err| eyre::eyre!("toggle failed: {err}"))?;

    service.set_filter(FilterUpdate::new().with_status(StatusFilter::Completed));
    let rows = service.view().tasks;

    eyre::ensure!(rows.len() == 1, "expected one completed row");
    let row = rows
        .first()
        .ok_or_else(|| eyre::eyre!("expected at least one row"))?;
    eyre::ensure!(row.id == done && row.completed, "wrong row {row:?}");
    eyre::ensure!(!row.overdue, "completed tasks are never overdue");
    Ok(())
}
