//! When steps for task submission scenarios.

use super::world::TodoWorld;
use eyre::WrapErr;
use rstest_bdd_macros::when;
use tasklist::todo::{
    domain::{Priority, TaskId},
    services::SubmitTaskRequest,
};

#[when(r#"the user submits "{name}" due {day} with {priority} priority"#)]
fn submit_task(
    world: &mut TodoWorld,
    name: String,
    day: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let due = world.resolve_day(&day)?;
    let level = Priority::try_from(priority.as_str()).wrap_err("parse step priority")?;
    let result = world
        .service
        .submit_new_task(&SubmitTaskRequest::new(name, level).with_due_date(due));
    if let Ok(task) = &result {
        world.last_task = Some(task.clone());
    }
    world.last_submit_result = Some(result);
    Ok(())
}

#[when("the user toggles that task twice")]
fn toggle_twice(world: &mut TodoWorld) -> Result<(), eyre::Report> {
    let id = world
        .last_task
        .as_ref()
        .map(|task| task.id())
        .ok_or_else(|| eyre::eyre!("no task recorded in scenario world"))?;
    world.service.toggle_task(id).wrap_err("first toggle")?;
    world.service.toggle_task(id).wrap_err("second toggle")?;
    Ok(())
}

#[when("the user deletes an unknown task")]
fn delete_unknown(world: &mut TodoWorld) {
    world.last_delete_result = Some(world.service.delete_task(TaskId::from_raw(-1)));
}
