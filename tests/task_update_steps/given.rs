//! Given steps for task update BDD scenarios.

use super::world::{TaskUpdateWorld, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskledger::task::{
    domain::{OwnerId, TaskPatch, TaskStatus},
    services::CreateTaskRequest,
};

#[given(r#"user "{user}" has a task titled "{title}""#)]
fn user_has_task(
    world: &mut TaskUpdateWorld,
    user: String,
    title: String,
) -> Result<(), eyre::Report> {
    let owner = OwnerId::new(user);
    let created = run_async(
        world
            .service
            .create(&owner, CreateTaskRequest::new(title)),
    )
    .wrap_err("create task in scenario setup")?;

    world.owner = Some(owner);
    world.last_created = Some(created);
    Ok(())
}

#[given(r#"the task status has been changed to "{status}""#)]
fn task_status_has_been_changed(
    world: &mut TaskUpdateWorld,
    status: String,
) -> Result<(), eyre::Report> {
    let owner = world
        .owner
        .clone()
        .ok_or_else(|| eyre::eyre!("missing owner in scenario world"))?;
    let task = world
        .last_created
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing created task in scenario world"))?;
    let requested = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario: {err}"))?;

    let patch = TaskPatch::new().with_status(requested);
    let updated = run_async(world.service.update(&owner, task.id, &patch))
        .wrap_err("update task in scenario setup")?;

    world.last_created = Some(updated);
    Ok(())
}
