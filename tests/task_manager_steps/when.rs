//! When steps for task manager BDD scenarios.

use super::world::{ManagerWorld, parse_id, parse_priority};
use chrono::NaiveDate;
use rstest_bdd_macros::when;
use taskdeck::task::domain::TaskUpdate;

#[when("the most urgent task is completed")]
fn complete_most_urgent(world: &mut ManagerWorld) {
    world.last_completed = world.manager.complete_most_urgent();
}

#[when("task {id:u64} is removed")]
fn remove_task(world: &mut ManagerWorld, id: u64) -> Result<(), eyre::Report> {
    let task_id = parse_id(id)?;
    world.last_removal = Some(world.manager.remove_task(task_id));
    Ok(())
}

#[when(r#"task {id:u64} is updated to priority "{priority}""#)]
fn update_priority(world: &mut ManagerWorld, id: u64, priority: String) -> Result<(), eyre::Report> {
    let task_id = parse_id(id)?;
    let update = TaskUpdate::new().with_priority(parse_priority(&priority)?);
    world
        .manager
        .update_task(task_id, &update)
        .ok_or_else(|| eyre::eyre!("task {task_id} missing for update"))?;
    Ok(())
}

#[when(r#"{count:usize} "{priority}" tasks are added"#)]
fn add_many_tasks(world: &mut ManagerWorld, count: usize, priority: String) -> Result<(), eyre::Report> {
    let class = parse_priority(&priority)?;
    let due = NaiveDate::from_ymd_opt(2099, 1, 1).ok_or_else(|| eyre::eyre!("invalid date"))?;
    for n in 0..count {
        world.manager.add_task(format!("generated {n}"), class, due);
    }
    Ok(())
}

#[when("every task is completed")]
fn complete_every_task(world: &mut ManagerWorld) {
    while let Some(task) = world.manager.complete_most_urgent() {
        world.completed_count += 1;
        world.last_completed = Some(task);
    }
}
