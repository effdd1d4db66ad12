//! Then steps for task manager BDD scenarios.

use super::world::{ManagerWorld, parse_id, parse_priority};
use rstest_bdd_macros::then;

#[then(r#"the completed task is "{description}""#)]
fn completed_task_is(world: &ManagerWorld, description: String) -> Result<(), eyre::Report> {
    let task = world
        .last_completed
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no task was completed"))?;
    if task.description() != description {
        return Err(eyre::eyre!(
            "expected completed task {description:?}, got {:?}",
            task.description()
        ));
    }
    Ok(())
}

#[then("both structures hold {count:usize} tasks")]
fn both_structures_hold(world: &ManagerWorld, count: usize) -> Result<(), eyre::Report> {
    let snapshot = world.manager.snapshot();
    if snapshot.heap.size != count || snapshot.index.size != count {
        return Err(eyre::eyre!(
            "expected {count} tasks, heap holds {} and index holds {}",
            snapshot.heap.size,
            snapshot.index.size
        ));
    }
    Ok(())
}

#[then("the removal is reported as failed")]
fn removal_failed(world: &ManagerWorld) -> Result<(), eyre::Report> {
    match world.last_removal {
        Some(false) => Ok(()),
        other => Err(eyre::eyre!("expected failed removal, got {other:?}")),
    }
}

#[then(r#"the most urgent task is "{description}""#)]
fn most_urgent_is(world: &ManagerWorld, description: String) -> Result<(), eyre::Report> {
    let task = world
        .manager
        .peek_most_urgent()
        .ok_or_else(|| eyre::eyre!("task manager is empty"))?;
    if task.description() != description {
        return Err(eyre::eyre!(
            "expected most urgent task {description:?}, got {:?}",
            task.description()
        ));
    }
    Ok(())
}

#[then(r#"task {id:u64} can be found by identifier with priority "{priority}""#)]
fn found_with_priority(world: &ManagerWorld, id: u64, priority: String) -> Result<(), eyre::Report> {
    let task_id = parse_id(id)?;
    let expected = parse_priority(&priority)?;
    let task = world
        .manager
        .get_by_id(task_id)
        .ok_or_else(|| eyre::eyre!("task {task_id} not found"))?;
    if task.priority() != expected {
        return Err(eyre::eyre!(
            "expected priority {expected}, got {}",
            task.priority()
        ));
    }
    Ok(())
}

#[then("both structures agree")]
fn both_structures_agree(world: &ManagerWorld) -> Result<(), eyre::Report> {
    let report = world.manager.check_consistency();
    if !report.is_consistent() {
        return Err(eyre::eyre!("structures diverged: {report}"));
    }
    Ok(())
}

#[then("the index height is at most {limit:u32}")]
fn index_height_at_most(world: &ManagerWorld, limit: u32) -> Result<(), eyre::Report> {
    let height = world.manager.index().height();
    if height > limit {
        return Err(eyre::eyre!("index height {height} exceeds {limit}"));
    }
    Ok(())
}

#[then("tasks listed by identifier are in ascending order")]
fn listed_in_ascending_order(world: &ManagerWorld) -> Result<(), eyre::Report> {
    let tasks = world.manager.list_by_id();
    if !tasks.windows(2).all(|pair| matches!(pair, [a, b] if a.id() < b.id())) {
        return Err(eyre::eyre!("tasks are not sorted by identifier"));
    }
    Ok(())
}

#[then("exactly {count:usize} tasks were completed")]
fn completed_exactly(world: &ManagerWorld, count: usize) -> Result<(), eyre::Report> {
    if world.completed_count != count {
        return Err(eyre::eyre!(
            "expected {count} completions, got {}",
            world.completed_count
        ));
    }
    Ok(())
}

#[then("the task manager is empty")]
fn manager_is_empty(world: &ManagerWorld) -> Result<(), eyre::Report> {
    if !world.manager.is_empty() {
        return Err(eyre::eyre!("expected an empty task manager"));
    }
    Ok(())
}

#[then("completing another task returns nothing")]
fn completing_returns_nothing(world: &mut ManagerWorld) -> Result<(), eyre::Report> {
    if let Some(task) = world.manager.complete_most_urgent() {
        return Err(eyre::eyre!("unexpected completion of task {}", task.id()));
    }
    Ok(())
}
