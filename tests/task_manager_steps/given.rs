//! Given steps for task manager BDD scenarios.

use super::world::{ManagerWorld, parse_date, parse_priority};
use rstest_bdd_macros::given;

#[given("an empty task manager")]
fn empty_task_manager(world: &mut ManagerWorld) {
    world.manager.clear();
    world.last_completed = None;
    world.last_removal = None;
    world.completed_count = 0;
}

#[given(r#"a "{priority}" task "{description}" due "{due}""#)]
fn task_with_priority_and_due_date(
    world: &mut ManagerWorld,
    priority: String,
    description: String,
    due: String,
) -> Result<(), eyre::Report> {
    let class = parse_priority(&priority)?;
    let due_date = parse_date(&due)?;
    world.manager.add_task(description, class, due_date);
    Ok(())
}
