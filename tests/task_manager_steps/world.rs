//! Shared world state for task manager BDD scenarios.

use chrono::NaiveDate;
use eyre::WrapErr;
use rstest::fixture;
use taskdeck::task::{
    domain::{Priority, Task, TaskId},
    services::TaskManager,
};

/// Scenario world for task manager behaviour tests.
pub struct ManagerWorld {
    /// Manager under test.
    pub manager: TaskManager,
    /// Task returned by the latest completion.
    pub last_completed: Option<Task>,
    /// Outcome of the latest removal.
    pub last_removal: Option<bool>,
    /// Number of tasks completed while draining.
    pub completed_count: usize,
}

impl ManagerWorld {
    /// Creates a world around an empty manager.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            manager: TaskManager::new(),
            last_completed: None,
            last_removal: None,
            completed_count: 0,
        }
    }
}

impl Default for ManagerWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ManagerWorld {
    ManagerWorld::default()
}

/// Parses a priority label from a step.
pub fn parse_priority(label: &str) -> Result<Priority, eyre::Report> {
    label
        .parse::<Priority>()
        .wrap_err_with(|| format!("parse priority {label}"))
}

/// Parses a `YYYY-MM-DD` date from a step.
pub fn parse_date(raw: &str) -> Result<NaiveDate, eyre::Report> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").wrap_err_with(|| format!("parse date {raw}"))
}

/// Parses a task identifier from a step.
pub fn parse_id(raw: u64) -> Result<TaskId, eyre::Report> {
    TaskId::new(raw).wrap_err("construct task id")
}
