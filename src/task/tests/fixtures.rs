//! Shared fixtures and helpers for task tests.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use mockable::Clock;
use rstest::fixture;

use crate::task::{
    domain::{Priority, Task, TaskId},
    services::TaskManager,
};

/// Builds a calendar date, panicking on invalid input.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

/// Builds a task identifier, panicking on zero.
pub fn id(value: u64) -> TaskId {
    TaskId::new(value).expect("positive task id")
}

/// Builds a task with a generated description.
pub fn task(value: u64, priority: Priority, due: NaiveDate) -> Task {
    Task::new(id(value), format!("task {value}"), priority, due)
}

/// Clock frozen at a fixed instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Freezes the clock at noon UTC on the given day.
    pub fn at(year: i32, month: u32, day: u32) -> Self {
        Self(
            Utc.with_ymd_and_hms(year, month, day, 12, 0, 0)
                .single()
                .expect("unambiguous instant"),
        )
    }
}

impl Clock for FixedClock {
    fn local(&self) -> DateTime<Local> {
        self.0.with_timezone(&Local)
    }

    fn utc(&self) -> DateTime<Utc> {
        self.0
    }
}

#[fixture]
pub fn manager() -> TaskManager {
    TaskManager::new()
}

/// Manager holding five tasks of mixed urgency, ids 1 through 5.
#[fixture]
pub fn seeded_manager() -> TaskManager {
    let mut manager = TaskManager::new();
    manager.add_task("file taxes", Priority::High, date(2099, 4, 15));
    manager.add_task("water plants", Priority::Low, date(2099, 1, 2));
    manager.add_task("review pull request", Priority::Medium, date(2099, 2, 1));
    manager.add_task("book flights", Priority::High, date(2099, 3, 1));
    manager.add_task("renew passport", Priority::Medium, date(2099, 1, 20));
    manager
}
