//! Integration tests for [`SharedTaskManager`] and [`TaskIntakeService`].
//!
//! These tests drive the thread-safe manager from several threads at once
//! and run raw caller input through the intake service, checking that the
//! heap and the identifier index never drift apart.

#![expect(
    clippy::expect_used,
    reason = "Test code uses expect for assertion clarity"
)]

use std::sync::Arc;
use std::thread;

use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::{fixture, rstest};
use taskdeck::task::{
    domain::{Priority, TaskDomainError},
    services::{NewTaskRequest, SharedTaskManager, TaskIntakeError, TaskIntakeService},
};

const WORKERS: u64 = 4;
const TASKS_PER_WORKER: u64 = 25;

fn far_future() -> NaiveDate {
    NaiveDate::from_ymd_opt(2099, 12, 31).expect("valid date")
}

#[fixture]
fn shared() -> SharedTaskManager {
    SharedTaskManager::new()
}

#[fixture]
fn intake(shared: SharedTaskManager) -> TaskIntakeService<DefaultClock> {
    TaskIntakeService::new(shared, Arc::new(DefaultClock))
}

#[rstest]
fn concurrent_adds_issue_unique_ids(shared: SharedTaskManager) {
    thread::scope(|scope| {
        for worker in 0..WORKERS {
            let handle = shared.clone();
            scope.spawn(move || {
                for n in 0..TASKS_PER_WORKER {
                    handle
                        .add_task(format!("worker {worker} task {n}"), Priority::Medium, far_future())
                        .expect("add should succeed");
                }
            });
        }
    });

    let listed = shared.list_by_id().expect("list should succeed");
    let ids: Vec<u64> = listed.iter().map(|task| task.id().value()).collect();
    let expected: Vec<u64> = (1..=WORKERS * TASKS_PER_WORKER).collect();
    assert_eq!(ids, expected);
    shared
        .ensure_consistent()
        .expect("structures should agree after concurrent adds");
}

#[rstest]
fn concurrent_completion_drains_each_task_once(shared: SharedTaskManager) {
    for n in 0..WORKERS * TASKS_PER_WORKER {
        shared
            .add_task(format!("task {n}"), Priority::High, far_future())
            .expect("add should succeed");
    }

    let completed: Vec<u64> = thread::scope(|scope| {
        let workers: Vec<_> = (0..WORKERS)
            .map(|_| {
                let handle = shared.clone();
                scope.spawn(move || {
                    let mut drained = Vec::new();
                    while let Some(task) = handle
                        .complete_most_urgent()
                        .expect("completion should succeed")
                    {
                        drained.push(task.id().value());
                    }
                    drained
                })
            })
            .collect();
        workers
            .into_iter()
            .flat_map(|worker| worker.join().expect("worker should not panic"))
            .collect()
    });

    let mut sorted = completed;
    sorted.sort_unstable();
    let expected: Vec<u64> = (1..=WORKERS * TASKS_PER_WORKER).collect();
    assert_eq!(sorted, expected);
    assert!(shared.is_empty().expect("is_empty should succeed"));
}

#[rstest]
fn clones_share_the_same_collection(shared: SharedTaskManager) {
    let other = shared.clone();
    let task = other
        .add_task("shared", Priority::Low, far_future())
        .expect("add should succeed");

    let found = shared
        .get_by_id(task.id())
        .expect("lookup should succeed")
        .expect("task should be visible through every handle");
    assert_eq!(found, task);
    assert_eq!(shared.len().expect("len should succeed"), 1);
}

#[rstest]
fn intake_round_trip_through_shared_manager(intake: TaskIntakeService<DefaultClock>) {
    let task = intake
        .submit(&NewTaskRequest::new("  review budget  ", "high", "2099-05-01"))
        .expect("valid request should be accepted");

    assert_eq!(task.description(), "review budget");
    let fetched = intake
        .lookup(task.id().value())
        .expect("submitted task should be found");
    assert_eq!(fetched, task);
    assert!(intake.withdraw(task.id().value()).expect("withdraw should succeed"));
    assert!(
        intake
            .manager()
            .is_empty()
            .expect("is_empty should succeed")
    );
}

#[rstest]
fn intake_rejects_invalid_input_without_touching_the_manager(
    intake: TaskIntakeService<DefaultClock>,
) {
    let result = intake.submit(&NewTaskRequest::new("", "urgent", "tomorrow"));

    assert!(
        matches!(
            &result,
            Err(TaskIntakeError::Domain(TaskDomainError::Multiple(errors))) if errors.len() == 3
        ),
        "expected combined validation failure, got {result:?}"
    );
    assert_eq!(intake.manager().len().expect("len should succeed"), 0);
}
