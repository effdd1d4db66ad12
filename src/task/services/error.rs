//! Service-level errors for task collection operations.

use thiserror::Error;

use super::ConsistencyReport;
use crate::task::domain::{TaskDomainError, TaskId};

/// Errors reported by the fallible manager operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskManagerError {
    /// No task is stored under the identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The collection holds no task.
    #[error("task collection is empty")]
    EmptyCollection,

    /// The heap and the index no longer hold the same tasks.
    #[error("task structures diverged: {0}")]
    Divergence(ConsistencyReport),
}

/// Errors reported by [`SharedTaskManager`](super::SharedTaskManager).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SharedManagerError {
    /// A writer panicked while holding the manager lock.
    #[error("task manager lock poisoned")]
    Poisoned,

    /// The underlying manager operation failed.
    #[error(transparent)]
    Manager(#[from] TaskManagerError),
}

/// Errors reported by [`TaskIntakeService`](super::TaskIntakeService).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskIntakeError {
    /// Input validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),

    /// The manager rejected the operation.
    #[error(transparent)]
    Manager(#[from] SharedManagerError),
}
