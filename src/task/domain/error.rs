//! Error types for task domain validation and parsing.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors returned while constructing or validating domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The description exceeds the configured character limit.
    #[error("task description has {length} characters, at most {max} are allowed")]
    DescriptionTooLong {
        /// Character count of the rejected description.
        length: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The priority label is not one of the supported classes.
    #[error("invalid priority '{0}', expected high, medium or low")]
    InvalidPriority(String),

    /// The due date is not a `YYYY-MM-DD` calendar date.
    #[error("invalid due date '{0}', expected YYYY-MM-DD")]
    InvalidDueDate(String),

    /// The due date lies before the current day.
    #[error("due date {due} is in the past (today is {today})")]
    PastDueDate {
        /// Rejected due date.
        due: NaiveDate,
        /// Day the check was performed against.
        today: NaiveDate,
    },

    /// The task identifier is not a positive integer.
    #[error("invalid task identifier {0}, expected a positive integer")]
    InvalidTaskId(u64),

    /// Several validation rules failed at once.
    #[error("{} validation errors: {}", .0.len(), join_messages(.0))]
    Multiple(Vec<TaskDomainError>),
}

impl TaskDomainError {
    /// Combines collected errors, unwrapping the single-error case.
    ///
    /// Returns `None` when `errors` is empty.
    #[must_use]
    pub fn combine(mut errors: Vec<Self>) -> Option<Self> {
        match errors.len() {
            0 => None,
            1 => errors.pop(),
            _ => Some(Self::Multiple(errors)),
        }
    }
}

fn join_messages(errors: &[TaskDomainError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Error returned while parsing a priority label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);

impl From<ParsePriorityError> for TaskDomainError {
    fn from(err: ParsePriorityError) -> Self {
        Self::InvalidPriority(err.0)
    }
}
