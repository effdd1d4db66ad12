//! Individual validation rules for raw task fields.

use chrono::NaiveDate;

use super::IntakeConfig;
use crate::task::domain::{Priority, TaskDomainError, TaskId};

/// Accepted due date format.
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates a description and returns the text to store.
///
/// # Errors
///
/// Returns [`TaskDomainError::EmptyDescription`] when the description is
/// blank, or [`TaskDomainError::DescriptionTooLong`] when it exceeds the
/// configured limit.
pub fn validate_description(raw: &str, config: &IntakeConfig) -> Result<String, TaskDomainError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskDomainError::EmptyDescription);
    }
    let length = trimmed.chars().count();
    if length > config.max_description_chars {
        return Err(TaskDomainError::DescriptionTooLong {
            length,
            max: config.max_description_chars,
        });
    }
    let stored = if config.trim_description { trimmed } else { raw };
    Ok(stored.to_owned())
}

/// Parses a priority label.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidPriority`] for unknown labels.
pub fn validate_priority(raw: &str) -> Result<Priority, TaskDomainError> {
    Ok(Priority::try_from(raw)?)
}

/// Parses a `YYYY-MM-DD` due date and checks it is not before `today`.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidDueDate`] when the text is not a
/// calendar date, or [`TaskDomainError::PastDueDate`] when it lies before
/// `today` and the configuration forbids that.
pub fn validate_due_date(
    raw: &str,
    today: NaiveDate,
    config: &IntakeConfig,
) -> Result<NaiveDate, TaskDomainError> {
    let due = NaiveDate::parse_from_str(raw.trim(), DUE_DATE_FORMAT)
        .map_err(|_| TaskDomainError::InvalidDueDate(raw.to_owned()))?;
    if !config.allow_past_due_dates && due < today {
        return Err(TaskDomainError::PastDueDate { due, today });
    }
    Ok(due)
}

/// Validates a raw task identifier.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidTaskId`] when the value is zero.
pub const fn validate_task_id(raw: u64) -> Result<TaskId, TaskDomainError> {
    TaskId::new(raw)
}
