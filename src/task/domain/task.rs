//! Task value and its urgency ordering.

use super::{Priority, TaskId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A task record held by the collection.
///
/// The identifier is fixed for the lifetime of the record; the remaining
/// fields may be replaced by an update.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    description: String,
    priority: Priority,
    due_date: NaiveDate,
}

impl Task {
    /// Creates a task from already validated field values.
    #[must_use]
    pub fn new(
        id: TaskId,
        description: impl Into<String>,
        priority: Priority,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            priority,
            due_date,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the priority class.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the due date.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the numeric rank of the priority class.
    #[must_use]
    pub const fn priority_rank(&self) -> u8 {
        self.priority.rank()
    }

    /// Compares two tasks by urgency.
    ///
    /// [`Ordering::Less`] means `self` sorts before `other`, i.e. `self` is
    /// more urgent. Higher priority classes come first; within a class the
    /// earlier due date comes first.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use std::cmp::Ordering;
    /// use taskdeck::task::domain::{Priority, Task, TaskId};
    ///
    /// let date = NaiveDate::from_ymd_opt(2099, 1, 1).expect("valid date");
    /// let urgent = Task::new(TaskId::new(1).expect("id"), "ship", Priority::High, date);
    /// let later = Task::new(TaskId::new(2).expect("id"), "tidy", Priority::Low, date);
    ///
    /// assert_eq!(urgent.compare_urgency(&later), Ordering::Less);
    /// ```
    #[must_use]
    pub fn compare_urgency(&self, other: &Self) -> Ordering {
        other
            .priority_rank()
            .cmp(&self.priority_rank())
            .then_with(|| self.due_date.cmp(&other.due_date))
    }

    /// Returns `true` when `self` is strictly more urgent than `other`.
    #[must_use]
    pub fn outranks(&self, other: &Self) -> bool {
        self.compare_urgency(other) == Ordering::Less
    }

    /// Returns a copy of this task with the provided fields overlaid.
    ///
    /// Fields absent from `update` keep their current values; the identifier
    /// never changes.
    #[must_use]
    pub fn with_update(&self, update: &TaskUpdate) -> Self {
        Self {
            id: self.id,
            description: update
                .description
                .clone()
                .unwrap_or_else(|| self.description.clone()),
            priority: update.priority.unwrap_or(self.priority),
            due_date: update.due_date.unwrap_or(self.due_date),
        }
    }
}

/// Partial set of field replacements applied by an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    description: Option<String>,
    priority: Option<Priority>,
    due_date: Option<NaiveDate>,
}

impl TaskUpdate {
    /// Creates an update that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Replaces the priority class.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Replaces the due date.
    #[must_use]
    pub const fn with_due_date(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    /// Returns the replacement description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the replacement priority, if any.
    #[must_use]
    pub const fn priority(&self) -> Option<Priority> {
        self.priority
    }

    /// Returns the replacement due date, if any.
    #[must_use]
    pub const fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Returns `true` when no field would change.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.description.is_none() && self.priority.is_none() && self.due_date.is_none()
    }
}
