//! Service validating raw input before it reaches the task manager.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;
use mockable::Clock;
use tracing::debug;

use super::{SharedTaskManager, TaskIntakeError};
use crate::task::{
    adapters::SequentialIdSource,
    domain::{Task, TaskDomainError, TaskUpdate},
    ports::IdSource,
    validation::{IntakeConfig, rules},
};

/// Raw field values for a new task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaskRequest {
    description: String,
    priority: String,
    due_date: String,
}

impl NewTaskRequest {
    /// Creates a request from raw field values.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        priority: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            priority: priority.into(),
            due_date: due_date.into(),
        }
    }
}

/// Raw replacement values for an existing task; absent fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdateRequest {
    description: Option<String>,
    priority: Option<String>,
    due_date: Option<String>,
}

impl TaskUpdateRequest {
    /// Creates a request that changes nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets a replacement priority label.
    #[must_use]
    pub fn with_priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = Some(priority.into());
        self
    }

    /// Sets a replacement due date.
    #[must_use]
    pub fn with_due_date(mut self, due_date: impl Into<String>) -> Self {
        self.due_date = Some(due_date.into());
        self
    }
}

/// Result type for intake operations.
pub type TaskIntakeResult<T> = Result<T, TaskIntakeError>;

/// Validating front door to a [`SharedTaskManager`].
///
/// Every rule is checked and all failures are reported together.
pub struct TaskIntakeService<C, G = SequentialIdSource>
where
    C: Clock,
    G: IdSource,
{
    manager: SharedTaskManager<G>,
    clock: Arc<C>,
    config: IntakeConfig,
}

impl<C, G> Clone for TaskIntakeService<C, G>
where
    C: Clock,
    G: IdSource,
{
    fn clone(&self) -> Self {
        Self {
            manager: self.manager.clone(),
            clock: Arc::clone(&self.clock),
            config: self.config.clone(),
        }
    }
}

impl<C, G> fmt::Debug for TaskIntakeService<C, G>
where
    C: Clock,
    G: IdSource + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskIntakeService")
            .field("manager", &self.manager)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<C, G> TaskIntakeService<C, G>
where
    C: Clock,
    G: IdSource,
{
    /// Creates an intake service with the default configuration.
    #[must_use]
    pub fn new(manager: SharedTaskManager<G>, clock: Arc<C>) -> Self {
        Self::with_config(manager, clock, IntakeConfig::default())
    }

    /// Creates an intake service with a custom configuration.
    #[must_use]
    pub const fn with_config(
        manager: SharedTaskManager<G>,
        clock: Arc<C>,
        config: IntakeConfig,
    ) -> Self {
        Self {
            manager,
            clock,
            config,
        }
    }

    /// Returns the current validation configuration.
    #[must_use]
    pub const fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// Returns the managed collection.
    #[must_use]
    pub const fn manager(&self) -> &SharedTaskManager<G> {
        &self.manager
    }

    fn today(&self) -> NaiveDate {
        self.clock.utc().date_naive()
    }

    /// Validates a new task and adds it to the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIntakeError::Domain`] listing every failed rule, or
    /// [`TaskIntakeError::Manager`] when the manager is unavailable.
    pub fn submit(&self, request: &NewTaskRequest) -> TaskIntakeResult<Task> {
        let today = self.today();
        let checks = (
            rules::validate_description(&request.description, &self.config),
            rules::validate_priority(&request.priority),
            rules::validate_due_date(&request.due_date, today, &self.config),
        );
        let (description, priority, due_date) = match checks {
            (Ok(description), Ok(priority), Ok(due_date)) => (description, priority, due_date),
            (description, priority, due_date) => {
                return Err(collect([description.err(), priority.err(), due_date.err()]).into());
            }
        };

        let task = self.manager.add_task(description, priority, due_date)?;
        debug!(task_id = %task.id(), "task accepted by intake");
        Ok(task)
    }

    /// Validates the provided fields and applies them to an existing task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIntakeError::Domain`] listing every failed rule, or
    /// [`TaskIntakeError::Manager`] when the task does not exist or the
    /// manager is unavailable.
    pub fn amend(&self, raw_id: u64, request: &TaskUpdateRequest) -> TaskIntakeResult<Task> {
        let today = self.today();
        let checks = (
            rules::validate_task_id(raw_id),
            request
                .description
                .as_deref()
                .map(|raw| rules::validate_description(raw, &self.config))
                .transpose(),
            request
                .priority
                .as_deref()
                .map(rules::validate_priority)
                .transpose(),
            request
                .due_date
                .as_deref()
                .map(|raw| rules::validate_due_date(raw, today, &self.config))
                .transpose(),
        );
        let (id, description, priority, due_date) = match checks {
            (Ok(id), Ok(description), Ok(priority), Ok(due_date)) => {
                (id, description, priority, due_date)
            }
            (id, description, priority, due_date) => {
                let errors = [id.err(), description.err(), priority.err(), due_date.err()];
                return Err(collect(errors).into());
            }
        };

        let mut update = TaskUpdate::new();
        if let Some(text) = description {
            update = update.with_description(text);
        }
        if let Some(class) = priority {
            update = update.with_priority(class);
        }
        if let Some(date) = due_date {
            update = update.with_due_date(date);
        }
        Ok(self.manager.try_update(id, &update)?)
    }

    /// Validates an identifier and looks the task up.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIntakeError::Domain`] for a zero identifier, or
    /// [`TaskIntakeError::Manager`] when the task does not exist or the
    /// manager is unavailable.
    pub fn lookup(&self, raw_id: u64) -> TaskIntakeResult<Task> {
        let id = rules::validate_task_id(raw_id)?;
        Ok(self.manager.try_get(id)?)
    }

    /// Validates an identifier and removes the task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskIntakeError::Domain`] for a zero identifier, or
    /// [`TaskIntakeError::Manager`] when the manager is unavailable.
    pub fn withdraw(&self, raw_id: u64) -> TaskIntakeResult<bool> {
        let id = rules::validate_task_id(raw_id)?;
        Ok(self.manager.remove_task(id)?)
    }
}

fn collect<const N: usize>(errors: [Option<TaskDomainError>; N]) -> TaskDomainError {
    TaskDomainError::combine(errors.into_iter().flatten().collect())
        .unwrap_or(TaskDomainError::Multiple(Vec::new()))
}
