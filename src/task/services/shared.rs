//! Thread-safe handle around a task manager.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::NaiveDate;

use super::{
    ConsistencyReport, SharedManagerError, StructureSnapshot, TaskManager, TaskManagerError,
};
use crate::task::{
    adapters::SequentialIdSource,
    domain::{Priority, Task, TaskId, TaskUpdate},
    ports::IdSource,
};

/// Result type for shared manager operations.
pub type SharedManagerResult<T> = Result<T, SharedManagerError>;

/// Cloneable, thread-safe handle to one [`TaskManager`].
///
/// A single lock guards the heap and the index together, so readers never
/// observe a mutation applied to one structure but not yet to the other.
/// Reads return owned copies.
#[derive(Debug)]
pub struct SharedTaskManager<G = SequentialIdSource>
where
    G: IdSource,
{
    inner: Arc<RwLock<TaskManager<G>>>,
}

impl<G> Clone for SharedTaskManager<G>
where
    G: IdSource,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl SharedTaskManager<SequentialIdSource> {
    /// Creates a handle to a new, empty manager.
    #[must_use]
    pub fn new() -> Self {
        Self::from_manager(TaskManager::new())
    }
}

impl Default for SharedTaskManager<SequentialIdSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> SharedTaskManager<G>
where
    G: IdSource,
{
    /// Wraps an existing manager.
    #[must_use]
    pub fn from_manager(manager: TaskManager<G>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(manager)),
        }
    }

    fn read(&self) -> SharedManagerResult<RwLockReadGuard<'_, TaskManager<G>>> {
        self.inner.read().map_err(|_| SharedManagerError::Poisoned)
    }

    fn write(&self) -> SharedManagerResult<RwLockWriteGuard<'_, TaskManager<G>>> {
        self.inner.write().map_err(|_| SharedManagerError::Poisoned)
    }

    /// Adds a task. See [`TaskManager::add_task`].
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn add_task(
        &self,
        description: impl Into<String>,
        priority: Priority,
        due_date: NaiveDate,
    ) -> SharedManagerResult<Task> {
        Ok(self.write()?.add_task(description, priority, due_date))
    }

    /// Removes a task. See [`TaskManager::remove_task`].
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn remove_task(&self, id: TaskId) -> SharedManagerResult<bool> {
        Ok(self.write()?.remove_task(id))
    }

    /// Updates a task. See [`TaskManager::update_task`].
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn update_task(
        &self,
        id: TaskId,
        update: &TaskUpdate,
    ) -> SharedManagerResult<Option<Task>> {
        Ok(self.write()?.update_task(id, update))
    }

    /// Updates a task, failing when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Manager`] wrapping
    /// [`TaskManagerError::NotFound`] when the task is absent, or
    /// [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn try_update(&self, id: TaskId, update: &TaskUpdate) -> SharedManagerResult<Task> {
        Ok(self.write()?.try_update(id, update)?)
    }

    /// Looks up a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn get_by_id(&self, id: TaskId) -> SharedManagerResult<Option<Task>> {
        Ok(self.read()?.get_by_id(id).cloned())
    }

    /// Looks up a task by identifier, failing when it is absent.
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Manager`] wrapping
    /// [`TaskManagerError::NotFound`] when the task is absent, or
    /// [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn try_get(&self, id: TaskId) -> SharedManagerResult<Task> {
        let manager = self.read()?;
        let task = manager.try_get(id)?;
        Ok(task.clone())
    }

    /// Returns the most urgent task without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn peek_most_urgent(&self) -> SharedManagerResult<Option<Task>> {
        Ok(self.read()?.peek_most_urgent().cloned())
    }

    /// Extracts the most urgent task from both structures.
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn complete_most_urgent(&self) -> SharedManagerResult<Option<Task>> {
        Ok(self.write()?.complete_most_urgent())
    }

    /// Extracts the most urgent task, failing when the collection is empty.
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Manager`] wrapping
    /// [`TaskManagerError::EmptyCollection`] when no task is stored, or
    /// [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn try_complete_most_urgent(&self) -> SharedManagerResult<Task> {
        Ok(self.write()?.try_complete_most_urgent()?)
    }

    /// Returns all tasks, most urgent first.
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn list_by_priority(&self) -> SharedManagerResult<Vec<Task>> {
        Ok(self.read()?.list_by_priority())
    }

    /// Returns all tasks in ascending identifier order.
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn list_by_id(&self) -> SharedManagerResult<Vec<Task>> {
        Ok(self.read()?.list_by_id())
    }

    /// Returns the number of stored tasks.
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn len(&self) -> SharedManagerResult<usize> {
        Ok(self.read()?.len())
    }

    /// Returns `true` when both structures are empty.
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn is_empty(&self) -> SharedManagerResult<bool> {
        Ok(self.read()?.is_empty())
    }

    /// Discards every task and resets identifier numbering.
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn clear(&self) -> SharedManagerResult<()> {
        self.write()?.clear();
        Ok(())
    }

    /// Captures an owned copy of both structures.
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn snapshot(&self) -> SharedManagerResult<StructureSnapshot> {
        Ok(self.read()?.snapshot())
    }

    /// Compares both structures.
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn check_consistency(&self) -> SharedManagerResult<ConsistencyReport> {
        Ok(self.read()?.check_consistency())
    }

    /// Fails with [`TaskManagerError::Divergence`] when the structures
    /// disagree.
    ///
    /// # Errors
    ///
    /// Returns [`SharedManagerError::Manager`] wrapping the divergence
    /// report, or [`SharedManagerError::Poisoned`] when the lock is poisoned.
    pub fn ensure_consistent(&self) -> SharedManagerResult<()> {
        let report = self.check_consistency()?;
        if report.is_consistent() {
            Ok(())
        } else {
            Err(TaskManagerError::Divergence(report).into())
        }
    }
}
