//! Task manager keeping the heap and the index in agreement.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use super::{ConsistencyReport, StructureSnapshot, TaskManagerError};
use crate::task::{
    adapters::SequentialIdSource,
    domain::{Priority, Task, TaskId, TaskUpdate},
    ports::IdSource,
    structures::{TaskHeap, TaskIndex},
};

/// Owner of the live task set.
///
/// Every task is held twice: once in a [`TaskHeap`] for urgency queries and
/// once in a [`TaskIndex`] for identifier lookups. Each mutating operation
/// updates both before returning, so between calls both structures hold the
/// same identifiers with the same field values.
///
/// The manager is single-threaded; wrap it in a
/// [`SharedTaskManager`](super::SharedTaskManager) to share it.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use taskdeck::task::{domain::Priority, services::TaskManager};
///
/// let mut manager = TaskManager::new();
/// let due = NaiveDate::from_ymd_opt(2099, 1, 1).expect("valid date");
/// let task = manager.add_task("Write report", Priority::High, due);
///
/// assert_eq!(manager.get_by_id(task.id()), Some(&task));
/// assert_eq!(manager.peek_most_urgent(), Some(&task));
/// ```
#[derive(Debug, Clone)]
pub struct TaskManager<G = SequentialIdSource>
where
    G: IdSource,
{
    queue: TaskHeap,
    index: TaskIndex,
    ids: G,
}

impl TaskManager<SequentialIdSource> {
    /// Creates an empty manager numbering tasks from 1.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_id_source(SequentialIdSource::new())
    }
}

impl Default for TaskManager<SequentialIdSource> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G> TaskManager<G>
where
    G: IdSource,
{
    /// Creates an empty manager drawing identifiers from `ids`.
    #[must_use]
    pub const fn with_id_source(ids: G) -> Self {
        Self {
            queue: TaskHeap::new(),
            index: TaskIndex::new(),
            ids,
        }
    }

    /// Creates a task from validated field values and stores it in both
    /// structures.
    ///
    /// If the identifier source hands out an identifier that is still live,
    /// the index entry is replaced while the heap keeps both copies; a
    /// warning is logged and [`check_consistency`](Self::check_consistency)
    /// reports the duplicate.
    pub fn add_task(
        &mut self,
        description: impl Into<String>,
        priority: Priority,
        due_date: NaiveDate,
    ) -> Task {
        let task = Task::new(self.ids.next_id(), description, priority, due_date);
        self.queue.insert(task.clone());
        if self.index.insert(task.clone()).is_some() {
            warn!(task_id = %task.id(), "identifier source reissued a live identifier");
        }
        debug!(task_id = %task.id(), priority = %task.priority(), "task added");
        task
    }

    /// Removes a task from both structures.
    ///
    /// Returns `true` only when both the heap and the index held the task.
    /// If just one of them held it, the structures had already diverged; the
    /// task is still evicted from the one that held it, a warning is logged,
    /// and `false` is returned.
    pub fn remove_task(&mut self, id: TaskId) -> bool {
        let from_queue = self.queue.remove(id).is_some();
        let from_index = self.index.remove(id).is_some();
        if from_queue != from_index {
            warn!(task_id = %id, from_queue, from_index, "task present in only one structure");
        }
        let removed = from_queue && from_index;
        debug!(task_id = %id, removed, "task removal");
        removed
    }

    /// Removes a task from both structures, reporting why it failed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskManagerError::NotFound`] when neither structure holds
    /// the task, or [`TaskManagerError::Divergence`] when only one does.
    pub fn try_remove(&mut self, id: TaskId) -> Result<Task, TaskManagerError> {
        let from_queue = self.queue.remove(id);
        let from_index = self.index.remove(id);
        match (from_queue, from_index) {
            (Some(_), Some(task)) => {
                debug!(task_id = %id, "task removed");
                Ok(task)
            }
            (None, None) => Err(TaskManagerError::NotFound(id)),
            (queued, indexed) => {
                warn!(task_id = %id, "task present in only one structure");
                Err(TaskManagerError::Divergence(ConsistencyReport {
                    only_in_queue: queued.map(|task| task.id()).into_iter().collect(),
                    only_in_index: indexed.map(|task| task.id()).into_iter().collect(),
                    ..ConsistencyReport::default()
                }))
            }
        }
    }

    /// Overlays `update` onto the stored task.
    ///
    /// The index is the authoritative lookup path. A priority change
    /// re-queues the task; otherwise the queued copy is refreshed in place
    /// and only moved if its due date changed its urgency. The index entry is
    /// replaced under the same key. Returns `None` when the task is absent.
    ///
    /// A task held by the index but not by the heap is not re-queued; the
    /// divergence is logged and left for
    /// [`check_consistency`](Self::check_consistency) to report.
    pub fn update_task(&mut self, id: TaskId, update: &TaskUpdate) -> Option<Task> {
        let existing = self.index.get(id)?;
        let updated = existing.with_update(update);

        let queued = if updated.priority() == existing.priority() {
            self.queue.replace_in_place(updated.clone())
        } else if self.queue.remove(id).is_some() {
            self.queue.insert(updated.clone());
            true
        } else {
            false
        };
        if !queued {
            warn!(task_id = %id, "indexed task missing from queue during update");
        }
        self.index.insert(updated.clone());

        debug!(task_id = %id, "task updated");
        Some(updated)
    }

    /// Overlays `update` onto the stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskManagerError::NotFound`] when the task is absent.
    pub fn try_update(
        &mut self,
        id: TaskId,
        update: &TaskUpdate,
    ) -> Result<Task, TaskManagerError> {
        self.update_task(id, update)
            .ok_or(TaskManagerError::NotFound(id))
    }

    /// Looks up a task by identifier through the index.
    #[must_use]
    pub fn get_by_id(&self, id: TaskId) -> Option<&Task> {
        self.index.get(id)
    }

    /// Looks up a task by identifier through the index.
    ///
    /// # Errors
    ///
    /// Returns [`TaskManagerError::NotFound`] when the task is absent.
    pub fn try_get(&self, id: TaskId) -> Result<&Task, TaskManagerError> {
        self.get_by_id(id).ok_or(TaskManagerError::NotFound(id))
    }

    /// Returns the most urgent task without removing it.
    #[must_use]
    pub fn peek_most_urgent(&self) -> Option<&Task> {
        self.queue.peek()
    }

    /// Returns the most urgent task without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskManagerError::EmptyCollection`] when no task is stored.
    pub fn try_peek(&self) -> Result<&Task, TaskManagerError> {
        self.peek_most_urgent().ok_or(TaskManagerError::EmptyCollection)
    }

    /// Extracts the most urgent task from the heap and deletes it from the
    /// index.
    ///
    /// Returns `None`, without touching the index, when the heap is empty.
    pub fn complete_most_urgent(&mut self) -> Option<Task> {
        let task = self.queue.extract_max()?;
        if self.index.remove(task.id()).is_none() {
            warn!(task_id = %task.id(), "completed task was missing from index");
        }
        debug!(task_id = %task.id(), "most urgent task completed");
        Some(task)
    }

    /// Extracts the most urgent task from both structures.
    ///
    /// # Errors
    ///
    /// Returns [`TaskManagerError::EmptyCollection`] when no task is stored.
    pub fn try_complete_most_urgent(&mut self) -> Result<Task, TaskManagerError> {
        self.complete_most_urgent()
            .ok_or(TaskManagerError::EmptyCollection)
    }

    /// Returns all tasks, most urgent first.
    ///
    /// Ties in priority class are ordered by due date, earliest first.
    #[must_use]
    pub fn list_by_priority(&self) -> Vec<Task> {
        let mut tasks = self.queue.to_vec();
        tasks.sort_by(Task::compare_urgency);
        tasks
    }

    /// Returns all tasks in ascending identifier order.
    #[must_use]
    pub fn list_by_id(&self) -> Vec<Task> {
        self.index.to_vec_in_order()
    }

    /// Returns the number of stored tasks, as counted by the index.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` only when both structures are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty() && self.index.is_empty()
    }

    /// Discards every task and resets identifier numbering.
    ///
    /// Identifiers issued after a clear may repeat identifiers issued before
    /// it.
    pub fn clear(&mut self) {
        let discarded = self.index.len();
        self.queue = TaskHeap::new();
        self.index = TaskIndex::new();
        self.ids.reset();
        info!(discarded, "task collection cleared");
    }

    /// Captures an owned copy of both structures for display.
    #[must_use]
    pub fn snapshot(&self) -> StructureSnapshot {
        StructureSnapshot::capture(&self.queue, &self.index)
    }

    /// Compares the identifier sets and field values of both structures.
    #[must_use]
    pub fn check_consistency(&self) -> ConsistencyReport {
        let report = ConsistencyReport::compare(&self.queue, &self.index);
        if !report.is_consistent() {
            warn!(%report, "task structures diverged");
        }
        report
    }

    /// Read access to the heap.
    #[must_use]
    pub const fn queue(&self) -> &TaskHeap {
        &self.queue
    }

    /// Read access to the index.
    #[must_use]
    pub const fn index(&self) -> &TaskIndex {
        &self.index
    }

    #[cfg(test)]
    pub(crate) const fn structures_mut(&mut self) -> (&mut TaskHeap, &mut TaskIndex) {
        (&mut self.queue, &mut self.index)
    }
}
