//! Binary max-heap of tasks ordered by urgency.

use crate::task::domain::{Task, TaskId};

const fn parent(index: usize) -> usize {
    (index - 1) >> 1
}

const fn left_child(index: usize) -> usize {
    2 * index + 1
}

const fn right_child(index: usize) -> usize {
    2 * index + 2
}

/// Array-backed priority queue of tasks.
///
/// The most urgent task (see [`Task::compare_urgency`]) sits at position 0.
/// For every other position, the task at the parent position is at least as
/// urgent as the task at the child position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskHeap {
    tasks: Vec<Task>,
}

impl TaskHeap {
    /// Creates an empty heap.
    #[must_use]
    pub const fn new() -> Self {
        Self { tasks: Vec::new() }
    }

    /// Returns the number of queued tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` when no task is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Queues a task in O(log n).
    pub fn insert(&mut self, task: Task) {
        self.tasks.push(task);
        self.sift_up(self.tasks.len() - 1);
    }

    /// Returns the most urgent task without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Task> {
        self.tasks.first()
    }

    /// Removes and returns the most urgent task in O(log n).
    ///
    /// Returns `None` when the heap is empty.
    pub fn extract_max(&mut self) -> Option<Task> {
        if self.tasks.len() <= 1 {
            return self.tasks.pop();
        }
        let max = self.tasks.swap_remove(0);
        self.sift_down(0);
        Some(max)
    }

    /// Removes the task with the given identifier.
    ///
    /// Locating the task is a linear scan; the heap is not keyed by
    /// identifier. Returns `None` when no queued task has that identifier.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let index = self.position(id)?;
        let removed = self.tasks.swap_remove(index);
        if index < self.tasks.len() {
            self.restore(index);
        }
        Some(removed)
    }

    /// Returns the queued task with the given identifier (linear scan).
    #[must_use]
    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id() == id)
    }

    /// Returns `true` when a task with the given identifier is queued.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.find(id).is_some()
    }

    /// Overwrites the queued task sharing `task`'s identifier.
    ///
    /// The entry keeps its position when its urgency is unchanged; otherwise
    /// it is moved up or down until the heap property holds again. Returns
    /// `false` when no queued task has that identifier.
    pub(crate) fn replace_in_place(&mut self, task: Task) -> bool {
        let Some(index) = self.position(task.id()) else {
            return false;
        };
        let Some(slot) = self.tasks.get_mut(index) else {
            return false;
        };
        let reorder = slot.compare_urgency(&task).is_ne();
        *slot = task;
        if reorder {
            self.restore(index);
        }
        true
    }

    /// Iterates over queued tasks in array order (not urgency order).
    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Returns an independent copy of the queued tasks in array order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Task> {
        self.tasks.clone()
    }

    /// Checks the heap property at every non-root position.
    #[must_use]
    pub fn satisfies_heap_property(&self) -> bool {
        (1..self.tasks.len()).all(|index| {
            match (self.tasks.get(parent(index)), self.tasks.get(index)) {
                (Some(up), Some(down)) => !down.outranks(up),
                _ => false,
            }
        })
    }

    fn position(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id() == id)
    }

    /// Returns `true` when the task at `a` is strictly more urgent than the
    /// task at `b`.
    fn outranks(&self, a: usize, b: usize) -> bool {
        match (self.tasks.get(a), self.tasks.get(b)) {
            (Some(first), Some(second)) => first.outranks(second),
            _ => false,
        }
    }

    fn restore(&mut self, index: usize) {
        if index > 0 && self.outranks(index, parent(index)) {
            self.sift_up(index);
        } else {
            self.sift_down(index);
        }
    }

    fn sift_up(&mut self, start: usize) {
        let mut index = start;
        while index > 0 {
            let up = parent(index);
            if !self.outranks(index, up) {
                break;
            }
            self.tasks.swap(index, up);
            index = up;
        }
    }

    fn sift_down(&mut self, start: usize) {
        let mut index = start;
        loop {
            let mut most_urgent = index;
            for child in [left_child(index), right_child(index)] {
                if child < self.tasks.len() && self.outranks(child, most_urgent) {
                    most_urgent = child;
                }
            }
            if most_urgent == index {
                break;
            }
            self.tasks.swap(index, most_urgent);
            index = most_urgent;
        }
    }
}

impl<'a> IntoIterator for &'a TaskHeap {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
