//! Read-only snapshots and consistency reports for diagnostics.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::Serialize;

use crate::task::domain::{Task, TaskId};
use crate::task::structures::{TaskHeap, TaskIndex, TreeShape};

/// Copy of the heap's contents in array order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeapSnapshot {
    /// Number of queued tasks.
    pub size: usize,
    /// Queued tasks in heap array order (not sorted).
    pub tasks: Vec<Task>,
}

/// Copy of the index's contents and shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexSnapshot {
    /// Number of indexed tasks.
    pub size: usize,
    /// Indexed tasks in ascending identifier order.
    pub tasks: Vec<Task>,
    /// Tree shape, or `None` when the index is empty.
    pub shape: Option<TreeShape>,
}

/// Owned copy of both structures, detached from manager state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructureSnapshot {
    /// Heap contents.
    pub heap: HeapSnapshot,
    /// Index contents.
    pub index: IndexSnapshot,
}

impl StructureSnapshot {
    pub(super) fn capture(queue: &TaskHeap, index: &TaskIndex) -> Self {
        Self {
            heap: HeapSnapshot {
                size: queue.len(),
                tasks: queue.to_vec(),
            },
            index: IndexSnapshot {
                size: index.len(),
                tasks: index.to_vec_in_order(),
                shape: index.shape(),
            },
        }
    }

    /// Renders the snapshot as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer error if rendering fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Differences between the heap and the index.
///
/// An empty report means both structures hold the same tasks.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConsistencyReport {
    /// Identifiers present in the heap only.
    pub only_in_queue: Vec<TaskId>,
    /// Identifiers present in the index only.
    pub only_in_index: Vec<TaskId>,
    /// Identifiers present in both structures with different field values.
    pub field_mismatches: Vec<TaskId>,
    /// Identifiers queued more than once.
    pub duplicated_in_queue: Vec<TaskId>,
}

impl ConsistencyReport {
    pub(super) fn compare(queue: &TaskHeap, index: &TaskIndex) -> Self {
        let mut report = Self::default();
        let mut queued: BTreeMap<TaskId, &Task> = BTreeMap::new();
        let mut duplicated = BTreeSet::new();
        for task in queue {
            if queued.insert(task.id(), task).is_some() {
                duplicated.insert(task.id());
            }
        }
        report.duplicated_in_queue = duplicated.into_iter().collect();

        for task in index {
            match queued.remove(&task.id()) {
                Some(queued_task) if queued_task != task => {
                    report.field_mismatches.push(task.id());
                }
                Some(_) => {}
                None => report.only_in_index.push(task.id()),
            }
        }
        report.only_in_queue = queued.into_keys().collect();
        report
    }

    /// Returns `true` when the heap and the index agree.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.only_in_queue.is_empty()
            && self.only_in_index.is_empty()
            && self.field_mismatches.is_empty()
            && self.duplicated_in_queue.is_empty()
    }
}

impl fmt::Display for ConsistencyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} only in queue, {} only in index, {} mismatched, {} duplicated",
            self.only_in_queue.len(),
            self.only_in_index.len(),
            self.field_mismatches.len(),
            self.duplicated_in_queue.len()
        )
    }
}
