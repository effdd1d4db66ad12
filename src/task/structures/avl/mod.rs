//! AVL tree indexing tasks by identifier.

mod check;
mod iter;
mod node;
mod shape;

pub use check::IndexViolation;
pub use iter::InOrder;
pub use shape::TreeShape;

use crate::task::domain::{Task, TaskId};
use node::Link;

/// Self-balancing binary search tree keyed by [`TaskId`].
///
/// Lookups, inserts, and deletes run in O(log n): after every structural
/// change the balance factor (left height minus right height) of every node
/// is in `-1..=1`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskIndex {
    root: Link,
    len: usize,
}

impl TaskIndex {
    /// Creates an empty index.
    #[must_use]
    pub const fn new() -> Self {
        Self { root: None, len: 0 }
    }

    /// Returns the number of indexed tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` when no task is indexed.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the height of the tree; an empty tree has height 0.
    #[must_use]
    pub fn height(&self) -> u32 {
        node::height(self.root.as_deref())
    }

    /// Inserts a task, or replaces the task already stored under its
    /// identifier.
    ///
    /// Returns the replaced task when the identifier was already present;
    /// in that case the tree shape does not change.
    pub fn insert(&mut self, task: Task) -> Option<Task> {
        let mut previous = None;
        self.root = Some(node::insert(self.root.take(), task, &mut previous));
        if previous.is_none() {
            self.len += 1;
        }
        previous
    }

    /// Removes the task stored under `id`.
    ///
    /// Returns `None`, leaving the tree untouched, when `id` is absent.
    pub fn remove(&mut self, id: TaskId) -> Option<Task> {
        let mut removed = None;
        self.root = node::delete(self.root.take(), id, &mut removed);
        if removed.is_some() {
            self.len -= 1;
        }
        removed
    }

    /// Looks up the task stored under `id`.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        node::search(self.root.as_deref(), id)
    }

    /// Returns `true` when a task is stored under `id`.
    #[must_use]
    pub fn contains(&self, id: TaskId) -> bool {
        self.get(id).is_some()
    }

    /// Iterates over tasks in ascending identifier order.
    #[must_use]
    pub fn iter(&self) -> InOrder<'_> {
        InOrder::new(self.root.as_deref())
    }

    /// Returns an independent copy of all tasks sorted by identifier.
    #[must_use]
    pub fn to_vec_in_order(&self) -> Vec<Task> {
        self.iter().cloned().collect()
    }

    /// Describes the tree shape for visualisation consumers.
    ///
    /// Returns `None` for an empty tree.
    #[must_use]
    pub fn shape(&self) -> Option<TreeShape> {
        self.root.as_deref().map(TreeShape::from_node)
    }

    /// Verifies search order, AVL balance, cached heights, and length.
    ///
    /// # Errors
    ///
    /// Returns the first [`IndexViolation`] found.
    pub fn validate(&self) -> Result<(), IndexViolation> {
        let counted = check::subtree(self.root.as_deref(), None, None)?.count;
        if counted != self.len {
            return Err(IndexViolation::LengthMismatch {
                recorded: self.len,
                actual: counted,
            });
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a TaskIndex {
    type Item = &'a Task;
    type IntoIter = InOrder<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    use super::{IndexViolation, TaskIndex, node::IndexNode};
    use crate::task::domain::{Priority, Task, TaskId};

    fn id(value: u64) -> TaskId {
        TaskId::new(value).expect("positive task id")
    }

    fn task(value: u64) -> Task {
        let due = NaiveDate::from_ymd_opt(2099, 1, 1).expect("valid date");
        Task::new(id(value), format!("task {value}"), Priority::Medium, due)
    }

    fn node(value: u64, height: u32, left: Option<IndexNode>, right: Option<IndexNode>) -> IndexNode {
        IndexNode {
            task: task(value),
            height,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Index holding 1, 2 and 3 with 2 at the root.
    #[fixture]
    fn three() -> TaskIndex {
        let mut index = TaskIndex::new();
        for value in 1..=3 {
            index.insert(task(value));
        }
        index
    }

    #[rstest]
    fn well_formed_index_validates(three: TaskIndex) {
        assert_eq!(three.validate(), Ok(()));
    }

    #[rstest]
    fn stale_height_is_detected(mut three: TaskIndex) {
        let root = three.root.as_mut().expect("root present");
        root.height = 5;

        assert_eq!(
            three.validate(),
            Err(IndexViolation::StaleHeight {
                id: id(2),
                recorded: 5,
                actual: 2,
            })
        );
    }

    #[rstest]
    fn swapped_children_break_ordering(mut three: TaskIndex) {
        let root = three.root.as_mut().expect("root present");
        std::mem::swap(&mut root.left, &mut root.right);

        assert_eq!(
            three.validate(),
            Err(IndexViolation::OutOfOrder { id: id(3) })
        );
    }

    #[rstest]
    fn wrong_length_is_detected(mut three: TaskIndex) {
        three.len = 7;

        assert_eq!(
            three.validate(),
            Err(IndexViolation::LengthMismatch {
                recorded: 7,
                actual: 3,
            })
        );
    }

    #[test]
    fn right_leaning_chain_is_unbalanced() {
        let chain = node(1, 3, None, Some(node(2, 2, None, Some(node(3, 1, None, None)))));
        let index = TaskIndex {
            root: Some(Box::new(chain)),
            len: 3,
        };

        assert_eq!(
            index.validate(),
            Err(IndexViolation::Unbalanced {
                id: id(1),
                balance: -2,
            })
        );
    }
}
