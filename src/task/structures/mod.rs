//! Access structures holding the live task set.
//!
//! - [`TaskHeap`]: array-backed binary max-heap ordered by urgency
//! - [`TaskIndex`]: AVL tree keyed by task identifier
//!
//! Both structures own their copies of each task. Keeping them in agreement
//! is the task manager's job; neither structure knows about the other.

mod avl;
mod heap;

pub use avl::{IndexViolation, InOrder, TaskIndex, TreeShape};
pub use heap::TaskHeap;
