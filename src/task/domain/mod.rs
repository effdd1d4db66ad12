//! Domain model for the task collection.
//!
//! Tasks are plain values: an identifier assigned once at creation, a
//! description, a priority class, and a due date. The urgency ordering
//! defined on [`Task`] is the single ordering law used by the heap.

mod error;
mod ids;
mod priority;
mod task;

pub use error::{ParsePriorityError, TaskDomainError};
pub use ids::TaskId;
pub use priority::Priority;
pub use task::{Task, TaskUpdate};
