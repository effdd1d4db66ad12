//! Application services orchestrating the task collection.

mod diagnostics;
mod error;
mod intake;
mod manager;
mod shared;

pub use diagnostics::{ConsistencyReport, HeapSnapshot, IndexSnapshot, StructureSnapshot};
pub use error::{SharedManagerError, TaskIntakeError, TaskManagerError};
pub use intake::{NewTaskRequest, TaskIntakeResult, TaskIntakeService, TaskUpdateRequest};
pub use manager::TaskManager;
pub use shared::{SharedManagerResult, SharedTaskManager};
