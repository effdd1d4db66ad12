//! Port contracts for the task collection.
//!
//! Ports define collaborator interfaces consumed by the task manager.

pub mod id_source;

pub use id_source::IdSource;

#[cfg(test)]
pub use id_source::MockIdSource;
