//! Default collaborator implementations for the task collection.

pub mod sequential;

pub use sequential::SequentialIdSource;
