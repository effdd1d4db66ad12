//! Taskdeck: a task collection indexed both by urgency and by identifier.
//!
//! This crate keeps one live set of tasks under two synchronized access
//! structures: a binary max-heap answering "what is most urgent?" and an AVL
//! tree answering "which task has this identifier?". Every mutation goes
//! through a single manager that applies it to both structures before
//! returning.
//!
//! # Architecture
//!
//! Taskdeck follows hexagonal architecture principles:
//!
//! - **Domain**: Task values, priorities, identifiers, and validation errors
//! - **Ports**: Abstract collaborator traits (identifier generation)
//! - **Adapters**: Default collaborator implementations
//! - **Structures**: The heap and the AVL index
//! - **Services**: The manager, its thread-safe handle, and input intake
//!
//! # Modules
//!
//! - [`task`]: Task domain, data structures, and orchestration services

pub mod task;
