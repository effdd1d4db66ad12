//! Task collection management for Taskdeck.
//!
//! Tasks live in two structures at once: a priority heap ordered by urgency
//! and an AVL index keyed by identifier. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Heap and AVL tree in [`structures`]
//! - Input validation rules in [`validation`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
pub mod structures;
pub mod validation;

#[cfg(test)]
mod tests;
