//! Unit tests for the task module.
//!
//! Tests are organised by component: domain values, the two structures, the
//! manager, intake validation, and randomized invariant checks.

mod fixtures;
