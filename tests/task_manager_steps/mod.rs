//! Step definitions for task manager BDD scenarios.

mod given;
mod then;
mod when;
pub mod world;
