//! Input validation for task fields.
//!
//! The task manager trusts its callers; these rules are what a caller runs
//! before handing raw input over. [`TaskIntakeService`] applies them.
//!
//! [`TaskIntakeService`]: crate::task::services::TaskIntakeService

mod config;
pub mod rules;

pub use config::IntakeConfig;
