//! Identifier-generation port.

use crate::task::domain::TaskId;

/// Source of fresh task identifiers.
///
/// Implementations must return strictly increasing identifiers between two
/// calls to [`IdSource::reset`], until their range is exhausted. A source
/// that has run out may repeat its last identifier; the manager logs the
/// collision and reports it as a duplicate. Identifiers are not unique
/// across a reset.
#[cfg_attr(test, mockall::automock)]
pub trait IdSource: Send {
    /// Returns the next identifier.
    fn next_id(&mut self) -> TaskId;

    /// Restores the source to its initial state.
    fn reset(&mut self);
}
