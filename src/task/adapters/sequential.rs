//! Counter-backed identifier source.

use std::num::NonZeroU64;

use crate::task::{domain::TaskId, ports::IdSource};

/// Identifier source issuing 1, 2, 3, ... from an owned counter.
///
/// The counter never wraps: once `u64::MAX` has been issued it is issued
/// again, so identifiers stop increasing at that point.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequentialIdSource {
    last: Option<NonZeroU64>,
}

impl SequentialIdSource {
    /// Creates a source whose first identifier is 1.
    #[must_use]
    pub const fn new() -> Self {
        Self { last: None }
    }

    /// Returns the most recently issued identifier, if any.
    #[must_use]
    pub fn last_issued(&self) -> Option<TaskId> {
        self.last.map(TaskId::from_non_zero)
    }
}

impl IdSource for SequentialIdSource {
    fn next_id(&mut self) -> TaskId {
        let next = self
            .last
            .map_or(NonZeroU64::MIN, |last| last.saturating_add(1));
        self.last = Some(next);
        TaskId::from_non_zero(next)
    }

    fn reset(&mut self) {
        self.last = None;
    }
}
