//! Structural invariant checks for the AVL index.

use thiserror::Error;

use super::node::{IndexNode, height};
use crate::task::domain::TaskId;

/// Invariant violation detected by [`TaskIndex::validate`](super::TaskIndex::validate).
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum IndexViolation {
    /// A node's identifier is outside the range allowed by its ancestors.
    #[error("node {id} breaks search-tree ordering")]
    OutOfOrder {
        /// Offending node.
        id: TaskId,
    },

    /// A node's balance factor is outside `-1..=1`.
    #[error("node {id} is unbalanced (balance factor {balance})")]
    Unbalanced {
        /// Offending node.
        id: TaskId,
        /// Observed balance factor.
        balance: i64,
    },

    /// A node's cached height disagrees with its subtrees.
    #[error("node {id} records height {recorded}, actual height is {actual}")]
    StaleHeight {
        /// Offending node.
        id: TaskId,
        /// Cached height.
        recorded: u32,
        /// Recomputed height.
        actual: u32,
    },

    /// The cached element count disagrees with the tree.
    #[error("index records {recorded} tasks but holds {actual}")]
    LengthMismatch {
        /// Cached count.
        recorded: usize,
        /// Counted nodes.
        actual: usize,
    },
}

pub(super) struct SubtreeSummary {
    pub(super) count: usize,
}

/// Checks the subtree rooted at `node`, whose identifiers must lie strictly
/// between `lower` and `upper`.
pub(super) fn subtree(
    node: Option<&IndexNode>,
    lower: Option<TaskId>,
    upper: Option<TaskId>,
) -> Result<SubtreeSummary, IndexViolation> {
    let Some(current) = node else {
        return Ok(SubtreeSummary { count: 0 });
    };
    let id = current.id();
    if lower.is_some_and(|bound| id <= bound) || upper.is_some_and(|bound| id >= bound) {
        return Err(IndexViolation::OutOfOrder { id });
    }

    let left = subtree(current.left.as_deref(), lower, Some(id))?;
    let right = subtree(current.right.as_deref(), Some(id), upper)?;

    let actual = height(current.left.as_deref()).max(height(current.right.as_deref())) + 1;
    if current.height != actual {
        return Err(IndexViolation::StaleHeight {
            id,
            recorded: current.height,
            actual,
        });
    }
    let balance = current.balance();
    if !(-1..=1).contains(&balance) {
        return Err(IndexViolation::Unbalanced { id, balance });
    }

    Ok(SubtreeSummary {
        count: left.count + right.count + 1,
    })
}
