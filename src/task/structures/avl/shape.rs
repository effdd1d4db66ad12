//! Read-only description of the tree shape.

use serde::Serialize;

use super::node::IndexNode;
use crate::task::domain::TaskId;

/// Recursive shape of the AVL index: one entry per node.
///
/// Produced for visualisation; nothing in the collection depends on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeShape {
    /// Identifier stored at this node.
    pub id: TaskId,
    /// Height of the subtree rooted here (a leaf has height 1).
    pub height: u32,
    /// Left subtree height minus right subtree height.
    pub balance: i64,
    /// Left subtree, holding smaller identifiers.
    pub left: Option<Box<TreeShape>>,
    /// Right subtree, holding larger identifiers.
    pub right: Option<Box<TreeShape>>,
}

impl TreeShape {
    pub(super) fn from_node(node: &IndexNode) -> Self {
        Self {
            id: node.id(),
            height: node.height,
            balance: node.balance(),
            left: node.left.as_deref().map(|n| Box::new(Self::from_node(n))),
            right: node.right.as_deref().map(|n| Box::new(Self::from_node(n))),
        }
    }

    /// Counts the nodes in this subtree.
    #[must_use]
    pub fn node_count(&self) -> usize {
        1 + self.left.as_ref().map_or(0, |n| n.node_count())
            + self.right.as_ref().map_or(0, |n| n.node_count())
    }
}
