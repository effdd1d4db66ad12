//! AVL tree nodes, rotations, and the recursive insert/delete algorithms.
//!
//! Each subtree is owned by its parent link. Algorithms take a subtree by
//! value and return the (possibly rotated) new subtree root, so rotations
//! never alias a node.

use std::cmp::Ordering;
use std::mem;

use crate::task::domain::{Task, TaskId};

pub(super) type Link = Option<Box<IndexNode>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct IndexNode {
    pub(super) task: Task,
    pub(super) height: u32,
    pub(super) left: Link,
    pub(super) right: Link,
}

impl IndexNode {
    const fn leaf(task: Task) -> Self {
        Self {
            task,
            height: 1,
            left: None,
            right: None,
        }
    }

    pub(super) const fn id(&self) -> TaskId {
        self.task.id()
    }

    pub(super) fn balance(&self) -> i64 {
        i64::from(height(self.left.as_deref())) - i64::from(height(self.right.as_deref()))
    }

    fn refresh_height(&mut self) {
        self.height = height(self.left.as_deref()).max(height(self.right.as_deref())) + 1;
    }
}

/// Height of a subtree; an absent subtree has height 0.
pub(super) fn height(node: Option<&IndexNode>) -> u32 {
    node.map_or(0, |n| n.height)
}

fn balance_of(node: Option<&IndexNode>) -> i64 {
    node.map_or(0, IndexNode::balance)
}

fn rotate_right(mut node: Box<IndexNode>) -> Box<IndexNode> {
    let Some(mut pivot) = node.left.take() else {
        return node;
    };
    node.left = pivot.right.take();
    node.refresh_height();
    pivot.right = Some(node);
    pivot.refresh_height();
    pivot
}

fn rotate_left(mut node: Box<IndexNode>) -> Box<IndexNode> {
    let Some(mut pivot) = node.right.take() else {
        return node;
    };
    node.right = pivot.left.take();
    node.refresh_height();
    pivot.left = Some(node);
    pivot.refresh_height();
    pivot
}

/// Inserts `task` below `link`, replacing the task of an existing node with
/// the same identifier. The replaced task, if any, is stored in `previous`.
pub(super) fn insert(link: Link, task: Task, previous: &mut Option<Task>) -> Box<IndexNode> {
    let Some(mut node) = link else {
        return Box::new(IndexNode::leaf(task));
    };
    let key = task.id();
    match key.cmp(&node.id()) {
        Ordering::Less => node.left = Some(insert(node.left.take(), task, previous)),
        Ordering::Greater => node.right = Some(insert(node.right.take(), task, previous)),
        Ordering::Equal => {
            *previous = Some(mem::replace(&mut node.task, task));
            return node;
        }
    }
    node.refresh_height();
    rebalance_after_insert(node, key)
}

fn rebalance_after_insert(mut node: Box<IndexNode>, key: TaskId) -> Box<IndexNode> {
    let balance = node.balance();
    if balance > 1 {
        // left-right: the new key went into the left child's right subtree
        if node.left.as_ref().is_some_and(|left| key > left.id()) {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if balance < -1 {
        // right-left
        if node.right.as_ref().is_some_and(|right| key < right.id()) {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

/// Deletes the node keyed by `id` below `link`. The removed task, if any, is
/// stored in `removed`.
pub(super) fn delete(link: Link, id: TaskId, removed: &mut Option<Task>) -> Link {
    let mut node = link?;
    match id.cmp(&node.id()) {
        Ordering::Less => node.left = delete(node.left.take(), id, removed),
        Ordering::Greater => node.right = delete(node.right.take(), id, removed),
        Ordering::Equal => match (node.left.take(), node.right.take()) {
            (None, None) => {
                *removed = Some(node.task);
                return None;
            }
            (Some(child), None) | (None, Some(child)) => {
                *removed = Some(node.task);
                return Some(child);
            }
            (Some(left), Some(right)) => {
                let successor_id = min_id(&right);
                let mut successor = None;
                node.right = delete(Some(right), successor_id, &mut successor);
                node.left = Some(left);
                if let Some(task) = successor {
                    *removed = Some(mem::replace(&mut node.task, task));
                }
            }
        },
    }
    node.refresh_height();
    Some(rebalance_after_delete(node))
}

fn rebalance_after_delete(mut node: Box<IndexNode>) -> Box<IndexNode> {
    let balance = node.balance();
    if balance > 1 {
        if balance_of(node.left.as_deref()) < 0 {
            node.left = node.left.take().map(rotate_left);
        }
        return rotate_right(node);
    }
    if balance < -1 {
        if balance_of(node.right.as_deref()) > 0 {
            node.right = node.right.take().map(rotate_right);
        }
        return rotate_left(node);
    }
    node
}

fn min_id(node: &IndexNode) -> TaskId {
    let mut current = node;
    while let Some(left) = current.left.as_deref() {
        current = left;
    }
    current.id()
}

pub(super) fn search(link: Option<&IndexNode>, id: TaskId) -> Option<&Task> {
    let mut current = link;
    while let Some(node) = current {
        current = match id.cmp(&node.id()) {
            Ordering::Less => node.left.as_deref(),
            Ordering::Greater => node.right.as_deref(),
            Ordering::Equal => return Some(&node.task),
        };
    }
    None
}
