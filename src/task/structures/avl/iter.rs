//! In-order traversal of the AVL index.

use super::node::IndexNode;
use crate::task::domain::Task;

/// Iterator yielding tasks in ascending identifier order.
///
/// Created by [`TaskIndex::iter`](super::TaskIndex::iter).
#[derive(Debug, Clone)]
pub struct InOrder<'a> {
    stack: Vec<&'a IndexNode>,
}

impl<'a> InOrder<'a> {
    pub(super) fn new(root: Option<&'a IndexNode>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, start: Option<&'a IndexNode>) {
        let mut current = start;
        while let Some(node) = current {
            self.stack.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for InOrder<'a> {
    type Item = &'a Task;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        Some(&node.task)
    }
}
