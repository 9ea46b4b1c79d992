//! Arena-backed binary tree.
//!
//! Nodes live in a generational arena and refer to their children by
//! [`NodeId`]. A `NodeId` is the identity of a node: two nodes carrying the
//! same value are still distinct, which is what highlighting relies on.

use std::fmt;

use generational_arena::{Arena, Index};
use tracing::instrument;

/// Stable handle of a node inside its [`BinaryTree`].
pub type NodeId = Index;

/// Which child slot of a parent a node occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "L"),
            Side::Right => write!(f, "R"),
        }
    }
}

/// Binary tree node in the arena.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    /// Integer payload
    pub value: i64,
    /// Index of the left child, None if absent
    pub left: Option<NodeId>,
    /// Index of the right child, None if absent
    pub right: Option<NodeId>,
}

impl TreeNode {
    fn new(value: i64) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Present children, left before right.
    pub fn children(&self) -> impl DoubleEndedIterator<Item = NodeId> {
        self.left.into_iter().chain(self.right)
    }
}

impl fmt::Display for TreeNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Binary tree stored in a generational arena.
///
/// Built once by [`TreeBuilder`](crate::domain::TreeBuilder) and read-only
/// afterwards: the insertion methods are crate-private.
#[derive(Debug, Clone)]
pub struct BinaryTree {
    arena: Arena<TreeNode>,
    /// Index of the root node, None for the empty tree
    root: Option<NodeId>,
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryTree {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
            root: None,
        }
    }

    #[instrument(level = "trace", skip(self))]
    pub(crate) fn insert_root(&mut self, value: i64) -> NodeId {
        let idx = self.arena.insert(TreeNode::new(value));
        self.root = Some(idx);
        idx
    }

    /// Attach a new node below `parent` in the given slot.
    #[instrument(level = "trace", skip(self))]
    pub(crate) fn insert_child(&mut self, parent: NodeId, side: Side, value: i64) -> NodeId {
        let idx = self.arena.insert(TreeNode::new(value));
        if let Some(parent) = self.arena.get_mut(parent) {
            match side {
                Side::Left => parent.left = Some(idx),
                Side::Right => parent.right = Some(idx),
            }
        }
        idx
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn get_node(&self, idx: NodeId) -> Option<&TreeNode> {
        self.arena.get(idx)
    }

    pub fn value(&self, idx: NodeId) -> Option<i64> {
        self.get_node(idx).map(|n| n.value)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Values of the given nodes, in order. Unknown handles are skipped.
    pub fn values_of(&self, ids: &[NodeId]) -> Vec<i64> {
        ids.iter().filter_map(|&id| self.value(id)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_child_links_into_parent_slot() {
        let mut tree = BinaryTree::new();
        let root = tree.insert_root(1);
        let right = tree.insert_child(root, Side::Right, 3);

        let node = tree.get_node(root).unwrap();
        assert_eq!(node.left, None);
        assert_eq!(node.right, Some(right));
        assert_eq!(node.children().collect::<Vec<_>>(), vec![right]);
        assert!(tree.get_node(right).unwrap().is_leaf());
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn equal_values_get_distinct_handles() {
        let mut tree = BinaryTree::new();
        let root = tree.insert_root(7);
        let left = tree.insert_child(root, Side::Left, 7);
        assert_ne!(root, left);
        assert_eq!(tree.values_of(&[root, left]), vec![7, 7]);
    }
}
