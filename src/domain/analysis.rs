//! Structural metrics: depth, balance, counts.

use std::collections::{HashMap, VecDeque};

use tracing::instrument;

use crate::domain::arena::{BinaryTree, NodeId};

/// Height of the subtree at `node`: 0 when absent, else 1 + the deeper child.
pub fn max_depth(tree: &BinaryTree, node: Option<NodeId>) -> usize {
    height_and_balance(tree, node).0
}

/// True when at every node of the subtree the child heights differ by at most one.
///
/// Heights are computed bottom-up once, so this is linear in the subtree size.
pub fn is_balanced(tree: &BinaryTree, node: Option<NodeId>) -> bool {
    height_and_balance(tree, node).1
}

/// Height and balance of the subtree at `node` in one post-order pass.
///
/// Uses an explicit stack, so the depth of the tree does not touch the call stack.
fn height_and_balance(tree: &BinaryTree, node: Option<NodeId>) -> (usize, bool) {
    let mut heights: HashMap<NodeId, usize> = HashMap::new();
    let mut balanced = true;
    let mut stack: Vec<(NodeId, bool)> = node
        .filter(|&idx| tree.get_node(idx).is_some())
        .map(|idx| (idx, false))
        .into_iter()
        .collect();

    while let Some((idx, expanded)) = stack.pop() {
        let Some(n) = tree.get_node(idx) else {
            continue;
        };
        if !expanded {
            stack.push((idx, true));
            stack.extend(n.children().map(|c| (c, false)));
            continue;
        }
        let height_of = |child: Option<NodeId>| child.and_then(|c| heights.get(&c).copied()).unwrap_or(0);
        let (left, right) = (height_of(n.left), height_of(n.right));
        balanced &= left.abs_diff(right) <= 1;
        heights.insert(idx, 1 + left.max(right));
    }

    let height = node.and_then(|idx| heights.get(&idx).copied()).unwrap_or(0);
    (height, balanced)
}

impl BinaryTree {
    /// Height of the whole tree, 0 for the empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn depth(&self) -> usize {
        max_depth(self, self.root())
    }

    #[instrument(level = "debug", skip(self))]
    pub fn is_balanced(&self) -> bool {
        is_balanced(self, self.root())
    }

    pub fn leaf_count(&self) -> usize {
        self.node_depths()
            .iter()
            .filter(|(idx, _)| self.get_node(*idx).is_some_and(|n| n.is_leaf()))
            .count()
    }

    /// Every node with its depth (root = 0), in level order.
    pub fn node_depths(&self) -> Vec<(NodeId, usize)> {
        let mut result = Vec::with_capacity(self.len());
        let mut queue: VecDeque<(NodeId, usize)> = self.root().map(|r| (r, 0)).into_iter().collect();

        while let Some((idx, depth)) = queue.pop_front() {
            if let Some(node) = self.get_node(idx) {
                result.push((idx, depth));
                for child in node.children() {
                    queue.push_back((child, depth + 1));
                }
            }
        }
        result
    }

    /// Depth of a single node (root = 0), None if it is not in this tree.
    pub fn depth_of(&self, idx: NodeId) -> Option<usize> {
        self.node_depths()
            .into_iter()
            .find_map(|(n, d)| (n == idx).then_some(d))
    }
}
