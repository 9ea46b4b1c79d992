//! Traversal engine: the four visit orders over a [`BinaryTree`].
//!
//! Depth-first orders use an explicit stack, level order a FIFO queue, so
//! deep trees never recurse. Each iterator yields every node exactly once.

use std::collections::VecDeque;
use std::fmt;
use std::str::FromStr;

use tracing::{debug, instrument};

use crate::domain::arena::{BinaryTree, NodeId, TreeNode};
use crate::domain::error::DomainError;

/// Selectable traversal strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Traversal {
    InOrder,
    PreOrder,
    PostOrder,
    LevelOrder,
}

impl Traversal {
    pub const ALL: [Traversal; 4] = [
        Traversal::InOrder,
        Traversal::PreOrder,
        Traversal::PostOrder,
        Traversal::LevelOrder,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Traversal::InOrder => "In-order",
            Traversal::PreOrder => "Pre-order",
            Traversal::PostOrder => "Post-order",
            Traversal::LevelOrder => "Level-order",
        }
    }

    /// Lazy walk over `tree` in this order.
    pub fn walk(self, tree: &BinaryTree) -> Walk<'_> {
        match self {
            Traversal::InOrder => Walk::InOrder(InOrderIterator::new(tree)),
            Traversal::PreOrder => Walk::PreOrder(PreOrderIterator::new(tree)),
            Traversal::PostOrder => Walk::PostOrder(PostOrderIterator::new(tree)),
            Traversal::LevelOrder => Walk::LevelOrder(LevelOrderIterator::new(tree)),
        }
    }
}

impl fmt::Display for Traversal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Traversal {
    type Err = DomainError;

    /// Accepts `In-order`, `inorder`, `in_order`, `IN-ORDER`, ...
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "inorder" => Ok(Traversal::InOrder),
            "preorder" => Ok(Traversal::PreOrder),
            "postorder" => Ok(Traversal::PostOrder),
            "levelorder" | "bfs" => Ok(Traversal::LevelOrder),
            _ => Err(DomainError::UnknownTraversal(s.to_string())),
        }
    }
}

/// Materialize the full visit sequence for `traversal`.
#[instrument(level = "debug", skip(tree))]
pub fn traverse(tree: &BinaryTree, traversal: Traversal) -> Vec<NodeId> {
    let sequence: Vec<NodeId> = traversal.walk(tree).map(|(idx, _)| idx).collect();
    debug!("{} visited {} nodes", traversal, sequence.len());
    sequence
}

/// Iterator returned by [`Traversal::walk`].
pub enum Walk<'a> {
    InOrder(InOrderIterator<'a>),
    PreOrder(PreOrderIterator<'a>),
    PostOrder(PostOrderIterator<'a>),
    LevelOrder(LevelOrderIterator<'a>),
}

impl<'a> Iterator for Walk<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Walk::InOrder(it) => it.next(),
            Walk::PreOrder(it) => it.next(),
            Walk::PostOrder(it) => it.next(),
            Walk::LevelOrder(it) => it.next(),
        }
    }
}

pub struct PreOrderIterator<'a> {
    tree: &'a BinaryTree,
    stack: Vec<NodeId>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        let node = self.tree.get_node(current)?;
        // Right first so left is popped next
        for child in node.children().rev() {
            self.stack.push(child);
        }
        Some((current, node))
    }
}

pub struct InOrderIterator<'a> {
    tree: &'a BinaryTree,
    stack: Vec<NodeId>,
}

impl<'a> InOrderIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        let mut it = Self {
            tree,
            stack: Vec::new(),
        };
        it.push_left_spine(tree.root());
        it
    }

    fn push_left_spine(&mut self, mut next: Option<NodeId>) {
        while let Some(idx) = next {
            self.stack.push(idx);
            next = self.tree.get_node(idx).and_then(|n| n.left);
        }
    }
}

impl<'a> Iterator for InOrderIterator<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        let node = self.tree.get_node(current)?;
        self.push_left_spine(node.right);
        Some((current, node))
    }
}

pub struct PostOrderIterator<'a> {
    tree: &'a BinaryTree,
    stack: Vec<(NodeId, bool)>,
}

impl<'a> PostOrderIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            stack: tree.root().map(|r| (r, false)).into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PostOrderIterator<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, expanded)) = self.stack.pop() {
            if let Some(node) = self.tree.get_node(current) {
                if expanded {
                    return Some((current, node));
                }
                self.stack.push((current, true));
                for child in node.children().rev() {
                    self.stack.push((child, false));
                }
            }
        }
        None
    }
}

pub struct LevelOrderIterator<'a> {
    tree: &'a BinaryTree,
    queue: VecDeque<NodeId>,
}

impl<'a> LevelOrderIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            queue: tree.root().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for LevelOrderIterator<'a> {
    type Item = (NodeId, &'a TreeNode);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.queue.pop_front()?;
        let node = self.tree.get_node(current)?;
        self.queue.extend(node.children());
        Some((current, node))
    }
}
