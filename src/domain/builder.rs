//! Tree builder for level-order (breadth-first) encoded input.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::domain::arena::{BinaryTree, Side};

/// What to do with `null` entries before building.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NullPolicy {
    /// Keep nulls: each one leaves its child slot empty.
    #[default]
    Preserve,
    /// Remove nulls first; the remaining values fill slots densely.
    Drop,
}

/// Constructs a [`BinaryTree`] from a flat level-order sequence.
#[derive(Debug, Clone, Default)]
pub struct TreeBuilder {
    null_policy: NullPolicy,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_null_policy(null_policy: NullPolicy) -> Self {
        Self { null_policy }
    }

    /// Build a tree from level-order values.
    ///
    /// Index 0 is the root. Every dequeued parent consumes the next two
    /// slots, left then right; a `None` slot is consumed without creating a
    /// node. Parents still queued when input runs out keep both children
    /// absent. A leading `None` (under [`NullPolicy::Preserve`]) or empty
    /// input gives the empty tree.
    #[instrument(level = "debug", skip(self, values), fields(len = values.len()))]
    pub fn build(&self, values: &[Option<i64>]) -> BinaryTree {
        let slots: Vec<Option<i64>> = match self.null_policy {
            NullPolicy::Preserve => values.to_vec(),
            NullPolicy::Drop => values.iter().filter(|v| v.is_some()).copied().collect(),
        };

        let mut tree = BinaryTree::new();
        let mut slots = slots.into_iter();
        let root_value = match slots.next() {
            Some(Some(v)) => v,
            _ => {
                debug!("empty input, empty tree");
                return tree;
            }
        };

        let root = tree.insert_root(root_value);
        let mut queue = VecDeque::from([root]);

        'fill: while let Some(parent) = queue.pop_front() {
            for side in [Side::Left, Side::Right] {
                match slots.next() {
                    None => break 'fill,
                    Some(Some(value)) => {
                        let child = tree.insert_child(parent, side, value);
                        queue.push_back(child);
                    }
                    Some(None) => {}
                }
            }
        }

        debug!("built tree with {} nodes", tree.len());
        tree
    }
}

/// Build with the default [`NullPolicy::Preserve`].
pub fn build_tree(values: &[Option<i64>]) -> BinaryTree {
    TreeBuilder::new().build(values)
}
