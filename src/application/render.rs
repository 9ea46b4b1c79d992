//! Text rendering of trees and replay frames.
//!
//! Children are labelled `L`/`R` so a lone right child is not mistaken for a
//! left one. The highlighted node is bracketed, and colored when `color` is set.
//!
//! Only the top [`MAX_RENDER_DEPTH`] levels are drawn; anything below is
//! folded into a single [`HIDDEN_LEVELS`] leaf.

use colored::Colorize;
use itertools::Itertools;
use termtree::Tree;

use crate::application::session::Frame;
use crate::domain::{BinaryTree, NodeId, Side};

/// Number of tree levels drawn by [`to_termtree`].
pub const MAX_RENDER_DEPTH: usize = 64;

/// Placeholder for the levels below [`MAX_RENDER_DEPTH`].
pub const HIDDEN_LEVELS: &str = "... (deeper levels hidden)";

fn label(value: i64, side: Option<Side>, highlighted: bool, color: bool) -> String {
    let text = match (highlighted, color) {
        (true, true) => format!("[{}]", value).blue().bold().to_string(),
        (true, false) => format!("[{}]", value),
        (false, _) => value.to_string(),
    };
    match side {
        Some(side) => format!("{} {}", side, text),
        None => text,
    }
}

/// Convert the tree to a printable `termtree` with `highlight` marked.
pub fn to_termtree(tree: &BinaryTree, highlight: Option<NodeId>, color: bool) -> Tree<String> {
    let Some(root_idx) = tree.root() else {
        return Tree::new("(empty tree)".to_string());
    };

    fn build(
        tree: &BinaryTree,
        idx: NodeId,
        side: Option<Side>,
        level: usize,
        highlight: Option<NodeId>,
        color: bool,
    ) -> Tree<String> {
        let Some(node) = tree.get_node(idx) else {
            return Tree::new(String::new());
        };
        let mut t = Tree::new(label(node.value, side, highlight == Some(idx), color));
        if level + 1 >= MAX_RENDER_DEPTH {
            if !node.is_leaf() {
                t.push(Tree::new(HIDDEN_LEVELS.to_string()));
            }
            return t;
        }
        for side in [Side::Left, Side::Right] {
            if let Some(child) = node.child(side) {
                t.push(build(tree, child, Some(side), level + 1, highlight, color));
            }
        }
        t
    }

    build(tree, root_idx, None, 0, highlight, color)
}

/// One line showing the sequence; visited values are bracketed (or colored).
pub fn sequence_line(frame: &Frame<'_>, color: bool) -> String {
    frame
        .sequence_values()
        .into_iter()
        .map(|(value, visited)| match (visited, color) {
            (true, true) => value.to_string().on_blue().white().to_string(),
            (true, false) => format!("[{}]", value),
            (false, _) => value.to_string(),
        })
        .join(" ")
}

/// Metrics block as printed under the tree.
pub fn metrics_lines(frame: &Frame<'_>) -> Vec<String> {
    vec![
        format!("Maximum Depth: {}", frame.metrics.depth),
        format!(
            "Is Balanced: {}",
            if frame.metrics.balanced { "Yes" } else { "No" }
        ),
        format!("Nodes: {}", frame.metrics.node_count),
        format!("Leaves: {}", frame.metrics.leaf_count),
    ]
}

/// Status line for a replay frame, e.g. `In-order step 2/5: 3`.
pub fn step_line(frame: &Frame<'_>) -> String {
    let name = frame
        .traversal
        .map_or_else(|| "-".to_string(), |t| t.to_string());
    let current = frame
        .highlight
        .and_then(|idx| frame.tree.value(idx))
        .map_or_else(|| "-".to_string(), |v| v.to_string());
    let step = frame.step.map_or(0, |s| s + 1);
    format!("{} step {}/{}: {}", name, step, frame.sequence.len(), current)
}
