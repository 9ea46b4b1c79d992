//! Visualization session
//!
//! Owns the current tree, its metrics and the single active replay. This is
//! the control surface: "visualize" rebuilds the tree, "select" starts a
//! traversal replay, "tick" advances it.

use std::time::Duration;

use tracing::{debug, info, instrument};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::{
    parse_values, traverse, BinaryTree, NodeId, NullPolicy, ReplayController, Traversal,
    TreeBuilder,
};
use crate::infrastructure::traits::Ticker;

/// Structural metrics of the current tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Metrics {
    pub depth: usize,
    pub balanced: bool,
    pub node_count: usize,
    pub leaf_count: usize,
}

impl Metrics {
    pub fn of(tree: &BinaryTree) -> Self {
        Self {
            depth: tree.depth(),
            balanced: tree.is_balanced(),
            node_count: tree.len(),
            leaf_count: tree.leaf_count(),
        }
    }
}

/// Snapshot handed to the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub tree: &'a BinaryTree,
    pub metrics: Metrics,
    pub traversal: Option<Traversal>,
    pub sequence: &'a [NodeId],
    pub step: Option<usize>,
    pub highlight: Option<NodeId>,
}

impl Frame<'_> {
    /// Values of the sequence with a flag telling whether each was already visited.
    pub fn sequence_values(&self) -> Vec<(i64, bool)> {
        self.sequence
            .iter()
            .enumerate()
            .filter_map(|(i, &idx)| {
                let visited = self.step.is_some_and(|s| i <= s);
                self.tree.value(idx).map(|v| (v, visited))
            })
            .collect()
    }
}

/// One tree plus at most one traversal replay.
#[derive(Debug, Default)]
pub struct Visualizer {
    builder: TreeBuilder,
    tree: BinaryTree,
    metrics: Metrics,
    replay: ReplayController,
}

impl Visualizer {
    pub fn new(null_policy: NullPolicy) -> Self {
        Self {
            builder: TreeBuilder::with_null_policy(null_policy),
            ..Self::default()
        }
    }

    /// Replace the tree with one built from `values`; any replay is dropped.
    #[instrument(level = "debug", skip(self, values))]
    pub fn visualize(&mut self, values: &[Option<i64>]) -> Metrics {
        let tree = self.builder.build(values);
        let metrics = Metrics::of(&tree);
        self.tree = tree;
        self.metrics = metrics;
        self.replay.clear();
        info!(
            "tree: {} nodes, depth {}, balanced {}",
            metrics.node_count, metrics.depth, metrics.balanced
        );
        metrics
    }

    /// Parse `text` and visualize it.
    pub fn visualize_text(&mut self, text: &str, lenient: bool) -> ApplicationResult<Metrics> {
        let values = parse_values(text, lenient)?;
        Ok(self.visualize(&values))
    }

    /// Start replaying `traversal`, superseding a replay in flight.
    #[instrument(level = "debug", skip(self))]
    pub fn select(&mut self, traversal: Traversal) -> ApplicationResult<&[NodeId]> {
        if self.tree.is_empty() {
            return Err(ApplicationError::NoTree);
        }
        let sequence = traverse(&self.tree, traversal);
        self.replay.start(traversal, sequence);
        Ok(self.replay.sequence())
    }

    pub fn tick(&mut self) -> Option<NodeId> {
        self.replay.tick()
    }

    /// Drive the active replay to completion, waiting `interval` before each
    /// step and reporting every frame, the initial one included.
    pub fn play<F>(&mut self, ticker: &dyn Ticker, interval: Duration, mut on_frame: F)
    where
        F: FnMut(Frame<'_>),
    {
        on_frame(self.frame());
        while self.replay.is_running() {
            ticker.wait(interval);
            if self.tick().is_none() {
                break;
            }
            on_frame(self.frame());
        }
        debug!("play done at step {}", self.replay.step_index());
    }

    pub fn tree(&self) -> &BinaryTree {
        &self.tree
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn replay(&self) -> &ReplayController {
        &self.replay
    }

    pub fn is_running(&self) -> bool {
        self.replay.is_running()
    }

    pub fn highlight(&self) -> Option<NodeId> {
        self.replay.current_highlight()
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            tree: &self.tree,
            metrics: self.metrics,
            traversal: self.replay.traversal(),
            sequence: self.replay.sequence(),
            step: self.replay.step(),
            highlight: self.replay.current_highlight(),
        }
    }
}
