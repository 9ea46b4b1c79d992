//! Replay controller: step-by-step playback of a traversal sequence.
//!
//! The controller never schedules anything itself. Callers own the timer
//! and call [`ReplayController::tick`] once per interval.

use tracing::{debug, instrument, trace};

use crate::domain::arena::NodeId;
use crate::domain::traversal::Traversal;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplayState {
    /// Nothing selected, or the last sequence has played out
    Idle,
    /// Advancing one node per tick
    Running,
}

/// Discrete-step state machine driving the highlighted node.
///
/// Invariant: `cursor` is None (step -1) or a valid index into `sequence`,
/// and the state is Running only while the cursor is before the last element.
#[derive(Debug, Clone)]
pub struct ReplayController {
    traversal: Option<Traversal>,
    sequence: Vec<NodeId>,
    cursor: Option<usize>,
    state: ReplayState,
}

impl Default for ReplayController {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplayController {
    pub fn new() -> Self {
        Self {
            traversal: None,
            sequence: Vec::new(),
            cursor: None,
            state: ReplayState::Idle,
        }
    }

    /// Start a replay of `sequence`, superseding whatever was playing.
    ///
    /// An empty sequence leaves the controller Idle with nothing highlighted.
    #[instrument(level = "debug", skip(self, sequence), fields(len = sequence.len()))]
    pub fn start(&mut self, traversal: Traversal, sequence: Vec<NodeId>) {
        if self.state == ReplayState::Running {
            debug!(
                "superseding {:?} at step {}",
                self.traversal,
                self.step_index()
            );
        }
        self.state = if sequence.is_empty() {
            ReplayState::Idle
        } else {
            ReplayState::Running
        };
        self.traversal = Some(traversal);
        self.sequence = sequence;
        self.cursor = None;
    }

    /// Advance one step. Returns the newly highlighted node, or None when
    /// the controller is Idle and nothing moved.
    pub fn tick(&mut self) -> Option<NodeId> {
        if self.state != ReplayState::Running {
            return None;
        }
        let next = self.cursor.map_or(0, |c| c + 1);
        let idx = *self.sequence.get(next)?;
        self.cursor = Some(next);
        if next + 1 == self.sequence.len() {
            self.state = ReplayState::Idle;
            debug!("replay finished after {} steps", self.sequence.len());
        }
        trace!("step {} -> {:?}", next, idx);
        Some(idx)
    }

    /// Drop the active sequence and return to the initial Idle state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Node at the current step, None before the first tick.
    pub fn current_highlight(&self) -> Option<NodeId> {
        self.cursor.and_then(|c| self.sequence.get(c).copied())
    }

    /// Current step, None while no step has been taken.
    pub fn step(&self) -> Option<usize> {
        self.cursor
    }

    /// Current step as a signed index, -1 before the first tick.
    pub fn step_index(&self) -> isize {
        self.cursor.map_or(-1, |c| c as isize)
    }

    pub fn state(&self) -> ReplayState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == ReplayState::Running
    }

    /// True once a non-empty sequence has been played to its last element.
    pub fn is_finished(&self) -> bool {
        !self.sequence.is_empty() && self.cursor == Some(self.sequence.len() - 1)
    }

    pub fn traversal(&self) -> Option<Traversal> {
        self.traversal
    }

    pub fn sequence(&self) -> &[NodeId] {
        &self.sequence
    }

    /// Nodes already highlighted, including the current one.
    pub fn visited(&self) -> &[NodeId] {
        match self.cursor {
            Some(c) => &self.sequence[..=c],
            None => &[],
        }
    }

    /// Ticks left until the replay finishes.
    pub fn remaining(&self) -> usize {
        self.sequence.len() - self.visited().len()
    }
}
