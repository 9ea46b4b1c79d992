//! Tests for the replay state machine

use btviz::domain::{build_tree, traverse, ReplayController, ReplayState, Traversal};

#[test]
fn given_new_controller_when_queried_then_idle_without_highlight() {
    let replay = ReplayController::new();

    assert_eq!(replay.state(), ReplayState::Idle);
    assert_eq!(replay.step_index(), -1);
    assert_eq!(replay.current_highlight(), None);
    assert!(replay.sequence().is_empty());
    assert_eq!(replay.traversal(), None);
}

#[test]
fn given_started_replay_when_not_ticked_then_running_at_minus_one() {
    // Arrange
    let tree = build_tree(&[Some(2), Some(1), Some(3)]);
    let mut replay = ReplayController::new();

    // Act
    replay.start(Traversal::InOrder, traverse(&tree, Traversal::InOrder));

    // Assert
    assert!(replay.is_running());
    assert_eq!(replay.step_index(), -1);
    assert_eq!(replay.step(), None);
    assert_eq!(replay.current_highlight(), None);
    assert_eq!(replay.remaining(), 3);
}

#[test]
fn given_running_replay_when_ticking_then_highlights_sequence_in_order() {
    // Arrange
    let tree = build_tree(&[Some(2), Some(1), Some(3)]);
    let sequence = traverse(&tree, Traversal::PostOrder);
    let mut replay = ReplayController::new();
    replay.start(Traversal::PostOrder, sequence.clone());

    // Act + Assert: first tick
    assert_eq!(replay.tick(), Some(sequence[0]));
    assert_eq!(replay.step_index(), 0);
    assert_eq!(replay.current_highlight(), Some(sequence[0]));
    assert!(replay.is_running());

    // remaining ticks
    assert_eq!(replay.tick(), Some(sequence[1]));
    assert_eq!(replay.tick(), Some(sequence[2]));

    // after `length` ticks: idle, last element stays highlighted
    assert_eq!(replay.state(), ReplayState::Idle);
    assert!(replay.is_finished());
    assert_eq!(replay.step_index(), 2);
    assert_eq!(replay.current_highlight(), Some(sequence[2]));
    assert_eq!(replay.visited(), sequence.as_slice());
    assert_eq!(replay.remaining(), 0);
}

#[test]
fn given_finished_replay_when_ticking_again_then_nothing_moves() {
    let tree = build_tree(&[Some(1)]);
    let mut replay = ReplayController::new();
    replay.start(Traversal::LevelOrder, traverse(&tree, Traversal::LevelOrder));
    let only = replay.tick();

    assert_eq!(replay.tick(), None);
    assert_eq!(replay.tick(), None);
    assert_eq!(replay.step_index(), 0);
    assert_eq!(replay.current_highlight(), only);
    assert_eq!(replay.state(), ReplayState::Idle);
}

#[test]
fn given_running_replay_when_starting_another_then_it_is_superseded() {
    // Arrange
    let tree = build_tree(&(1..=7).map(Some).collect::<Vec<_>>());
    let first = traverse(&tree, Traversal::PreOrder);
    let second = traverse(&tree, Traversal::LevelOrder);
    let mut replay = ReplayController::new();
    replay.start(Traversal::PreOrder, first);
    replay.tick();
    replay.tick();

    // Act
    replay.start(Traversal::LevelOrder, second.clone());

    // Assert
    assert_eq!(replay.step_index(), -1);
    assert_eq!(replay.current_highlight(), None);
    assert_eq!(replay.traversal(), Some(Traversal::LevelOrder));
    assert_eq!(replay.sequence(), second.as_slice());

    let played: Vec<_> = std::iter::from_fn(|| replay.tick()).collect();
    assert_eq!(played, second);
}

#[test]
fn given_empty_sequence_when_starting_then_stays_idle() {
    let mut replay = ReplayController::new();

    replay.start(Traversal::InOrder, Vec::new());

    assert_eq!(replay.state(), ReplayState::Idle);
    assert_eq!(replay.tick(), None);
    assert_eq!(replay.step_index(), -1);
    assert_eq!(replay.current_highlight(), None);
    assert!(!replay.is_finished());
}

#[test]
fn given_replay_when_clearing_then_back_to_initial_idle() {
    let tree = build_tree(&[Some(1), Some(2)]);
    let mut replay = ReplayController::new();
    replay.start(Traversal::InOrder, traverse(&tree, Traversal::InOrder));
    replay.tick();

    replay.clear();

    assert_eq!(replay.state(), ReplayState::Idle);
    assert_eq!(replay.traversal(), None);
    assert_eq!(replay.current_highlight(), None);
    assert!(replay.visited().is_empty());
}
