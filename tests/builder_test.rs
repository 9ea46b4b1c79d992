//! Tests for TreeBuilder

use rstest::rstest;

use btviz::domain::{build_tree, BinaryTree, NodeId, NullPolicy, TreeBuilder, TreeNode};

fn node(tree: &BinaryTree, idx: Option<NodeId>) -> &TreeNode {
    tree.get_node(idx.expect("node present")).expect("node in arena")
}

#[test]
fn given_three_values_when_building_then_root_has_two_leaf_children() {
    // Act
    let tree = build_tree(&[Some(1), Some(2), Some(3)]);

    // Assert
    let root = node(&tree, tree.root());
    assert_eq!(root.value, 1);
    let left = node(&tree, root.left);
    let right = node(&tree, root.right);
    assert_eq!(left.value, 2);
    assert_eq!(right.value, 3);
    assert!(left.is_leaf());
    assert!(right.is_leaf());
    assert_eq!(tree.len(), 3);
}

#[test]
fn given_empty_input_when_building_then_tree_is_empty() {
    let tree = build_tree(&[]);

    assert!(tree.is_empty());
    assert_eq!(tree.root(), None);
    assert_eq!(tree.len(), 0);
}

#[test]
fn given_leading_null_when_building_then_tree_is_empty() {
    let tree = build_tree(&[None, Some(1), Some(2)]);

    assert!(tree.is_empty());
}

#[test]
fn given_null_slot_when_building_then_child_is_absent_and_alignment_kept() {
    // Arrange: 1 has only a left child 2; 2's children are 3 and 4
    let values = [Some(1), Some(2), None, Some(3), Some(4)];

    // Act
    let tree = build_tree(&values);

    // Assert
    let root = node(&tree, tree.root());
    assert_eq!(root.right, None);
    let two = node(&tree, root.left);
    assert_eq!(two.value, 2);
    assert_eq!(node(&tree, two.left).value, 3);
    assert_eq!(node(&tree, two.right).value, 4);
}

#[test]
fn given_left_chain_with_null_right_when_building_then_builds_chain() {
    // [1,2,null,3]: 1 -> left 2 -> left 3
    let tree = build_tree(&[Some(1), Some(2), None, Some(3)]);

    let root = node(&tree, tree.root());
    let two = node(&tree, root.left);
    let three = node(&tree, two.left);
    assert_eq!(three.value, 3);
    assert!(root.right.is_none());
    assert!(two.right.is_none());
    assert!(three.is_leaf());
}

#[test]
fn given_nulls_under_drop_policy_when_building_then_values_fill_slots_densely() {
    // Arrange
    let builder = TreeBuilder::with_null_policy(NullPolicy::Drop);

    // Act
    let tree = builder.build(&[None, Some(1), Some(2), None, Some(3)]);

    // Assert: same as building [1,2,3]
    let root = node(&tree, tree.root());
    assert_eq!(root.value, 1);
    assert_eq!(node(&tree, root.left).value, 2);
    assert_eq!(node(&tree, root.right).value, 3);
}

#[test]
fn given_input_shorter_than_queue_when_building_then_remaining_nodes_are_leaves() {
    // 1's children 2,3; 2 gets left 4 only, input ends
    let tree = build_tree(&[Some(1), Some(2), Some(3), Some(4)]);

    let root = node(&tree, tree.root());
    let two = node(&tree, root.left);
    let three = node(&tree, root.right);
    assert_eq!(node(&tree, two.left).value, 4);
    assert!(two.right.is_none());
    assert!(three.is_leaf());
}

#[test]
fn given_trailing_values_after_all_parents_closed_when_building_then_they_are_ignored() {
    // 1 with two null children closes the queue; 9 has no parent
    let tree = build_tree(&[Some(1), None, None, Some(9)]);

    assert_eq!(tree.len(), 1);
    assert!(node(&tree, tree.root()).is_leaf());
}

#[rstest]
#[case(vec![Some(1)], 1)]
#[case(vec![Some(1), None, Some(2)], 2)]
#[case((1..=7).map(Some).collect(), 7)]
#[case(vec![Some(5), Some(5), Some(5), Some(5)], 4)]
#[case(vec![Some(i64::MIN), Some(0), Some(i64::MAX)], 3)]
fn given_values_when_building_then_node_count_matches(
    #[case] values: Vec<Option<i64>>,
    #[case] expected: usize,
) {
    assert_eq!(build_tree(&values).len(), expected);
}
