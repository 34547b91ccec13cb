mod common;
use common::*;

use avl_tree::{AVLTree, DuplicatePolicy, TreeError};
use itertools::Itertools;

fn insert_all(values: &[i32]) -> AVLTree<i32> {
    let mut tree = AVLTree::new();
    for &x in values {
        tree.insert(x);
    }
    tree
}

#[test]
fn insert_delete_scenario() {
    let mut tree = insert_all(&[9, 5, 10, 0, 6, 11, -1, 1, 2]);
    tree.assert_correctness();
    assert_eq!(
        tree.pre_order().copied().collect::<Vec<_>>(),
        [9, 1, 0, -1, 5, 2, 6, 10, 11]
    );
    assert_eq!(tree.min(), Ok(&-1));
    assert_eq!(tree.max(), Ok(&11));

    assert_eq!(tree.delete(&10), Some(10));
    tree.assert_correctness();
    assert_eq!(tree.search(&10), None);
    assert_eq!(
        tree.pre_order().copied().collect::<Vec<_>>(),
        [1, 0, -1, 9, 5, 2, 6, 11]
    );

    let before = tree.iter().copied().collect::<Vec<_>>();
    assert_eq!(tree.delete(&16), None);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), before);
    assert_eq!(tree.to_string(), "-1 0 1 2 5 6 9 11");
}

#[test]
fn avl_consistency() {
    check_consistency(10_000);
}

#[test]
fn height_bound_for_random_inserts() {
    let mut tree = AVLTree::new();
    for (i, x) in random_values(10_000).into_iter().enumerate() {
        tree.insert(x);
        if i % 1000 == 0 {
            assert_height_bound(&tree);
        }
    }
    tree.assert_correctness();
    assert_height_bound(&tree);
}

#[test]
fn height_bound_for_sorted_inserts() {
    let tree: AVLTree<i32> = (0..10_000).collect();
    tree.assert_correctness();
    assert_height_bound(&tree);
    // sorted inserts build an almost perfect tree
    assert!(tree.height() <= 15);
}

#[test]
fn insert_search_delete_round_trip() {
    let values = random_values(2_000);
    let mut tree: AVLTree<i32> = values.iter().copied().collect();
    for x in &values {
        assert_eq!(tree.search(x), Some(x));
    }
    for x in &values {
        tree.delete(x);
        assert!(!tree.contains(x));
    }
    assert!(tree.is_empty());
    assert_eq!(tree.min(), Err(TreeError::EmptyTree));
    assert_eq!(tree.max(), Err(TreeError::EmptyTree));
}

#[test]
fn in_order_is_sorted() {
    let tree: AVLTree<i32> = random_values(5_000).into_iter().collect();
    assert!(tree.iter().tuple_windows().all(|(a, b)| a < b));
    // iterating is restartable
    assert!(tree.iter().eq(tree.iter()));
    assert_eq!(tree.iter().count(), tree.len());
}

#[test]
fn duplicates_kept_when_allowed() {
    let values = random_values(1_000)
        .into_iter()
        .map(|x| x % 50)
        .collect::<Vec<_>>();
    let mut tree = AVLTree::with_duplicates(DuplicatePolicy::Allow);
    tree.extend(values.iter().copied());
    tree.assert_correctness();
    assert_height_bound(&tree);

    let mut sorted = values.clone();
    sorted.sort();
    assert!(tree.iter().eq(sorted.iter()));

    for x in &values {
        assert_eq!(tree.delete(x), Some(*x));
        tree.assert_correctness();
    }
    assert!(tree.is_empty());
}

#[test]
fn owned_iteration() {
    let tree: AVLTree<String> = ["pear", "apple", "fig", "banana"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    let values: Vec<String> = tree.into_iter().collect();
    assert_eq!(values, ["apple", "banana", "fig", "pear"]);
}
