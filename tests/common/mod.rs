#![allow(dead_code)]

use avl_tree::*;
use rand::{self, Rng};
use std::collections::BTreeSet;

/// Something to perform in one round of tests
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundAction {
    Insert { value: i32 },
    Delete { value: i32 },
    Search { value: i32 },
}

/// The result after one round
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum RoundResult {
    Inserted(bool),
    Deleted(Option<i32>),
    Found(Option<i32>),
}

pub const MAX_VALUE: i32 = 200;

pub fn random_round_action(rng: &mut rand::prelude::ThreadRng) -> RoundAction {
    use RoundAction::*;
    let value = rng.gen_range(-MAX_VALUE..=MAX_VALUE);
    match rng.gen_range(0..3) {
        0 => Insert { value },
        1 => Delete { value },
        2 => Search { value },
        _ => {
            panic!()
        }
    }
}

pub fn run_round(round_action: &RoundAction, tree: &mut AVLTree<i32>) -> RoundResult {
    use RoundAction::*;
    use RoundResult::*;

    match *round_action {
        Insert { value } => Inserted(tree.insert(value)),
        Delete { value } => Deleted(tree.delete(&value)),
        Search { value } => Found(tree.search(&value).cloned()),
    }
}

pub fn run_model_round(round_action: &RoundAction, model: &mut BTreeSet<i32>) -> RoundResult {
    use RoundAction::*;
    use RoundResult::*;

    match *round_action {
        Insert { value } => Inserted(model.insert(value)),
        Delete { value } => Deleted(model.take(&value)),
        Search { value } => Found(model.get(&value).cloned()),
    }
}

/// Runs random rounds on an [`AVLTree`] and on a [`BTreeSet`], and checks they always agree.
pub fn check_consistency(num_rounds: u32) {
    let mut rng = rand::thread_rng();

    let mut tree: AVLTree<i32> = (0..INITIAL_SIZE).collect();
    let mut model: BTreeSet<i32> = (0..INITIAL_SIZE).collect();

    for _ in 0..num_rounds {
        let round_action = random_round_action(&mut rng);
        let res1 = run_round(&round_action, &mut tree);
        let res2 = run_model_round(&round_action, &mut model);
        assert_eq!(res1, res2, "{:?}", round_action);

        assert_eq!(tree.min().ok(), model.iter().next());
        assert_eq!(tree.max().ok(), model.iter().next_back());
        // This check takes `O(n)` time. However, since the trees aren't so big in this test
        // the check doesn't take too long.
        tree.assert_correctness();
        assert!(tree.iter().eq(model.iter()));
    }
}

const INITIAL_SIZE: i32 = 200;

/// The AVL height bound: a tree with `n` nodes has height at most `1.44 * log2(n + 2)`.
pub fn height_bound(len: usize) -> f64 {
    1.44 * ((len + 2) as f64).log2()
}

pub fn assert_height_bound<V: Ord>(tree: &AVLTree<V>) {
    let len = tree.len();
    assert!(
        (tree.height() as f64) <= height_bound(len),
        "height {} is too big for {} nodes",
        tree.height(),
        len
    );
}

pub fn random_values(len: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();
    (0..len).map(|_| rng.gen()).collect()
}
