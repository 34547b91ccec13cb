//! This module contains the tree structures of the crate.
//!
//! [`basic_tree::BasicTree`] is a plain unbalanced binary search tree, generic over
//! some per-node bookkeeping data. Balanced trees are built by wrapping around it:
//! [`avl::AVLTree`] stores the height of every subtree in its nodes.

pub mod avl;
pub mod basic_tree;

pub use avl::{AVLTree, DuplicatePolicy};
pub use basic_tree::{BasicNode, BasicTree};

/// Which son of a node.
#[derive(PartialEq, Eq, Clone, Copy, Debug, Hash)]
pub enum Side {
    Left,
    Right,
}
