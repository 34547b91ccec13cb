//! The basic tree module
//! This module implements basic unbalanced binary search trees.
//!
//! Balanced trees are built by wrapping around [`BasicTree`], and keeping their
//! bookkeeping in the `alg_data` field of every node.

// this should not be public as it is merely a separate file
// for some of the functions of this module
mod implementations;
pub mod iterators;

/// A basic tree. Might be empty.
/// The `T` parameter is for algorithm-specific bookkeeping data.
/// For example, AVL trees store the height of each subtree.
#[derive(Clone)]
pub enum BasicTree<V, T = ()> {
    /// An empty tree
    Empty,
    /// A non empty tree, with a root node
    Root(Box<BasicNode<V, T>>),
}
pub use BasicTree::*;

impl<V, T> BasicTree<V, T> {
    /// Creates an empty tree
    pub fn new() -> Self {
        Empty
    }

    /// Returns `true` if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Empty)
    }

    /// Returns the root node, if the tree is not empty.
    pub fn node(&self) -> Option<&BasicNode<V, T>> {
        match self {
            Empty => None,
            Root(node) => Some(&**node),
        }
    }

    /// Not public, since modifying the node directly may break
    /// the tree's ordering, or the bookkeeping of balanced trees.
    pub(crate) fn node_mut(&mut self) -> Option<&mut BasicNode<V, T>> {
        match self {
            Empty => None,
            Root(node) => Some(&mut **node),
        }
    }

    /// Creates a tree with a single root node.
    pub fn from_node(node: BasicNode<V, T>) -> Self {
        Root(Box::new(node))
    }

    /// Removes the tree and returns its root node, keeping its box.
    pub fn into_node_boxed(self) -> Option<Box<BasicNode<V, T>>> {
        match self {
            Empty => None,
            Root(node) => Some(node),
        }
    }

    /// Replaces the tree with an empty tree, and returns the old one.
    pub fn take(&mut self) -> Self {
        std::mem::replace(self, Empty)
    }
}

impl<V, T> Default for BasicTree<V, T> {
    fn default() -> Self {
        Empty
    }
}

/// A basic node. Can be viewed as a non-empty basic tree: it always has at least one value.
#[derive(Clone)]
pub struct BasicNode<V, T = ()> {
    pub(crate) node_value: V,
    pub(crate) alg_data: T,
    pub left: BasicTree<V, T>,
    pub right: BasicTree<V, T>,
}

impl<V> BasicNode<V> {
    /// Creates a node with no sons.
    pub fn new(value: V) -> BasicNode<V> {
        BasicNode::new_alg(value, ())
    }
}

impl<V, T> BasicNode<V, T> {
    /// Creates a node with no sons and the given bookkeeping data.
    pub fn new_alg(value: V, alg_data: T) -> BasicNode<V, T> {
        BasicNode {
            node_value: value,
            alg_data,
            left: Empty,
            right: Empty,
        }
    }

    /// Returns the value stored in this node specifically.
    pub fn value(&self) -> &V {
        &self.node_value
    }

    /// Returns the algorithm-specific data of this node.
    pub fn alg_data(&self) -> &T {
        &self.alg_data
    }

    /// Consumes the node, dropping its sons, and returns its value.
    pub fn into_value(self) -> V {
        self.node_value
    }
}
