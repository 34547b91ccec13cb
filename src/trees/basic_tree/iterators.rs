//! Iterators over the values of a [`BasicTree`].
//!
//! All of them are lazy: they hold an explicit stack of the nodes still to be
//! visited, so they take `O(depth)` extra space, and never recurse.

use super::*;

/// In-order iterator over the values of a tree.
pub struct Iter<'a, V, T = ()> {
    // the nodes whose value hasn't been yielded yet, and whose left subtree
    // has already been pushed.
    stack: Vec<&'a BasicNode<V, T>>,
}

impl<'a, V, T> Iter<'a, V, T> {
    pub fn new(tree: &'a BasicTree<V, T>) -> Self {
        let mut res = Iter { stack: vec![] };
        res.push_left_spine(tree);
        res
    }

    fn push_left_spine(&mut self, mut tree: &'a BasicTree<V, T>) {
        while let Root(node) = tree {
            self.stack.push(&**node);
            tree = &node.left;
        }
    }
}

impl<'a, V, T> Iterator for Iter<'a, V, T> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(&node.right);
        Some(&node.node_value)
    }
}

impl<'a, V, T> std::iter::FusedIterator for Iter<'a, V, T> {}

impl<'a, V, T> Clone for Iter<'a, V, T> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
        }
    }
}

/// Pre-order iterator over the values of a tree:
/// every node is visited before its left subtree, and the left subtree before the right one.
pub struct PreOrder<'a, V, T = ()> {
    stack: Vec<&'a BasicNode<V, T>>,
}

impl<'a, V, T> PreOrder<'a, V, T> {
    pub fn new(tree: &'a BasicTree<V, T>) -> Self {
        PreOrder {
            stack: tree.node().into_iter().collect(),
        }
    }
}

impl<'a, V, T> Iterator for PreOrder<'a, V, T> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // right goes in first, so that the left subtree is popped first
        self.stack.extend(node.right.node());
        self.stack.extend(node.left.node());
        Some(&node.node_value)
    }
}

impl<'a, V, T> std::iter::FusedIterator for PreOrder<'a, V, T> {}

impl<'a, V, T> Clone for PreOrder<'a, V, T> {
    fn clone(&self) -> Self {
        PreOrder {
            stack: self.stack.clone(),
        }
    }
}

/// Owning in-order iterator. Consumes the tree, deallocating nodes as it goes.
pub struct IntoIter<V, T = ()> {
    // every node in the stack already had its left subtree taken out.
    stack: Vec<Box<BasicNode<V, T>>>,
}

impl<V, T> IntoIter<V, T> {
    pub fn new(tree: BasicTree<V, T>) -> Self {
        let mut res = IntoIter { stack: vec![] };
        res.push_left_spine(tree);
        res
    }

    fn push_left_spine(&mut self, mut tree: BasicTree<V, T>) {
        while let Root(mut node) = tree {
            tree = node.left.take();
            self.stack.push(node);
        }
    }
}

impl<V, T> Iterator for IntoIter<V, T> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        let BasicNode {
            node_value, right, ..
        } = *node;
        self.push_left_spine(right);
        Some(node_value)
    }
}

impl<V, T> std::iter::FusedIterator for IntoIter<V, T> {}
