//! This module implements the queries of [`BasicTree`] that don't depend on balancing:
//! searching, finding the minimum and maximum, and checking correctness.
//! It is mostly a separate file from the main module file, since it's a private module, and its
//! contents are re-exported.

use super::*;
use crate::error::TreeError;
use std::cmp::Ordering;

impl<V: Ord, T> BasicTree<V, T> {
    /// Searches for a node holding `value`, by descending from the root.
    /// If the tree holds several equal values, returns the first one met on the way down.
    pub fn search_node(&self, value: &V) -> Option<&BasicNode<V, T>> {
        let mut tree = self;
        while let Root(node) = tree {
            tree = match value.cmp(&node.node_value) {
                Ordering::Less => &node.left,
                Ordering::Greater => &node.right,
                Ordering::Equal => return Some(&**node),
            };
        }
        None
    }

    /// Checks that the values are ordered correctly, and calls `f` on every node.
    /// Equal values are allowed on both sides of a node.
    /// If the ordering is wrong, panics.
    pub fn assert_correctness_with<F>(&self, mut f: F)
    where
        F: FnMut(&BasicNode<V, T>),
    {
        self.assert_correctness_internal(None, None, &mut f);
    }

    fn assert_correctness_internal<'a, F>(
        &'a self,
        lower: Option<&'a V>,
        upper: Option<&'a V>,
        f: &mut F,
    ) where
        F: FnMut(&BasicNode<V, T>),
    {
        if let Root(node) = self {
            if let Some(lower) = lower {
                assert!(*lower <= node.node_value, "value is smaller than an ancestor on its left");
            }
            if let Some(upper) = upper {
                assert!(node.node_value <= *upper, "value is bigger than an ancestor on its right");
            }
            f(&**node);
            node.left
                .assert_correctness_internal(lower, Some(&node.node_value), f);
            node.right
                .assert_correctness_internal(Some(&node.node_value), upper, f);
        }
    }
}

impl<V, T> BasicTree<V, T> {
    /// Returns the leftmost node, holding the minimum value.
    pub fn min_node(&self) -> Result<&BasicNode<V, T>, TreeError> {
        let mut node = self.node().ok_or(TreeError::EmptyTree)?;
        while let Root(left) = &node.left {
            node = &**left;
        }
        Ok(node)
    }

    /// Returns the rightmost node, holding the maximum value.
    pub fn max_node(&self) -> Result<&BasicNode<V, T>, TreeError> {
        let mut node = self.node().ok_or(TreeError::EmptyTree)?;
        while let Root(right) = &node.right {
            node = &**right;
        }
        Ok(node)
    }

    /// Returns the number of nodes in the tree.
    /// This takes `O(n)` time.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Iterates over the values in order.
    pub fn iter(&self) -> iterators::Iter<'_, V, T> {
        iterators::Iter::new(self)
    }

    /// Iterates over the values in pre-order: every node comes before its left subtree,
    /// which comes before its right subtree.
    pub fn pre_order(&self) -> iterators::PreOrder<'_, V, T> {
        iterators::PreOrder::new(self)
    }
}

impl<V, T> IntoIterator for BasicTree<V, T> {
    type Item = V;
    type IntoIter = iterators::IntoIter<V, T>;

    fn into_iter(self) -> Self::IntoIter {
        iterators::IntoIter::new(self)
    }
}

impl<'a, V, T> IntoIterator for &'a BasicTree<V, T> {
    type Item = &'a V;
    type IntoIter = iterators::Iter<'a, V, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: i32) -> BasicTree<i32> {
        BasicTree::from_node(BasicNode::new(value))
    }

    // 4
    // +- 2
    // |  +- 1
    // |  +- 3
    // +- 6
    fn small_tree() -> BasicTree<i32> {
        let mut two = BasicNode::new(2);
        two.left = leaf(1);
        two.right = leaf(3);
        let mut four = BasicNode::new(4);
        four.left = BasicTree::from_node(two);
        four.right = leaf(6);
        BasicTree::from_node(four)
    }

    #[test]
    fn search_descends_to_the_value() {
        let tree = small_tree();
        for x in [1, 2, 3, 4, 6] {
            assert_eq!(tree.search_node(&x).map(|node| *node.value()), Some(x));
        }
        assert!(tree.search_node(&5).is_none());
        assert!(tree.search_node(&0).is_none());
    }

    #[test]
    fn min_and_max() {
        let tree = small_tree();
        assert_eq!(*tree.min_node().unwrap().value(), 1);
        assert_eq!(*tree.max_node().unwrap().value(), 6);

        let empty: BasicTree<i32> = BasicTree::new();
        assert_eq!(empty.min_node().err(), Some(TreeError::EmptyTree));
        assert_eq!(empty.max_node().err(), Some(TreeError::EmptyTree));
    }

    #[test]
    fn correctness_visits_every_node() {
        let tree = small_tree();
        let mut visited = vec![];
        tree.assert_correctness_with(|node| visited.push(*node.value()));
        assert_eq!(visited, vec![4, 2, 1, 3, 6]);
        assert_eq!(tree.len(), 5);
    }

    #[test]
    #[should_panic]
    fn correctness_catches_misordered_values() {
        let mut node = BasicNode::new(4);
        node.left = leaf(5);
        BasicTree::from_node(node).assert_correctness_with(|_| {});
    }
}
