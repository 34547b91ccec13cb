//! Implementation of AVL trees.
//! Balanced by keeping track of the height of every subtree. This is a worst-case balancing
//! algorithm that has a small memory overhead per node: after every insertion and deletion,
//! the heights of the left and right subtrees of every node differ by at most one.
//!
//! All of the modifying operations take a subtree by value, and return the new root of the
//! subtree after rebalancing. The caller then installs the returned subtree in place of the old one.

use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;
use tracing::{debug, trace};

use super::basic_tree::*;
use super::Side;
use crate::error::TreeError;

/// The type that is used for height bookkeeping.
/// `u8` is definitely enough, since the height of the tree is logarithmic in the tree size.
pub type Height = u8;
/// Used for height differences
type BalanceFactor = i8;

type AVLNode<V> = BasicNode<V, Height>;
type AVLSubtree<V> = BasicTree<V, Height>;

/// What the tree does when a value equal to an existing value is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DuplicatePolicy {
    /// The new value is dropped, and the tree is left unchanged.
    /// The tree behaves as an ordered set.
    #[default]
    Ignore,
    /// The new value is inserted to the right of the equal value.
    /// Which of several equal values is found by [`AVLTree::search`] or
    /// removed by [`AVLTree::delete`] is unspecified.
    Allow,
}

impl DuplicatePolicy {
    /// Which way `value` should go from a node holding `here`.
    /// Returns [`None`] if the value should not be inserted at all.
    fn route<V: Ord>(self, value: &V, here: &V) -> Option<Side> {
        match value.cmp(here) {
            Ordering::Less => Some(Side::Left),
            Ordering::Greater => Some(Side::Right),
            Ordering::Equal => match self {
                DuplicatePolicy::Ignore => None,
                DuplicatePolicy::Allow => Some(Side::Right),
            },
        }
    }
}

/// An AVL tree. Balanced by keeping track of subtree heights, this is a worst-case balancing
/// algorithm that has a small memory overhead per node.
///
///```
/// use avl_tree::AVLTree;
///
/// let mut tree: AVLTree<i32> = [9, 5, 10, 0, 6, 11, -1, 1, 2].into_iter().collect();
/// assert_eq!(tree.pre_order().copied().collect::<Vec<_>>(), [9, 1, 0, -1, 5, 2, 6, 10, 11]);
/// assert_eq!(tree.min(), Ok(&-1));
///
/// assert_eq!(tree.delete(&10), Some(10));
/// assert_eq!(tree.search(&10), None);
/// # tree.assert_correctness();
///```
#[derive(Clone)]
pub struct AVLTree<V> {
    tree: AVLSubtree<V>,
    duplicates: DuplicatePolicy,
}

/// For implementing `height`, `balance_factor` and `rebuild_height` for
/// trees and nodes alike.
trait Balanced {
    fn height(&self) -> Height;

    /// Recomputes the height of the current node from its sons.
    fn rebuild_height(&mut self);

    /// Returns `left.height() - right.height()`
    fn balance_factor(&self) -> BalanceFactor;
}

impl<V> Balanced for AVLSubtree<V> {
    fn height(&self) -> Height {
        match self.node() {
            None => 0,
            Some(node) => node.height(),
        }
    }

    fn rebuild_height(&mut self) {
        if let Some(node) = self.node_mut() {
            node.rebuild_height();
        }
    }

    fn balance_factor(&self) -> BalanceFactor {
        match self.node() {
            None => 0,
            Some(node) => node.balance_factor(),
        }
    }
}

impl<V> Balanced for AVLNode<V> {
    fn height(&self) -> Height {
        self.alg_data
    }

    fn rebuild_height(&mut self) {
        self.alg_data = std::cmp::max(self.left.height(), self.right.height()) + 1;
    }

    fn balance_factor(&self) -> BalanceFactor {
        self.left.height() as BalanceFactor - self.right.height() as BalanceFactor
    }
}

impl<V> AVLNode<V> {
    /// A new node has no sons, so its height is 1.
    fn new_leaf(value: V) -> Box<Self> {
        Box::new(BasicNode::new_alg(value, 1))
    }

    /// Rotates the left son up, and the current node down to the right.
    /// If there is no left son, does nothing.
    /// Returns the new root of the subtree.
    fn rot_right(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match self.left.take() {
            Root(node) => node,
            Empty => return self,
        };
        self.left = new_root.right.take();
        // the old root is now below the new root, so it has to be rebuilt first
        self.rebuild_height();
        new_root.right = Root(self);
        new_root.rebuild_height();
        trace!(height = new_root.height(), "rotated right");
        new_root
    }

    /// Rotates the right son up, and the current node down to the left.
    /// If there is no right son, does nothing.
    /// Returns the new root of the subtree.
    fn rot_left(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match self.right.take() {
            Root(node) => node,
            Empty => return self,
        };
        self.right = new_root.left.take();
        self.rebuild_height();
        new_root.left = Root(self);
        new_root.rebuild_height();
        trace!(height = new_root.height(), "rotated left");
        new_root
    }

    fn rot_left_son_left(&mut self) {
        if let Root(son) = self.left.take() {
            self.left = Root(son.rot_left());
        }
    }

    fn rot_right_son_right(&mut self) {
        if let Root(son) = self.right.take() {
            self.right = Root(son.rot_right());
        }
    }

    /// Rebalances the node after a value was inserted below it.
    /// `grandson_side` is the side the value went to at the son of the current node,
    /// on the heavier side. It decides between single and double rotations.
    fn rebalance_after_insert(mut self: Box<Self>, grandson_side: Side) -> Box<Self> {
        match self.balance_factor() {
            // left is deeper
            2 => {
                if grandson_side == Side::Right {
                    // left right case
                    self.rot_left_son_left();
                }
                self.rot_right()
            }
            // right is deeper
            -2 => {
                if grandson_side == Side::Left {
                    // right left case
                    self.rot_right_son_right();
                }
                self.rot_left()
            }
            _ => self,
        }
    }

    /// Rebalances the node after a value was deleted below it.
    /// Since the value isn't on the heavier side, the rotations are decided by the
    /// balance factor of the son on the heavier side.
    fn rebalance_after_delete(mut self: Box<Self>) -> Box<Self> {
        let bf = self.balance_factor();
        if bf > 1 {
            if self.left.balance_factor() < 0 {
                // left right case
                self.rot_left_son_left();
            }
            self.rot_right()
        } else if bf < -1 {
            if self.right.balance_factor() > 0 {
                // right left case
                self.rot_right_son_right();
            }
            self.rot_left()
        } else {
            self
        }
    }

    /// Removes the leftmost node of the subtree.
    /// Returns the new subtree, and the removed value.
    fn remove_min(mut self: Box<Self>) -> (AVLSubtree<V>, V) {
        match self.left.take() {
            Empty => {
                let BasicNode {
                    node_value, right, ..
                } = *self;
                (right, node_value)
            }
            Root(left) => {
                let (left, min) = left.remove_min();
                self.left = left;
                self.rebuild_height();
                (Root(self.rebalance_after_delete()), min)
            }
        }
    }
}

impl<V: Ord> AVLSubtree<V> {
    /// Inserts `value` into the subtree, and rebalances every node on the way back up.
    /// Returns the new subtree, and whether the value was inserted.
    fn avl_insert(self, value: V, duplicates: DuplicatePolicy) -> (Self, bool) {
        let mut node = match self {
            Empty => return (Root(AVLNode::new_leaf(value)), true),
            Root(node) => node,
        };
        let side = match duplicates.route(&value, &node.node_value) {
            Some(side) => side,
            None => {
                debug!("ignored a value equal to an existing value");
                return (Root(node), false);
            }
        };
        let son = match side {
            Side::Left => &mut node.left,
            Side::Right => &mut node.right,
        };
        // where the value goes below the son. equal values go to the right.
        let grandson_side = match son.node() {
            Some(son_node) if value < son_node.node_value => Side::Left,
            _ => Side::Right,
        };
        let (new_son, inserted) = son.take().avl_insert(value, duplicates);
        *son = new_son;
        if !inserted {
            return (Root(node), false);
        }

        node.rebuild_height();
        (Root(node.rebalance_after_insert(grandson_side)), true)
    }

    /// Deletes one node holding `value` from the subtree, and rebalances every node on the way back up.
    /// Returns the new subtree, and the removed value.
    fn avl_delete(self, value: &V) -> (Self, Option<V>) {
        let mut node = match self {
            Empty => return (Empty, None),
            Root(node) => node,
        };
        let removed = match value.cmp(&node.node_value) {
            Ordering::Less => {
                let (left, removed) = node.left.take().avl_delete(value);
                node.left = left;
                removed
            }
            Ordering::Greater => {
                let (right, removed) = node.right.take().avl_delete(value);
                node.right = right;
                removed
            }
            Ordering::Equal => match node.right.take() {
                Empty => {
                    let BasicNode {
                        node_value, left, ..
                    } = *node;
                    return (left, Some(node_value));
                }
                Root(right) if node.left.is_empty() => {
                    let BasicNode { node_value, .. } = *node;
                    return (Root(right), Some(node_value));
                }
                // two sons: replace the value with the next value in order,
                // which is the minimum of the right subtree.
                Root(right) => {
                    let (right, successor) = right.remove_min();
                    node.right = right;
                    Some(std::mem::replace(&mut node.node_value, successor))
                }
            },
        };
        if removed.is_none() {
            return (Root(node), None);
        }

        node.rebuild_height();
        (Root(node.rebalance_after_delete()), removed)
    }
}

impl<V> AVLTree<V> {
    /// Creates an empty [`AVLTree`], that ignores duplicate values.
    pub fn new() -> Self {
        AVLTree::with_duplicates(DuplicatePolicy::default())
    }

    /// Creates an empty [`AVLTree`] with the given handling of duplicate values.
    pub fn with_duplicates(duplicates: DuplicatePolicy) -> Self {
        AVLTree {
            tree: BasicTree::Empty,
            duplicates,
        }
    }

    /// How this tree handles duplicate values.
    pub fn duplicates(&self) -> DuplicatePolicy {
        self.duplicates
    }

    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the number of values in the tree.
    /// This takes `O(n)` time.
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// The height of the tree: `0` for an empty tree, `1` for a single node.
    pub fn height(&self) -> Height {
        self.tree.height()
    }

    /// Removes all the values from the tree.
    pub fn clear(&mut self) {
        self.tree = BasicTree::Empty;
    }

    /// Returns the root of the tree, if it isn't empty.
    /// The height of every node is its `alg_data`.
    pub fn root(&self) -> Option<&BasicNode<V, Height>> {
        self.tree.node()
    }

    /// Returns the minimum value in the tree.
    pub fn min(&self) -> Result<&V, TreeError> {
        Ok(self.tree.min_node()?.value())
    }

    /// Returns the maximum value in the tree.
    pub fn max(&self) -> Result<&V, TreeError> {
        Ok(self.tree.max_node()?.value())
    }

    /// Returns the node holding the minimum value in the tree.
    pub fn min_node(&self) -> Result<&BasicNode<V, Height>, TreeError> {
        self.tree.min_node()
    }

    /// Returns the node holding the maximum value in the tree.
    pub fn max_node(&self) -> Result<&BasicNode<V, Height>, TreeError> {
        self.tree.max_node()
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> iterators::Iter<'_, V, Height> {
        self.tree.iter()
    }

    /// Iterates over the values in pre-order.
    pub fn pre_order(&self) -> iterators::PreOrder<'_, V, Height> {
        self.tree.pre_order()
    }

    /// Asserts that the heights at every node are correct, and that every node is balanced.
    /// Otherwise, panics.
    pub fn assert_heights(&self) {
        Self::assert_heights_internal(&self.tree);
    }

    fn assert_heights_internal(tree: &AVLSubtree<V>) {
        if let Some(node) = tree.node() {
            Self::assert_heights_internal(&node.left);
            Self::assert_heights_internal(&node.right);
            Self::assert_heights_locally(node);
        }
    }

    fn assert_heights_locally(node: &AVLNode<V>) {
        assert_eq!(
            node.height(),
            std::cmp::max(node.left.height(), node.right.height()) + 1,
            "cached height is wrong"
        );
        assert!(
            (-1..=1).contains(&node.balance_factor()),
            "node is unbalanced: balance factor {}",
            node.balance_factor()
        );
    }
}

impl<V: Ord> AVLTree<V> {
    /// Inserts a value into the tree.
    /// Returns `false` if the value was equal to an existing value and
    /// the tree ignores duplicates, and `true` otherwise.
    /// Complexity: `O(log n)`.
    pub fn insert(&mut self, value: V) -> bool {
        let (tree, inserted) = self.tree.take().avl_insert(value, self.duplicates);
        self.tree = tree;
        inserted
    }

    /// Deletes a value equal to `value` from the tree, and returns it.
    /// If there is no such value, the tree is left unchanged and [`None`] is returned.
    /// Complexity: `O(log n)`.
    pub fn delete(&mut self, value: &V) -> Option<V> {
        let (tree, removed) = self.tree.take().avl_delete(value);
        self.tree = tree;
        if removed.is_none() {
            debug!("deleted a value that isn't in the tree");
        }
        removed
    }

    /// Searches for a value equal to `value`.
    pub fn search(&self, value: &V) -> Option<&V> {
        Some(self.search_node(value)?.value())
    }

    /// Searches for the node holding a value equal to `value`.
    pub fn search_node(&self, value: &V) -> Option<&BasicNode<V, Height>> {
        self.tree.search_node(value)
    }

    pub fn contains(&self, value: &V) -> bool {
        self.search_node(value).is_some()
    }

    /// Asserts that the tree is a correct AVL tree: the values are ordered,
    /// and the heights are correct and balanced.
    /// If the tree ignores duplicates, also asserts that there are no equal values.
    /// Otherwise, panics.
    pub fn assert_correctness(&self) {
        self.tree
            .assert_correctness_with(Self::assert_heights_locally);
        if self.duplicates == DuplicatePolicy::Ignore {
            assert!(
                self.iter().tuple_windows().all(|(a, b)| a < b),
                "the tree has equal values"
            );
        }
    }
}

impl<V> Default for AVLTree<V> {
    fn default() -> Self {
        AVLTree::new()
    }
}

impl<V: Ord> std::iter::FromIterator<V> for AVLTree<V> {
    /// Inserts the values one by one.
    /// This takes `O(n log n)` worst-case time.
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut tree = AVLTree::new();
        tree.extend(iter);
        tree
    }
}

impl<V: Ord> Extend<V> for AVLTree<V> {
    fn extend<I: IntoIterator<Item = V>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<V> IntoIterator for AVLTree<V> {
    type Item = V;
    type IntoIter = iterators::IntoIter<V, Height>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a AVLTree<V> {
    type Item = &'a V;
    type IntoIter = iterators::Iter<'a, V, Height>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V: fmt::Debug> fmt::Debug for AVLTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Writes the values in order, separated by spaces.
impl<V: fmt::Display> fmt::Display for AVLTree<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.iter().format(" "))
    }
}
