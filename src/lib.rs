//! A self-balancing AVL binary search tree.
//!
//! [`AVLTree`] keeps its values ordered, and keeps the heights of the two subtrees of every node
//! within one of each other, so that inserting, deleting and searching all take `O(log n)` time.
//!
//!```
//! use avl_tree::{AVLTree, TreeError};
//!
//! let mut tree = AVLTree::new();
//! for x in [9, 5, 10, 0, 6, 11, -1, 1, 2] {
//!     tree.insert(x);
//! }
//! assert_eq!(tree.max(), Ok(&11));
//! assert_eq!(tree.to_string(), "-1 0 1 2 5 6 9 10 11");
//!
//! tree.clear();
//! assert_eq!(tree.min(), Err(TreeError::EmptyTree));
//!```

pub mod error;
pub mod trees;

pub use error::TreeError;
pub use trees::*;
