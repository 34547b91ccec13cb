//! Errors returned by tree queries.

use thiserror::Error;

/// Errors that can occur when querying a tree.
///
/// Looking up a value that isn't in the tree is not an error: searching
/// returns [`None`], and deleting is a no-op.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TreeError {
    /// The query needs at least one value, but the tree is empty.
    #[error("the tree is empty")]
    EmptyTree,
}
