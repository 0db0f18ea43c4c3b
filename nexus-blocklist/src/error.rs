//! Error types for list operations.

use thiserror::Error;

/// Result alias used by fallible [`BlockList`](crate::BlockList) operations.
pub type Result<T> = core::result::Result<T, BlockListError>;

/// Errors returned by [`BlockList`](crate::BlockList).
///
/// Every error is raised before the list is touched, so a failed call
/// leaves the list exactly as it was.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BlockListError {
    /// Index outside the valid range for the operation.
    ///
    /// `add` accepts `0..=len`. `node_at`, `block_at` and `remove_at`
    /// accept `0..len`.
    #[error("index {index} out of range for list of length {len}")]
    InvalidIndex {
        /// The rejected index.
        index: usize,
        /// List length at the time of the call.
        len: usize,
    },

    /// No node holds a block equal to the one requested.
    #[error("block is not in this list")]
    ElementNotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_invalid_index() {
        let err = BlockListError::InvalidIndex { index: 4, len: 3 };
        assert_eq!(err.to_string(), "index 4 out of range for list of length 3");
    }

    #[test]
    fn display_not_found() {
        assert_eq!(
            BlockListError::ElementNotFound.to_string(),
            "block is not in this list"
        );
    }
}
