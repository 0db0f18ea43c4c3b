//! A single link in the chain.

use crate::key::Slot;

/// A node in a [`BlockList`](crate::BlockList).
///
/// Wraps one block with the link to its successor. Nodes are created and
/// destroyed only by the list that owns them; callers reach them through a
/// [`NodeKey`](crate::NodeKey) and [`BlockList::node`](crate::BlockList::node).
#[derive(Debug)]
pub struct Node<B> {
    pub(crate) block: B,
    pub(crate) next: Slot,
    pub(crate) stamp: u64,
}

impl<B> Node<B> {
    /// Creates an unlinked node.
    #[inline]
    pub(crate) fn new(block: B, stamp: u64) -> Self {
        Self {
            block,
            next: Slot::NONE,
            stamp,
        }
    }

    /// Returns the block held by this node.
    #[inline]
    pub fn block(&self) -> &B {
        &self.block
    }

    /// Returns `true` if this node has no successor.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_node_is_unlinked() {
        let node = Node::new(7u64, 0);
        assert_eq!(*node.block(), 7);
        assert!(node.is_last());
    }
}
