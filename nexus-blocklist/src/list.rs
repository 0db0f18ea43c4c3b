//! Singly-linked list of block descriptors.
//!
//! Nodes live in a [`slab::Slab`] arena owned by the list. Links are arena
//! slots, the list tracks head, tail and length. Inserting at either end is
//! O(1); every index-based operation walks forward from the head.
//!
//! # Example
//!
//! ```
//! use nexus_blocklist::BlockList;
//!
//! let mut list: BlockList<&str> = BlockList::new();
//!
//! list.add_first("a");
//! list.add_last("b");
//! list.add(1, "c").unwrap();
//!
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), ["a", "c", "b"]);
//!
//! list.remove_block(&"c").unwrap();
//! assert_eq!(list.remove_at(0), Ok("a"));
//! assert_eq!(list.len(), 1);
//! assert_eq!(list.to_string(), "b ");
//! ```
//!
//! # Handles
//!
//! Insert operations return a [`NodeKey`]. It can be used to inspect the
//! node or remove it later without knowing its current index:
//!
//! ```
//! use nexus_blocklist::BlockList;
//!
//! let mut list: BlockList<u64> = BlockList::new();
//! let a = list.add_last(1);
//! let _b = list.add_last(2);
//!
//! list.add_first(0);
//! assert_eq!(list.remove(a), Some(1));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [0, 2]);
//! ```

use std::fmt;

use log::trace;
use slab::Slab;

use crate::error::{BlockListError, Result};
use crate::iter::{Iter, Keys};
use crate::key::{ListId, NodeKey, Slot};
use crate::node::Node;

/// An ordered sequence of blocks backed by a singly-linked node chain.
///
/// # Type Parameters
///
/// - `B`: Block descriptor type. Value search ([`index_of`](Self::index_of),
///   [`remove_block`](Self::remove_block)) needs `B: PartialEq`; rendering
///   with `to_string` needs `B: Display`.
///
/// # Index Bounds
///
/// | Operation | Valid indices |
/// |-----------|---------------|
/// | [`add`](Self::add) | `0..=len` |
/// | [`node_at`](Self::node_at), [`block_at`](Self::block_at), [`remove_at`](Self::remove_at) | `0..len` |
///
/// Anything else fails with [`BlockListError::InvalidIndex`] and leaves
/// the list unchanged.
pub struct BlockList<B> {
    nodes: Slab<Node<B>>,
    head: Slot,
    tail: Slot,
    len: usize,
    id: ListId,
    next_stamp: u64,
}

impl<B> Default for BlockList<B> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Accessors
// =============================================================================

impl<B> BlockList<B> {
    /// Creates an empty list.
    #[inline]
    pub fn new() -> Self {
        Self::from_slab(Slab::new())
    }

    /// Creates an empty list with room for `capacity` nodes before the
    /// arena reallocates.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from_slab(Slab::with_capacity(capacity))
    }

    fn from_slab(nodes: Slab<Node<B>>) -> Self {
        Self {
            nodes,
            head: Slot::NONE,
            tail: Slot::NONE,
            len: 0,
            id: ListId::next(),
            next_stamp: 0,
        }
    }

    /// Returns the number of blocks in the list.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes the arena can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the first node's key, or `None` if empty.
    #[inline]
    pub fn first(&self) -> Option<NodeKey> {
        self.key_of(self.head)
    }

    /// Returns the last node's key, or `None` if empty.
    #[inline]
    pub fn last(&self) -> Option<NodeKey> {
        self.key_of(self.tail)
    }

    /// Resolves a key to its node.
    ///
    /// Returns `None` if the node has been removed or `key` was issued by
    /// another list.
    #[inline]
    pub fn node(&self, key: NodeKey) -> Option<&Node<B>> {
        if key.list != self.id || key.slot.is_none() {
            return None;
        }
        self.nodes
            .get(key.slot.as_usize())
            .filter(|node| node.stamp == key.stamp)
    }

    /// Returns the key of the node after `key`.
    ///
    /// Returns `None` if `key` is the last node or has been removed.
    #[inline]
    pub fn next_key(&self, key: NodeKey) -> Option<NodeKey> {
        let next = self.node(key)?.next;
        self.key_of(next)
    }

    /// Returns the key of the node at `index`.
    ///
    /// O(index) walk from the head.
    ///
    /// # Errors
    ///
    /// Returns [`BlockListError::InvalidIndex`] if `index >= len`.
    pub fn node_at(&self, index: usize) -> Result<NodeKey> {
        self.check_index(index)?;
        let slot = self.slot_at(index);
        Ok(NodeKey::new(slot, self.id, self.nodes[slot.as_usize()].stamp))
    }

    /// Returns the block at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`BlockListError::InvalidIndex`] if `index >= len`.
    pub fn block_at(&self, index: usize) -> Result<&B> {
        self.check_index(index)?;
        let slot = self.slot_at(index);
        Ok(&self.nodes[slot.as_usize()].block)
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Inserts `block` before position `index`.
    ///
    /// `index == 0` makes the block the new first element, `index == len`
    /// makes it the new last element. Both ends are O(1); anything in
    /// between walks to the predecessor.
    ///
    /// Returns the key of the new node.
    ///
    /// # Errors
    ///
    /// Returns [`BlockListError::InvalidIndex`] if `index > len`.
    pub fn add(&mut self, index: usize, block: B) -> Result<NodeKey> {
        if index > self.len {
            return Err(BlockListError::InvalidIndex {
                index,
                len: self.len,
            });
        }

        if index == 0 {
            return Ok(self.add_first(block));
        }
        if index == self.len {
            return Ok(self.add_last(block));
        }

        let prev = self.slot_at(index - 1);
        let key = self.alloc(block);
        let next = self.nodes[prev.as_usize()].next;
        self.nodes[key.slot.as_usize()].next = next;
        self.nodes[prev.as_usize()].next = key.slot;
        self.len += 1;

        trace!("[BlockList::add] inserted at {}, len {}", index, self.len);
        Ok(key)
    }

    /// Inserts `block` at the front of the list. O(1).
    pub fn add_first(&mut self, block: B) -> NodeKey {
        let key = self.alloc(block);
        self.nodes[key.slot.as_usize()].next = self.head;

        if self.head.is_none() {
            self.tail = key.slot;
        }
        self.head = key.slot;
        self.len += 1;

        trace!("[BlockList::add_first] len {}", self.len);
        key
    }

    /// Inserts `block` at the back of the list. O(1).
    pub fn add_last(&mut self, block: B) -> NodeKey {
        let key = self.alloc(block);

        if self.tail.is_some() {
            self.nodes[self.tail.as_usize()].next = key.slot;
        } else {
            self.head = key.slot;
        }
        self.tail = key.slot;
        self.len += 1;

        trace!("[BlockList::add_last] len {}", self.len);
        key
    }

    // ========================================================================
    // Removal
    // ========================================================================

    /// Removes the node referenced by `key` and returns its block.
    ///
    /// Returns `None` without touching the list if `key` does not resolve:
    /// the list is empty, the node was already removed, or the key was
    /// issued by another list (including a clone of this one). Only a key
    /// this list handed out for a node it still holds removes anything.
    pub fn remove(&mut self, key: NodeKey) -> Option<B> {
        if self.is_empty() || self.node(key).is_none() {
            return None;
        }

        let prev = if self.head == key.slot {
            Slot::NONE
        } else {
            self.find_prev(key.slot)?
        };
        Some(self.unlink(prev, key.slot))
    }

    /// Removes the node at `index` and returns its block.
    ///
    /// # Errors
    ///
    /// Returns [`BlockListError::InvalidIndex`] if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<B> {
        self.check_index(index)?;

        let (prev, slot) = if index == 0 {
            (Slot::NONE, self.head)
        } else {
            let prev = self.slot_at(index - 1);
            (prev, self.nodes[prev.as_usize()].next)
        };
        Ok(self.unlink(prev, slot))
    }

    /// Removes every node.
    ///
    /// Keys issued before the call stop resolving.
    pub fn clear(&mut self) {
        trace!("[BlockList::clear] dropping {} nodes", self.len);
        self.nodes.clear();
        self.head = Slot::NONE;
        self.tail = Slot::NONE;
        self.len = 0;
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over the blocks, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, B> {
        Iter::new(&self.nodes, self.head, self.len)
    }

    /// Returns an iterator starting at the node referenced by `key`.
    ///
    /// The iterator is empty if `key` does not resolve.
    pub fn iter_from(&self, key: NodeKey) -> Iter<'_, B> {
        if self.node(key).is_none() {
            return Iter::new(&self.nodes, Slot::NONE, 0);
        }

        let mut remaining = 0;
        let mut curr = key.slot;
        while curr.is_some() {
            remaining += 1;
            curr = self.nodes[curr.as_usize()].next;
        }
        Iter::new(&self.nodes, key.slot, remaining)
    }

    /// Returns an iterator over node keys, front to back.
    ///
    /// Collect the keys first when the list is going to be modified while
    /// walking it.
    #[inline]
    pub fn keys(&self) -> Keys<'_, B> {
        Keys::new(&self.nodes, self.id, self.head, self.len)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    #[inline]
    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.len {
            return Err(BlockListError::InvalidIndex {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    #[inline]
    fn key_of(&self, slot: Slot) -> Option<NodeKey> {
        if slot.is_none() {
            None
        } else {
            Some(NodeKey::new(slot, self.id, self.nodes[slot.as_usize()].stamp))
        }
    }

    /// Walks to the slot at `index`. Caller guarantees `index < len`.
    fn slot_at(&self, index: usize) -> Slot {
        debug_assert!(index < self.len);
        let mut curr = self.head;
        for _ in 0..index {
            curr = self.nodes[curr.as_usize()].next;
        }
        curr
    }

    /// Finds the predecessor of `slot`, or `None` if it is not in the chain
    /// after the head.
    fn find_prev(&self, slot: Slot) -> Option<Slot> {
        let mut curr = self.head;
        while curr.is_some() {
            let next = self.nodes[curr.as_usize()].next;
            if next == slot {
                return Some(curr);
            }
            curr = next;
        }
        None
    }

    fn alloc(&mut self, block: B) -> NodeKey {
        let stamp = self.next_stamp;
        self.next_stamp = self.next_stamp.wrapping_add(1);
        let slot = Slot::from_usize(self.nodes.insert(Node::new(block, stamp)));
        NodeKey::new(slot, self.id, stamp)
    }

    /// Detaches `slot` given its predecessor (`Slot::NONE` for the head).
    fn unlink(&mut self, prev: Slot, slot: Slot) -> B {
        let node = self.nodes.remove(slot.as_usize());

        if prev.is_none() {
            self.head = node.next;
        } else {
            self.nodes[prev.as_usize()].next = node.next;
        }

        if node.next.is_none() {
            self.tail = prev;
        }

        self.len -= 1;
        trace!("[BlockList::unlink] len {}", self.len);
        node.block
    }
}

// =============================================================================
// Value search - needs block equality
// =============================================================================

impl<B: PartialEq> BlockList<B> {
    /// Returns the lowest index holding a block equal to `block`.
    ///
    /// Returns `None` if no block matches. O(len).
    pub fn index_of(&self, block: &B) -> Option<usize> {
        self.iter().position(|b| b == block)
    }

    /// Returns `true` if some node holds a block equal to `block`.
    #[inline]
    pub fn contains(&self, block: &B) -> bool {
        self.index_of(block).is_some()
    }

    /// Removes the first node holding a block equal to `block` and returns
    /// the stored block.
    ///
    /// # Errors
    ///
    /// Returns [`BlockListError::ElementNotFound`] if no block matches.
    pub fn remove_block(&mut self, block: &B) -> Result<B> {
        let index = self
            .index_of(block)
            .ok_or(BlockListError::ElementNotFound)?;
        self.remove_at(index)
    }
}

// =============================================================================
// Trait impls
// =============================================================================

/// Each block followed by a single space, front to back.
impl<B: fmt::Display> fmt::Display for BlockList<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for block in self {
            write!(f, "{} ", block)?;
        }
        Ok(())
    }
}

impl<B: fmt::Debug> fmt::Debug for BlockList<B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<B: Clone> Clone for BlockList<B> {
    fn clone(&self) -> Self {
        let mut list = Self::with_capacity(self.len);
        list.extend(self.iter().cloned());
        list
    }
}

impl<B> Extend<B> for BlockList<B> {
    fn extend<I: IntoIterator<Item = B>>(&mut self, iter: I) {
        for block in iter {
            self.add_last(block);
        }
    }
}

impl<B> FromIterator<B> for BlockList<B> {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, B> IntoIterator for &'a BlockList<B> {
    type Item = &'a B;
    type IntoIter = Iter<'a, B>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
