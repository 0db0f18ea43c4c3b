//! Forward iterators over a [`BlockList`](crate::BlockList).
//!
//! Both iterators borrow the list, so it cannot be modified while one is
//! alive. To remove nodes while walking, collect [`keys`](crate::BlockList::keys)
//! first and remove afterwards.

use std::iter::FusedIterator;

use slab::Slab;

use crate::key::{ListId, NodeKey, Slot};
use crate::node::Node;

/// Iterator over references to blocks, front to back.
///
/// Created by [`BlockList::iter`](crate::BlockList::iter) and
/// [`BlockList::iter_from`](crate::BlockList::iter_from).
pub struct Iter<'a, B> {
    nodes: &'a Slab<Node<B>>,
    current: Slot,
    remaining: usize,
}

impl<'a, B> Iter<'a, B> {
    #[inline]
    pub(crate) fn new(nodes: &'a Slab<Node<B>>, start: Slot, remaining: usize) -> Self {
        Self {
            nodes,
            current: start,
            remaining,
        }
    }
}

impl<'a, B> Iterator for Iter<'a, B> {
    type Item = &'a B;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }

        let node = &self.nodes[self.current.as_usize()];
        self.current = node.next;
        self.remaining -= 1;
        Some(&node.block)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<B> ExactSizeIterator for Iter<'_, B> {}

impl<B> FusedIterator for Iter<'_, B> {}

impl<B> Clone for Iter<'_, B> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            current: self.current,
            remaining: self.remaining,
        }
    }
}

/// Iterator over node keys, front to back.
///
/// Created by [`BlockList::keys`](crate::BlockList::keys).
pub struct Keys<'a, B> {
    nodes: &'a Slab<Node<B>>,
    list: ListId,
    current: Slot,
    remaining: usize,
}

impl<'a, B> Keys<'a, B> {
    #[inline]
    pub(crate) fn new(
        nodes: &'a Slab<Node<B>>,
        list: ListId,
        start: Slot,
        remaining: usize,
    ) -> Self {
        Self {
            nodes,
            list,
            current: start,
            remaining,
        }
    }
}

impl<B> Iterator for Keys<'_, B> {
    type Item = NodeKey;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.current.is_none() {
            return None;
        }

        let slot = self.current;
        let node = &self.nodes[slot.as_usize()];
        self.current = node.next;
        self.remaining -= 1;
        Some(NodeKey::new(slot, self.list, node.stamp))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<B> ExactSizeIterator for Keys<'_, B> {}

impl<B> FusedIterator for Keys<'_, B> {}
