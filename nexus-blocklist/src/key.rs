//! Node handles.
//!
//! Nodes live in an arena owned by the list. Links between nodes are raw
//! arena slots with a reserved sentinel (`Slot::NONE`) instead of
//! `Option<usize>`, which keeps [`Node`](crate::Node) at two words plus the
//! block.
//!
//! Callers never see raw slots. They get a [`NodeKey`], which pairs the slot
//! with the identity of the issuing list and the stamp that list assigned
//! when the node was created. A key whose node has since been removed no
//! longer matches, even if the slot has been reused by a later insert, and a
//! key from another list never matches at all.

use std::sync::atomic::{AtomicU64, Ordering};

/// Arena slot index with a sentinel "no node" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct Slot(usize);

impl Slot {
    /// Sentinel representing an absent link.
    pub(crate) const NONE: Self = Slot(usize::MAX);

    #[inline]
    pub(crate) const fn from_usize(val: usize) -> Self {
        Slot(val)
    }

    #[inline]
    pub(crate) const fn as_usize(self) -> usize {
        self.0
    }

    #[inline]
    pub(crate) const fn is_none(self) -> bool {
        self.0 == usize::MAX
    }

    #[inline]
    pub(crate) const fn is_some(self) -> bool {
        !self.is_none()
    }
}

/// Identity of one list instance, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct ListId(u64);

impl ListId {
    /// Allocates a fresh id.
    #[inline]
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        ListId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Handle to a node owned by a [`BlockList`](crate::BlockList).
///
/// Returned by the insert operations and by [`first`](crate::BlockList::first),
/// [`last`](crate::BlockList::last) and [`node_at`](crate::BlockList::node_at).
/// A key is `Copy` and stays valid until its node is removed. Keys are
/// tied to the list that issued them: passing one to another list (or to a
/// clone of the issuing list) resolves to nothing.
///
/// # Example
///
/// ```
/// use nexus_blocklist::BlockList;
///
/// let mut list: BlockList<u64> = BlockList::new();
/// let key = list.add_last(0x1000);
///
/// assert_eq!(list.node(key).map(|n| *n.block()), Some(0x1000));
/// assert_eq!(list.remove(key), Some(0x1000));
///
/// // The node is gone, the handle no longer resolves.
/// assert!(list.node(key).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeKey {
    pub(crate) slot: Slot,
    pub(crate) list: ListId,
    pub(crate) stamp: u64,
}

impl NodeKey {
    #[inline]
    pub(crate) const fn new(slot: Slot, list: ListId, stamp: u64) -> Self {
        Self { slot, list, stamp }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_sentinel() {
        assert!(Slot::NONE.is_none());
        assert!(!Slot::NONE.is_some());
        assert!(Slot::from_usize(0).is_some());
        assert!(Slot::from_usize(usize::MAX - 1).is_some());
    }

    #[test]
    fn slot_roundtrip() {
        for i in [0usize, 1, 100, 1000, u32::MAX as usize] {
            assert_eq!(Slot::from_usize(i).as_usize(), i);
        }
    }

    #[test]
    fn list_ids_are_unique() {
        let a = ListId::next();
        let b = ListId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn keys_differ_by_stamp_and_list() {
        let list = ListId::next();
        let a = NodeKey::new(Slot::from_usize(3), list, 0);
        let b = NodeKey::new(Slot::from_usize(3), list, 1);
        let c = NodeKey::new(Slot::from_usize(3), ListId::next(), 0);
        assert_ne!(a, b);
        assert_ne!(a, c);
        assert_eq!(a, NodeKey::new(Slot::from_usize(3), list, 0));
    }
}
