//! Singly-linked list for memory block bookkeeping.
//!
//! [`BlockList`] is the sequence structure underneath allocator free-lists
//! and allocated-lists. It stores opaque block descriptors in order and
//! offers index-based insertion and removal, value search, and forward
//! iteration. What a block is, and which blocks go where, is the
//! allocator's business.
//!
//! # Design
//!
//! ```text
//! BlockList
//!   head ──► [A]──► [C]──► [B]──► none
//!   tail ────────────────────┘
//!   nodes: Slab<Node<B>>   (owns every node, links are slot indices)
//! ```
//!
//! - Nodes live in a [`slab::Slab`] owned by the list. A node is created by
//!   an insert and dropped by a remove; dropping the list drops the chain.
//! - The tail link makes appends O(1). Everything indexed walks from the head.
//! - Insert operations hand back a [`NodeKey`]. Keys are stamped, so a key
//!   whose node was removed never resolves again, even if its slot is reused.
//!   They also carry the issuing list's identity and resolve nowhere else.
//!
//! # Quick Start
//!
//! ```
//! use nexus_blocklist::{BlockList, BlockListError};
//!
//! let mut free: BlockList<(usize, usize)> = BlockList::new();
//!
//! free.add_last((0x1000, 64));
//! free.add_last((0x2000, 128));
//! free.add_first((0x0800, 32));
//!
//! assert_eq!(free.index_of(&(0x1000, 64)), Some(1));
//! assert_eq!(free.block_at(3), Err(BlockListError::InvalidIndex { index: 3, len: 3 }));
//!
//! free.remove_block(&(0x1000, 64)).unwrap();
//! assert_eq!(free.len(), 2);
//! ```
//!
//! # Bounds
//!
//! `add` accepts `0..=len`; `node_at`, `block_at` and `remove_at` accept
//! `0..len`. Out-of-range calls return [`BlockListError::InvalidIndex`]
//! and leave the list as it was.
//!
//! # Threading
//!
//! No internal synchronization. Share behind a lock if needed.

#![warn(missing_docs)]

pub mod error;
pub mod iter;
pub mod key;
pub mod list;
pub mod node;

pub use error::{BlockListError, Result};
pub use iter::{Iter, Keys};
pub use key::NodeKey;
pub use list::BlockList;
pub use node::Node;
