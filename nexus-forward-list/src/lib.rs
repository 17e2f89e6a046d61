//! Singly linked forward list with arena-allocated nodes.
//!
//! [`ForwardList`] is a classic forward list: O(1) push/pop at the front,
//! O(1) insert and erase *after* any position, forward-only traversal, and
//! value semantics (clone, swap, lexicographic comparison).
//!
//! # Design Philosophy
//!
//! A pointer-based singly linked list pays for its simplicity:
//!
//! ```text
//! Box<Node<T>>   - one allocation per node, recursive drop, pointer chasing
//! *mut Node<T>   - cursors are raw pointers, dangling after removal
//! ```
//!
//! This crate keeps the list shape but changes what a link is:
//!
//! ```text
//! NodeArena (slab)  - owns every node, reuses freed slots
//! Key (u32)         - a link is an integer index into the arena
//! Cursor<K>         - a position is a Copy handle, checked on use
//! ```
//!
//! Benefits:
//! - **Exactly one owner per node**: the arena slot. Dropping the list drops
//!   the arena; there is no recursive destructor.
//! - **Safe stale cursors**: using a removed position panics or reads a
//!   reused slot, never freed memory.
//! - **Few allocations**: freed slots are reused, and `with_capacity`
//!   preallocates.
//! - **Compact nodes**: `K = u32` links are half the size of a pointer.
//!
//! # Quick Start
//!
//! ```
//! use nexus_forward_list::ForwardList;
//!
//! let mut list: ForwardList<u64> = ForwardList::from([1, 2, 3]);
//! assert_eq!(list.len(), 3);
//!
//! // Front operations
//! list.push_front(0);
//! assert_eq!(list.pop_front(), 0);
//!
//! // Position-relative edits go through cursors
//! let first = list.begin();
//! let next = list.erase_after(first);
//! assert_eq!(list.get(next), &3);
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, vec![1, 3]);
//! ```
//!
//! # Cursors
//!
//! | Position | Obtained from | Dereference | Anchor for `*_after` |
//! |----------|---------------|-------------|----------------------|
//! | sentinel | [`ForwardList::before_begin`] | no | yes |
//! | element  | [`ForwardList::begin`], inserts, [`ForwardList::successor`] | yes | yes |
//! | end      | [`ForwardList::end`], [`Cursor::default`] | no | no |
//!
//! Read-only and mutable access share the same [`Cursor`] type; the access
//! mode is chosen by calling [`ForwardList::get`] or [`ForwardList::get_mut`].
//! For walk-and-edit loops, [`ForwardList::cursor_mut`] hands out a
//! [`CursorMut`] that borrows the list.
//!
//! # Contracts
//!
//! Preconditions (non-empty for `pop_front`, a successor for `erase_after`,
//! an element for `get`, not-end for `insert_after`) are the caller's
//! responsibility. Violations panic; advancing the end cursor is a debug
//! assertion. Nothing returns a `Result`.
//!
//! # Feature Flags
//!
//! - `tracing` - Emit `trace` events for bulk operations (`clear`, `clone`,
//!   `shrink_to_fit`)

#![warn(missing_docs)]

mod cmp;
pub mod cursor;
pub mod iter;
pub mod key;
pub mod list;
mod storage;

pub use cursor::{Cursor, CursorMut};
pub use iter::{IntoIter, Iter, IterMut};
pub use key::Key;
pub use list::ForwardList;
