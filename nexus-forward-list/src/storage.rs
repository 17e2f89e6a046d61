//! Node arena backing a [`ForwardList`](crate::ForwardList).
//!
//! Every list owns one arena. Nodes are addressed by [`Key`] instead of by
//! pointer, so a link is a plain integer and a removed node's slot is handed
//! out again by the next insert. Slots are stable: inserting or removing one
//! node never moves another, which is what keeps cursors to untouched nodes
//! valid across edits.

use slab::Slab;

use crate::Key;

/// A list node: one value and the key of its successor.
///
/// `next` is `K::NONE` for the last node.
#[derive(Debug)]
pub(crate) struct Node<T, K: Key> {
    pub(crate) value: T,
    pub(crate) next: K,
}

impl<T, K: Key> Node<T, K> {
    #[inline]
    pub(crate) fn new(value: T, next: K) -> Self {
        Self { value, next }
    }
}

/// Growable node storage with slot reuse.
///
/// A thin layer over [`slab::Slab`] that speaks `K` instead of `usize` and
/// refuses to hand out a slot whose index would collide with `K::NONE`.
#[derive(Debug)]
pub(crate) struct NodeArena<T, K: Key> {
    slots: Slab<Node<T, K>>,
}

impl<T, K: Key> NodeArena<T, K> {
    #[inline]
    pub(crate) const fn new() -> Self {
        Self { slots: Slab::new() }
    }

    #[inline]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Slab::with_capacity(capacity),
        }
    }

    /// Number of occupied slots.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Stores `node` and returns its key.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds as many nodes as `K` can address.
    #[inline]
    pub(crate) fn insert(&mut self, node: Node<T, K>) -> K {
        let entry = self.slots.vacant_entry();
        let index = entry.key();
        assert!(
            K::can_address(index),
            "node count exceeds the capacity of the key type"
        );
        entry.insert(node);
        K::from_usize(index)
    }

    /// Removes and returns the node at `key`, or `None` if the slot is vacant.
    #[inline]
    pub(crate) fn remove(&mut self, key: K) -> Option<Node<T, K>> {
        if key.is_none() {
            return None;
        }
        self.slots.try_remove(key.as_usize())
    }

    #[inline]
    pub(crate) fn get(&self, key: K) -> Option<&Node<T, K>> {
        if key.is_none() {
            return None;
        }
        self.slots.get(key.as_usize())
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, key: K) -> Option<&mut Node<T, K>> {
        if key.is_none() {
            return None;
        }
        self.slots.get_mut(key.as_usize())
    }

    /// Mutable references to every occupied slot, in slot order.
    #[inline]
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = (K, &mut Node<T, K>)> {
        self.slots
            .iter_mut()
            .map(|(index, node)| (K::from_usize(index), node))
    }

    /// Drops every node. Capacity is retained.
    #[inline]
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
    }

    #[inline]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional);
    }

    /// Releases unused capacity without changing any live key.
    ///
    /// Vacant slots below the highest live key are kept.
    #[inline]
    pub(crate) fn shrink_to_fit(&mut self) {
        if self.slots.is_empty() {
            self.slots = Slab::new();
        } else {
            self.slots.shrink_to_fit();
        }
    }
}
