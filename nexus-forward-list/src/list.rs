//! Singly linked list with arena-allocated nodes.
//!
//! A [`ForwardList`] is a head link, an element count and a [`NodeArena`]
//! owned by the list. The head link plays the role of the "before-first"
//! sentinel: it holds no value, and every position-relative edit is phrased
//! as "after this position", so the front of the list needs no special case.
//!
//! ```text
//! head ──► [a|k1] ──► [b|k2] ──► [c|NONE]
//!  ▲          ▲                      ▲
//!  │          │                      └ last node, link is K::NONE
//!  │          └ begin()
//!  └ before_begin()                   end() is one past [c]
//! ```
//!
//! # Contracts
//!
//! Positional operations take a [`Cursor`] obtained from this list. Passing
//! a cursor that does not satisfy an operation's precondition is a bug in
//! the caller and panics; it is never reported as an error value. Advancing
//! the end cursor is checked with a debug assertion only.
//!
//! # Example
//!
//! ```
//! use nexus_forward_list::ForwardList;
//!
//! let mut list: ForwardList<u64> = ForwardList::from([1, 3]);
//!
//! // Insert 2 after the first element
//! let first = list.begin();
//! let two = list.insert_after(first, 2);
//! assert_eq!(list.get(two), &2);
//!
//! // Insert 0 at the very front through the sentinel
//! list.insert_after(list.before_begin(), 0);
//!
//! let values: Vec<_> = list.iter().copied().collect();
//! assert_eq!(values, vec![0, 1, 2, 3]);
//! ```

use crate::cursor::Position;
use crate::storage::{Node, NodeArena};
use crate::{Cursor, CursorMut, Iter, IterMut, Key};

/// A singly linked list of `T`, linked through keys of type `K`.
///
/// See the [module docs](self) for the layout and the cursor contracts.
///
/// # Type Parameters
///
/// - `T`: Element type
/// - `K`: Link type (default `u32`), bounds the number of live nodes
pub struct ForwardList<T, K: Key = u32> {
    /// The sentinel's link: key of the first node, or `K::NONE` when empty.
    pub(crate) head: K,
    pub(crate) len: usize,
    pub(crate) nodes: NodeArena<T, K>,
}

impl<T, K: Key> Default for ForwardList<T, K> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Construction and query
// =============================================================================

impl<T, K: Key> ForwardList<T, K> {
    /// Creates an empty list. Does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self {
            head: K::NONE,
            len: 0,
            nodes: NodeArena::new(),
        }
    }

    /// Creates an empty list with room for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            head: K::NONE,
            len: 0,
            nodes: NodeArena::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the list. O(1).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty. O(1).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of nodes the list can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Reserves room for at least `additional` more nodes.
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    /// Releases spare node capacity.
    ///
    /// Live nodes are never moved, so cursors stay valid. Capacity held by
    /// vacant slots between live nodes is only fully released once the list
    /// is empty.
    pub fn shrink_to_fit(&mut self) {
        #[cfg(feature = "tracing")]
        let before = self.nodes.capacity();

        self.nodes.shrink_to_fit();

        #[cfg(feature = "tracing")]
        tracing::trace!(
            before,
            after = self.nodes.capacity(),
            "shrank forward list arena"
        );
    }

    /// Returns a reference to the first element, or `None` if empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.nodes.get(self.head).map(|node| &node.value)
    }

    /// Returns a mutable reference to the first element, or `None` if empty.
    #[inline]
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.nodes.get_mut(self.head).map(|node| &mut node.value)
    }

    // ========================================================================
    // Positions
    // ========================================================================

    /// Returns the cursor at the sentinel, positioned before the first element.
    ///
    /// Use it as the anchor for [`insert_after`](Self::insert_after) and
    /// [`erase_after`](Self::erase_after) at the front of the list. It must
    /// not be dereferenced.
    #[inline]
    pub fn before_begin(&self) -> Cursor<K> {
        Cursor::before_begin()
    }

    /// Returns a cursor at the first element, or [`end`](Self::end) if empty.
    #[inline]
    pub fn begin(&self) -> Cursor<K> {
        Cursor::at(self.head)
    }

    /// Returns the one-past-the-last cursor. It must not be dereferenced.
    #[inline]
    pub fn end(&self) -> Cursor<K> {
        Cursor::end()
    }

    /// Returns a reference to the element at `cursor`.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is the sentinel, the end position, or names a node
    /// that has been removed.
    #[inline]
    pub fn get(&self, cursor: Cursor<K>) -> &T {
        match cursor.position {
            Position::Node(key) => &self.node(key).value,
            _ => panic!("cursor does not reference an element"),
        }
    }

    /// Returns a mutable reference to the element at `cursor`.
    ///
    /// # Panics
    ///
    /// Same conditions as [`get`](Self::get).
    #[inline]
    pub fn get_mut(&mut self, cursor: Cursor<K>) -> &mut T {
        match cursor.position {
            Position::Node(key) => &mut self.node_mut(key).value,
            _ => panic!("cursor does not reference an element"),
        }
    }

    /// Returns the cursor following `cursor`.
    ///
    /// From the sentinel this is [`begin`](Self::begin); from the last
    /// element it is [`end`](Self::end).
    ///
    /// # Panics
    ///
    /// `cursor` must not be the end position. This is a debug assertion; in
    /// release builds the end cursor is returned unchanged. Panics if
    /// `cursor` names a removed node.
    #[inline]
    pub fn successor(&self, cursor: Cursor<K>) -> Cursor<K> {
        debug_assert!(
            !cursor.is_end(),
            "advanced a cursor past the end of the list"
        );
        match cursor.position {
            Position::BeforeBegin => Cursor::at(self.head),
            Position::Node(key) => Cursor::at(self.node(key).next),
            Position::End => cursor,
        }
    }

    /// Moves `cursor` one position forward in place.
    ///
    /// Same contract as [`successor`](Self::successor). For post-increment
    /// semantics copy the cursor first: cursors are `Copy`.
    #[inline]
    pub fn advance(&self, cursor: &mut Cursor<K>) {
        *cursor = self.successor(*cursor);
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Pushes a value onto the front of the list. O(1).
    ///
    /// Returns a cursor to the new element.
    #[inline]
    pub fn push_front(&mut self, value: T) -> Cursor<K> {
        let key = self.nodes.insert(Node::new(value, self.head));
        self.head = key;
        self.len += 1;
        Cursor::at(key)
    }

    /// Removes the first element and returns it. O(1).
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    #[inline]
    pub fn pop_front(&mut self) -> T {
        assert!(!self.is_empty(), "pop_front called on an empty list");
        self.unlink_after(Cursor::before_begin()).value
    }

    /// Inserts `value` immediately after `cursor`. O(1).
    ///
    /// `cursor` may be the sentinel, which inserts at the front. Returns a
    /// cursor to the new element. Cursors to other elements stay valid.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is the end position or names a removed node.
    #[inline]
    pub fn insert_after(&mut self, cursor: Cursor<K>, value: T) -> Cursor<K> {
        let next = self.link_after(cursor);
        let key = self.nodes.insert(Node::new(value, next));
        self.set_link_after(cursor, key);
        self.len += 1;
        Cursor::at(key)
    }

    /// Removes the element following `cursor`. O(1).
    ///
    /// Returns a cursor to the element now following `cursor`, which is
    /// [`end`](Self::end) if the removed element was last. Cursors to the
    /// removed element are invalidated.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` has no successor: it is the end position, the last
    /// element, or the sentinel of an empty list.
    #[inline]
    pub fn erase_after(&mut self, cursor: Cursor<K>) -> Cursor<K> {
        let node = self.unlink_after(cursor);
        Cursor::at(node.next)
    }

    /// Removes the element following `cursor` and returns it. O(1).
    ///
    /// # Panics
    ///
    /// Same conditions as [`erase_after`](Self::erase_after).
    #[inline]
    pub fn remove_after(&mut self, cursor: Cursor<K>) -> T {
        self.unlink_after(cursor).value
    }

    /// Removes all elements. Idempotent; keeps the allocated capacity.
    ///
    /// Invalidates every cursor except [`before_begin`](Self::before_begin)
    /// and [`end`](Self::end).
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::trace!(dropped = self.len, "clearing forward list");

        self.nodes.clear();
        self.head = K::NONE;
        self.len = 0;
    }

    /// Exchanges the contents of two lists. O(1), never allocates.
    ///
    /// Cursors to elements follow their elements: a cursor obtained from
    /// `self` now refers to the same value inside `other`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    // ========================================================================
    // Iteration
    // ========================================================================

    /// Returns an iterator over references to elements, front to back.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, K> {
        Iter::new(&self.nodes, self.head, self.len)
    }

    /// Returns an iterator over mutable references to elements, front to back.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, K> {
        IterMut::new(&mut self.nodes, self.head, self.len)
    }

    /// Returns a cursor positioned at the sentinel with exclusive access to
    /// the list.
    ///
    /// See [`CursorMut`] for walk-and-edit loops.
    #[inline]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T, K> {
        CursorMut::new(self)
    }

    // ========================================================================
    // Internals
    // ========================================================================

    /// Returns the link stored at `cursor`: the head for the sentinel, the
    /// node's `next` otherwise.
    #[inline]
    pub(crate) fn link_after(&self, cursor: Cursor<K>) -> K {
        match cursor.position {
            Position::BeforeBegin => self.head,
            Position::Node(key) => self.node(key).next,
            Position::End => panic!("cursor at the end position has no successor link"),
        }
    }

    #[inline]
    fn set_link_after(&mut self, cursor: Cursor<K>, key: K) {
        match cursor.position {
            Position::BeforeBegin => self.head = key,
            Position::Node(at) => self.node_mut(at).next = key,
            Position::End => unreachable!("link_after rejects the end position"),
        }
    }

    /// Detaches the node following `cursor` and returns it.
    fn unlink_after(&mut self, cursor: Cursor<K>) -> Node<T, K> {
        let target = self.link_after(cursor);
        assert!(target.is_some(), "no element follows the cursor");

        let node = self
            .nodes
            .remove(target)
            .expect("list links a vacant slot");
        self.set_link_after(cursor, node.next);
        self.len -= 1;
        debug_assert_eq!(self.nodes.len(), self.len, "arena holds unlinked nodes");
        node
    }

    #[inline]
    fn node(&self, key: K) -> &Node<T, K> {
        self.nodes
            .get(key)
            .expect("cursor does not reference a live node")
    }

    #[inline]
    fn node_mut(&mut self, key: K) -> &mut Node<T, K> {
        self.nodes
            .get_mut(key)
            .expect("cursor does not reference a live node")
    }

    /// Walks the chain and checks the count, acyclicity and arena occupancy.
    #[cfg(test)]
    pub(crate) fn assert_invariants(&self) {
        let mut key = self.head;
        let mut walked = 0;
        while key.is_some() {
            assert!(walked < self.len, "chain is longer than len (cycle?)");
            key = self.node(key).next;
            walked += 1;
        }
        assert_eq!(walked, self.len, "len disagrees with the chain");
        assert_eq!(self.nodes.len(), self.len, "arena holds unlinked nodes");
    }
}

// =============================================================================
// Copy and construction from values
// =============================================================================

impl<T: Clone, K: Key> Clone for ForwardList<T, K> {
    fn clone(&self) -> Self {
        #[cfg(feature = "tracing")]
        tracing::trace!(len = self.len, "cloning forward list");

        let mut copy = Self::with_capacity(self.len);
        let mut tail = copy.before_begin();
        for value in self {
            tail = copy.insert_after(tail, value.clone());
        }
        copy
    }

    /// Copy-then-swap: `self` is left untouched if cloning `source` panics.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl<T, K: Key, const N: usize> From<[T; N]> for ForwardList<T, K> {
    /// Builds the list by pushing onto the front in reverse order, so it
    /// reads in array order.
    fn from(values: [T; N]) -> Self {
        let mut list = Self::with_capacity(N);
        for value in values.into_iter().rev() {
            list.push_front(value);
        }
        list
    }
}

impl<T, K: Key> FromIterator<T> for ForwardList<T, K> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut list = Self::with_capacity(iter.size_hint().0);
        let mut tail = list.before_begin();
        for value in iter {
            tail = list.insert_after(tail, value);
        }
        list
    }
}
