//! Positions into a [`ForwardList`].
//!
//! [`Cursor`] is a plain handle: it names a position but neither owns nor
//! borrows the list, so any number of them can be held while the list is
//! edited. The list methods that take a cursor check it on use.
//!
//! [`CursorMut`] borrows the list exclusively and carries its own position,
//! which suits loops that walk the list and edit as they go.
//!
//! # Invalidation
//!
//! A cursor naming an element stays valid until that element is removed
//! (`pop_front`, `erase_after`, `remove_after`, `clear`, or drop). Inserting
//! never invalidates anything. [`ForwardList::swap`] moves elements together
//! with their cursors to the other list.
//!
//! Using an invalidated cursor is a contract violation: it panics if the slot
//! is still vacant, or silently refers to whichever element later reused the
//! slot. It is never memory-unsafe.

use core::fmt;

use crate::{ForwardList, Key};

/// Where a cursor points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Position<K> {
    /// The sentinel before the first element.
    BeforeBegin,
    /// A real node.
    Node(K),
    /// One past the last element.
    End,
}

/// A position in a [`ForwardList`]: the sentinel, an element, or the end.
///
/// Cursors are `Copy` and compare equal when they denote the same position.
/// The default cursor references nothing and equals the end position of any
/// list; it must not be dereferenced or advanced.
///
/// A cursor does not record which list it came from. Equality compares the
/// position alone, so cursors taken from two different lists may compare
/// equal when their nodes happen to share a slot (`a.begin() == b.begin()`
/// for two single-element lists). Comparing or using a cursor with a list it
/// was not obtained from is a contract violation.
///
/// # Example
///
/// ```
/// use nexus_forward_list::{Cursor, ForwardList};
///
/// let mut list: ForwardList<u64> = ForwardList::from([1, 2, 3]);
///
/// // Erase the element after 1
/// let next = list.erase_after(list.begin());
/// assert_eq!(list.get(next), &3);
/// assert_eq!(list.len(), 2);
///
/// assert_eq!(Cursor::default(), list.end());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursor<K: Key = u32> {
    pub(crate) position: Position<K>,
}

impl<K: Key> Cursor<K> {
    #[inline]
    pub(crate) const fn before_begin() -> Self {
        Self {
            position: Position::BeforeBegin,
        }
    }

    #[inline]
    pub(crate) const fn end() -> Self {
        Self {
            position: Position::End,
        }
    }

    /// Cursor at `key`, or the end position for `K::NONE`.
    #[inline]
    pub(crate) fn at(key: K) -> Self {
        if key.is_none() {
            Self::end()
        } else {
            Self {
                position: Position::Node(key),
            }
        }
    }

    /// Returns `true` if this is the end position.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.position == Position::End
    }

    /// Returns `true` if this is the sentinel position.
    #[inline]
    pub fn is_before_begin(&self) -> bool {
        self.position == Position::BeforeBegin
    }

    /// Returns the arena key of the element, or `None` for the sentinel and
    /// end positions.
    #[inline]
    pub fn key(&self) -> Option<K> {
        match self.position {
            Position::Node(key) => Some(key),
            _ => None,
        }
    }
}

impl<K: Key> Default for Cursor<K> {
    fn default() -> Self {
        Self::end()
    }
}

impl<K: Key> fmt::Debug for Cursor<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Position::BeforeBegin => f.write_str("Cursor(before_begin)"),
            Position::Node(key) => write!(f, "Cursor({key:?})"),
            Position::End => f.write_str("Cursor(end)"),
        }
    }
}

// =============================================================================
// CursorMut
// =============================================================================

/// A cursor with exclusive access to its list.
///
/// Starts at the sentinel. Edits happen after the current position, so the
/// cursor itself is never invalidated by its own edits.
///
/// # Example
///
/// Drop every even element in one pass:
///
/// ```
/// use nexus_forward_list::ForwardList;
///
/// let mut list: ForwardList<u64> = (1..=6).collect();
/// let mut cursor = list.cursor_mut();
///
/// while let Some(&next) = cursor.peek_next() {
///     if next % 2 == 0 {
///         cursor.remove_next();
///     } else {
///         cursor.move_next();
///     }
/// }
///
/// let values: Vec<_> = list.iter().copied().collect();
/// assert_eq!(values, vec![1, 3, 5]);
/// ```
pub struct CursorMut<'a, T, K: Key = u32> {
    list: &'a mut ForwardList<T, K>,
    position: Cursor<K>,
}

impl<'a, T, K: Key> CursorMut<'a, T, K> {
    #[inline]
    pub(crate) fn new(list: &'a mut ForwardList<T, K>) -> Self {
        Self {
            list,
            position: Cursor::before_begin(),
        }
    }

    /// Returns the current position as a detached [`Cursor`].
    #[inline]
    pub fn position(&self) -> Cursor<K> {
        self.position
    }

    /// Returns `true` if the cursor is past the last element.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.position.is_end()
    }

    /// Returns the current element, or `None` at the sentinel or the end.
    #[inline]
    pub fn current(&self) -> Option<&T> {
        let key = self.position.key()?;
        self.list.nodes.get(key).map(|node| &node.value)
    }

    /// Returns the current element mutably, or `None` at the sentinel or the end.
    #[inline]
    pub fn current_mut(&mut self) -> Option<&mut T> {
        let key = self.position.key()?;
        self.list.nodes.get_mut(key).map(|node| &mut node.value)
    }

    /// Returns the element after the current position without moving.
    #[inline]
    pub fn peek_next(&self) -> Option<&T> {
        if self.position.is_end() {
            return None;
        }
        let next = self.list.link_after(self.position);
        self.list.nodes.get(next).map(|node| &node.value)
    }

    /// Advances to the next position.
    ///
    /// Must not be called at the end; see [`ForwardList::successor`].
    #[inline]
    pub fn move_next(&mut self) {
        self.list.advance(&mut self.position);
    }

    /// Inserts `value` after the current position without moving.
    ///
    /// Returns a cursor to the new element.
    ///
    /// # Panics
    ///
    /// Panics at the end position.
    #[inline]
    pub fn insert_after(&mut self, value: T) -> Cursor<K> {
        self.list.insert_after(self.position, value)
    }

    /// Removes the element after the current position and returns it.
    ///
    /// Returns `None` at the last element, at the end, or on an empty list.
    #[inline]
    pub fn remove_next(&mut self) -> Option<T> {
        if self.position.is_end() || self.list.link_after(self.position).is_none() {
            return None;
        }
        Some(self.list.remove_after(self.position))
    }
}

impl<T, K: Key> fmt::Debug for CursorMut<'_, T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("position", &self.position)
            .field("len", &self.list.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_equals_end() {
        let list: ForwardList<u64> = ForwardList::from([1]);
        assert_eq!(Cursor::<u32>::default(), list.end());
        assert!(Cursor::<u32>::default().is_end());
    }

    #[test]
    fn positions_compare_by_node() {
        let list: ForwardList<u64> = ForwardList::from([1, 2]);

        assert_eq!(list.begin(), list.begin());
        assert_ne!(list.begin(), list.successor(list.begin()));
        assert_ne!(list.before_begin(), list.begin());
        assert_ne!(list.before_begin(), list.end());
    }

    #[test]
    fn equality_ignores_owning_list() {
        let a: ForwardList<u64> = ForwardList::from([1]);
        let b: ForwardList<u64> = ForwardList::from([2]);

        // Same slot in different arenas: equal positions, different nodes.
        assert_eq!(a.begin(), b.begin());
        assert_ne!(a.get(a.begin()), b.get(b.begin()));
        assert_eq!(a.end(), b.end());
    }

    #[test]
    fn read_and_write_access_share_positions() {
        let mut list: ForwardList<u64> = ForwardList::from([1, 2]);

        let read = list.begin();
        *list.get_mut(read) += 10;
        let write = list.begin();

        assert_eq!(read, write);
        assert_eq!(list.get(read), &11);
    }

    #[test]
    fn key_accessor() {
        let list: ForwardList<u64> = ForwardList::from([1]);

        assert!(list.begin().key().is_some());
        assert!(list.before_begin().key().is_none());
        assert!(list.end().key().is_none());
        assert!(list.before_begin().is_before_begin());
    }

    #[test]
    fn debug_format() {
        let list: ForwardList<u64> = ForwardList::new();
        assert_eq!(format!("{:?}", list.before_begin()), "Cursor(before_begin)");
        assert_eq!(format!("{:?}", list.end()), "Cursor(end)");
    }

    // ============================================================================
    // CursorMut tests
    // ============================================================================

    #[test]
    fn cursor_mut_basic_navigation() {
        let mut list: ForwardList<u64> = ForwardList::from([1, 2, 3]);
        let mut cursor = list.cursor_mut();

        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.peek_next(), Some(&1));

        cursor.move_next();
        assert_eq!(cursor.current(), Some(&1));

        cursor.move_next();
        assert_eq!(cursor.current(), Some(&2));

        cursor.move_next();
        assert_eq!(cursor.current(), Some(&3));
        assert_eq!(cursor.peek_next(), None);

        cursor.move_next();
        assert!(cursor.is_end());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.peek_next(), None);
    }

    #[test]
    fn cursor_mut_current_mut() {
        let mut list: ForwardList<u64> = ForwardList::from([10, 20]);
        let mut cursor = list.cursor_mut();

        cursor.move_next();
        *cursor.current_mut().unwrap() = 100;
        cursor.move_next();
        *cursor.current_mut().unwrap() = 200;

        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![100, 200]);
    }

    #[test]
    fn cursor_mut_insert_after() {
        let mut list: ForwardList<u64> = ForwardList::from([1, 3]);
        let mut cursor = list.cursor_mut();

        cursor.insert_after(0);
        cursor.move_next();
        cursor.move_next();
        let inserted = cursor.insert_after(2);

        assert_eq!(cursor.current(), Some(&1));
        drop(cursor);

        assert_eq!(list.get(inserted), &2);
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![0, 1, 2, 3]);
        list.assert_invariants();
    }

    #[test]
    fn cursor_mut_remove_next() {
        let mut list: ForwardList<u64> = ForwardList::from([1, 2, 3]);
        let mut cursor = list.cursor_mut();

        assert_eq!(cursor.remove_next(), Some(1));
        cursor.move_next();
        assert_eq!(cursor.remove_next(), Some(3));
        assert_eq!(cursor.remove_next(), None);
        drop(cursor);

        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![2]);
        list.assert_invariants();
    }

    #[test]
    fn cursor_mut_empty_list() {
        let mut list: ForwardList<u64> = ForwardList::new();
        let mut cursor = list.cursor_mut();

        assert_eq!(cursor.peek_next(), None);
        assert_eq!(cursor.remove_next(), None);

        cursor.move_next();
        assert!(cursor.is_end());
    }

    #[test]
    fn cursor_mut_position_detaches() {
        let mut list: ForwardList<u64> = ForwardList::from([1, 2]);
        let mut cursor = list.cursor_mut();
        cursor.move_next();
        cursor.move_next();
        let at_two = cursor.position();

        assert_eq!(list.get(at_two), &2);
    }
}
