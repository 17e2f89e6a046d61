//! Front-to-back iterators over a [`ForwardList`].

use core::iter::FusedIterator;

use crate::storage::{Node, NodeArena};
use crate::{ForwardList, Key};

/// Iterator over references to list elements.
pub struct Iter<'a, T, K: Key = u32> {
    nodes: &'a NodeArena<T, K>,
    next: K,
    remaining: usize,
}

impl<'a, T, K: Key> Iter<'a, T, K> {
    #[inline]
    pub(crate) fn new(nodes: &'a NodeArena<T, K>, head: K, len: usize) -> Self {
        Self {
            nodes,
            next: head,
            remaining: len,
        }
    }
}

impl<T, K: Key> Clone for Iter<'_, T, K> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, T, K: Key> Iterator for Iter<'a, T, K> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_none() {
            return None;
        }

        let node = self
            .nodes
            .get(self.next)
            .expect("list links a vacant slot");
        self.next = node.next;
        self.remaining -= 1;
        Some(&node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, K: Key> ExactSizeIterator for Iter<'_, T, K> {}

impl<T, K: Key> FusedIterator for Iter<'_, T, K> {}

/// Iterator over mutable references to list elements.
pub struct IterMut<'a, T, K: Key = u32> {
    /// Disjoint borrows of the occupied slots, indexed by key.
    slots: Vec<Option<&'a mut Node<T, K>>>,
    next: K,
    remaining: usize,
}

impl<'a, T, K: Key> IterMut<'a, T, K> {
    /// Splits the arena borrow into one borrow per slot up front, so a
    /// yielded element is never reborrowed through the arena again.
    pub(crate) fn new(nodes: &'a mut NodeArena<T, K>, head: K, len: usize) -> Self {
        let mut slots = Vec::new();
        if len > 0 {
            slots.reserve(len);
            for (key, node) in nodes.iter_mut() {
                let index = key.as_usize();
                if index >= slots.len() {
                    slots.resize_with(index + 1, || None);
                }
                slots[index] = Some(node);
            }
        }
        Self {
            slots,
            next: head,
            remaining: len,
        }
    }
}

impl<'a, T, K: Key> Iterator for IterMut<'a, T, K> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.next.is_none() {
            return None;
        }

        let node = self
            .slots
            .get_mut(self.next.as_usize())
            .and_then(Option::take)
            .expect("list links a vacant slot");
        self.next = node.next;
        self.remaining -= 1;
        Some(&mut node.value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T, K: Key> ExactSizeIterator for IterMut<'_, T, K> {}

impl<T, K: Key> FusedIterator for IterMut<'_, T, K> {}

/// Owning iterator; pops elements off the front.
pub struct IntoIter<T, K: Key = u32> {
    list: ForwardList<T, K>,
}

impl<T, K: Key> Iterator for IntoIter<T, K> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.list.is_empty() {
            None
        } else {
            Some(self.list.pop_front())
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T, K: Key> ExactSizeIterator for IntoIter<T, K> {}

impl<T, K: Key> FusedIterator for IntoIter<T, K> {}

impl<T, K: Key> IntoIterator for ForwardList<T, K> {
    type Item = T;
    type IntoIter = IntoIter<T, K>;

    #[inline]
    fn into_iter(self) -> IntoIter<T, K> {
        IntoIter { list: self }
    }
}

impl<'a, T, K: Key> IntoIterator for &'a ForwardList<T, K> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T, K>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T, K> {
        self.iter()
    }
}

impl<'a, T, K: Key> IntoIterator for &'a mut ForwardList<T, K> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T, K>;

    #[inline]
    fn into_iter(self) -> IterMut<'a, T, K> {
        self.iter_mut()
    }
}
