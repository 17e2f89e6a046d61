//! Comparison, hashing and formatting for [`ForwardList`].
//!
//! Ordering is lexicographic over the elements. Only `partial_cmp` and `cmp`
//! are implemented; `<`, `<=`, `>` and `>=` all come from them, so they can
//! never disagree with each other or with `==`.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};

use crate::{ForwardList, Key};

impl<T: PartialEq, K: Key> PartialEq for ForwardList<T, K> {
    /// Lengths first, then element by element.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq, K: Key> Eq for ForwardList<T, K> {}

impl<T: PartialOrd, K: Key> PartialOrd for ForwardList<T, K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord, K: Key> Ord for ForwardList<T, K> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Hash, K: Key> Hash for ForwardList<T, K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.len());
        for value in self {
            value.hash(state);
        }
    }
}

impl<T: fmt::Debug, K: Key> fmt::Debug for ForwardList<T, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

#[cfg(test)]
mod tests {
    use std::hash::DefaultHasher;

    use super::*;

    fn hash_of(list: &ForwardList<u64>) -> u64 {
        let mut hasher = DefaultHasher::new();
        list.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn equal_lists() {
        let a: ForwardList<u64> = ForwardList::from([1, 2, 3]);
        let b: ForwardList<u64> = (1..=3).collect();

        assert_eq!(a, b);
        assert_eq!(b, a);
    }

    #[test]
    fn different_lengths_are_unequal() {
        let a: ForwardList<u64> = ForwardList::from([1, 2]);
        let b: ForwardList<u64> = ForwardList::from([1, 2, 3]);

        assert_ne!(a, b);
    }

    #[test]
    fn different_values_are_unequal() {
        let a: ForwardList<u64> = ForwardList::from([1, 2, 3]);
        let b: ForwardList<u64> = ForwardList::from([1, 5, 3]);

        assert_ne!(a, b);
    }

    #[test]
    fn equality_ignores_arena_layout() {
        let a: ForwardList<u64> = ForwardList::from([1, 2]);

        let mut b: ForwardList<u64> = ForwardList::from([9, 9, 2]);
        b.erase_after(b.before_begin());
        *b.front_mut().unwrap() = 1;

        assert_eq!(a, b);
    }

    #[test]
    fn prefix_is_less() {
        let a: ForwardList<u64> = ForwardList::from([1, 2]);
        let b: ForwardList<u64> = ForwardList::from([1, 2, 3]);

        assert!(a < b);
        assert!(a <= b);
        assert!(b > a);
        assert!(b >= a);
        assert!(!(b < a));
    }

    #[test]
    fn first_difference_decides() {
        let a: ForwardList<u64> = ForwardList::from([1, 9]);
        let b: ForwardList<u64> = ForwardList::from([2]);

        assert!(a < b);
        assert_eq!(a.cmp(&b), Ordering::Less);
    }

    #[test]
    fn equal_lists_are_not_ordered() {
        let a: ForwardList<u64> = ForwardList::from([4, 5]);
        let b = a.clone();

        assert!(!(a < b));
        assert!(!(b < a));
        assert!(a <= b);
        assert!(a >= b);
        assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn empty_is_least() {
        let empty: ForwardList<u64> = ForwardList::new();
        let one: ForwardList<u64> = ForwardList::from([0]);

        assert!(empty < one);
        assert_eq!(empty, ForwardList::new());
    }

    #[test]
    fn partial_order_with_nan() {
        let a: ForwardList<f64> = ForwardList::from([f64::NAN]);
        let b: ForwardList<f64> = ForwardList::from([1.0]);

        assert_eq!(a.partial_cmp(&b), None);
        assert!(!(a < b));
        assert!(!(a >= b));
    }

    #[test]
    fn equal_lists_hash_equal() {
        let a: ForwardList<u64> = ForwardList::from([1, 2, 3]);
        let b = a.clone();

        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn debug_renders_as_list() {
        let list: ForwardList<u64> = ForwardList::from([1, 2, 3]);
        assert_eq!(format!("{list:?}"), "[1, 2, 3]");

        let empty: ForwardList<u64> = ForwardList::new();
        assert_eq!(format!("{empty:?}"), "[]");
    }
}
