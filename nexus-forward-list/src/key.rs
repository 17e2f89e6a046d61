//! Link type for arena-allocated nodes.
//!
//! Nodes refer to their successor through a [`Key`] rather than a pointer.
//! The width of the key bounds how many nodes a single list can hold, and
//! keeps nodes small: a `ForwardList<u32, u32>` node is 8 bytes.

/// Integer type usable as a node link.
///
/// One value is reserved as [`Key::NONE`], meaning "no node". For the
/// unsigned integers this is `MAX`, so a list keyed by `u16` holds at most
/// `u16::MAX` nodes.
///
/// # Example
///
/// ```
/// use nexus_forward_list::Key;
///
/// let key: u32 = 7;
/// assert!(key.is_some());
/// assert!(u32::NONE.is_none());
/// assert!(u16::can_address(65_534));
/// assert!(!u16::can_address(65_535));
/// ```
pub trait Key: Copy + Eq + core::fmt::Debug + core::hash::Hash {
    /// Sentinel value meaning "no node".
    const NONE: Self;

    /// Converts an arena slot index into a key.
    ///
    /// Callers check [`Key::can_address`] first; out of range values are
    /// truncated.
    fn from_usize(val: usize) -> Self;

    /// Returns the arena slot index for this key.
    fn as_usize(self) -> usize;

    /// Returns `true` if this is the sentinel value.
    #[inline]
    fn is_none(self) -> bool {
        self == Self::NONE
    }

    /// Returns `true` if this is NOT the sentinel value.
    #[inline]
    fn is_some(self) -> bool {
        !self.is_none()
    }

    /// Returns `true` if slot index `val` is representable without
    /// colliding with [`Key::NONE`].
    #[inline]
    fn can_address(val: usize) -> bool {
        val < Self::NONE.as_usize()
    }
}

macro_rules! impl_key_for_unsigned {
    ($($ty:ty),*) => {
        $(
            impl Key for $ty {
                const NONE: Self = <$ty>::MAX;

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as $ty
                }

                #[inline]
                fn as_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_key_for_unsigned!(u16, u32, u64, usize);
