use core::ptr::NonNull;

/// A key that can be stored in a [`HashTable`](crate::HashTable).
///
/// Keys are fixed-width integers or addresses. The table compares keys with
/// [`Eq`] and only uses [`Key::to_u64`] to pick a starting bucket.
///
/// Implement this for your own integer newtypes:
///
/// ```rust
/// use shift_hash::Key;
///
/// #[derive(Clone, Copy, PartialEq, Eq)]
/// struct NodeId(u32);
///
/// impl Key for NodeId {
///     const VACANT: Self = NodeId(0);
///
///     fn to_u64(self) -> u64 {
///         self.0 as u64
///     }
/// }
///
/// let mut table = shift_hash::HashTable::<NodeId, u8>::new();
/// table.insert(NodeId(7), 1);
/// assert_eq!(table.get(NodeId(7)), Some(&1));
/// ```
pub trait Key: Copy + Eq {
    /// Placeholder written into empty buckets.
    ///
    /// It is never observed through the public API and never compared
    /// against a real key, so it may coincide with a valid key.
    const VACANT: Self;

    /// Returns the key's bit pattern widened to 64 bits.
    ///
    /// Distinct keys should map to distinct values where possible. Keys that
    /// share a value still work, but always collide and lengthen each
    /// other's probe runs.
    fn to_u64(self) -> u64;
}

macro_rules! impl_integer_key {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Key for $ty {
                const VACANT: Self = 0;

                #[inline(always)]
                fn to_u64(self) -> u64 {
                    self as u64
                }
            }
        )*
    };
}

impl_integer_key!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Key for char {
    const VACANT: Self = '\0';

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self as u64
    }
}

impl<T> Key for *const T {
    const VACANT: Self = core::ptr::null();

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self.addr() as u64
    }
}

impl<T> Key for *mut T {
    const VACANT: Self = core::ptr::null_mut();

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self.addr() as u64
    }
}

impl<T> Key for NonNull<T> {
    const VACANT: Self = NonNull::dangling();

    #[inline(always)]
    fn to_u64(self) -> u64 {
        self.as_ptr().addr() as u64
    }
}
