//! Linear-probing hash table with tombstone-free deletion.
//!
//! Entries live in a single power-of-two sized array of buckets. A key's
//! natural slot is the low bits of its mixed hash, and lookups scan forward
//! from there until they find the key or an empty bucket. Deletion never
//! leaves tombstones: the hole is filled by shifting later entries of the
//! same probe run backwards, so every run stays contiguous.

use alloc::alloc::handle_alloc_error;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::fmt::Debug;
use core::iter::FusedIterator;

use crate::error::TryReserveError;
use crate::key::Key;
use crate::mix::split_mix_64;

/// Number of buckets in a freshly created table.
const INITIAL_CAPACITY: usize = 8;

/// Growth is triggered once the population exceeds this percentage of the
/// bucket count, measured before the insertion that would add to it.
const MAX_LOAD_PERCENT: u128 = 60;

#[inline(always)]
fn over_load_factor(populated: usize, capacity: usize) -> bool {
    populated as u128 * 100 / capacity as u128 > MAX_LOAD_PERCENT
}

/// Returns whether the entry stored at `index`, whose natural slot is
/// `natural`, may be moved back into the empty bucket at `vacant`.
///
/// This holds exactly when `vacant` lies on the entry's probe path, the
/// cyclic range `[natural, index)`. Moving it anywhere else would put an
/// empty bucket between the entry and its natural slot, or place the entry
/// before its natural slot.
///
/// Spelled out for the two orderings of `vacant` (D) and `index` (B), with N
/// the natural slot and `>` marking the probe path from N to B:
///
/// ```text
/// D < B:
///   move   ----N>>>>D>>>>>>>>B----
///   move   >>>>D>>>>>>>>B----N>>>>
///   stay   ----D----N>>>>>>>>B----
///
/// D > B:
///   move   >>>>B----N>>>>>>>>D>>>>
///   stay   ----N>>>>B--------D----
///   stay   >>>>B--------D----N>>>>
/// ```
#[inline(always)]
fn may_fill(vacant: usize, index: usize, natural: usize, mask: usize) -> bool {
    (vacant.wrapping_sub(natural) & mask) < (index.wrapping_sub(natural) & mask)
}

#[derive(Clone, Copy)]
enum Fallibility {
    Fallible,
    Infallible,
}

impl Fallibility {
    #[cold]
    #[inline(never)]
    fn capacity_overflow(self) -> TryReserveError {
        match self {
            Fallibility::Fallible => TryReserveError::CapacityOverflow,
            Fallibility::Infallible => panic!("hash table capacity overflow"),
        }
    }

    #[cold]
    #[inline(never)]
    fn alloc_err(self, layout: Layout) -> TryReserveError {
        match self {
            Fallibility::Fallible => TryReserveError::AllocError { layout },
            Fallibility::Infallible => handle_alloc_error(layout),
        }
    }
}

#[derive(Clone, Copy)]
struct Bucket<K, V> {
    key: K,
    value: V,
    present: bool,
}

impl<K: Key, V: Copy + Default> Bucket<K, V> {
    #[inline(always)]
    fn vacant() -> Self {
        Bucket {
            key: K::VACANT,
            value: V::default(),
            present: false,
        }
    }
}

/// Allocates a store of `capacity` empty buckets.
///
/// The store is sized exactly; it is never grown in place.
fn allocate_buckets<K: Key, V: Copy + Default>(
    capacity: usize,
    fallibility: Fallibility,
) -> Result<Box<[Bucket<K, V>]>, TryReserveError> {
    debug_assert!(capacity.is_power_of_two());

    let layout =
        Layout::array::<Bucket<K, V>>(capacity).map_err(|_| fallibility.capacity_overflow())?;

    let mut buckets = Vec::new();
    if buckets.try_reserve_exact(capacity).is_err() {
        return Err(fallibility.alloc_err(layout));
    }
    buckets.resize(capacity, Bucket::vacant());

    Ok(buckets.into_boxed_slice())
}

#[inline(always)]
fn natural_index<K: Key>(key: K, mask: usize) -> usize {
    split_mix_64(key.to_u64()) as usize & mask
}

/// Finds the bucket holding `key`, or the first empty bucket of its probe
/// run if the key is absent.
///
/// Terminates because the load factor bound guarantees at least one empty
/// bucket, and runs are contiguous up to every stored key.
#[inline]
fn probe<K: Key, V>(buckets: &[Bucket<K, V>], mask: usize, key: K) -> usize {
    debug_assert_eq!(buckets.len(), mask.wrapping_add(1));

    let mut index = natural_index(key, mask);
    loop {
        // SAFETY: `index` is always reduced by `mask`, and `mask` is one less
        // than the power-of-two length of `buckets`.
        let bucket = unsafe { buckets.get_unchecked(index) };
        if !bucket.present || bucket.key == key {
            return index;
        }
        index = (index + 1) & mask;
    }
}

/// A linear-probing hash table mapping integer-like keys to small `Copy`
/// values.
///
/// `HashTable<K, V>` stores every entry inline in one contiguous array of
/// buckets, with no per-entry allocation and no tombstones. Keys are hashed
/// with a fixed 64-bit mix, so sequential ids and aligned pointers spread
/// evenly without a user-supplied hasher.
///
/// The table starts with 8 buckets and doubles whenever an insertion finds it
/// more than 60% full. It never shrinks.
///
/// ## Performance Characteristics
///
/// - **Memory**: one `bool` of overhead per bucket, plus padding of the
///   `(K, V, bool)` record. Buckets are 40-100% larger than the population.
/// - **Removal**: backward-shift compaction, proportional to the length of
///   the probe run following the removed key.
///
/// ## Example
///
/// ```rust
/// use shift_hash::HashTable;
///
/// #[derive(Clone, Copy, Default, Debug, PartialEq)]
/// struct Score {
///     depth: u8,
///     value: i16,
/// }
///
/// let mut table: HashTable<u64, Score> = HashTable::new();
/// table.insert(0xdead_beef, Score { depth: 4, value: -12 });
///
/// let slot = table.emplace(0xfeed);
/// slot.depth = 2;
///
/// assert_eq!(table.get(0xfeed), Some(&Score { depth: 2, value: 0 }));
/// assert_eq!(table.remove(0xdead_beef).map(|s| s.value), Some(-12));
/// assert_eq!(table.len(), 1);
/// ```
#[derive(Clone)]
pub struct HashTable<K, V> {
    buckets: Box<[Bucket<K, V>]>,
    mask: usize,
    populated: usize,
    /// Growth beyond this many buckets fails as if the allocator refused.
    #[cfg(test)]
    growth_limit: Option<usize>,
}

impl<K, V> Debug for HashTable<K, V>
where
    K: Key + Debug,
    V: Copy + Default + Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Key, V: Copy + Default> Default for HashTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key, V: Copy + Default> HashTable<K, V> {
    /// Creates an empty table with the initial capacity of 8 buckets.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// #
    /// let table: HashTable<u32, f32> = HashTable::new();
    /// assert!(table.is_empty());
    /// assert_eq!(table.capacity(), 8);
    /// ```
    pub fn new() -> Self {
        let buckets = match allocate_buckets::<K, V>(INITIAL_CAPACITY, Fallibility::Infallible) {
            Ok(buckets) => buckets,
            Err(err) => unreachable!("infallible allocation returned {err}"),
        };

        Self {
            buckets,
            mask: INITIAL_CAPACITY - 1,
            populated: 0,
            #[cfg(test)]
            growth_limit: None,
        }
    }

    /// Returns the number of entries in the table.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// assert_eq!(table.len(), 0);
    ///
    /// table.insert(1u64, 'a');
    /// table.insert(1u64, 'b');
    /// assert_eq!(table.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.populated
    }

    /// Returns `true` if the table contains no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }

    /// Returns the number of buckets in the table.
    ///
    /// This is always a power of two. The table grows when an insertion finds
    /// more than 60% of the buckets in use.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Removes all entries from the table, keeping its capacity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// for i in 0..100u32 {
    ///     table.insert(i, i);
    /// }
    /// let capacity = table.capacity();
    ///
    /// table.clear();
    /// assert!(table.is_empty());
    /// assert_eq!(table.get(42), None);
    /// assert_eq!(table.capacity(), capacity);
    /// ```
    pub fn clear(&mut self) {
        self.buckets.fill(Bucket::vacant());
        self.populated = 0;
    }

    /// Returns a reference to the value stored for `key`, or `None` if the
    /// key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.insert(-3i64, [1u8, 2, 3]);
    ///
    /// assert_eq!(table.get(-3), Some(&[1, 2, 3]));
    /// assert_eq!(table.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, key: K) -> Option<&V> {
        let bucket = &self.buckets[probe(&self.buckets, self.mask, key)];
        if bucket.present {
            debug_assert!(bucket.key == key);
            Some(&bucket.value)
        } else {
            None
        }
    }

    /// Returns a mutable reference to the value stored for `key`, or `None`
    /// if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.insert(7u16, 10u32);
    ///
    /// if let Some(hits) = table.get_mut(7) {
    ///     *hits += 1;
    /// }
    /// assert_eq!(table.get(7), Some(&11));
    /// ```
    #[inline]
    pub fn get_mut(&mut self, key: K) -> Option<&mut V> {
        let index = probe(&self.buckets, self.mask, key);
        let bucket = &mut self.buckets[index];
        if bucket.present {
            debug_assert!(bucket.key == key);
            Some(&mut bucket.value)
        } else {
            None
        }
    }

    /// Returns `true` if the table holds an entry for `key`.
    #[inline]
    pub fn contains_key(&self, key: K) -> bool {
        self.get(key).is_some()
    }

    /// Inserts `value` under `key`, returning the value previously stored
    /// for it.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`. Aborts through
    /// [`handle_alloc_error`] if growing the table fails to allocate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// assert_eq!(table.insert(37u8, 1.5f32), None);
    /// assert_eq!(table.insert(37u8, 2.5f32), Some(1.5));
    /// assert_eq!(table.get(37), Some(&2.5));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.reserve_one(Fallibility::Infallible).unwrap_or_else(|err| {
            unreachable!("infallible growth returned {err}")
        });

        self.insert_no_grow(key, value)
    }

    /// Fallible version of [`insert`](Self::insert).
    ///
    /// If the table needs to grow and cannot, the error is returned and the
    /// table is left unchanged.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// assert_eq!(table.try_insert(5u32, 'x'), Ok(None));
    /// assert_eq!(table.try_insert(5u32, 'y'), Ok(Some('x')));
    /// ```
    pub fn try_insert(&mut self, key: K, value: V) -> Result<Option<V>, TryReserveError> {
        self.reserve_one(Fallibility::Fallible)?;
        Ok(self.insert_no_grow(key, value))
    }

    /// Returns the value slot for `key`, creating the entry if needed.
    ///
    /// A newly created entry holds `V::default()`. An existing entry keeps its
    /// value, so this also works as a lookup that inserts on miss.
    ///
    /// Growth happens before the lookup, which may move every entry. The
    /// returned reference borrows the table mutably and therefore cannot be
    /// held across another insertion.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`. Aborts through
    /// [`handle_alloc_error`] if growing the table fails to allocate.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// #
    /// let mut visits: HashTable<u64, u32> = HashTable::new();
    /// for page in [3, 9, 3, 3] {
    ///     *visits.emplace(page) += 1;
    /// }
    ///
    /// assert_eq!(visits.get(3), Some(&3));
    /// assert_eq!(visits.get(9), Some(&1));
    /// ```
    pub fn emplace(&mut self, key: K) -> &mut V {
        self.reserve_one(Fallibility::Infallible).unwrap_or_else(|err| {
            unreachable!("infallible growth returned {err}")
        });

        self.claim(key).0
    }

    /// Fallible version of [`emplace`](Self::emplace).
    ///
    /// If the table needs to grow and cannot, the error is returned and the
    /// table is left unchanged.
    pub fn try_emplace(&mut self, key: K) -> Result<&mut V, TryReserveError> {
        self.reserve_one(Fallibility::Fallible)?;
        Ok(self.claim(key).0)
    }

    /// Removes the entry for `key` and returns its value.
    ///
    /// Removing an absent key does nothing and returns `None`. The capacity
    /// is never reduced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.insert(10u32, 100u32);
    /// table.insert(20u32, 200u32);
    ///
    /// assert_eq!(table.remove(10), Some(100));
    /// assert_eq!(table.remove(10), None);
    /// assert_eq!(table.get(20), Some(&200));
    /// ```
    pub fn remove(&mut self, key: K) -> Option<V> {
        let index = probe(&self.buckets, self.mask, key);
        let bucket = &mut self.buckets[index];
        if !bucket.present {
            return None;
        }

        bucket.present = false;
        let value = bucket.value;
        self.populated -= 1;
        self.backward_shift(index);

        Some(value)
    }

    /// Returns an iterator over `(key, &value)` pairs in bucket order.
    ///
    /// The order is unspecified and changes as the table grows.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use shift_hash::HashTable;
    /// #
    /// let mut table = HashTable::new();
    /// table.insert(1u8, 10u8);
    /// table.insert(2u8, 20u8);
    ///
    /// let mut pairs: Vec<_> = table.iter().map(|(k, &v)| (k, v)).collect();
    /// pairs.sort();
    /// assert_eq!(pairs, [(1, 10), (2, 20)]);
    /// ```
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            remaining: self.populated,
        }
    }

    /// Returns an iterator over the keys of the table, in bucket order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values of the table, in bucket order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Returns an iterator over mutable references to the values of the
    /// table, in bucket order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut {
            buckets: self.buckets.iter_mut(),
            remaining: self.populated,
        }
    }

    #[inline]
    fn reserve_one(&mut self, fallibility: Fallibility) -> Result<(), TryReserveError> {
        if over_load_factor(self.populated, self.buckets.len()) {
            self.resize_rehash(fallibility)?;
        }
        Ok(())
    }

    /// Doubles the bucket store and reinserts every entry.
    ///
    /// The new store is fully built before it replaces the old one, so a
    /// failure leaves the table untouched.
    #[cold]
    #[inline(never)]
    fn resize_rehash(&mut self, fallibility: Fallibility) -> Result<(), TryReserveError> {
        let old_capacity = self.buckets.len();
        let new_capacity = old_capacity
            .checked_mul(2)
            .ok_or_else(|| fallibility.capacity_overflow())?;

        #[cfg(test)]
        if self.growth_limit.is_some_and(|limit| new_capacity > limit) {
            let layout = Layout::array::<Bucket<K, V>>(new_capacity)
                .map_err(|_| fallibility.capacity_overflow())?;
            return Err(fallibility.alloc_err(layout));
        }

        let mut new_buckets = allocate_buckets::<K, V>(new_capacity, fallibility)
            .inspect_err(|err| log::debug!("failed to grow hash table to {new_capacity}: {err}"))?;
        let new_mask = new_capacity - 1;

        for bucket in self.buckets.iter().filter(|bucket| bucket.present) {
            let index = probe(&new_buckets, new_mask, bucket.key);
            debug_assert!(!new_buckets[index].present);
            new_buckets[index] = *bucket;
        }

        log::trace!(
            "grew hash table from {old_capacity} to {new_capacity} buckets with {} entries",
            self.populated
        );

        self.buckets = new_buckets;
        self.mask = new_mask;

        Ok(())
    }

    /// Resolves the bucket for `key` and marks it present.
    ///
    /// Returns the value slot and whether the key was already present.
    #[inline]
    fn claim(&mut self, key: K) -> (&mut V, bool) {
        let index = probe(&self.buckets, self.mask, key);
        let bucket = &mut self.buckets[index];
        let occupied = bucket.present;
        if !occupied {
            bucket.present = true;
            bucket.value = V::default();
            self.populated += 1;
        }
        bucket.key = key;

        (&mut bucket.value, occupied)
    }

    #[inline]
    fn insert_no_grow(&mut self, key: K, value: V) -> Option<V> {
        let (slot, occupied) = self.claim(key);
        let previous = core::mem::replace(slot, value);
        occupied.then_some(previous)
    }

    /// Refills the empty bucket at `vacant` from the probe run that follows
    /// it.
    ///
    /// Walks forward until the first empty bucket. Every entry that may move
    /// into the current hole is copied there, and its old bucket becomes the
    /// new hole.
    fn backward_shift(&mut self, mut vacant: usize) {
        let mask = self.mask;
        let mut index = vacant;
        loop {
            index = (index + 1) & mask;

            let bucket = &self.buckets[index];
            if !bucket.present {
                break;
            }

            let natural = natural_index(bucket.key, mask);
            if !may_fill(vacant, index, natural, mask) {
                continue;
            }

            self.buckets.copy_within(index..index + 1, vacant);
            self.buckets[index].present = false;
            vacant = index;
        }
    }

    /// Computes a histogram of probe distances for the current table state.
    ///
    /// Bin `i` counts the entries stored `i` buckets past their natural slot.
    /// The vector is as long as the largest distance plus one.
    #[cfg(any(test, feature = "stats"))]
    pub fn probe_histogram(&self) -> Vec<usize> {
        let mut hist = alloc::vec![0usize; 1];
        for (index, bucket) in self.buckets.iter().enumerate() {
            if !bucket.present {
                continue;
            }

            let distance = self.probe_distance(index);
            if distance >= hist.len() {
                hist.resize(distance + 1, 0);
            }
            hist[distance] += 1;
        }
        hist
    }

    /// Returns occupancy and memory statistics gathered by a full scan.
    #[cfg(any(test, feature = "stats"))]
    pub fn debug_stats(&self) -> DebugStats {
        let mut occupied_slots = 0;
        let mut max_probe_distance = 0;
        for (index, bucket) in self.buckets.iter().enumerate() {
            if bucket.present {
                occupied_slots += 1;
                max_probe_distance = max_probe_distance.max(self.probe_distance(index));
            }
        }

        DebugStats {
            populated: self.populated,
            capacity: self.buckets.len(),
            occupied_slots,
            load_factor: self.populated as f64 / self.buckets.len() as f64,
            max_probe_distance,
            total_bytes: core::mem::size_of_val(&*self.buckets),
        }
    }

    /// Pretty-prints the probe distance histogram as a horizontal bar chart.
    #[cfg(all(any(test, feature = "stats"), feature = "std"))]
    pub fn print_probe_histogram(&self) {
        let hist = self.probe_histogram();
        let max = hist.iter().copied().max().unwrap_or(0);
        if max == 0 {
            println!("probe histogram: empty");
            return;
        }

        let max_bar = 60usize;
        println!("probe histogram ({} entries):", self.populated);
        for (distance, &count) in hist.iter().enumerate() {
            let width = (count * max_bar).div_ceil(max);
            println!("{:>3} | {} ({})", distance, "█".repeat(width), count);
        }
    }

    #[cfg(any(test, feature = "stats"))]
    fn probe_distance(&self, index: usize) -> usize {
        let natural = natural_index(self.buckets[index].key, self.mask);
        index.wrapping_sub(natural) & self.mask
    }
}

/// Occupancy statistics for a [`HashTable`].
///
/// Available with the `stats` feature.
#[cfg(any(test, feature = "stats"))]
#[derive(Debug, Clone)]
pub struct DebugStats {
    /// Number of entries tracked by the table
    pub populated: usize,
    /// Number of buckets
    pub capacity: usize,
    /// Number of buckets found occupied by a full scan
    pub occupied_slots: usize,
    /// Load factor (populated / capacity)
    pub load_factor: f64,
    /// Longest distance between an entry and its natural slot
    pub max_probe_distance: usize,
    /// Total memory in bytes used by the bucket store
    pub total_bytes: usize,
}

#[cfg(any(test, feature = "stats"))]
impl DebugStats {
    /// Pretty-print the debug statistics.
    #[cfg(feature = "std")]
    pub fn print(&self) {
        println!("=== Hash Table Debug Statistics ===");
        println!(
            "Population: {}/{} ({:.2}% load factor)",
            self.populated,
            self.capacity,
            self.load_factor * 100.0
        );
        println!("Occupied buckets: {}", self.occupied_slots);
        println!("Max probe distance: {}", self.max_probe_distance);
        println!("Total Allocated: {} bytes", self.total_bytes);
    }
}

impl<K: Key, V: Copy + Default> Extend<(K, V)> for HashTable<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Key, V: Copy + Default> FromIterator<(K, V)> for HashTable<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<'a, K: Key, V: Copy + Default> IntoIterator for &'a HashTable<K, V> {
    type IntoIter = Iter<'a, K, V>;
    type Item = (K, &'a V);

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the entries of a [`HashTable`].
///
/// This struct is created by the [`iter`] method on [`HashTable`].
///
/// [`iter`]: HashTable::iter
pub struct Iter<'a, K, V> {
    buckets: core::slice::Iter<'a, Bucket<K, V>>,
    remaining: usize,
}

impl<'a, K: Key, V> Iterator for Iter<'a, K, V> {
    type Item = (K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bucket = self.buckets.by_ref().find(|bucket| bucket.present)?;
        self.remaining -= 1;
        Some((bucket.key, &bucket.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K: Key, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K: Key, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a [`HashTable`].
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<K: Key, V> Iterator for Keys<'_, K, V> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Key, V> ExactSizeIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`HashTable`].
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K: Key, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K: Key, V> ExactSizeIterator for Values<'_, K, V> {}

/// A mutable iterator over the values of a [`HashTable`].
pub struct ValuesMut<'a, K, V> {
    buckets: core::slice::IterMut<'a, Bucket<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iterator for ValuesMut<'a, K, V> {
    type Item = &'a mut V;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let bucket = self.buckets.by_ref().find(|bucket| bucket.present)?;
        self.remaining -= 1;
        Some(&mut bucket.value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for ValuesMut<'_, K, V> {}
