use core::fmt::Debug;

use crate::error::TryReserveError;
use crate::hash_table::HashTable;
use crate::hash_table::Keys;
use crate::key::Key;

/// A hash set of integer-like keys, backed by a [`HashTable`] with unit
/// values.
///
/// Growth, probing and deletion behave exactly as in the table: 8 initial
/// buckets, doubling past 60% load, backward-shift removal.
///
/// # Examples
///
/// ```rust
/// use shift_hash::HashSet;
///
/// let mut seen = HashSet::new();
/// assert!(seen.insert(0x1000usize));
/// assert!(!seen.insert(0x1000usize));
/// assert!(seen.contains(0x1000));
/// assert!(seen.remove(0x1000));
/// assert!(seen.is_empty());
/// ```
#[derive(Clone)]
pub struct HashSet<K> {
    table: HashTable<K, ()>,
}

impl<K: Key> PartialEq for HashSet<K> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().all(|key| other.contains(key))
    }
}

impl<K: Key> Eq for HashSet<K> {}

impl<K: Key + Debug> Debug for HashSet<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K: Key> Default for HashSet<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Key> HashSet<K> {
    /// Creates an empty set with the initial capacity of 8 buckets.
    pub fn new() -> Self {
        Self {
            table: HashTable::new(),
        }
    }

    /// Returns the number of keys in the set.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns `true` if the set contains no keys.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Returns the number of buckets in the set.
    pub fn capacity(&self) -> usize {
        self.table.capacity()
    }

    /// Removes all keys, keeping the capacity.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Adds `key` to the set.
    ///
    /// Returns `true` if the key was not present before.
    pub fn insert(&mut self, key: K) -> bool {
        self.table.insert(key, ()).is_none()
    }

    /// Fallible version of [`insert`](Self::insert).
    ///
    /// If the set needs to grow and cannot, the error is returned and the set
    /// is left unchanged.
    pub fn try_insert(&mut self, key: K) -> Result<bool, TryReserveError> {
        Ok(self.table.try_insert(key, ())?.is_none())
    }

    /// Returns `true` if `key` is in the set.
    pub fn contains(&self, key: K) -> bool {
        self.table.contains_key(key)
    }

    /// Removes `key` from the set.
    ///
    /// Returns `true` if the key was present.
    pub fn remove(&mut self, key: K) -> bool {
        self.table.remove(key).is_some()
    }

    /// Returns an iterator over the keys in bucket order.
    pub fn iter(&self) -> Keys<'_, K, ()> {
        self.table.keys()
    }
}

impl<K: Key> Extend<K> for HashSet<K> {
    fn extend<T: IntoIterator<Item = K>>(&mut self, iter: T) {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<K: Key> FromIterator<K> for HashSet<K> {
    fn from_iter<T: IntoIterator<Item = K>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a, K: Key> IntoIterator for &'a HashSet<K> {
    type IntoIter = Keys<'a, K, ()>;
    type Item = K;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn insert_contains_remove() {
        let mut set = HashSet::new();
        assert!(set.is_empty());

        assert!(set.insert(1u32));
        assert!(set.insert(2u32));
        assert!(!set.insert(1u32));
        assert_eq!(set.len(), 2);

        assert!(set.contains(1));
        assert!(!set.contains(3));

        assert!(set.remove(1));
        assert!(!set.remove(1));
        assert!(!set.contains(1));
        assert!(set.contains(2));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn grows_like_the_table() {
        let mut set = HashSet::new();
        for k in 0..6i16 {
            set.insert(k);
        }
        assert_eq!(set.capacity(), 16);

        set.clear();
        assert!(set.is_empty());
        assert_eq!(set.capacity(), 16);
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let forward: HashSet<u64> = (0..100).collect();
        let backward: HashSet<u64> = (0..100).rev().collect();
        assert_eq!(forward, backward);

        let mut shorter = forward.clone();
        shorter.remove(50);
        assert_ne!(forward, shorter);

        shorter.insert(500);
        assert_ne!(forward, shorter);
    }

    #[test]
    fn iter_and_extend() {
        let mut set: HashSet<u8> = [3, 1, 2].into_iter().collect();
        set.extend([2, 4]);

        let mut keys: Vec<_> = set.iter().collect();
        keys.sort();
        assert_eq!(keys, [1, 2, 3, 4]);
        assert_eq!((&set).into_iter().len(), 4);
    }

    #[test]
    fn try_insert_reports_novelty() {
        let mut set = HashSet::new();
        assert_eq!(set.try_insert('q'), Ok(true));
        assert_eq!(set.try_insert('q'), Ok(false));
    }

    #[test]
    fn debug_lists_keys() {
        let mut set = HashSet::new();
        set.insert(9u8);
        assert_eq!(alloc::format!("{set:?}"), "{9}");
    }
}
