//! An ascending list of unique keys. This is the source of truth that
//! [`rebuild::Tree`][crate::rebuild::Tree] derives its shape from.
//!
//! # Examples
//!
//! ```
//! use midpoint_bst::keys::SortedKeys;
//!
//! let mut keys = SortedKeys::new();
//! assert!(keys.insert(3));
//! assert!(keys.insert(1));
//!
//! // Duplicates are ignored.
//! assert!(!keys.insert(3));
//! assert_eq!(keys.as_slice(), &[1, 3]);
//!
//! assert!(keys.remove(&1));
//! assert!(!keys.remove(&1));
//! assert_eq!(keys.as_slice(), &[3]);
//! ```

use std::ops::Deref;

use crate::util::{lower_bound, Slot};

/// A `Vec` that stays sorted ascending and never holds the same key twice.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SortedKeys<K> {
    keys: Vec<K>,
}

impl<K> Default for SortedKeys<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> SortedKeys<K> {
    /// Generates a new, empty set of keys.
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// The keys in ascending order.
    pub fn as_slice(&self) -> &[K] {
        &self.keys
    }

    /// Inserts `key` at its sorted position. Returns `false` and leaves the
    /// list untouched if an equal key is already present.
    pub fn insert(&mut self, key: K) -> bool
    where
        K: Ord,
    {
        match lower_bound(&self.keys, &key) {
            Slot::Occupied(_) => false,
            Slot::Vacant(i) => {
                self.keys.insert(i, key);
                true
            }
        }
    }

    /// Removes `key`. Returns `false` if it wasn't present.
    pub fn remove(&mut self, key: &K) -> bool
    where
        K: Ord,
    {
        match lower_bound(&self.keys, key) {
            Slot::Occupied(i) => {
                self.keys.remove(i);
                true
            }
            Slot::Vacant(_) => false,
        }
    }
}

impl<K> Deref for SortedKeys<K> {
    type Target = [K];

    fn deref(&self) -> &[K] {
        &self.keys
    }
}

impl<K> FromIterator<K> for SortedKeys<K>
where
    K: Ord,
{
    /// Collects, sorts and deduplicates the keys.
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut keys: Vec<K> = iter.into_iter().collect();
        keys.sort();
        keys.dedup();
        Self { keys }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut keys = SortedKeys::new();
        for k in [5, 1, 4, 2, 3] {
            assert!(keys.insert(k));
        }

        assert_eq!(keys.as_slice(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_insert_duplicate() {
        let mut keys = SortedKeys::new();
        keys.insert(1);
        let before = keys.clone();

        assert!(!keys.insert(1));
        assert_eq!(keys, before);
    }

    #[test]
    fn test_remove_missing() {
        let mut keys: SortedKeys<i32> = [1, 3].into_iter().collect();

        assert!(!keys.remove(&2));
        assert_eq!(keys.as_slice(), &[1, 3]);
    }

    #[test]
    fn test_remove_last_key() {
        let mut keys = SortedKeys::new();
        keys.insert(1);

        assert!(keys.remove(&1));
        assert!(keys.is_empty());
    }

    #[test]
    fn test_from_iter_dedups() {
        let keys: SortedKeys<i32> = vec![3, 1, 3, 2, 1].into_iter().collect();

        assert_eq!(keys.as_slice(), &[1, 2, 3]);
        assert_eq!(keys.len(), 3);
    }
}
