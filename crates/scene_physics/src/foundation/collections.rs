//! Specialized collection types

use slotmap::Key;

/// Set of arena keys with O(1) removal via swap-with-last
///
/// Iteration order is insertion order until the first removal; removing
/// swaps the last element into the vacated slot, so order after removals
/// is unspecified. Callers must not depend on it.
#[derive(Debug, Clone)]
pub struct KeySet<K: Key> {
    keys: Vec<K>,
}

impl<K: Key> KeySet<K> {
    /// Create an empty set
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Insert a key; returns false if it was already present
    pub fn insert(&mut self, key: K) -> bool {
        if self.contains(key) {
            false
        } else {
            self.keys.push(key);
            true
        }
    }

    /// Remove a key; returns false if it was not present
    pub fn remove(&mut self, key: K) -> bool {
        match self.keys.iter().position(|&k| k == key) {
            Some(index) => {
                self.keys.swap_remove(index);
                true
            }
            None => false,
        }
    }

    /// Check whether a key is present
    pub fn contains(&self, key: K) -> bool {
        self.keys.contains(&key)
    }

    /// Iterate over the contained keys (unspecified order)
    pub fn iter(&self) -> impl Iterator<Item = K> + '_ {
        self.keys.iter().copied()
    }

    /// Number of contained keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Check whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Remove all keys
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

impl<K: Key> Default for KeySet<K> {
    fn default() -> Self {
        Self::new()
    }
}
