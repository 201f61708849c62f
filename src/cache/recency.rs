//! Recency Index Module
//!
//! Implements least-recently-used ordering for cache eviction.

use std::collections::BTreeMap;

use super::entry::RecencyKey;

// == Recency Index ==
/// Orders cached account ids by recency of access.
///
/// Ids are stored in a BTreeMap keyed by their recency key, where:
/// - First = least recently used
/// - Last = most recently used
#[derive(Debug, Default)]
pub struct RecencyIndex {
    /// Account ids ordered by (last access time, sequence)
    order: BTreeMap<RecencyKey, i64>,
}

impl RecencyIndex {
    // == Constructor ==
    /// Creates a new empty recency index.
    pub fn new() -> Self {
        Self {
            order: BTreeMap::new(),
        }
    }

    // == Touch ==
    /// Records `id` at position `key`.
    ///
    /// The caller hands in a freshly stamped key, so the id lands at the
    /// most-recent end of the ordering. Any stale position for the same id
    /// must be removed beforehand via [`remove`](Self::remove).
    pub fn touch(&mut self, key: RecencyKey, id: i64) {
        self.order.insert(key, id);
    }

    // == Remove ==
    /// Removes the entry at `key`, if present.
    pub fn remove(&mut self, key: &RecencyKey) {
        self.order.remove(key);
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used account id.
    ///
    /// Returns None if the index is empty.
    pub fn evict_oldest(&mut self) -> Option<i64> {
        self.order.pop_first().map(|(_, id)| id)
    }

    // == Peek Oldest ==
    /// Returns the least recently used account id without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<i64> {
        self.order.first_key_value().map(|(_, id)| *id)
    }

    // == Length ==
    /// Returns the number of ordered entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if a position key is present in the ordering.
    #[allow(dead_code)]
    pub fn contains(&self, key: &RecencyKey) -> bool {
        self.order.contains_key(key)
    }
}
