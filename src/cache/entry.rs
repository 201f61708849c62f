//! Cache Entry Module
//!
//! Defines the recency-tagged wrapper around stored accounts.

use chrono::Utc;

use crate::models::Account;

// == Recency Key ==
/// Position of an entry in the recency ordering.
///
/// Entries are totally ordered by last-access time first, then by the
/// sequence number. The sequence tie-break makes the ordering
/// deterministic even when two entries are touched within the same
/// millisecond under contention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RecencyKey {
    /// Last access time (Unix milliseconds)
    pub touched_at_ms: u64,
    /// Sequence number assigned at creation/refresh time
    pub seq: u64,
}

// == Cache Entry ==
/// A stored account together with its recency metadata.
///
/// Entries are never mutated in place: a refresh replaces the entry with
/// a freshly stamped one, which also moves its position in the ordering.
#[derive(Debug, Clone, Copy)]
pub struct CacheEntry {
    /// The stored account
    pub account: Account,
    /// Last access time (Unix milliseconds)
    pub touched_at_ms: u64,
    /// Sequence number assigned when the entry was created or refreshed
    pub seq: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current time and the given
    /// sequence number.
    pub fn new(account: Account, seq: u64) -> Self {
        Self {
            account,
            touched_at_ms: current_timestamp_ms(),
            seq,
        }
    }

    // == Recency Key ==
    /// Returns this entry's position key in the recency ordering.
    pub fn recency_key(&self) -> RecencyKey {
        RecencyKey {
            touched_at_ms: self.touched_at_ms,
            seq: self.seq,
        }
    }
}

// == Utility Functions ==
/// Returns the current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    // timestamp_millis() is negative only before the epoch
    Utc::now().timestamp_millis().max(0) as u64
}
