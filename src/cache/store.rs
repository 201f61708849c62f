//! Account Cache Store Module
//!
//! Main cache engine combining the id lookup index with the recency
//! ordering under a single reader-writer lock.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use tracing::debug;

use crate::cache::{
    CacheEntry, CacheStats, RecencyIndex, StatsSnapshot, SubscriberList, DEFAULT_TOP_N,
};
use crate::error::{CacheError, Result};
use crate::models::Account;

// == Inner State ==
/// Lookup index and recency ordering, guarded together.
///
/// Invariant: both structures hold the same set of logical entries at every
/// point outside a write-lock critical section.
#[derive(Debug, Default)]
struct CacheInner {
    /// Account id -> current entry
    entries: HashMap<i64, CacheEntry>,
    /// Recency ordering over the same entries
    recency: RecencyIndex,
}

// == Account Cache ==
/// Bounded, thread-safe LRU cache of account records.
///
/// Lookups probe the index under the read lock; the compound update shared
/// by `put` and `get` refreshes (remove old position, maybe evict, insert
/// fresh entry) runs as one write-lock critical section, so the eviction
/// decision always sees a consistent occupied count. Hit counting and
/// sequence allocation are lock-free atomics.
#[derive(Debug)]
pub struct AccountCache {
    /// Maximum number of entries held
    capacity: usize,
    /// Lookup index + recency ordering
    inner: RwLock<CacheInner>,
    /// Sequence generator for recency tie-breaking
    seq: AtomicU64,
    /// Hit/miss/eviction counters
    stats: CacheStats,
    /// Update notification listeners
    subscribers: SubscriberList,
}

impl AccountCache {
    // == Constructor ==
    /// Creates a cache holding at most `capacity` accounts.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `capacity` is zero; the
    /// capacity is never silently clamped.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            capacity,
            inner: RwLock::new(CacheInner::default()),
            seq: AtomicU64::new(0),
            stats: CacheStats::new(),
            subscribers: SubscriberList::new(),
        })
    }

    // == Get ==
    /// Retrieves the account with the given id, refreshing its recency.
    ///
    /// A hit increments the hit counter and moves the entry to the
    /// most-recent position (fresh timestamp and sequence number). A miss
    /// returns None and never touches the hit counter.
    ///
    /// The index probe and the recency refresh are separate critical
    /// sections; a `put` of the same id may interleave between them.
    pub fn get(&self, id: i64) -> Option<Account> {
        let found = self.inner.read().entries.get(&id).map(|entry| entry.account);

        let Some(account) = found else {
            self.stats.record_miss();
            return None;
        };

        self.stats.record_hit();
        self.refresh(account);
        Some(account)
    }

    // == Put ==
    /// Stores an account, evicting the least recently used entry when a
    /// new id would exceed capacity, then notifies every subscriber once.
    ///
    /// Passing None is a silent no-op; callers may rely on this leniency.
    /// Storing an id that is already cached refreshes that entry in place
    /// and never triggers eviction.
    pub fn put(&self, account: impl Into<Option<Account>>) {
        let Some(account) = account.into() else {
            return;
        };

        self.refresh(account);

        // Fan-out runs outside the cache lock so a listener may call back
        // into the cache without deadlocking.
        self.subscribers.notify_all(&account);
    }

    // == Subscribe ==
    /// Registers a listener invoked once per successful `put`.
    ///
    /// Registration is append-only: there is no unsubscribe, and the same
    /// listener registered twice fires twice per update. Listeners must
    /// not assume any particular invocation order or thread.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Account) + Send + Sync + 'static,
    {
        self.subscribers.add(Box::new(listener));
    }

    // == Top N ==
    /// Returns up to `n` cached accounts with the highest balances, in
    /// descending balance order.
    ///
    /// Pure read: does not count as a hit and does not refresh any entry's
    /// recency. Order among equal balances is unspecified.
    pub fn top_by_balance(&self, n: usize) -> Vec<Account> {
        let mut accounts: Vec<Account> = {
            let inner = self.inner.read();
            inner.entries.values().map(|entry| entry.account).collect()
        };

        accounts.sort_by(|a, b| b.balance.cmp(&a.balance));
        accounts.truncate(n);
        accounts
    }

    /// Returns the three highest-balance accounts, descending.
    pub fn top3(&self) -> Vec<Account> {
        self.top_by_balance(DEFAULT_TOP_N)
    }

    // == Hit Count ==
    /// Returns the number of successful `get` calls so far.
    pub fn hit_count(&self) -> u64 {
        self.stats.hits()
    }

    // == Contains ==
    /// Checks whether an id is cached, without refreshing its recency or
    /// counting a hit.
    pub fn contains(&self, id: i64) -> bool {
        self.inner.read().entries.contains_key(&id)
    }

    // == Length ==
    /// Returns the current number of cached accounts.
    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.inner.read().entries.is_empty()
    }

    // == Capacity ==
    /// Returns the fixed maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Stats ==
    /// Returns a point-in-time snapshot of the cache counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot(self.len())
    }

    // == Refresh ==
    /// Compound update shared by `get` hits and `put`.
    ///
    /// Under one write-lock critical section: removes the entry's old
    /// ordering position if the id is already cached, evicts the least
    /// recently used entry when a genuinely new id would exceed capacity,
    /// then inserts a freshly stamped entry into both structures.
    fn refresh(&self, account: Account) {
        let mut inner = self.inner.write();

        // Drop the stale ordering position first so refreshing an existing
        // id never counts against capacity.
        let old_key = inner.entries.get(&account.id).map(|e| e.recency_key());
        if let Some(key) = old_key {
            inner.recency.remove(&key);
        }

        // Eviction applies only when a new id is being inserted at
        // capacity. evict_oldest() returning None (empty ordering) is
        // tolerated rather than assumed impossible.
        if inner.recency.len() >= self.capacity {
            if let Some(evicted_id) = inner.recency.evict_oldest() {
                inner.entries.remove(&evicted_id);
                self.stats.record_eviction();
                debug!(account_id = evicted_id, "evicted least recently used account");
            }
        }

        let entry = CacheEntry::new(account, self.next_seq());
        inner.recency.touch(entry.recency_key(), account.id);
        inner.entries.insert(account.id, entry);
    }

    // == Sequence ==
    /// Allocates the next recency sequence number.
    ///
    /// Strictly increasing for the cache's lifetime; exists purely to
    /// total-order entries whose millisecond timestamps collide.
    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed)
    }
}
