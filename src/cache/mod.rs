//! Cache Module
//!
//! Provides a bounded, thread-safe LRU cache over account records with
//! hit counting, balance rankings, and update notifications.

mod entry;
mod recency;
mod stats;
mod store;
mod subscribers;


// Re-export public types
pub use entry::{CacheEntry, RecencyKey};
pub use recency::RecencyIndex;
pub use stats::{CacheStats, StatsSnapshot};
pub use store::AccountCache;
pub use subscribers::{AccountListener, SubscriberList};

// == Public Constants ==
/// Number of accounts returned by the default balance ranking query
pub const DEFAULT_TOP_N: usize = 3;
