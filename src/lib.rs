//! Account Cache - a bounded, thread-safe LRU cache for account records
//!
//! Provides LRU eviction, hit counting, balance rankings, and update
//! notifications under concurrent access from any number of threads.

pub mod cache;
pub mod error;
pub mod models;

pub use cache::AccountCache;
pub use error::{CacheError, Result};
pub use models::Account;
