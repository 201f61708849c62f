//! Error types for the account cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the account cache.
///
/// The taxonomy is narrow: the cache performs no I/O, so the only fatal
/// condition is a nonsensical construction argument. Absent values passed
/// to `put` are a silent no-op by contract, not an error.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Cache constructed with a capacity of zero
    #[error("Invalid capacity: {0} (must be at least 1)")]
    InvalidCapacity(usize),
}

// == Result Type Alias ==
/// Convenience Result type for the account cache.
pub type Result<T> = std::result::Result<T, CacheError>;
