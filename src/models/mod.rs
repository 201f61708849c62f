//! Account model for the cache
//!
//! Defines the immutable account record the cache stores and ranks.

use serde::{Deserialize, Serialize};

// == Account ==
/// An immutable account record identified by a numeric id.
///
/// Cache lookups are keyed by `id` only; `balance` is the ranking field
/// used by the top-N-by-balance query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier (the cache key)
    pub id: i64,
    /// Account balance, used for balance rankings
    pub balance: i64,
}

impl Account {
    // == Constructor ==
    /// Creates a new account record.
    pub fn new(id: i64, balance: i64) -> Self {
        Self { id, balance }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_new() {
        let account = Account::new(1, 1000);
        assert_eq!(account.id, 1);
        assert_eq!(account.balance, 1000);
    }

    #[test]
    fn test_account_equality() {
        assert_eq!(Account::new(1, 1000), Account::new(1, 1000));
        assert_ne!(Account::new(1, 1000), Account::new(1, 2000));
        assert_ne!(Account::new(1, 1000), Account::new(2, 1000));
    }

    #[test]
    fn test_account_serde_roundtrip() {
        let account = Account::new(42, 6000);
        let json = serde_json::to_string(&account).unwrap();
        let parsed: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, account);
    }
}
