//! Subscriber Module
//!
//! Fan-out of account update notifications with per-callback fault
//! isolation.

use std::fmt;
use std::panic::{catch_unwind, AssertUnwindSafe};

use parking_lot::RwLock;
use tracing::warn;

use crate::models::Account;

// == Listener Type ==
/// Callback invoked with every account stored by a successful put.
///
/// Listeners must not assume any particular invocation order or thread.
pub type AccountListener = dyn Fn(&Account) + Send + Sync;

// == Subscriber List ==
/// Append-only collection of update listeners.
///
/// Registration never deduplicates: the same callback registered twice is
/// invoked twice per update. There is no unsubscribe.
#[derive(Default)]
pub struct SubscriberList {
    /// Registered listeners, in registration order
    listeners: RwLock<Vec<Box<AccountListener>>>,
}

impl SubscriberList {
    // == Constructor ==
    /// Creates a new empty subscriber list.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Registers a listener for future account updates.
    pub fn add(&self, listener: Box<AccountListener>) {
        self.listeners.write().push(listener);
    }

    // == Notify All ==
    /// Invokes every registered listener once with `account`.
    ///
    /// Faults are isolated per listener: a panicking listener is logged
    /// and skipped, and the remaining listeners still run. The write that
    /// triggered the notification has already succeeded, so no fault here
    /// ever surfaces to the `put` caller.
    pub fn notify_all(&self, account: &Account) {
        let listeners = self.listeners.read();
        for listener in listeners.iter() {
            if catch_unwind(AssertUnwindSafe(|| listener(account))).is_err() {
                warn!(
                    account_id = account.id,
                    "subscriber panicked during update notification"
                );
            }
        }
    }

    // == Length ==
    /// Returns the number of registered listeners.
    pub fn len(&self) -> usize {
        self.listeners.read().len()
    }

    // == Is Empty ==
    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.listeners.read().is_empty()
    }
}

impl fmt::Debug for SubscriberList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriberList")
            .field("listeners", &self.len())
            .finish()
    }
}
