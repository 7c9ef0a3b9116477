//! Per-account lock with bounded-wait acquisition
//!
//! Each account is guarded by exactly one `AccountLock`, created atomically
//! with the account and never replaced. The lock owns the account record,
//! so holding the guard is the only way to read or write a balance for a
//! financial decision.
//!
//! Acquisition is bounded by a caller-supplied timeout and returns a
//! `Result` instead of blocking forever: a transfer that cannot obtain a
//! lock within the configured window fails cleanly with
//! [`LedgerError::LockTimeout`].
//!
//! # Fairness
//!
//! The underlying `tokio::sync::Mutex` queues waiters FIFO, so access is
//! granted in request order and a hot account cannot starve a waiter.

use crate::types::{Account, AccountId, LedgerError};
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};

/// Fair mutual-exclusion guard for a single account record
///
/// Owned by exactly one store entry; handed out to transfers as
/// `Arc<AccountLock>` so the record they mutate is the shared live record,
/// not a snapshot copy.
#[derive(Debug)]
pub struct AccountLock {
    /// Copy of the account id, readable without taking the lock
    ///
    /// Used to name the contended account in timeout errors.
    id: AccountId,

    /// The guarded record; the balance is only touched through this mutex
    state: Mutex<Account>,
}

impl AccountLock {
    /// Wrap an account record in its lock
    pub fn new(account: Account) -> Self {
        let id = account.id.clone();
        AccountLock {
            id,
            state: Mutex::new(account),
        }
    }

    /// The id of the guarded account
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Acquire the lock, waiting at most `timeout`
    ///
    /// The returned guard releases the lock when dropped, on every exit
    /// path including early returns and panics.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::LockTimeout` naming this account if the lock
    /// could not be obtained within `timeout`. A timed-out attempt leaves
    /// the waiter queue; it does not hold a place in line afterwards.
    pub async fn acquire(
        &self,
        timeout: Duration,
    ) -> Result<MutexGuard<'_, Account>, LedgerError> {
        tokio::time::timeout(timeout, self.state.lock())
            .await
            .map_err(|_| LedgerError::lock_timeout(&self.id))
    }

    /// Clone the current record for display reads
    ///
    /// Takes the lock briefly so the snapshot can never observe a
    /// half-applied transfer.
    pub async fn snapshot(&self) -> Account {
        self.state.lock().await.clone()
    }
}
