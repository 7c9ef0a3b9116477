//! Concurrent account store
//!
//! This module provides the `AccountStore`, a concurrent map from account
//! id to the account's lock-wrapped record. The store guarantees safe
//! concurrent insert and lookup on its own; balance mutation is a separate
//! concern guarded by the per-account locks.
//!
//! # Design
//!
//! The store uses `DashMap` for fine-grained sharded locking: lookups and
//! inserts on different accounts never contend, and insert-if-absent is
//! atomic, so among concurrent creators of the same id exactly one wins.

use crate::core::lock::AccountLock;
use crate::types::{Account, AccountId, LedgerError};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::Arc;

/// Concurrent key-value map from account id to account record
///
/// `get` hands out shared handles to the live record (not snapshot copies),
/// so a locked mutation performed through one handle is visible to every
/// reader.
#[derive(Debug, Default)]
pub struct AccountStore {
    accounts: DashMap<AccountId, Arc<AccountLock>>,
}

impl AccountStore {
    /// Create an empty store
    pub fn new() -> Self {
        AccountStore {
            accounts: DashMap::new(),
        }
    }

    /// Insert a new account, failing if the id already exists
    ///
    /// The insert is atomic with respect to concurrent creators of the
    /// same id: exactly one succeeds, all others receive
    /// `DuplicateAccount`, and the winner's record is never replaced.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::DuplicateAccount` naming the id when an
    /// account with that id is already present.
    pub fn create(&self, account: Account) -> Result<(), LedgerError> {
        match self.accounts.entry(account.id.clone()) {
            Entry::Occupied(_) => Err(LedgerError::duplicate_account(&account.id)),
            Entry::Vacant(entry) => {
                tracing::debug!(account_id = %account.id, "account created");
                entry.insert(Arc::new(AccountLock::new(account)));
                Ok(())
            }
        }
    }

    /// Look up the shared handle for an account
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::AccountNotFound` naming the id when absent.
    pub fn get(&self, id: &str) -> Result<Arc<AccountLock>, LedgerError> {
        self.accounts
            .get(id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or_else(|| LedgerError::account_not_found(id))
    }

    /// Remove all accounts
    ///
    /// Intended only for test isolation and resets, not steady-state
    /// operation.
    pub fn clear(&self) {
        self.accounts.clear();
    }

    /// Number of accounts currently in the store
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Whether the store holds no accounts
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}
