//! Error types for the transfer ledger
//!
//! This module defines all errors surfaced by the ledger. Every error is
//! recoverable at the call site: the ledger is left exactly as it was, no
//! lock is left held and no balance is left partially updated.
//!
//! # Error Categories
//!
//! - **Validation errors**: non-positive amounts, negative opening balances.
//!   Rejected before the engine runs.
//! - **Domain errors**: unknown accounts, duplicate creation, insufficient
//!   balance.
//! - **Server-side errors**: lock acquisition timeouts and decimal range
//!   exhaustion. Mapped to internal failures by the boundary layer, not to
//!   client validation errors.

use crate::types::AccountId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for the transfer ledger
///
/// Each variant carries enough context to diagnose the failure without
/// consulting the ledger state.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LedgerError {
    /// An account with this id already exists
    ///
    /// Exactly one caller among concurrent duplicate creators succeeds;
    /// all others receive this error. The existing account is untouched.
    #[error("Account id {id} already exists")]
    DuplicateAccount {
        /// The id that was already present
        id: AccountId,
    },

    /// No account with this id exists
    #[error("Account {id} does not exist")]
    AccountNotFound {
        /// The id that was looked up
        id: AccountId,
    },

    /// The source account cannot cover the requested amount
    ///
    /// Validated under the account's lock; the comparison is exact decimal,
    /// never floating point.
    #[error("Insufficient balance in account {id}: balance {balance}, requested {requested}")]
    InsufficientBalance {
        /// The source account
        id: AccountId,
        /// Balance at validation time
        balance: Decimal,
        /// Amount that was requested
        requested: Decimal,
    },

    /// An account lock could not be acquired within the configured timeout
    ///
    /// Any lock already held by the same transfer attempt has been released
    /// before this error is returned.
    #[error("Timed out waiting for the lock on account {id}")]
    LockTimeout {
        /// The account whose lock was contended
        id: AccountId,
    },

    /// Transfer amount is zero or negative
    ///
    /// Rejected at request construction, before the engine runs.
    #[error("Transfer amount must be positive, got {amount}")]
    NonPositiveAmount {
        /// The rejected amount
        amount: Decimal,
    },

    /// Opening balance is negative
    ///
    /// Rejected at account construction, before the store is touched.
    #[error("Opening balance for account {id} cannot be negative: {balance}")]
    NegativeBalance {
        /// The account being created
        id: AccountId,
        /// The rejected balance
        balance: Decimal,
    },

    /// A balance update would exceed the decimal range
    ///
    /// The transfer is rejected with both accounts unchanged.
    #[error("Arithmetic overflow in {operation} for account {id}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Account whose balance was being updated
        id: AccountId,
    },
}

// Helper constructors, mirroring the variant fields

impl LedgerError {
    /// Create a DuplicateAccount error
    pub fn duplicate_account(id: &str) -> Self {
        LedgerError::DuplicateAccount { id: id.to_string() }
    }

    /// Create an AccountNotFound error
    pub fn account_not_found(id: &str) -> Self {
        LedgerError::AccountNotFound { id: id.to_string() }
    }

    /// Create an InsufficientBalance error
    pub fn insufficient_balance(id: &str, balance: Decimal, requested: Decimal) -> Self {
        LedgerError::InsufficientBalance {
            id: id.to_string(),
            balance,
            requested,
        }
    }

    /// Create a LockTimeout error
    pub fn lock_timeout(id: &str) -> Self {
        LedgerError::LockTimeout { id: id.to_string() }
    }

    /// Create a NonPositiveAmount error
    pub fn non_positive_amount(amount: Decimal) -> Self {
        LedgerError::NonPositiveAmount { amount }
    }

    /// Create a NegativeBalance error
    pub fn negative_balance(id: &str, balance: Decimal) -> Self {
        LedgerError::NegativeBalance {
            id: id.to_string(),
            balance,
        }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, id: &str) -> Self {
        LedgerError::ArithmeticOverflow {
            operation: operation.to_string(),
            id: id.to_string(),
        }
    }
}
