//! Account-related types for the transfer ledger
//!
//! This module defines the Account record and its identifier type.
//! The Account is a plain data record; the synchronization guarding its
//! balance lives in the store entry, not in the record itself.

use crate::types::LedgerError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Opaque account identifier
///
/// Account ids are caller-supplied strings, unique across the store and
/// immutable after creation.
pub type AccountId = String;

/// A named balance record participating in transfers
///
/// The balance is non-negative at all times observable outside a locked
/// mutation. Only the transfer engine mutates it, and only while holding
/// the account's lock.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    /// Unique account identifier, immutable after creation
    #[serde(rename = "accountId")]
    pub id: AccountId,

    /// Current balance, exact decimal, never negative
    ///
    /// Defaults to zero when omitted at creation time.
    #[serde(default)]
    pub balance: Decimal,
}

impl Account {
    /// Create a new account with the given opening balance
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NegativeBalance` if the opening balance is
    /// below zero. A zero opening balance is valid.
    pub fn new(id: impl Into<AccountId>, balance: Decimal) -> Result<Self, LedgerError> {
        let id = id.into();
        if balance < Decimal::ZERO {
            return Err(LedgerError::negative_balance(&id, balance));
        }
        Ok(Account { id, balance })
    }

    /// Create a new account with a zero balance
    pub fn with_zero_balance(id: impl Into<AccountId>) -> Self {
        Account {
            id: id.into(),
            balance: Decimal::ZERO,
        }
    }
}
