//! Transfer request type
//!
//! A `TransferRequest` names a source account, a destination account, and a
//! strictly positive amount. The amount is validated at construction, so a
//! non-positive amount can never reach the transfer engine. Requests are
//! ephemeral: constructed per call, never persisted.

use crate::types::{AccountId, LedgerError};
use rust_decimal::Decimal;

/// A validated request to move funds between two accounts
///
/// Fields are private so the only way to obtain a `TransferRequest` is
/// through [`TransferRequest::new`], which enforces the positive-amount
/// invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct TransferRequest {
    from_account_id: AccountId,
    to_account_id: AccountId,
    amount: Decimal,
}

impl TransferRequest {
    /// Build a transfer request, validating the amount
    ///
    /// Source and destination may be equal (self-transfer); the engine
    /// treats that case as a validated no-op.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::NonPositiveAmount` if `amount <= 0`.
    pub fn new(
        from_account_id: impl Into<AccountId>,
        to_account_id: impl Into<AccountId>,
        amount: Decimal,
    ) -> Result<Self, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::non_positive_amount(amount));
        }
        Ok(TransferRequest {
            from_account_id: from_account_id.into(),
            to_account_id: to_account_id.into(),
            amount,
        })
    }

    /// The account to debit
    pub fn from_account_id(&self) -> &str {
        &self.from_account_id
    }

    /// The account to credit
    pub fn to_account_id(&self) -> &str {
        &self.to_account_id
    }

    /// The amount to move, strictly positive
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Whether source and destination name the same account
    pub fn is_self_transfer(&self) -> bool {
        self.from_account_id == self.to_account_id
    }
}
