//! Types module
//!
//! Contains core data structures used throughout the ledger:
//! - `account`: the Account record and its identifier type
//! - `transfer`: the validated transfer request
//! - `error`: error types surfaced by the ledger

pub mod account;
pub mod error;
pub mod transfer;

pub use account::{Account, AccountId};
pub use error::LedgerError;
pub use transfer::TransferRequest;
