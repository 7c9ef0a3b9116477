//! Transfer Ledger Library
//! # Overview
//!
//! An in-memory account ledger that moves funds between two accounts
//! atomically and concurrently. The core is the concurrency control: one
//! fair, timeout-bounded lock per account, acquired in a total order so a
//! two-account mutation can never deadlock, lose an update, or expose a
//! half-applied transfer.
//!
//! # Architecture
//!
//! - [`types`] - Core data types (Account, TransferRequest, LedgerError)
//! - [`core`] - Business logic components:
//!   - [`core::store`] - concurrent account map (insert-if-absent, lookup)
//!   - [`core::lock`] - per-account fair lock with bounded-wait acquisition
//!   - [`core::engine`] - transfer orchestration (dual-lock protocol)
//!   - [`core::notifier`] - fire-and-forget notification collaborator
//! - [`api`] - axum HTTP boundary (routing, DTOs, status mapping)
//! - [`cli`] / [`config`] - service arguments and engine configuration
//!
//! # Guarantees
//!
//! - **Conservation**: the sum of all balances is unchanged by any number
//!   of successful or failed transfers.
//! - **Atomicity**: a transfer applies fully or not at all; failures leave
//!   the ledger exactly as it was, with no lock held.
//! - **Isolation**: transfers touching a common account are totally
//!   ordered; transfers on disjoint accounts run fully in parallel.
//! - **Bounded waiting**: each lock acquisition is bounded by a configured
//!   timeout, so a transfer's worst-case latency is twice that bound.

// Module declarations
pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod types;

pub use config::TransferConfig;
pub use core::{AccountLock, AccountStore, EmailNotifier, NotificationSink, TransferEngine};
pub use types::{Account, AccountId, LedgerError, TransferRequest};
