//! Core ledger components
//!
//! - [`store`] - concurrent account store (insert-if-absent, lookup)
//! - [`lock`] - per-account fair lock with bounded-wait acquisition
//! - [`engine`] - transfer orchestration (dual-lock protocol)
//! - [`notifier`] - fire-and-forget notification collaborator

pub mod engine;
pub mod lock;
pub mod notifier;
pub mod store;

pub use engine::TransferEngine;
pub use lock::AccountLock;
pub use notifier::{EmailNotifier, NotificationSink};
pub use store::AccountStore;
