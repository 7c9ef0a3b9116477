//! Notification sink collaborator
//!
//! The transfer engine tells both parties about a committed transfer
//! through a [`NotificationSink`]. Notification is fire-and-forget: the
//! trait returns nothing, the engine consults no result, and a sink that
//! cannot deliver must not make the engine roll anything back — by the
//! time the sink is invoked the transfer has already committed and both
//! locks are released.

use crate::types::Account;
use async_trait::async_trait;

/// Best-effort notification collaborator
///
/// Implementations must be cheap to call or must offload their own work;
/// the engine awaits the call on the transfer path.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Notify the holder of `account` with a human-readable message
    async fn notify(&self, account: &Account, message: &str);
}

/// Notification sink that records the would-be email in the service log
///
/// Stands in for a real mail gateway; swapping in one is a matter of
/// implementing [`NotificationSink`] against its client.
#[derive(Debug, Default)]
pub struct EmailNotifier;

impl EmailNotifier {
    pub fn new() -> Self {
        EmailNotifier
    }
}

#[async_trait]
impl NotificationSink for EmailNotifier {
    async fn notify(&self, account: &Account, message: &str) {
        tracing::info!(account_id = %account.id, message, "sending notification");
    }
}
