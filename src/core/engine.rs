//! Transfer engine
//!
//! This module provides the `TransferEngine`, which orchestrates an atomic
//! two-account balance mutation: resolve both accounts, acquire both locks
//! with a bounded wait, validate funds, debit and credit under both locks,
//! release, then notify both parties.
//!
//! The engine enforces:
//! - All-or-nothing mutation: every failure exit leaves both balances and
//!   the store exactly as they were.
//! - No torn reads: both locks are held across validation and mutation, so
//!   no reader holding either lock can observe a half-applied transfer.
//! - No global serialization: transfers not sharing an account never
//!   contend; transfers sharing an account are ordered by lock acquisition.
//!
//! # Lock ordering
//!
//! Locks are acquired in a total order independent of transfer direction:
//! the lexicographically smaller account id first. Two opposing transfers
//! (A→B and B→A) therefore contend on the same first lock and cannot
//! deadlock each other; the acquisition timeout bounds worst-case latency
//! (at most twice the configured timeout) rather than acting as a deadlock
//! breaker. Locks are released in reverse acquisition order.

use crate::config::TransferConfig;
use crate::core::lock::AccountLock;
use crate::core::notifier::NotificationSink;
use crate::core::store::AccountStore;
use crate::types::{Account, LedgerError, TransferRequest};
use rust_decimal::Decimal;
use std::sync::Arc;

/// Orchestrates atomic transfers between accounts in the store
///
/// Holds the account store, the notification collaborator, and the lock
/// acquisition timeout. Cheap to share: callers wrap it in an `Arc` and
/// invoke [`TransferEngine::transfer`] from any number of tasks.
pub struct TransferEngine {
    store: Arc<AccountStore>,
    notifier: Arc<dyn NotificationSink>,
    config: TransferConfig,
}

impl TransferEngine {
    /// Create an engine over the given store and notification sink
    pub fn new(
        store: Arc<AccountStore>,
        notifier: Arc<dyn NotificationSink>,
        config: TransferConfig,
    ) -> Self {
        TransferEngine {
            store,
            notifier,
            config,
        }
    }

    /// The store this engine operates on
    pub fn store(&self) -> &Arc<AccountStore> {
        &self.store
    }

    /// Move `request.amount()` from the source account to the destination
    ///
    /// On success both balances have changed by exactly the amount, in
    /// opposite directions, and both parties have been notified. On
    /// failure nothing has changed: no partial update is ever visible and
    /// no lock is left held.
    ///
    /// A self-transfer (source equals destination) acquires the single
    /// lock exactly once, validates the balance against the amount, and
    /// commits as a no-op; both notifications still fire.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound` naming whichever side is missing (checked
    ///   before any lock is taken)
    /// - `LockTimeout` if either lock cannot be acquired within the
    ///   configured timeout; a lock already held by this attempt is
    ///   released before returning
    /// - `InsufficientBalance` naming the source account if its balance
    ///   cannot cover the amount
    /// - `ArithmeticOverflow` if a balance would leave the decimal range
    pub async fn transfer(&self, request: &TransferRequest) -> Result<(), LedgerError> {
        let amount = request.amount();
        tracing::debug!(
            from = request.from_account_id(),
            to = request.to_account_id(),
            %amount,
            "transfer requested"
        );

        // Resolve both accounts before taking any lock.
        let source = self.store.get(request.from_account_id())?;
        let destination = self.store.get(request.to_account_id())?;

        if request.is_self_transfer() {
            let snapshot = self.commit_self_transfer(&source, amount).await?;
            self.notify_parties(&snapshot, &snapshot, amount).await;
            return Ok(());
        }

        // Total order: smaller id first, regardless of transfer direction.
        let source_first = request.from_account_id() < request.to_account_id();
        let (first, second) = if source_first {
            (&source, &destination)
        } else {
            (&destination, &source)
        };

        let mut first_guard = first.acquire(self.config.lock_timeout).await?;
        // A timeout here drops `first_guard`, releasing the lock already
        // held before the error propagates.
        let mut second_guard = second.acquire(self.config.lock_timeout).await?;

        let (source_record, destination_record) = if source_first {
            (&mut *first_guard, &mut *second_guard)
        } else {
            (&mut *second_guard, &mut *first_guard)
        };

        // Validate under both locks; exact decimal comparison.
        if source_record.balance < amount {
            return Err(LedgerError::insufficient_balance(
                &source_record.id,
                source_record.balance,
                amount,
            ));
        }

        // Compute both new balances before writing either, so a failed
        // credit cannot leave a half-applied debit.
        let debited = source_record
            .balance
            .checked_sub(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("debit", &source_record.id))?;
        let credited = destination_record
            .balance
            .checked_add(amount)
            .ok_or_else(|| LedgerError::arithmetic_overflow("credit", &destination_record.id))?;
        source_record.balance = debited;
        destination_record.balance = credited;

        let source_snapshot = source_record.clone();
        let destination_snapshot = destination_record.clone();

        // Release in reverse acquisition order. The transfer is committed
        // from this point; nothing below may undo it.
        drop(second_guard);
        drop(first_guard);

        tracing::info!(
            from = %source_snapshot.id,
            to = %destination_snapshot.id,
            %amount,
            "transfer committed"
        );

        self.notify_parties(&source_snapshot, &destination_snapshot, amount)
            .await;
        Ok(())
    }

    /// Validate and commit a self-transfer
    ///
    /// The single lock is requested exactly once; asking for it twice from
    /// the same task would deadlock against itself. Debit and credit net
    /// to zero, so the record is left untouched.
    async fn commit_self_transfer(
        &self,
        account: &Arc<AccountLock>,
        amount: Decimal,
    ) -> Result<Account, LedgerError> {
        let guard = account.acquire(self.config.lock_timeout).await?;
        if guard.balance < amount {
            return Err(LedgerError::insufficient_balance(
                &guard.id,
                guard.balance,
                amount,
            ));
        }
        tracing::info!(account_id = %guard.id, %amount, "self-transfer committed as no-op");
        Ok(guard.clone())
    }

    /// Tell both parties about a committed transfer
    ///
    /// Runs after the locks are released. Best-effort: the sink returns
    /// nothing and a delivery problem cannot fail or reverse the transfer.
    async fn notify_parties(&self, source: &Account, destination: &Account, amount: Decimal) {
        self.notifier
            .notify(
                source,
                &format!(
                    "Amount debited: {amount}. You have transferred {amount} to account {}",
                    destination.id
                ),
            )
            .await;
        self.notifier
            .notify(
                destination,
                &format!(
                    "Amount credited: {amount}. You have received {amount} from account {}",
                    source.id
                ),
            )
            .await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::notifier::test_support::RecordingSink;
    use std::time::Duration;

    fn decimal(value: i64) -> Decimal {
        Decimal::new(value, 0)
    }

    struct Fixture {
        store: Arc<AccountStore>,
        sink: Arc<RecordingSink>,
        engine: TransferEngine,
    }

    fn fixture_with_timeout(timeout_ms: u64) -> Fixture {
        let store = Arc::new(AccountStore::new());
        let sink = Arc::new(RecordingSink::new());
        let engine = TransferEngine::new(
            Arc::clone(&store),
            Arc::clone(&sink) as Arc<dyn NotificationSink>,
            TransferConfig::with_timeout_ms(timeout_ms),
        );
        Fixture {
            store,
            sink,
            engine,
        }
    }

    fn fixture() -> Fixture {
        fixture_with_timeout(1000)
    }

    async fn balance_of(store: &AccountStore, id: &str) -> Decimal {
        store.get(id).unwrap().snapshot().await.balance
    }

    #[tokio::test]
    async fn test_exact_transfer() {
        let f = fixture();
        f.store
            .create(Account::new("Id-A", decimal(1050)).unwrap())
            .unwrap();
        f.store
            .create(Account::new("Id-B", decimal(950)).unwrap())
            .unwrap();

        let request = TransferRequest::new("Id-A", "Id-B", decimal(50)).unwrap();
        f.engine.transfer(&request).await.unwrap();

        assert_eq!(balance_of(&f.store, "Id-A").await, decimal(1000));
        assert_eq!(balance_of(&f.store, "Id-B").await, decimal(1000));
    }

    #[tokio::test]
    async fn test_transfer_against_lock_order() {
        // Source id sorts after destination id, so the destination lock is
        // taken first; the observable result is identical.
        let f = fixture();
        f.store
            .create(Account::new("Id-B", decimal(100)).unwrap())
            .unwrap();
        f.store
            .create(Account::new("Id-A", decimal(0)).unwrap())
            .unwrap();

        let request = TransferRequest::new("Id-B", "Id-A", decimal(40)).unwrap();
        f.engine.transfer(&request).await.unwrap();

        assert_eq!(balance_of(&f.store, "Id-B").await, decimal(60));
        assert_eq!(balance_of(&f.store, "Id-A").await, decimal(40));
    }

    #[tokio::test]
    async fn test_insufficient_balance_names_source_and_mutates_nothing() {
        let f = fixture();
        f.store
            .create(Account::new("Id-A", decimal(1000)).unwrap())
            .unwrap();
        f.store
            .create(Account::new("Id-B", decimal(1000)).unwrap())
            .unwrap();

        let request = TransferRequest::new("Id-A", "Id-B", decimal(5000)).unwrap();
        let result = f.engine.transfer(&request).await;

        assert_eq!(
            result.unwrap_err(),
            LedgerError::insufficient_balance("Id-A", decimal(1000), decimal(5000))
        );
        assert_eq!(balance_of(&f.store, "Id-A").await, decimal(1000));
        assert_eq!(balance_of(&f.store, "Id-B").await, decimal(1000));
        assert!(f.sink.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_failed_transfer_is_repeatable_without_side_effects() {
        let f = fixture();
        f.store
            .create(Account::new("Id-A", decimal(10)).unwrap())
            .unwrap();
        f.store
            .create(Account::new("Id-B", decimal(10)).unwrap())
            .unwrap();

        let request = TransferRequest::new("Id-A", "Id-B", decimal(100)).unwrap();
        for _ in 0..3 {
            assert!(f.engine.transfer(&request).await.is_err());
        }

        assert_eq!(balance_of(&f.store, "Id-A").await, decimal(10));
        assert_eq!(balance_of(&f.store, "Id-B").await, decimal(10));
    }

    #[tokio::test]
    async fn test_unknown_source_fails_before_locking() {
        let f = fixture();
        f.store
            .create(Account::new("Id-B", decimal(100)).unwrap())
            .unwrap();

        let request = TransferRequest::new("Id-A", "Id-B", decimal(1)).unwrap();
        let result = f.engine.transfer(&request).await;

        assert_eq!(result.unwrap_err(), LedgerError::account_not_found("Id-A"));
        assert_eq!(balance_of(&f.store, "Id-B").await, decimal(100));
    }

    #[tokio::test]
    async fn test_unknown_destination_fails_before_locking() {
        let f = fixture();
        f.store
            .create(Account::new("Id-A", decimal(100)).unwrap())
            .unwrap();

        let request = TransferRequest::new("Id-A", "Id-B", decimal(1)).unwrap();
        let result = f.engine.transfer(&request).await;

        assert_eq!(result.unwrap_err(), LedgerError::account_not_found("Id-B"));
        assert_eq!(balance_of(&f.store, "Id-A").await, decimal(100));
    }

    #[tokio::test]
    async fn test_notifications_fire_for_both_parties() {
        let f = fixture();
        f.store
            .create(Account::new("Id-A", decimal(100)).unwrap())
            .unwrap();
        f.store
            .create(Account::new("Id-B", decimal(0)).unwrap())
            .unwrap();

        let request = TransferRequest::new("Id-A", "Id-B", decimal(25)).unwrap();
        f.engine.transfer(&request).await.unwrap();

        let notifications = f.sink.notifications();
        assert_eq!(notifications.len(), 2);
        assert_eq!(notifications[0].0, "Id-A");
        assert!(notifications[0].1.contains("debited"));
        assert!(notifications[0].1.contains("Id-B"));
        assert_eq!(notifications[1].0, "Id-B");
        assert!(notifications[1].1.contains("credited"));
        assert!(notifications[1].1.contains("Id-A"));
    }

    #[tokio::test]
    async fn test_self_transfer_is_a_validated_no_op() {
        let f = fixture();
        f.store
            .create(Account::new("Id-A", decimal(100)).unwrap())
            .unwrap();

        let request = TransferRequest::new("Id-A", "Id-A", decimal(40)).unwrap();
        f.engine.transfer(&request).await.unwrap();

        assert_eq!(balance_of(&f.store, "Id-A").await, decimal(100));
        // Both notifications go to the same account.
        let notifications = f.sink.notifications();
        assert_eq!(notifications.len(), 2);
        assert!(notifications.iter().all(|(id, _)| id == "Id-A"));
    }

    #[tokio::test]
    async fn test_self_transfer_still_validates_balance() {
        let f = fixture();
        f.store
            .create(Account::new("Id-A", decimal(100)).unwrap())
            .unwrap();

        let request = TransferRequest::new("Id-A", "Id-A", decimal(500)).unwrap();
        let result = f.engine.transfer(&request).await;

        assert_eq!(
            result.unwrap_err(),
            LedgerError::insufficient_balance("Id-A", decimal(100), decimal(500))
        );
        assert!(f.sink.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_lock_timeout_releases_the_held_peer_lock() {
        let f = fixture_with_timeout(50);
        f.store
            .create(Account::new("Id-A", decimal(100)).unwrap())
            .unwrap();
        f.store
            .create(Account::new("Id-B", decimal(100)).unwrap())
            .unwrap();

        // Park a guard on the destination so the second acquisition times out.
        let blocker = f.store.get("Id-B").unwrap();
        let held = blocker.acquire(Duration::from_secs(1)).await.unwrap();

        let request = TransferRequest::new("Id-A", "Id-B", decimal(10)).unwrap();
        let result = f.engine.transfer(&request).await;
        assert_eq!(result.unwrap_err(), LedgerError::lock_timeout("Id-B"));
        drop(held);

        // The source lock was released on the failure path and nothing moved.
        assert_eq!(balance_of(&f.store, "Id-A").await, decimal(100));
        assert_eq!(balance_of(&f.store, "Id-B").await, decimal(100));
        assert!(f.sink.notifications().is_empty());
    }

    #[tokio::test]
    async fn test_lock_timeout_on_first_lock() {
        let f = fixture_with_timeout(50);
        f.store
            .create(Account::new("Id-A", decimal(100)).unwrap())
            .unwrap();
        f.store
            .create(Account::new("Id-B", decimal(100)).unwrap())
            .unwrap();

        let blocker = f.store.get("Id-A").unwrap();
        let held = blocker.acquire(Duration::from_secs(1)).await.unwrap();

        let request = TransferRequest::new("Id-A", "Id-B", decimal(10)).unwrap();
        let result = f.engine.transfer(&request).await;
        assert_eq!(result.unwrap_err(), LedgerError::lock_timeout("Id-A"));
        drop(held);

        assert_eq!(balance_of(&f.store, "Id-A").await, decimal(100));
        assert_eq!(balance_of(&f.store, "Id-B").await, decimal(100));
    }
}
