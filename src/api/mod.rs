//! HTTP boundary
//!
//! Exposes the ledger over a small REST API:
//!
//! - `POST /v1/accounts` — create an account
//! - `GET /v1/accounts/{account_id}` — fetch an account snapshot
//! - `PUT /v1/accounts/transfer` — move funds between two accounts
//!
//! The boundary owns request shaping and status mapping only; every domain
//! rule (duplicate detection, locking, validation, notification) lives in
//! [`crate::core`].

pub mod handlers;
pub mod types;

use crate::config::TransferConfig;
use crate::core::{AccountStore, EmailNotifier, NotificationSink, TransferEngine};
use axum::routing::{get, post, put};
use axum::Router;
use std::sync::Arc;

/// Shared application state handed to every handler
pub struct AppState {
    pub store: Arc<AccountStore>,
    pub engine: TransferEngine,
}

impl AppState {
    /// Wire a fresh store and engine with the default email notifier
    pub fn new(config: TransferConfig) -> Self {
        Self::with_notifier(config, Arc::new(EmailNotifier::new()))
    }

    /// Wire a fresh store and engine with a caller-supplied sink
    pub fn with_notifier(config: TransferConfig, notifier: Arc<dyn NotificationSink>) -> Self {
        let store = Arc::new(AccountStore::new());
        let engine = TransferEngine::new(Arc::clone(&store), notifier, config);
        AppState { store, engine }
    }
}

/// Build the service router over the given state
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/v1/accounts", post(handlers::create_account))
        .route("/v1/accounts/{account_id}", get(handlers::get_account))
        .route("/v1/accounts/transfer", put(handlers::transfer))
        .with_state(state)
}
