//! HTTP handlers for the account endpoints
//!
//! Thin adapters: validate the request shape, delegate to the store or the
//! engine, and map the outcome to a status code. All domain decisions live
//! in the core.

use crate::api::types::{ApiError, CreateAccountBody, TransferBody};
use crate::api::AppState;
use crate::types::{Account, TransferRequest};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;

/// Create an account
///
/// `POST /v1/accounts` → 201 Created; 400 on duplicate id or negative
/// opening balance.
pub async fn create_account(
    State(state): State<Arc<AppState>>,
    Json(body): Json<CreateAccountBody>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(account_id = %body.account_id, balance = %body.balance, "creating account");

    let account = Account::new(body.account_id, body.balance)?;
    state.store.create(account)?;
    Ok(StatusCode::CREATED)
}

/// Fetch an account snapshot
///
/// `GET /v1/accounts/{account_id}` → 200 with the account JSON; 404 when
/// absent. The snapshot is taken under the account's lock, so it can never
/// show a half-applied transfer.
pub async fn get_account(
    State(state): State<Arc<AppState>>,
    Path(account_id): Path<String>,
) -> Result<Json<Account>, ApiError> {
    tracing::info!(%account_id, "retrieving account");

    let handle = state.store.get(&account_id)?;
    Ok(Json(handle.snapshot().await))
}

/// Transfer funds between two accounts
///
/// `PUT /v1/accounts/transfer` → 202 Accepted; 400 non-positive amount;
/// 404 unknown account; 403 insufficient balance; 500 lock timeout.
pub async fn transfer(
    State(state): State<Arc<AppState>>,
    Json(body): Json<TransferBody>,
) -> Result<StatusCode, ApiError> {
    tracing::info!(
        from = %body.from_account_id,
        to = %body.to_account_id,
        amount = %body.amount,
        "transferring funds"
    );

    let request = TransferRequest::new(body.from_account_id, body.to_account_id, body.amount)?;
    state.engine.transfer(&request).await?;
    Ok(StatusCode::ACCEPTED)
}
