//! Request/response shapes and status mapping for the HTTP boundary

use crate::types::LedgerError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body of `POST /v1/accounts`
#[derive(Debug, Deserialize)]
pub struct CreateAccountBody {
    #[serde(rename = "accountId")]
    pub account_id: String,

    /// Opening balance; omitted means zero
    #[serde(default)]
    pub balance: Decimal,
}

/// Body of `PUT /v1/accounts/transfer`
#[derive(Debug, Deserialize)]
pub struct TransferBody {
    #[serde(rename = "fromAccountId")]
    pub from_account_id: String,

    #[serde(rename = "toAccountId")]
    pub to_account_id: String,

    #[serde(rename = "amountToTransfer")]
    pub amount: Decimal,
}

/// JSON error payload returned for every failed request
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Boundary wrapper mapping [`LedgerError`] to HTTP status codes
///
/// Validation problems are the client's fault (400), unknown accounts are
/// 404, refused transfers are 403, and a lock timeout is a server-side
/// failure (500) rather than a client validation error.
#[derive(Debug)]
pub struct ApiError(pub LedgerError);

impl From<LedgerError> for ApiError {
    fn from(error: LedgerError) -> Self {
        ApiError(error)
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match &self.0 {
            LedgerError::DuplicateAccount { .. }
            | LedgerError::NonPositiveAmount { .. }
            | LedgerError::NegativeBalance { .. } => StatusCode::BAD_REQUEST,
            LedgerError::AccountNotFound { .. } => StatusCode::NOT_FOUND,
            LedgerError::InsufficientBalance { .. } => StatusCode::FORBIDDEN,
            LedgerError::LockTimeout { .. } | LedgerError::ArithmeticOverflow { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        } else {
            tracing::warn!(error = %self.0, "request rejected");
        }
        (
            status,
            Json(ErrorBody {
                error: self.0.to_string(),
            }),
        )
            .into_response()
    }
}
