//! Error handling module
//!
//! Application error type and HTTP response conversion.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::LedgerError;

/// Application-wide Result type
pub type AppResult<T> = Result<T, AppError>;

/// Application error types
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Ledger errors
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Balance lookups and events share the same not-found response:
            // a literal `0` body.
            AppError::Ledger(LedgerError::AccountNotFound(id)) => {
                tracing::debug!(account_id = %id, "account not found");
                (StatusCode::NOT_FOUND, "0").into_response()
            }
        }
    }
}
