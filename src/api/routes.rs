//! API Routes
//!
//! HTTP endpoint definitions.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::domain::{Event, EventOutcome, LedgerError};
use crate::error::AppResult;
use crate::ledger::SharedLedger;

// =========================================================================
// Request types
// =========================================================================

#[derive(Debug, Deserialize)]
pub struct BalanceQuery {
    pub account_id: String,
}

// =========================================================================
// API Router
// =========================================================================

/// Create the API router
pub fn create_router() -> Router<SharedLedger> {
    Router::new()
        .route("/reset", post(reset))
        .route("/balance", get(get_balance))
        .route("/event", post(apply_event))
}

// =========================================================================
// POST /reset
// =========================================================================

/// Clear all accounts
async fn reset(State(ledger): State<SharedLedger>) -> &'static str {
    ledger.lock().reset();
    tracing::info!("ledger reset");
    "OK"
}

// =========================================================================
// GET /balance
// =========================================================================

/// Get the balance of a single account, as a plain-text integer
async fn get_balance(
    State(ledger): State<SharedLedger>,
    Query(query): Query<BalanceQuery>,
) -> AppResult<String> {
    let balance = ledger
        .lock()
        .balance(&query.account_id)
        .ok_or(LedgerError::AccountNotFound(query.account_id))?;

    Ok(balance.to_string())
}

// =========================================================================
// POST /event
// =========================================================================

/// Apply a deposit, withdraw, or transfer event
async fn apply_event(
    State(ledger): State<SharedLedger>,
    Json(event): Json<Event>,
) -> AppResult<(StatusCode, Json<EventOutcome>)> {
    let event_type = event.event_type();
    let amount = event.amount();

    let outcome = ledger.lock().apply(event)?;

    tracing::info!(event_type, amount, "event applied");
    Ok((StatusCode::CREATED, Json(outcome)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_balance_query_deserialize() {
        let query: BalanceQuery = serde_json::from_str(r#"{"account_id":"1234"}"#).unwrap();
        assert_eq!(query.account_id, "1234");
    }

    #[test]
    fn test_balance_query_requires_account_id() {
        assert!(serde_json::from_str::<BalanceQuery>("{}").is_err());
    }
}
