//! Common test utilities

use axum::body::{to_bytes, Body};
use axum::http::StatusCode;
use axum::{middleware, Router};
use bank_ledger::{api, Ledger};
use tower::util::ServiceExt;

/// Build an app backed by a fresh, empty ledger
pub fn test_app() -> Router {
    api::create_router()
        .layer(middleware::from_fn(api::middleware::logging_middleware))
        .with_state(Ledger::new().into_shared())
}

/// Drive one request through the app, returning status and body text
pub async fn send(app: &Router, request: axum::http::Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.expect("request failed");
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read body");
    let body = String::from_utf8(body.to_vec()).expect("body is not utf-8");
    (status, body)
}
