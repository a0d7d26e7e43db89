//! API Middleware
//!
//! Request logging middleware.

use axum::{
    body::Body,
    http::{HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

/// Extract the caller-supplied correlation id, or mint a fresh one
fn correlation_id(headers: &HeaderMap) -> Uuid {
    headers
        .get("X-Correlation-Id")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::new_v4)
}

// =========================================================================
// Request Logging Middleware
// =========================================================================

/// Request logging middleware
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let correlation_id = correlation_id(request.headers());

    let start = std::time::Instant::now();

    tracing::info!(
        method = %method,
        uri = %uri,
        correlation_id = %correlation_id,
        "Incoming request"
    );

    let response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %status,
        duration_ms = %duration.as_millis(),
        correlation_id = %correlation_id,
        "Request completed"
    );

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_correlation_id_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-Correlation-Id",
            "550e8400-e29b-41d4-a716-446655440000".parse().unwrap(),
        );

        assert_eq!(
            correlation_id(&headers).to_string(),
            "550e8400-e29b-41d4-a716-446655440000"
        );
    }

    #[test]
    fn test_correlation_id_minted_when_missing() {
        let headers = HeaderMap::new();
        let first = correlation_id(&headers);
        let second = correlation_id(&headers);
        assert_ne!(first, second);
    }

    #[test]
    fn test_correlation_id_minted_when_invalid() {
        let mut headers = HeaderMap::new();
        headers.insert("X-Correlation-Id", "not-a-uuid".parse().unwrap());
        // Unparseable header falls back to a fresh id
        assert_ne!(correlation_id(&headers).to_string(), "not-a-uuid");
    }
}
