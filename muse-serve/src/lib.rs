//! muse-serve - HTTP trigger for the publish pipeline
//!
//! Exposes the publish cycle over HTTP for external schedulers:
//! `POST /publish` runs one cycle and answers with the outcome report,
//! `GET /health` is a liveness probe. The router is a library item so
//! tests can drive it without binding a socket.

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use libmusecast::ContentPublisher;
use serde_json::{json, Value};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Shared state for request handlers.
#[derive(Clone)]
pub struct AppState {
    pub publisher: Arc<ContentPublisher>,
    /// When set, `POST /publish` requires `Authorization: Bearer <secret>`.
    pub secret: Option<String>,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/publish", post(publish_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn publish_handler(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(secret) = &state.secret {
        if !authorized(&headers, secret) {
            warn!("Rejected publish trigger with missing or wrong bearer token");
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response();
        }
    }

    let outcome = state.publisher.run().await;
    let report = outcome.report();

    // A cycle that published nothing on purpose is still a successful
    // trigger; only a failed cycle maps to a server error.
    let status = if report.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    (status, Json(report)).into_response()
}

fn authorized(headers: &HeaderMap, secret: &str) -> bool {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(|value| value == format!("Bearer {}", secret))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &'static str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_static(value));
        headers
    }

    #[test]
    fn test_authorized_requires_exact_bearer_value() {
        assert!(authorized(&headers_with("Bearer s3cret"), "s3cret"));
        assert!(!authorized(&headers_with("Bearer wrong"), "s3cret"));
        assert!(!authorized(&headers_with("bearer s3cret"), "s3cret"));
        assert!(!authorized(&headers_with("s3cret"), "s3cret"));
    }

    #[test]
    fn test_authorized_rejects_missing_header() {
        assert!(!authorized(&HeaderMap::new(), "s3cret"));
    }
}
