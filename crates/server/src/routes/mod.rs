//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /             - Service banner (liveness for the Slack app host)
//! GET  /health       - Health check
//!
//! # Slack webhooks (signature verified)
//! POST /iad          - `/iad` slash command, opens the provisioning dialog
//! POST /interactive  - Provisioning result, posted to the result channel
//! ```

pub mod slack;

use axum::{Router, middleware, routing::get};
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use crate::middleware::security_headers_middleware;
use crate::state::AppState;

/// Banner served at `/`.
pub const BANNER: &str = "The Infra as Design app is running";

/// All application routes, without state.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .merge(slack::router())
}

/// The complete application: routes, tracing and security headers.
pub fn app(state: AppState) -> Router {
    routes()
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}

/// Service banner.
async fn index() -> &'static str {
    BANNER
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check Slack.
async fn health() -> &'static str {
    "ok"
}
