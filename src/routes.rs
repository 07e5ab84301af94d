//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check (not rate limited)
//! - `/api/*`            - REST API, see [`crate::api::routes`]
//!
//! # Middleware
//!
//! Listed from the outside in:
//!
//! - **Path normalization** - Trailing slash handling
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Preflight short-circuit and headers on every response,
//!   including timeouts and rate-limit rejections
//! - **Timeout** - Per-request deadline answered with a JSON 408
//! - **Rate limiting** - Per-IP token bucket on `/api` (configurable for proxy deployments)

use crate::api;
use crate::api::handlers::{health_handler, method_not_allowed, not_found};
use crate::api::middleware::{cors, rate_limit, timeout, tracing};
use crate::state::AppState;
use axum::Router;
use axum::middleware;
use axum::routing::get;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket address;
///   enable only when the service runs behind a trusted reverse proxy
/// - `request_timeout` - deadline for one request, batch pauses included
pub fn app_router(
    state: AppState,
    behind_proxy: bool,
    request_timeout: Duration,
) -> NormalizePath<Router> {
    let api_router = Router::new()
        .nest("/api", api::routes::api_routes())
        .fallback(not_found);
    let api_router = if behind_proxy {
        api_router.layer(rate_limit::proxy_layer())
    } else {
        api_router.layer(rate_limit::layer())
    };

    let router = Router::new()
        .route(
            "/health",
            get(health_handler).fallback(method_not_allowed),
        )
        .merge(api_router)
        .layer(timeout::layer(request_timeout))
        .layer(middleware::map_response(timeout::error_body))
        .layer(middleware::from_fn_with_state(state.clone(), cors::layer))
        .layer(tracing::layer())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
