//! API route configuration.
//!
//! Every route answers methods outside its allow-list with a JSON 405, and the
//! CORS middleware wraps them all so that preflight requests and errors carry
//! CORS headers too.

use crate::api::handlers::{
    batch_check_handler, brand_suggestions_handler, check_domain_handler,
    domain_suggestions_handler, method_not_allowed, not_found, tld_prices_handler,
};
use crate::api::middleware::cors;
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// API routes without state, mounted under `/api`.
///
/// # Endpoints
///
/// - `GET|POST /domains/check`        - Check one domain
/// - `POST     /domains/check-batch`  - Check several domains sequentially
/// - `GET|POST /domains/suggestions`  - Registry domain suggestions
/// - `GET|POST /tlds/prices`          - TLD price listing
/// - `POST     /brands/suggestions`   - Generated brand names
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/domains/check",
            get(check_domain_handler)
                .post(check_domain_handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/domains/check-batch",
            post(batch_check_handler).fallback(method_not_allowed),
        )
        .route(
            "/domains/suggestions",
            get(domain_suggestions_handler)
                .post(domain_suggestions_handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/tlds/prices",
            get(tld_prices_handler)
                .post(tld_prices_handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/brands/suggestions",
            post(brand_suggestions_handler).fallback(method_not_allowed),
        )
}

/// The API mounted under `/api` with CORS applied and state attached.
///
/// Carries no rate limiting, deadline or request tracing, which makes it
/// suitable for in-process handler tests. [`crate::routes::app_router`] builds
/// the served stack from [`api_routes`] with CORS outermost.
pub fn router(state: AppState) -> Router {
    Router::new()
        .nest("/api", api_routes())
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state.clone(), cors::layer))
        .with_state(state)
}
