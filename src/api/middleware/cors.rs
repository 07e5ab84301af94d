//! CORS middleware.
//!
//! Every response, including errors and rejections, carries the CORS headers.
//! Preflight `OPTIONS` requests are answered here with `204 No Content` and
//! never reach a handler.

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::state::AppState;

pub const ALLOW_METHODS: &str = "POST, GET, OPTIONS, PUT, DELETE, PATCH";
pub const ALLOW_HEADERS: &str =
    "Content-Type, X-Amz-Date, Authorization, X-Api-Key, X-Amz-Security-Token, Accept";

/// Short-circuits preflight requests and decorates all other responses.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .route("/domains/check", get(check_domain_handler))
///     .layer(middleware::from_fn_with_state(state.clone(), cors::layer));
/// ```
pub async fn layer(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let mut response = if request.method() == Method::OPTIONS {
        tracing::debug!(path = %request.uri().path(), "Answering CORS preflight");
        StatusCode::NO_CONTENT.into_response()
    } else {
        next.run(request).await
    };

    apply_headers(
        response.headers_mut(),
        state.settings.cors_allow_origin.clone(),
    );
    response
}

fn apply_headers(headers: &mut HeaderMap, origin: HeaderValue) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static(ALLOW_METHODS),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static(ALLOW_HEADERS),
    );
}
