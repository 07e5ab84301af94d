//! Per-request deadline.
//!
//! `tower-http` answers an expired request with a bare `408`; [`error_body`]
//! gives it the same JSON shape as every other error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;

use crate::error::AppError;

/// Cancels the inner service once `duration` has elapsed.
///
/// # Example
///
/// ```rust,ignore
/// let app = router
///     .layer(timeout::layer(Duration::from_secs(60)))
///     .layer(middleware::map_response(timeout::error_body));
/// ```
pub fn layer(duration: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, duration)
}

/// Replaces the empty timeout response with an [`AppError::Timeout`] body.
pub async fn error_body(response: Response) -> Response {
    if response.status() == StatusCode::REQUEST_TIMEOUT {
        AppError::timeout().into_response()
    } else {
        response
    }
}
