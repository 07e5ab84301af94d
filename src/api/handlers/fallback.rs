//! Fallback handlers for unmatched methods and paths.

use axum::{Json, http::StatusCode};

use crate::error::{AppError, ErrorBody};

/// Answers any method a route does not allow with a JSON 405.
pub async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}

pub async fn not_found() -> (StatusCode, Json<ErrorBody>) {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            message: "Not Found".to_string(),
            details: None,
        }),
    )
}
