//! Input extractor shared by all API handlers.

use axum::body::Bytes;
use axum::extract::{FromRequest, Query, Request};
use axum::http::Method;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

use crate::error::AppError;

/// Handler input read from the query string (GET) or the JSON body (POST, PUT, PATCH).
///
/// Every rejection is an [`AppError`], so malformed input produces the same
/// `{ message, details? }` body as any other failure.
///
/// # Body rules
///
/// - missing or blank body: `Request body is required`
/// - not JSON: `Invalid JSON in request body`
/// - JSON `null`: rejected as missing
/// - JSON of the wrong shape: `Request body has an invalid shape`
#[derive(Debug, Clone)]
pub struct ApiInput<T>(pub T);

impl<S, T> FromRequest<S> for ApiInput<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let has_body = matches!(*req.method(), Method::POST | Method::PUT | Method::PATCH);

        if !has_body {
            let Query(input) = Query::<T>::try_from_uri(req.uri()).map_err(|e| {
                AppError::bad_request_with(
                    "Invalid query parameters",
                    json!({ "error": e.body_text() }),
                )
            })?;
            return Ok(Self(input));
        }

        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::bad_request_with(
                "Request body could not be read",
                json!({ "error": e.body_text() }),
            )
        })?;

        parse_body(&bytes).map(Self)
    }
}

fn parse_body<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(AppError::bad_request("Request body is required"));
    }

    let value: Value = serde_json::from_slice(bytes)
        .map_err(|_| AppError::bad_request("Invalid JSON in request body"))?;

    if value.is_null() {
        return Err(AppError::bad_request(
            "Valid request body is required and could not be parsed or was missing.",
        ));
    }

    serde_json::from_value(value).map_err(|e| {
        AppError::bad_request_with(
            "Request body has an invalid shape",
            json!({ "error": e.to_string() }),
        )
    })
}
