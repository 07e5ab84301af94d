//! Handler for batch domain availability checks.

use axum::{Json, extract::State};
use serde_json::json;
use std::time::Duration;

use crate::api::dto::batch_check::{BatchCheckRequest, BatchCheckResponse};
use crate::api::extract::ApiInput;
use crate::error::AppError;
use crate::state::AppState;

/// Checks several domains sequentially.
///
/// # Endpoint
///
/// `POST /api/domains/check-batch`
///
/// # Request Body
///
/// ```json
/// { "domains": ["a.com", "b.io"], "delayMs": 500 }
/// ```
///
/// Domains are checked one at a time, pausing `delayMs` (default from
/// configuration) between registry calls. A failure for one domain is reported
/// in its `error` field; the others are still checked.
///
/// # Response
///
/// ```json
/// {
///   "results": [
///     { "domain": "a.com", "available": true },
///     { "domain": "b.io", "available": false, "error": "Registry is unreachable" }
///   ]
/// }
/// ```
///
/// # Errors
///
/// Returns 400 for an empty list, a blank or non-string entry, too many
/// domains, a `delayMs` above the configured maximum, or a batch whose pauses
/// alone would outlast the request timeout. No registry call is made in these
/// cases.
pub async fn batch_check_handler(
    State(state): State<AppState>,
    ApiInput(payload): ApiInput<BatchCheckRequest>,
) -> Result<Json<BatchCheckResponse>, AppError> {
    if payload.domains.as_ref().is_none_or(Vec::is_empty) {
        return Err(AppError::bad_request(
            "Domains array is required and must not be empty",
        ));
    }

    let domains = payload.trimmed_domains().ok_or_else(|| {
        AppError::bad_request("All domains in the array must be non-empty strings")
    })?;

    let settings = &state.settings;
    if domains.len() > settings.batch_max_domains {
        return Err(AppError::bad_request_with(
            format!(
                "At most {} domains can be checked in one request",
                settings.batch_max_domains
            ),
            json!({ "max": settings.batch_max_domains, "received": domains.len() }),
        ));
    }

    let delay = match payload.delay_ms.map(Duration::from_millis) {
        Some(delay) if delay > settings.batch_max_delay => {
            let max_ms = settings.batch_max_delay.as_millis() as u64;
            return Err(AppError::bad_request_with(
                format!("delayMs must not exceed {max_ms}"),
                json!({ "max": max_ms }),
            ));
        }
        Some(delay) => delay,
        None => state.domain_service.default_delay(),
    };

    let pauses = delay.saturating_mul(u32::try_from(domains.len() - 1).unwrap_or(u32::MAX));
    if pauses >= settings.request_timeout {
        return Err(AppError::bad_request_with(
            "Batch cannot finish within the request timeout; send fewer domains or a shorter delayMs",
            json!({
                "pausesMs": pauses.as_millis() as u64,
                "timeoutMs": settings.request_timeout.as_millis() as u64,
            }),
        ));
    }

    let results = state.domain_service.check_domains(&domains, delay).await;

    Ok(Json(BatchCheckResponse { results }))
}
