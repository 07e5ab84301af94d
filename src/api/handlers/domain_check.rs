//! Handler for single domain availability checks.

use axum::{Json, extract::State};

use crate::api::dto::domain_check::{CheckDomainRequest, CheckDomainResponse};
use crate::api::extract::ApiInput;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::domain_name::sanitize_domain;

/// Checks whether one domain can be registered.
///
/// # Endpoint
///
/// `GET /api/domains/check?domain=example.com`
/// `POST /api/domains/check` with `{ "domain": "example.com" }`
///
/// `domainName` is accepted in place of `domain`. The name is lowercased and
/// stripped of whitespace and characters outside `[a-z0-9.-]` before the check.
///
/// # Response
///
/// ```json
/// { "result": { "domain": "example.com", "available": false } }
/// ```
///
/// # Errors
///
/// - 400 if the name is missing or empty after sanitizing
/// - 400 if the registry rejects the name or TLD
/// - 500 on any other registry failure
pub async fn check_domain_handler(
    State(state): State<AppState>,
    ApiInput(payload): ApiInput<CheckDomainRequest>,
) -> Result<Json<CheckDomainResponse>, AppError> {
    let domain = payload
        .raw_domain()
        .and_then(sanitize_domain)
        .ok_or_else(|| {
            AppError::bad_request(
                "Domain name is required, must be a non-empty string, and must resolve to a valid format after sanitization.",
            )
        })?;

    let result = state.domain_service.check_domain(&domain).await?;

    Ok(Json(CheckDomainResponse { result }))
}
