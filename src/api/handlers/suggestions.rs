//! Handler for domain name suggestions.

use axum::{Json, extract::State};

use crate::api::dto::suggestions::{SuggestionsRequest, SuggestionsResponse};
use crate::api::extract::ApiInput;
use crate::error::AppError;
use crate::state::AppState;

/// Returns registry suggestions related to a domain name.
///
/// # Endpoint
///
/// `GET /api/domains/suggestions?domainName=coffee.com&onlyAvailable=true&suggestionCount=10`
/// `POST /api/domains/suggestions` with the same fields as JSON
///
/// `onlyAvailable` defaults to `true`; `suggestionCount` defaults to 10 and
/// is clamped to 1..=50. Registry failures yield an empty list, not an error.
pub async fn domain_suggestions_handler(
    State(state): State<AppState>,
    ApiInput(payload): ApiInput<SuggestionsRequest>,
) -> Result<Json<SuggestionsResponse>, AppError> {
    let domain_name = payload
        .domain_name
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .ok_or_else(|| AppError::bad_request("domainName is required and must be a non-empty string."))?;

    let suggestions = state
        .domain_service
        .get_domain_suggestions(
            domain_name,
            payload.only_available(),
            payload.suggestion_count(),
        )
        .await;

    Ok(Json(SuggestionsResponse { suggestions }))
}
