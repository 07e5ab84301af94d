//! Handler for TLD price listing.

use axum::{Json, extract::State};

use crate::api::dto::tld_prices::{TldPricesRequest, TldPricesResponse};
use crate::api::extract::ApiInput;
use crate::error::AppError;
use crate::state::AppState;

/// Lists registration, renewal and transfer prices per TLD, sorted by TLD.
///
/// # Endpoint
///
/// `GET /api/tlds/prices?tld=com`
/// `POST /api/tlds/prices` with `{ "tld": "com" }` or `{}`
///
/// # Errors
///
/// Returns 500 if any page of the registry listing fails to load.
pub async fn tld_prices_handler(
    State(state): State<AppState>,
    ApiInput(payload): ApiInput<TldPricesRequest>,
) -> Result<Json<TldPricesResponse>, AppError> {
    let prices = state
        .domain_service
        .get_tld_prices(payload.tld.as_deref())
        .await?;

    Ok(Json(TldPricesResponse { prices }))
}
