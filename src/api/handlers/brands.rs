//! Handler for brand name generation.

use axum::{Json, extract::State};

use crate::api::dto::brands::BrandSuggestionsResponse;
use crate::api::extract::ApiInput;
use crate::domain::entities::BrandNameRequest;
use crate::error::AppError;
use crate::state::AppState;

/// Generates brand name ideas with taglines.
///
/// # Endpoint
///
/// `POST /api/brands/suggestions`
///
/// # Request Body
///
/// ```json
/// {
///   "prompt": "eco-friendly travel gear",
///   "industry": "outdoor",
///   "style": "playful",
///   "keywords": ["trail", "green"],
///   "length": 8,
///   "count": 3
/// }
/// ```
///
/// # Errors
///
/// - 400 for a blank prompt or out-of-range `length`/`count`
/// - 500 when the model is not configured or the call fails
///
/// Model output that cannot be parsed returns 200 with an empty list.
pub async fn brand_suggestions_handler(
    State(state): State<AppState>,
    ApiInput(request): ApiInput<BrandNameRequest>,
) -> Result<Json<BrandSuggestionsResponse>, AppError> {
    let suggestions = state.brand_service.generate(&request).await?;

    Ok(Json(BrandSuggestionsResponse { suggestions }))
}
