//! DTOs for the brand name suggestions endpoint.
//!
//! The request body is [`crate::domain::entities::BrandNameRequest`] itself.

use crate::domain::entities::BrandNameSuggestion;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BrandSuggestionsResponse {
    pub suggestions: Vec<BrandNameSuggestion>,
}
