//! DTOs for the domain suggestions endpoint.

use crate::domain::entities::DomainSuggestion;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SUGGESTION_COUNT: u32 = 10;
pub const MAX_SUGGESTION_COUNT: u32 = 50;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionsRequest {
    pub domain_name: Option<String>,
    pub only_available: Option<bool>,
    pub suggestion_count: Option<i64>,
}

impl SuggestionsRequest {
    pub fn only_available(&self) -> bool {
        self.only_available.unwrap_or(true)
    }

    /// Requested count clamped to `1..=MAX_SUGGESTION_COUNT`.
    pub fn suggestion_count(&self) -> u32 {
        self.suggestion_count
            .map(|n| n.clamp(1, i64::from(MAX_SUGGESTION_COUNT)) as u32)
            .unwrap_or(DEFAULT_SUGGESTION_COUNT)
    }
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<DomainSuggestion>,
}
