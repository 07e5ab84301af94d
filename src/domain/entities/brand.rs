//! Brand name generation request and result.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Number of suggestions generated when the request does not specify one.
pub const DEFAULT_BRAND_COUNT: usize = 6;

/// A generated brand name with its tagline.
///
/// `suggested_domains` is only present when the model was asked for
/// structured output that includes domain ideas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandNameSuggestion {
    pub name: String,
    pub tagline: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_domains: Option<Vec<String>>,
}

/// Criteria for generating brand names.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BrandNameRequest {
    /// Free-text description of the brand. Required, checked by the service.
    #[serde(default)]
    pub prompt: String,

    pub industry: Option<String>,

    pub style: Option<String>,

    #[serde(default)]
    pub keywords: Vec<String>,

    /// Approximate brand name length in characters.
    #[validate(range(min = 1, max = 100))]
    pub length: Option<u32>,

    #[validate(range(min = 1, max = 20))]
    pub count: Option<usize>,
}

impl BrandNameRequest {
    pub fn requested_count(&self) -> usize {
        self.count.unwrap_or(DEFAULT_BRAND_COUNT)
    }
}
