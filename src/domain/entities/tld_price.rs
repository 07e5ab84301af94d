//! Pricing of a top-level domain.

use serde::Serialize;
use serde_with::skip_serializing_none;

/// Prices of one TLD.
///
/// Every tier is optional since not every TLD publishes every tier. `currency`
/// is taken from the first tier that reports one.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TldPrice {
    pub tld: String,
    pub registration_price: Option<f64>,
    pub renewal_price: Option<f64>,
    pub transfer_price: Option<f64>,
    pub currency: Option<String>,
}

impl TldPrice {
    pub fn new(tld: impl Into<String>) -> Self {
        Self {
            tld: tld.into(),
            ..Default::default()
        }
    }

    /// Case-insensitive TLD comparison that ignores a leading dot.
    pub fn matches_tld(&self, tld: &str) -> bool {
        self.tld
            .trim_start_matches('.')
            .eq_ignore_ascii_case(tld.trim().trim_start_matches('.'))
    }
}

/// One page of the registry's price listing.
#[derive(Debug, Clone, Default)]
pub struct PricePage {
    pub prices: Vec<TldPrice>,
    /// Marker for the next page, `None` on the last page.
    pub next_marker: Option<String>,
}
