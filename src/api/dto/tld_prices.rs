//! DTOs for the TLD price listing endpoint.

use crate::domain::entities::TldPrice;
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
pub struct TldPricesRequest {
    /// Restricts the listing to one TLD, with or without the leading dot.
    pub tld: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TldPricesResponse {
    pub prices: Vec<TldPrice>,
}
