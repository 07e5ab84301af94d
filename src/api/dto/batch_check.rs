//! DTOs for the batch domain check endpoint.

use crate::domain::entities::DomainCheckResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Domains to check in order, with an optional pause between calls.
///
/// `domains` stays untyped so that a non-string entry is reported with the
/// batch-specific message rather than as a shape error.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchCheckRequest {
    pub domains: Option<Vec<Value>>,
    pub delay_ms: Option<u64>,
}

impl BatchCheckRequest {
    /// Trimmed domain entries, or `None` if any entry is not a non-blank string.
    pub fn trimmed_domains(&self) -> Option<Vec<String>> {
        self.domains
            .iter()
            .flatten()
            .map(|v| {
                v.as_str()
                    .map(str::trim)
                    .filter(|d| !d.is_empty())
                    .map(str::to_string)
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct BatchCheckResponse {
    pub results: Vec<DomainCheckResult>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(domains: Value) -> BatchCheckRequest {
        serde_json::from_value(json!({ "domains": domains })).unwrap()
    }

    #[test]
    fn test_trimmed_domains() {
        let request = request(json!([" a.com ", "b.io"]));
        assert_eq!(
            request.trimmed_domains(),
            Some(vec!["a.com".to_string(), "b.io".to_string()])
        );
    }

    #[test]
    fn test_blank_or_non_string_entry_rejected() {
        assert_eq!(request(json!(["a.com", "  "])).trimmed_domains(), None);
        assert_eq!(request(json!(["a.com", 7])).trimmed_domains(), None);
    }

    #[test]
    fn test_delay_ms_is_camel_case() {
        let request: BatchCheckRequest =
            serde_json::from_value(json!({ "domains": ["a.com"], "delayMs": 0 })).unwrap();
        assert_eq!(request.delay_ms, Some(0));
    }
}
