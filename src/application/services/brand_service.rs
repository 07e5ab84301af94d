//! Brand name generation service.

use crate::domain::clients::{ModelError, TextModel};
use crate::domain::entities::{BrandNameRequest, BrandNameSuggestion};
use crate::error::AppError;
use crate::utils::brand_output::{OutputFormat, parse_suggestions};
use crate::utils::brand_prompt::{build_prompt, system_prompt};
use std::sync::Arc;
use validator::Validate;

/// Service that turns brand criteria into model prompts and parses the answer.
///
/// The output dialect is fixed per service instance so parsing never depends
/// on what the model happened to return.
pub struct BrandService {
    model: Arc<dyn TextModel>,
    format: OutputFormat,
}

impl BrandService {
    pub fn new(model: Arc<dyn TextModel>, format: OutputFormat) -> Self {
        Self { model, format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Generates brand name suggestions.
    ///
    /// At most the requested count is returned, in the order the model
    /// produced them. Output that cannot be parsed yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank prompt or out-of-range fields.
    /// Returns [`AppError::Configuration`] when no model is configured.
    /// Returns [`AppError::Upstream`] when the model call fails.
    pub async fn generate(
        &self,
        request: &BrandNameRequest,
    ) -> Result<Vec<BrandNameSuggestion>, AppError> {
        if request.prompt.trim().is_empty() {
            return Err(AppError::bad_request(
                "Prompt is required and must be a non-empty string",
            ));
        }
        request.validate()?;

        let count = request.requested_count();
        let prompt = build_prompt(request, count, self.format);
        tracing::debug!(format = %self.format, count, prompt = %prompt, "Constructed brand prompt");

        let output = self
            .model
            .complete(system_prompt(self.format), &prompt)
            .await
            .map_err(|e| match e {
                ModelError::NotConfigured(reason) => {
                    tracing::error!(reason = %reason, "Text model is not configured");
                    AppError::configuration("Brand name generation is not configured.")
                }
                ModelError::Request(reason) => {
                    tracing::error!(reason = %reason, "Text model call failed");
                    AppError::upstream("Failed to generate brand name suggestions.")
                }
            })?;

        match parse_suggestions(self.format, &output) {
            Ok(mut suggestions) => {
                suggestions.truncate(count);
                tracing::info!(count = suggestions.len(), "Returning brand suggestions");
                Ok(suggestions)
            }
            Err(e) => {
                metrics::counter!("brand_parse_failures_total", "format" => self.format.to_string())
                    .increment(1);
                tracing::warn!(error = %e, output = %output, "Could not parse model output");
                Ok(Vec::new())
            }
        }
    }
}
