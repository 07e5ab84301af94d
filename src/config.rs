//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Example
//!
//! ```bash
//! export LISTEN="0.0.0.0:3000"
//! export MODEL_ID="anthropic.claude-3-haiku-20240307-v1:0"
//! export MODEL_OUTPUT_FORMAT="json"
//! export AWS_PROFILE="brand-boffin"
//! ```
//!
//! AWS credentials are not read here; both upstream clients use the default
//! AWS credential chain.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `BEHIND_PROXY` - Rate-limit by forwarding headers (default: `false`)
//! - `CORS_ALLOW_ORIGIN` - CORS origin (default: `*`)
//! - `REQUEST_TIMEOUT_SECONDS` - Per-request deadline (default: 60)
//! - `REGISTRY_REGION` - Route 53 Domains region (default: `us-east-1`)
//! - `BATCH_DELAY_MS` - Default pause between batch checks (default: 1000)
//! - `BATCH_MAX_DELAY_MS` - Largest accepted `delayMs` (default: 10000)
//! - `BATCH_MAX_DOMAINS` - Largest accepted batch (default: 50)
//! - `PENDING_RETRIES` - Re-checks of a `PENDING` status (default: 0)
//! - `MODEL_ID` - Bedrock model id; brand generation is disabled when unset
//! - `MODEL_REGION` - Bedrock region (default: AWS environment)
//! - `MODEL_TEMPERATURE` - Sampling temperature, 0.0 to 1.0 (default: 0.7)
//! - `MODEL_MAX_TOKENS` - Output token limit (default: 2000)
//! - `MODEL_OUTPUT_FORMAT` - `json` or `pairs` (default: `json`)

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::model::bedrock_model::InferenceSettings;
use crate::state::ApiSettings;
use crate::utils::brand_output::OutputFormat;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub cors_allow_origin: String,
    pub request_timeout_seconds: u64,

    // ── Domain registry ─────────────────────────────────────────────────────
    pub registry_region: String,
    pub batch_delay_ms: u64,
    pub batch_max_delay_ms: u64,
    pub batch_max_domains: usize,
    pub pending_retries: usize,

    // ── Text model ──────────────────────────────────────────────────────────
    /// `None` disables brand generation; the endpoint then answers 500.
    pub model_id: Option<String>,
    pub model_region: Option<String>,
    pub model_temperature: f32,
    pub model_max_tokens: i32,
    pub model_output_format: OutputFormat,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let cors_allow_origin = env::var("CORS_ALLOW_ORIGIN").unwrap_or_else(|_| "*".to_string());

        let registry_region =
            env::var("REGISTRY_REGION").unwrap_or_else(|_| "us-east-1".to_string());

        let model_output_format = match optional_var("MODEL_OUTPUT_FORMAT") {
            Some(raw) => OutputFormat::from_str(&raw)
                .map_err(anyhow::Error::msg)
                .context("Invalid MODEL_OUTPUT_FORMAT")?,
            None => OutputFormat::default(),
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            behind_proxy,
            cors_allow_origin,
            request_timeout_seconds: parse_var("REQUEST_TIMEOUT_SECONDS", 60)?,
            registry_region,
            batch_delay_ms: parse_var("BATCH_DELAY_MS", 1000)?,
            batch_max_delay_ms: parse_var("BATCH_MAX_DELAY_MS", 10_000)?,
            batch_max_domains: parse_var("BATCH_MAX_DOMAINS", 50)?,
            pending_retries: parse_var("PENDING_RETRIES", 0)?,
            model_id: optional_var("MODEL_ID"),
            model_region: optional_var("MODEL_REGION"),
            model_temperature: parse_var("MODEL_TEMPERATURE", 0.7)?,
            model_max_tokens: parse_var("MODEL_MAX_TOKENS", 2000)?,
            model_output_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - a limit is zero or out of range
    /// - a full batch at the default delay cannot finish within the request timeout
    /// - `cors_allow_origin` is not a valid header value
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if HeaderValue::from_str(&self.cors_allow_origin).is_err() {
            anyhow::bail!(
                "CORS_ALLOW_ORIGIN is not a valid header value: '{}'",
                self.cors_allow_origin
            );
        }

        if self.request_timeout_seconds == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_SECONDS must be greater than 0");
        }

        if self.batch_max_domains == 0 || self.batch_max_domains > 1000 {
            anyhow::bail!(
                "BATCH_MAX_DOMAINS must be between 1 and 1000, got {}",
                self.batch_max_domains
            );
        }

        if self.batch_delay_ms > self.batch_max_delay_ms {
            anyhow::bail!(
                "BATCH_DELAY_MS ({}) must not exceed BATCH_MAX_DELAY_MS ({})",
                self.batch_delay_ms,
                self.batch_max_delay_ms
            );
        }

        let default_batch_pauses =
            self.batch_delay_ms.saturating_mul(self.batch_max_domains as u64 - 1);
        if default_batch_pauses >= self.request_timeout_seconds.saturating_mul(1000) {
            anyhow::bail!(
                "A batch of BATCH_MAX_DOMAINS ({}) at BATCH_DELAY_MS ({}) pauses {}ms, \
                 which does not fit REQUEST_TIMEOUT_SECONDS ({})",
                self.batch_max_domains,
                self.batch_delay_ms,
                default_batch_pauses,
                self.request_timeout_seconds
            );
        }

        if self.pending_retries > 10 {
            anyhow::bail!(
                "PENDING_RETRIES must be at most 10, got {}",
                self.pending_retries
            );
        }

        if !(0.0..=1.0).contains(&self.model_temperature) {
            anyhow::bail!(
                "MODEL_TEMPERATURE must be between 0.0 and 1.0, got {}",
                self.model_temperature
            );
        }

        if self.model_max_tokens <= 0 {
            anyhow::bail!(
                "MODEL_MAX_TOKENS must be greater than 0, got {}",
                self.model_max_tokens
            );
        }

        Ok(())
    }

    /// Returns whether brand generation has a model to call.
    pub fn is_model_enabled(&self) -> bool {
        self.model_id.is_some()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }

    pub fn batch_delay(&self) -> Duration {
        Duration::from_millis(self.batch_delay_ms)
    }

    pub fn inference_settings(&self) -> InferenceSettings {
        InferenceSettings {
            temperature: self.model_temperature,
            max_tokens: self.model_max_tokens,
        }
    }

    /// Settings handed to handlers and middleware.
    ///
    /// # Errors
    ///
    /// Returns an error if `cors_allow_origin` is not a valid header value.
    pub fn api_settings(&self) -> Result<ApiSettings> {
        Ok(ApiSettings {
            cors_allow_origin: HeaderValue::from_str(&self.cors_allow_origin)
                .context("Invalid CORS_ALLOW_ORIGIN")?,
            batch_max_domains: self.batch_max_domains,
            batch_max_delay: Duration::from_millis(self.batch_max_delay_ms),
            request_timeout: self.request_timeout(),
            registry_region: self.registry_region.clone(),
            model_id: self.model_id.clone(),
        })
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Behind proxy: {}", self.behind_proxy);
        tracing::info!("  CORS origin: {}", self.cors_allow_origin);
        tracing::info!("  Request timeout: {}s", self.request_timeout_seconds);
        tracing::info!("  Registry region: {}", self.registry_region);
        tracing::info!(
            "  Batch: delay {}ms (max {}ms), up to {} domains, {} PENDING retries",
            self.batch_delay_ms,
            self.batch_max_delay_ms,
            self.batch_max_domains,
            self.pending_retries
        );

        match &self.model_id {
            Some(model_id) => tracing::info!(
                "  Model: {} ({} output, temperature {}, max tokens {})",
                model_id,
                self.model_output_format,
                self.model_temperature,
                self.model_max_tokens
            ),
            None => tracing::info!("  Model: disabled"),
        }
    }
}

/// Reads a variable, treating an empty or blank value as unset.
fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Parses a variable, falling back to `default` when unset.
fn parse_var<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match optional_var(key) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{key} has an invalid value: '{raw}'")),
        None => Ok(default),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
