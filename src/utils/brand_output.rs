//! Parsing of generative model output into [`BrandNameSuggestion`]s.
//!
//! Two dialects are supported and the caller picks one through configuration:
//!
//! - [`OutputFormat::Pairs`] - blank-line separated blocks of
//!   `Brand Name: ...` / `Tagline: ...` lines
//! - [`OutputFormat::Json`] - a single JSON array of
//!   `{ "name", "tagline", "suggestedDomains" }` objects
//!
//! Entries that do not have the expected shape are dropped, never defaulted.

use crate::domain::entities::BrandNameSuggestion;
use regex::Regex;
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

const NAME_PREFIX: &str = "Brand Name:";
const TAGLINE_PREFIX: &str = "Tagline:";

static BLANK_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s*\n").unwrap());

/// Output dialect requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Strict JSON array with domain ideas.
    #[default]
    Json,
    /// Delimited `Brand Name:` / `Tagline:` pairs.
    Pairs,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "pairs" => Ok(Self::Pairs),
            other => Err(format!("unknown output format '{other}', expected 'json' or 'pairs'")),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Json => f.write_str("json"),
            Self::Pairs => f.write_str("pairs"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("model output is empty")]
    EmptyOutput,

    #[error("model output is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("model output is not a JSON array")]
    NotAnArray,
}

/// Parses `text` using the given dialect.
///
/// # Errors
///
/// Returns [`ParseError`] when the output is empty or, for
/// [`OutputFormat::Json`], not a JSON array.
pub fn parse_suggestions(
    format: OutputFormat,
    text: &str,
) -> Result<Vec<BrandNameSuggestion>, ParseError> {
    match format {
        OutputFormat::Json => parse_json_array(text),
        OutputFormat::Pairs => parse_delimited_pairs(text),
    }
}

/// Parses blank-line separated `Brand Name:` / `Tagline:` blocks.
///
/// A block is kept only when both lines are present and non-empty after the
/// prefix. Order of appearance is preserved.
///
/// # Errors
///
/// Returns [`ParseError::EmptyOutput`] for blank input.
pub fn parse_delimited_pairs(text: &str) -> Result<Vec<BrandNameSuggestion>, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyOutput);
    }

    let suggestions = BLANK_LINE
        .split(text)
        .filter_map(|block| {
            let lines: Vec<&str> = block
                .lines()
                .map(str::trim)
                .filter(|l| !l.is_empty())
                .collect();

            let name = field_value(&lines, NAME_PREFIX)?;
            let tagline = field_value(&lines, TAGLINE_PREFIX)?;

            Some(BrandNameSuggestion {
                name,
                tagline,
                suggested_domains: None,
            })
        })
        .collect();

    Ok(suggestions)
}

/// Value of the first line starting with `prefix`, `None` if missing or blank.
fn field_value(lines: &[&str], prefix: &str) -> Option<String> {
    lines
        .iter()
        .find_map(|l| l.strip_prefix(prefix))
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Parses the whole output as a JSON array of suggestion objects.
///
/// Elements need a string `name`, a string `tagline` and a
/// `suggestedDomains` array made only of strings. Other elements are dropped.
///
/// # Errors
///
/// Returns [`ParseError::InvalidJson`] or [`ParseError::NotAnArray`] when the
/// output as a whole is unusable.
pub fn parse_json_array(text: &str) -> Result<Vec<BrandNameSuggestion>, ParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseError::EmptyOutput);
    }

    let value: Value =
        serde_json::from_str(text).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(ParseError::NotAnArray);
    };

    Ok(items.iter().filter_map(json_suggestion).collect())
}

fn json_suggestion(item: &Value) -> Option<BrandNameSuggestion> {
    let name = item.get("name")?.as_str()?;
    let tagline = item.get("tagline")?.as_str()?;
    let domains = item
        .get("suggestedDomains")?
        .as_array()?
        .iter()
        .map(|d| d.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()?;

    Some(BrandNameSuggestion {
        name: name.to_string(),
        tagline: tagline.to_string(),
        suggested_domains: Some(domains),
    })
}
