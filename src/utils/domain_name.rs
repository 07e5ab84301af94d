//! Sanitization of user-supplied domain names.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9.-]").unwrap());

/// Normalizes a domain name typed by a user.
///
/// Lowercases, trims, removes all whitespace, then drops every character
/// outside `a-z`, `0-9`, `.` and `-`. Returns `None` when nothing is left.
///
/// # Examples
///
/// ```
/// use brand_boffin::utils::domain_name::sanitize_domain;
///
/// assert_eq!(sanitize_domain(" My-Test Domain!.com "), Some("my-testdomain.com".to_string()));
/// assert_eq!(sanitize_domain("  !! "), None);
/// ```
pub fn sanitize_domain(raw: &str) -> Option<String> {
    let lowered = raw.trim().to_lowercase();
    let compact = WHITESPACE.replace_all(&lowered, "");
    let cleaned = DISALLOWED.replace_all(&compact, "");

    if cleaned.is_empty() {
        None
    } else {
        Some(cleaned.into_owned())
    }
}
