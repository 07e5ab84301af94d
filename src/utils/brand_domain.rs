//! Derives a `.com` domain candidate from a brand name.

use regex::Regex;
use std::sync::LazyLock;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

const FALLBACK_DOMAIN: &str = "mybrand.com";

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9-]+").unwrap());
static HYPHEN_RUNS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"-+").unwrap());

/// Turns a brand name into a `.com` domain.
///
/// Accents are stripped and `&` becomes `and`. Names that carried accents are
/// joined into one word, other names get hyphens between words. Anything
/// outside `a-z`, `0-9` and `-` is dropped. Falls back to `mybrand.com` when
/// nothing usable is left.
///
/// # Examples
///
/// ```
/// use brand_boffin::utils::brand_domain::domain_from_brand;
///
/// assert_eq!(domain_from_brand("Salt & Pepper"), "salt-and-pepper.com");
/// assert_eq!(domain_from_brand("Café Olé"), "cafeole.com");
/// ```
pub fn domain_from_brand(brand: &str) -> String {
    if brand.trim().is_empty() {
        return FALLBACK_DOMAIN.to_string();
    }

    let lowered = brand.to_lowercase();
    let unaccented: String = lowered.nfd().filter(|c| !is_combining_mark(*c)).collect();
    let had_accents = unaccented != lowered;

    let with_and = unaccented.replace('&', "and");
    let joined = if had_accents {
        WHITESPACE.replace_all(&with_and, "")
    } else {
        WHITESPACE.replace_all(&with_and, "-")
    };

    let cleaned = DISALLOWED.replace_all(&joined, "");
    let collapsed = HYPHEN_RUNS.replace_all(&cleaned, "-");
    let label = collapsed.trim_matches('-');

    if label.is_empty() {
        FALLBACK_DOMAIN.to_string()
    } else {
        format!("{label}.com")
    }
}
