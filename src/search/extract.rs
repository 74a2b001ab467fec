//! Image URL extraction from the results page markup.
//!
//! The results page embeds a JSON-like fragment per image with
//! HTML-entity-escaped quotes; the full-resolution URL lives in its
//! `murl` field. This is the single place that knows about the upstream
//! markup, so any change there only requires touching this function.

use std::sync::OnceLock;

use regex::Regex;

/// Compiled once; the function stays pure, it just skips per-page
/// recompilation.
static MURL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Extract every embedded full-resolution image URL from a results page,
/// in document order.
///
/// Pure function: the same page text always yields the same sequence.
/// Zero matches is a valid outcome (an empty page is not an error).
pub fn image_urls(page: &str) -> Vec<String> {
    let pattern =
        MURL_PATTERN.get_or_init(|| Regex::new(r"murl&quot;:&quot;(.*?)&quot;").unwrap());

    pattern
        .captures_iter(page)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}
