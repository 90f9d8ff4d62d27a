//! Field formatting for the card template.
//!
//! Three small transformations sit between raw frontmatter values and the
//! template: date prettification, tag markup generation, and title
//! sanitization for the output filename. All three are pure string functions.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// Render a raw frontmatter date as `"Mar 4, 2024"`.
///
/// Accepts the ISO-8601-like forms blog frontmatter actually contains:
/// a full RFC 3339 timestamp (trailing `Z` included), a naive datetime,
/// or a bare `YYYY-MM-DD` date. Anything that fails to parse is returned
/// unchanged — a card with an oddly formatted date beats no card at all.
/// Empty input yields an empty string.
pub fn format_date(raw: &str) -> String {
    const PRETTY: &str = "%b %-d, %Y";

    if raw.is_empty() {
        return String::new();
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(PRETTY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.format(PRETTY).to_string();
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format(PRETTY).to_string();
    }
    raw.to_string()
}

/// Generate the markup fragment for the `{tags}` placeholder.
///
/// One line per tag, original order, newline-joined:
///
/// ```text
///     <span class="tag">#go</span>
///     <span class="tag">#rust</span>
/// ```
///
/// An empty list yields an empty string.
pub fn tags_html(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("    <span class=\"tag\">#{tag}</span>"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sanitize a post title for use as the card's base filename.
///
/// Strips every character that is not an ASCII letter, digit, or space,
/// then collapses each whitespace run into a single hyphen:
/// `"Hello, World! 2024"` becomes `"Hello-World-2024"`.
///
/// The result is used verbatim as `<output_dir>/<name>.png`. Two titles
/// that sanitize identically overwrite each other; last writer wins.
pub fn sanitize_filename(title: &str) -> String {
    let kept: String = title
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == ' ')
        .collect();
    WHITESPACE_RUN.replace_all(&kept, "-").into_owned()
}
