//! Frontmatter parsing for markdown posts.
//!
//! Posts carry their metadata in a leading block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: "Why I Rewrote My Build in Make"
//! date: 2024-03-04T00:00:00Z
//! tags: [make, tooling]
//! ---
//!
//! Body text...
//! ```
//!
//! Parsing is deliberately loose. Each key is extracted independently with a
//! line-anchored pattern, so a partial block (say, title only) is perfectly
//! valid. A document without a block at all yields an empty [`PostMeta`] —
//! the pipeline treats "no title" as a normal skip, not an error.
//!
//! Multi-line or nested YAML values are out of contract: keys are matched one
//! line at a time and anything this module doesn't recognize is ignored.

use regex::Regex;
use std::sync::LazyLock;

static BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\A---[ \t]*\r?\n(.*?)\r?\n---").unwrap());
static TITLE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^title:[ \t]*["']?(.*?)["']?[ \t\r]*$"#).unwrap());
static DATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?m)^date:[ \t]*["']?(.*?)["']?[ \t\r]*$"#).unwrap());
static TAGS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?m)^tags:[ \t]*\[(.*?)\]").unwrap());

/// Post metadata extracted from the frontmatter block.
///
/// All fields are optional. `title` is the gate for the whole pipeline:
/// a post without one never produces a card. `date` stays a raw string here;
/// formatting happens in [`fields::format_date`](crate::fields::format_date).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostMeta {
    /// Title with surrounding quotes stripped. `None` when absent or empty.
    pub title: Option<String>,
    /// Raw date string as written in the frontmatter.
    pub date: Option<String>,
    /// Tags from `tags: [a, b]`, trimmed, empties dropped, order preserved.
    pub tags: Vec<String>,
}

/// Parse the frontmatter block at the top of `content`.
///
/// Returns an empty [`PostMeta`] when there is no `---`-delimited block.
pub fn parse(content: &str) -> PostMeta {
    let Some(block) = BLOCK.captures(content) else {
        return PostMeta::default();
    };
    let block = block.get(1).map_or("", |m| m.as_str());

    let title = TITLE
        .captures(block)
        .map(|c| strip_quotes(&c[1]))
        .filter(|t| !t.is_empty());
    let date = DATE
        .captures(block)
        .map(|c| strip_quotes(&c[1]))
        .filter(|d| !d.is_empty());
    let tags = TAGS
        .captures(block)
        .map(|c| parse_tag_list(&c[1]))
        .unwrap_or_default();

    PostMeta { title, date, tags }
}

/// Split the contents of `tags: [...]` on commas, trimming whitespace and
/// quote characters from each element and dropping empties.
fn parse_tag_list(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(strip_quotes)
        .filter(|t| !t.is_empty())
        .collect()
}

fn strip_quotes(value: &str) -> String {
    value.trim().trim_matches(['"', '\'']).to_string()
}
