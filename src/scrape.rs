//! Word count and read time recovery from prebuilt pages.
//!
//! The site generator that builds the blog proper renders a stats line into
//! every post page (`742 words • 4 mins`). Rather than re-counting words
//! here and risking a mismatch with what readers see, the card pipeline
//! scrapes those two numbers back out of the built page.
//!
//! For post `name.md` the built page is expected at
//! `<built_root>/name/index.html`. A missing or unreadable page is a soft
//! failure: a warning is logged, `None` comes back, and the pipeline renders
//! the card with zeroed stats.

use log::warn;
use regex::Regex;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

// U+2022 bullet, exactly as the site generator renders the stats line.
static STATS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\s+words\s+•\s+(\d+)\s+mins").unwrap());

/// Stats scraped from a built page. Kept as strings: they are only ever
/// substituted into the template, never used arithmetically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageStats {
    pub words: String,
    pub minutes: String,
}

/// Location of the built page for a post source file.
///
/// `content/posts/sample.md` → `<built_root>/sample/index.html`.
pub fn built_page_path(post: &Path, built_root: &Path) -> PathBuf {
    let stem = post
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    built_root.join(stem).join("index.html")
}

/// Scrape word count and read time for `post` from its built page.
///
/// Returns `None` when the page is missing, unreadable, or contains no
/// recognizable stats line. All three cases log and fall through; none of
/// them stops the pipeline.
pub fn scrape_stats(post: &Path, built_root: &Path) -> Option<PageStats> {
    let page = built_page_path(post, built_root);

    if !page.exists() {
        warn!("built page not found at {}", page.display());
        return None;
    }

    let content = match std::fs::read_to_string(&page) {
        Ok(content) => content,
        Err(e) => {
            warn!("error reading built page {}: {e}", page.display());
            return None;
        }
    };

    STATS.captures(&content).map(|c| PageStats {
        words: c[1].to_string(),
        minutes: c[2].to_string(),
    })
}
