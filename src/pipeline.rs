//! Post discovery and the per-post card build loop.
//!
//! The pipeline is a straight line, run once per post:
//!
//! ```text
//! frontmatter → fields → scrape → template::fill → rasterize → move PNG
//! ```
//!
//! Posts are processed strictly one at a time. That is not an accident: the
//! temp HTML filename and the browser's screenshot filename are both fixed
//! within the work dir, so the work dir is a single-flight domain. Batch
//! semantics are best-effort — no per-post failure ever aborts the run.
//! A post without a title is skipped, a missing built page zeroes the stats,
//! and a browser failure abandons just that one card. Every outcome lands in
//! the returned report.

use crate::config::CardConfig;
use crate::rasterize::Rasterizer;
use crate::scrape::PageStats;
use crate::template::CardContext;
use crate::{fields, frontmatter, scrape, template};
use log::{debug, error, info};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Hugo-style section index files never get a card.
pub const INDEX_FILE: &str = "_index.md";

/// Fixed name of the filled template inside the work dir.
pub const TEMP_HTML: &str = "og-card.html";

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("error walking posts directory: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("card template not found at {0}")]
    TemplateMissing(PathBuf),
}

/// What happened to one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Card written to `output`.
    Rendered { output: PathBuf },
    /// `check` only: post has a title and would produce a card.
    WouldRender,
    /// No title in the frontmatter — normal skip, not an error.
    SkippedNoTitle,
    /// Rendering failed; the batch continued without this card.
    Failed { reason: String },
}

/// Per-post record returned by [`build`] and [`check`].
#[derive(Debug, Clone, Serialize)]
pub struct PostReport {
    /// Source markdown file.
    pub source: PathBuf,
    /// Title from the frontmatter, when present.
    pub title: Option<String>,
    /// Stats scraped from the built page, when found.
    pub stats: Option<PageStats>,
    pub outcome: Outcome,
}

/// Discover post files under `root`: every `.md` recursively, except
/// `_index.md`. Deterministic order (sorted by file name per directory).
pub fn discover_posts(root: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    let mut posts = Vec::new();
    for entry in walkdir::WalkDir::new(root).sort_by_file_name() {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let is_markdown = entry
            .path()
            .extension()
            .map(|e| e.eq_ignore_ascii_case("md"))
            .unwrap_or(false);
        if !is_markdown || entry.file_name() == INDEX_FILE {
            continue;
        }
        posts.push(entry.path().to_path_buf());
    }
    Ok(posts)
}

/// Run the full pipeline: render one card per titled post.
///
/// Fails fast only on setup problems (missing template, unreadable posts
/// directory). Once the loop starts, every per-post failure is recorded in
/// its report and the batch continues.
pub fn build(
    config: &CardConfig,
    work_dir: &Path,
    rasterizer: &dyn Rasterizer,
) -> Result<Vec<PostReport>, PipelineError> {
    let template = fs::read_to_string(&config.template)
        .map_err(|_| PipelineError::TemplateMissing(config.template.clone()))?;
    fs::create_dir_all(work_dir)?;

    let posts = discover_posts(&config.posts_dir)?;
    let mut reports = Vec::with_capacity(posts.len());
    for post in posts {
        reports.push(build_post(&post, config, &template, work_dir, rasterizer));
    }
    Ok(reports)
}

/// Scan posts and report what a build would do, without rendering anything.
pub fn check(config: &CardConfig) -> Result<Vec<PostReport>, PipelineError> {
    let posts = discover_posts(&config.posts_dir)?;
    let mut reports = Vec::with_capacity(posts.len());
    for post in posts {
        let report = match read_meta(&post) {
            Ok(meta) => match meta.title {
                Some(title) => PostReport {
                    stats: scrape::scrape_stats(&post, &config.built_root),
                    source: post,
                    title: Some(title),
                    outcome: Outcome::WouldRender,
                },
                None => skipped(post),
            },
            Err(reason) => failed(post, None, reason),
        };
        reports.push(report);
    }
    Ok(reports)
}

fn read_meta(post: &Path) -> Result<frontmatter::PostMeta, String> {
    fs::read_to_string(post)
        .map(|content| frontmatter::parse(&content))
        .map_err(|e| format!("error reading post: {e}"))
}

/// Build one card. Infallible by design: every failure mode collapses into
/// the report's outcome.
fn build_post(
    post: &Path,
    config: &CardConfig,
    template: &str,
    work_dir: &Path,
    rasterizer: &dyn Rasterizer,
) -> PostReport {
    info!("processing {}", post.display());

    let meta = match read_meta(post) {
        Ok(meta) => meta,
        Err(reason) => return failed(post.to_path_buf(), None, reason),
    };
    let Some(title) = meta.title else {
        debug!("skipping {}: no title", post.display());
        return skipped(post.to_path_buf());
    };

    let stats = scrape::scrape_stats(post, &config.built_root);
    let (word_count, read_time) = match &stats {
        Some(s) => (s.words.clone(), s.minutes.clone()),
        None => ("0".to_string(), "0".to_string()),
    };

    let context = CardContext {
        title: title.clone(),
        date: fields::format_date(meta.date.as_deref().unwrap_or_default()),
        tags_html: fields::tags_html(&meta.tags),
        word_count,
        read_time,
    };
    let html = template::fill(template, &context);

    let temp_html = work_dir.join(TEMP_HTML);
    if let Err(e) = fs::write(&temp_html, html) {
        return failed(
            post.to_path_buf(),
            Some(title),
            format!("error writing {}: {e}", temp_html.display()),
        );
    }

    let result = rasterizer.render(&temp_html);
    // Cleanup happens before the result is inspected, so the temp file is
    // gone on success and failure alike.
    if temp_html.exists() {
        let _ = fs::remove_file(&temp_html);
    }

    let screenshot = match result {
        Ok(screenshot) => screenshot,
        Err(e) => {
            error!("screenshot failed for {}: {e}", post.display());
            return failed(post.to_path_buf(), Some(title), e.to_string());
        }
    };

    match place_card(&screenshot, &config.output_dir, &title) {
        Ok(output) => {
            info!("created {}", output.display());
            PostReport {
                source: post.to_path_buf(),
                title: Some(title),
                stats,
                outcome: Outcome::Rendered { output },
            }
        }
        Err(e) => {
            error!("failed to place card for {}: {e}", post.display());
            failed(post.to_path_buf(), Some(title), e.to_string())
        }
    }
}

/// Move the captured screenshot into the output directory under the
/// sanitized title. Rename first; fall back to copy + remove when the work
/// dir and output dir sit on different filesystems.
fn place_card(screenshot: &Path, output_dir: &Path, title: &str) -> std::io::Result<PathBuf> {
    fs::create_dir_all(output_dir)?;
    let dest = output_dir.join(format!("{}.png", fields::sanitize_filename(title)));
    if fs::rename(screenshot, &dest).is_err() {
        fs::copy(screenshot, &dest)?;
        fs::remove_file(screenshot)?;
    }
    Ok(dest)
}

fn skipped(source: PathBuf) -> PostReport {
    PostReport {
        source,
        title: None,
        stats: None,
        outcome: Outcome::SkippedNoTitle,
    }
}

fn failed(source: PathBuf, title: Option<String>, reason: String) -> PostReport {
    PostReport {
        source,
        title,
        stats: None,
        outcome: Outcome::Failed { reason },
    }
}
