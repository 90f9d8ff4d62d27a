//! CLI output formatting for pipeline reports.
//!
//! Output is information-centric: the primary line for every post is its
//! title and positional index, with the source path as secondary context on
//! an indented `Source:` line. Scraped stats and the produced card path get
//! their own context lines.
//!
//! ```text
//! 001 Sample Post
//!     Source: content/posts/sample.md
//!     Stats: 742 words • 4 mins
//!     Card: static/images/Sample-Post.png
//! 002 (untitled)
//!     Source: content/posts/draft.md
//!     Skipped: no title in frontmatter
//!
//! Rendered 1 card, skipped 1, failed 0
//! ```
//!
//! Each stage has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::pipeline::{Outcome, PostReport};

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

fn header(pos: usize, title: Option<&str>) -> String {
    match title {
        Some(t) if !t.is_empty() => format!("{} {}", format_index(pos), t),
        _ => format!("{} (untitled)", format_index(pos)),
    }
}

fn count_noun(n: usize, singular: &str, plural: &str) -> String {
    if n == 1 {
        format!("{n} {singular}")
    } else {
        format!("{n} {plural}")
    }
}

/// One entity block per post, shared between the build and check displays.
fn format_entries(reports: &[PostReport]) -> Vec<String> {
    let mut lines = Vec::new();
    for (pos, report) in reports.iter().enumerate() {
        lines.push(header(pos + 1, report.title.as_deref()));
        lines.push(format!("    Source: {}", report.source.display()));
        if let Some(stats) = &report.stats {
            lines.push(format!(
                "    Stats: {} words • {} mins",
                stats.words, stats.minutes
            ));
        }
        match &report.outcome {
            Outcome::Rendered { output } => {
                lines.push(format!("    Card: {}", output.display()));
            }
            Outcome::WouldRender => {
                lines.push("    Would render".to_string());
            }
            Outcome::SkippedNoTitle => {
                lines.push("    Skipped: no title in frontmatter".to_string());
            }
            Outcome::Failed { reason } => {
                lines.push(format!("    Failed: {reason}"));
            }
        }
    }
    lines
}

struct Tally {
    rendered: usize,
    would: usize,
    skipped: usize,
    failed: usize,
}

fn tally(reports: &[PostReport]) -> Tally {
    let mut t = Tally {
        rendered: 0,
        would: 0,
        skipped: 0,
        failed: 0,
    };
    for report in reports {
        match report.outcome {
            Outcome::Rendered { .. } => t.rendered += 1,
            Outcome::WouldRender => t.would += 1,
            Outcome::SkippedNoTitle => t.skipped += 1,
            Outcome::Failed { .. } => t.failed += 1,
        }
    }
    t
}

/// Format a build run: entity blocks plus what actually happened.
pub fn format_build_report(reports: &[PostReport]) -> Vec<String> {
    let mut lines = format_entries(reports);
    if !lines.is_empty() {
        lines.push(String::new());
    }
    let t = tally(reports);
    lines.push(format!(
        "Rendered {}, skipped {}, failed {}",
        count_noun(t.rendered, "card", "cards"),
        t.skipped,
        t.failed
    ));
    lines
}

/// Format a check run: entity blocks plus a prospective summary.
pub fn format_check_report(reports: &[PostReport]) -> Vec<String> {
    let mut lines = format_entries(reports);
    if !lines.is_empty() {
        lines.push(String::new());
    }
    let t = tally(reports);
    lines.push(format!(
        "{} to render, {} skipped",
        count_noun(t.would, "card", "cards"),
        t.skipped
    ));
    lines
}

pub fn print_build_report(reports: &[PostReport]) {
    for line in format_build_report(reports) {
        println!("{line}");
    }
}

pub fn print_check_report(reports: &[PostReport]) {
    for line in format_check_report(reports) {
        println!("{line}");
    }
}
