//! Shared test utilities for the og-card test suite.
//!
//! [`SiteFixture`] builds a throwaway blog layout in a temp directory with
//! every config path pointed inside it, so pipeline tests never touch the
//! real working directory:
//!
//! ```rust
//! let site = SiteFixture::new();
//! site.post("sample.md", "title: \"Sample Post\"\ndate: \"2024-01-15\"");
//! site.built_page("sample", 742, 4);
//!
//! let reports = pipeline::build(&site.config, &site.work_dir(), &mock).unwrap();
//! ```

use crate::config::CardConfig;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Card template used by fixtures: all five placeholders, minimal markup.
pub const TEST_TEMPLATE: &str = "<!doctype html>\n<html><body>\n\
    <h1>{title}</h1>\n\
    <p class=\"date\">{date}</p>\n\
    <div class=\"tags\">\n{tags}\n</div>\n\
    <p class=\"meta\">{word_count} words • {read_time} mins</p>\n\
    </body></html>\n";

/// Write a post file with the given frontmatter body and a stub body.
/// Creates parent directories as needed. Returns the post path.
pub fn write_post(dir: &Path, name: &str, frontmatter: &str) -> PathBuf {
    fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, format!("---\n{frontmatter}\n---\n\nBody text.\n")).unwrap();
    path
}

/// A complete scratch blog: posts dir, built site, template, output and
/// work directories, all inside one temp dir that the fixture owns.
pub struct SiteFixture {
    pub config: CardConfig,
    tmp: TempDir,
}

impl SiteFixture {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path();

        let config = CardConfig {
            posts_dir: root.join("content/posts"),
            template: root.join("og-card-template.html"),
            built_root: root.join("public"),
            output_dir: root.join("static/images"),
            ..CardConfig::default()
        };
        fs::create_dir_all(&config.posts_dir).unwrap();
        fs::write(&config.template, TEST_TEMPLATE).unwrap();
        fs::create_dir_all(root.join("work")).unwrap();

        Self { config, tmp }
    }

    /// Work dir for the temp HTML and fabricated screenshots.
    pub fn work_dir(&self) -> PathBuf {
        self.tmp.path().join("work")
    }

    /// Write a post under the fixture's posts dir.
    pub fn post(&self, name: &str, frontmatter: &str) -> PathBuf {
        write_post(&self.config.posts_dir, name, frontmatter)
    }

    /// Write a built page carrying the stats line the scraper looks for.
    pub fn built_page(&self, stem: &str, words: u32, minutes: u32) {
        let dir = self.config.built_root.join(stem);
        fs::create_dir_all(&dir).unwrap();
        fs::write(
            dir.join("index.html"),
            format!("<html><body><p class=\"meta\">{words} words • {minutes} mins</p></body></html>"),
        )
        .unwrap();
    }
}
