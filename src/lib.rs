//! # og-card
//!
//! Renders a social-sharing preview image (an "OG card") for every post in a
//! markdown blog. Each card is the post's title, date, tags, word count, and
//! read time laid out by an HTML template and captured with a headless
//! browser at the standard 1200×630 Open Graph size.
//!
//! # Architecture: One Pipeline, Run Per Post
//!
//! ```text
//! content/posts/*.md ──┐
//!                      ├─ frontmatter ─ fields ─┐
//! public/<post>/ ──────┴─ scrape ───────────────┼─ template::fill
//!                                               │
//!                    headless browser ◄─────────┘
//!                          │
//!                          ▼
//!            static/images/<Sanitized-Title>.png
//! ```
//!
//! Posts are processed strictly sequentially and independently. The batch is
//! best-effort: a post without a title is skipped, a missing built page
//! zeroes the stats, and a browser failure abandons just that one card —
//! nothing aborts the run.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`frontmatter`] | Parses the `---`-delimited metadata block into [`frontmatter::PostMeta`] |
//! | [`fields`] | Date formatting, tag markup, filename sanitization |
//! | [`scrape`] | Recovers word count / read time from the prebuilt page |
//! | [`template`] | Literal placeholder substitution into the card template |
//! | [`rasterize`] | [`rasterize::Rasterizer`] trait + headless Chrome implementation |
//! | [`pipeline`] | Post discovery and the per-post build loop |
//! | [`config`] | `og-card.toml` loading, validation, stock config |
//! | [`output`] | CLI output formatting for pipeline reports |
//!
//! # Design Decisions
//!
//! ## Scraped Stats, Not Recounted
//!
//! Word count and read time come from the already-built post page, not from
//! recounting the markdown. Whatever number the blog shows its readers is
//! the number the card shows — the two can never drift apart.
//!
//! ## The Browser Behind a Trait
//!
//! The only heavyweight step, rasterization, sits behind the
//! [`rasterize::Rasterizer`] trait. The pipeline is plain synchronous code
//! that can be tested end to end with a mock; only
//! [`rasterize::ChromeRasterizer`] ever spawns a process.
//!
//! ## A Dedicated Work Directory
//!
//! Chrome's screenshot mode writes a fixed `screenshot.png` into its working
//! directory. The browser is therefore run inside a dedicated work dir
//! (`--temp-dir`) rather than the user's project root, which also namespaces
//! the temp HTML file. Within that directory the pipeline stays
//! single-flight: the fixed filenames mean two builds must not share a work
//! dir concurrently.

pub mod config;
pub mod fields;
pub mod frontmatter;
pub mod output;
pub mod pipeline;
pub mod rasterize;
pub mod scrape;
pub mod template;

#[cfg(test)]
pub(crate) mod test_helpers;
