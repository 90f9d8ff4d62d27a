//! Headless-browser rasterization.
//!
//! The [`Rasterizer`] trait is the seam between the card pipeline and the
//! actual browser: `render` takes a filled HTML file and produces a PNG on
//! disk. The production implementation is [`ChromeRasterizer`], which shells
//! out to a Chrome-compatible binary in headless screenshot mode. Tests
//! inject a mock and never start a browser.
//!
//! Chrome's `--screenshot` mode always writes a file named `screenshot.png`
//! into its working directory. The rasterizer runs the browser with its
//! working directory set to a dedicated work dir, so that fixed name never
//! collides with anything in the user's project. The invocation is
//! synchronous and blocking; the only time bound is the browser's own
//! virtual time budget, so a browser that hangs outside that budget hangs
//! the pipeline with it.

use crate::config::BrowserConfig;
use log::debug;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Fixed output filename Chrome's `--screenshot` mode writes.
pub const SCREENSHOT_FILENAME: &str = "screenshot.png";

#[derive(Error, Debug)]
pub enum RasterizeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("browser exited with status {code:?}")]
    BrowserFailed { code: Option<i32> },
    #[error("browser exited cleanly but produced no screenshot at {0}")]
    MissingScreenshot(PathBuf),
}

/// Synchronous HTML-to-image capability.
///
/// `render` blocks until the image exists on disk (returning its path) or
/// the attempt has definitively failed. One render at a time per rasterizer:
/// the fixed screenshot filename makes the work dir a single-flight domain.
pub trait Rasterizer {
    fn render(&self, html: &Path) -> Result<PathBuf, RasterizeError>;
}

/// Rasterizer backed by a headless Chrome-compatible browser.
pub struct ChromeRasterizer {
    browser: BrowserConfig,
    work_dir: PathBuf,
}

impl ChromeRasterizer {
    /// `work_dir` is where the browser runs and drops `screenshot.png`.
    /// It must exist before `render` is called.
    pub fn new(browser: BrowserConfig, work_dir: &Path) -> Self {
        Self {
            browser,
            work_dir: work_dir.to_path_buf(),
        }
    }
}

impl Rasterizer for ChromeRasterizer {
    fn render(&self, html: &Path) -> Result<PathBuf, RasterizeError> {
        // The browser runs in the work dir, so the target path must stay
        // valid after the directory change.
        let html = if html.is_absolute() {
            html.to_path_buf()
        } else {
            std::env::current_dir()?.join(html)
        };

        let [width, height] = self.browser.window_size;
        debug!(
            "invoking {} on {} ({width}x{height})",
            self.browser.command,
            html.display()
        );
        let status = Command::new(&self.browser.command)
            .arg("--headless")
            .arg("--screenshot")
            .arg(format!("--window-size={width},{height}"))
            .arg(format!(
                "--virtual-time-budget={}",
                self.browser.virtual_time_budget_ms
            ))
            .arg(&html)
            .current_dir(&self.work_dir)
            .status()?;

        if !status.success() {
            return Err(RasterizeError::BrowserFailed {
                code: status.code(),
            });
        }

        let screenshot = self.work_dir.join(SCREENSHOT_FILENAME);
        if !screenshot.exists() {
            return Err(RasterizeError::MissingScreenshot(screenshot));
        }
        Ok(screenshot)
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;
    use std::sync::Mutex;

    /// Mock rasterizer that records render calls and fabricates a PNG file
    /// without touching a browser.
    pub struct MockRasterizer {
        /// Directory where fabricated screenshots are written.
        pub shot_dir: PathBuf,
        /// Every HTML path `render` was called with, in order.
        pub calls: Mutex<Vec<PathBuf>>,
        /// When set, every render fails as if the browser exited non-zero.
        pub fail: bool,
    }

    impl MockRasterizer {
        pub fn new(shot_dir: &Path) -> Self {
            Self {
                shot_dir: shot_dir.to_path_buf(),
                calls: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        pub fn failing(shot_dir: &Path) -> Self {
            Self {
                fail: true,
                ..Self::new(shot_dir)
            }
        }

        pub fn rendered_paths(&self) -> Vec<PathBuf> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Rasterizer for MockRasterizer {
        fn render(&self, html: &Path) -> Result<PathBuf, RasterizeError> {
            self.calls.lock().unwrap().push(html.to_path_buf());
            if self.fail {
                return Err(RasterizeError::BrowserFailed { code: Some(1) });
            }
            let screenshot = self.shot_dir.join(SCREENSHOT_FILENAME);
            std::fs::write(&screenshot, b"\x89PNG fake")?;
            Ok(screenshot)
        }
    }

    #[test]
    fn mock_records_calls_and_writes_screenshot() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mock = MockRasterizer::new(tmp.path());

        let shot = mock.render(Path::new("/work/og-card.html")).unwrap();
        assert!(shot.exists());
        assert_eq!(
            mock.rendered_paths(),
            vec![PathBuf::from("/work/og-card.html")]
        );
    }

    #[test]
    fn failing_mock_reports_browser_exit() {
        let tmp = tempfile::TempDir::new().unwrap();
        let mock = MockRasterizer::failing(tmp.path());

        let err = mock.render(Path::new("/work/og-card.html")).unwrap_err();
        assert!(matches!(err, RasterizeError::BrowserFailed { code: Some(1) }));
        assert!(!tmp.path().join(SCREENSHOT_FILENAME).exists());
    }

    #[test]
    fn chrome_rasterizer_surfaces_nonzero_exit() {
        let tmp = tempfile::TempDir::new().unwrap();
        let rasterizer = ChromeRasterizer::new(
            BrowserConfig {
                command: "false".to_string(),
                ..BrowserConfig::default()
            },
            tmp.path(),
        );

        let err = rasterizer.render(&tmp.path().join("card.html")).unwrap_err();
        assert!(matches!(err, RasterizeError::BrowserFailed { .. }));
    }

    #[test]
    fn chrome_rasterizer_missing_binary_is_io_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let rasterizer = ChromeRasterizer::new(
            BrowserConfig {
                command: "og-card-no-such-browser".to_string(),
                ..BrowserConfig::default()
            },
            tmp.path(),
        );

        let err = rasterizer.render(&tmp.path().join("card.html")).unwrap_err();
        assert!(matches!(err, RasterizeError::Io(_)));
    }
}
