//! Tool configuration.
//!
//! Handles loading and validating `og-card.toml`. Everything the pipeline
//! could have hard-coded — where posts live, where the built site is, where
//! cards go, which browser binary to run — is an explicit setting here, so
//! tests can point every path at a scratch directory.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! posts_dir = "content/posts"          # Markdown posts to render cards for
//! template = "og-card-template.html"   # Card template with {title} etc.
//! built_root = "public"                # Built site root (stats scraping)
//! output_dir = "static/images"         # Where finished PNGs land
//!
//! [browser]
//! command = "google-chrome-stable"     # Headless browser binary
//! window_size = [1200, 630]            # Card dimensions in pixels
//! virtual_time_budget_ms = 5000        # Page-settle budget before capture
//! ```
//!
//! ## Partial Configuration
//!
//! Config files are sparse — override just the values you want. Unknown keys
//! are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Tool configuration loaded from `og-card.toml`.
///
/// All fields have defaults matching the conventional Hugo-style blog
/// layout. User config files need only specify overrides.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CardConfig {
    /// Directory scanned recursively for `.md` posts.
    pub posts_dir: PathBuf,
    /// HTML template containing the five card placeholders.
    pub template: PathBuf,
    /// Root of the built site, where per-post stats are scraped from.
    pub built_root: PathBuf,
    /// Directory where finished card PNGs are written.
    pub output_dir: PathBuf,
    /// Headless browser settings.
    pub browser: BrowserConfig,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            posts_dir: PathBuf::from("content/posts"),
            template: PathBuf::from("og-card-template.html"),
            built_root: PathBuf::from("public"),
            output_dir: PathBuf::from("static/images"),
            browser: BrowserConfig::default(),
        }
    }
}

/// Headless browser invocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BrowserConfig {
    /// Browser binary to invoke. Anything accepting Chrome's headless
    /// screenshot flags works.
    pub command: String,
    /// Capture viewport, width × height in pixels. 1200×630 is the standard
    /// Open Graph card size.
    pub window_size: [u32; 2],
    /// Virtual time budget in milliseconds — how long the browser lets
    /// asynchronous page work (fonts, layout) settle before capturing.
    pub virtual_time_budget_ms: u32,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            command: "google-chrome-stable".to_string(),
            window_size: [1200, 630],
            virtual_time_budget_ms: 5000,
        }
    }
}

impl CardConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.browser.command.trim().is_empty() {
            return Err(ConfigError::Validation(
                "browser.command must not be empty".into(),
            ));
        }
        if self.browser.window_size[0] == 0 || self.browser.window_size[1] == 0 {
            return Err(ConfigError::Validation(
                "browser.window_size values must be non-zero".into(),
            ));
        }
        if self.browser.virtual_time_budget_ms == 0 {
            return Err(ConfigError::Validation(
                "browser.virtual_time_budget_ms must be non-zero".into(),
            ));
        }
        Ok(())
    }
}

/// Load configuration from `path`, falling back to defaults when the file
/// doesn't exist. A present-but-invalid file is an error, not a fallback.
pub fn load_config(path: &Path) -> Result<CardConfig, ConfigError> {
    if !path.exists() {
        return Ok(CardConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: CardConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// A stock `og-card.toml` with every option present and documented.
/// Printed by the `gen-config` subcommand.
pub fn stock_config_toml() -> String {
    let defaults = BrowserConfig::default();
    format!(
        r#"# og-card configuration
# All options are optional - the values below are the defaults.

# Markdown posts to render cards for (scanned recursively; _index.md skipped)
posts_dir = "content/posts"

# Card template. Placeholders: {{title}} {{date}} {{tags}} {{word_count}} {{read_time}}
template = "og-card-template.html"

# Built site root - word count and read time are scraped from
# <built_root>/<post-stem>/index.html
built_root = "public"

# Where finished cards land, one <sanitized-title>.png per post
output_dir = "static/images"

[browser]
# Headless browser binary; anything with Chrome's screenshot flags works
command = "{command}"

# Card dimensions in pixels (standard Open Graph size)
window_size = [{w}, {h}]

# Virtual time budget: how long the browser lets async page work settle
# before capturing, in milliseconds
virtual_time_budget_ms = {budget}
"#,
        command = defaults.command,
        w = defaults.window_size[0],
        h = defaults.window_size[1],
        budget = defaults.virtual_time_budget_ms,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    // =========================================================================
    // Loading
    // =========================================================================

    #[test]
    fn missing_file_yields_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("og-card.toml")).unwrap();
        assert_eq!(config.posts_dir, PathBuf::from("content/posts"));
        assert_eq!(config.browser.window_size, [1200, 630]);
    }

    #[test]
    fn partial_file_overrides_only_named_values() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("og-card.toml");
        fs::write(&path, "output_dir = \"cards\"\n[browser]\ncommand = \"chromium\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.output_dir, PathBuf::from("cards"));
        assert_eq!(config.browser.command, "chromium");
        // untouched defaults
        assert_eq!(config.template, PathBuf::from("og-card-template.html"));
        assert_eq!(config.browser.virtual_time_budget_ms, 5000);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("og-card.toml");
        fs::write(&path, "posts_dirr = \"typo\"\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("og-card.toml");
        fs::write(&path, "posts_dir = [unterminated\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    // =========================================================================
    // Validation
    // =========================================================================

    #[test]
    fn zero_window_size_fails_validation() {
        let mut config = CardConfig::default();
        config.browser.window_size = [0, 630];
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn empty_browser_command_fails_validation() {
        let mut config = CardConfig::default();
        config.browser.command = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn zero_budget_fails_validation() {
        let mut config = CardConfig::default();
        config.browser.virtual_time_budget_ms = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn defaults_validate() {
        assert!(CardConfig::default().validate().is_ok());
    }

    // =========================================================================
    // Stock config
    // =========================================================================

    #[test]
    fn stock_config_parses_back_to_defaults() {
        let config: CardConfig = toml::from_str(&stock_config_toml()).unwrap();
        assert_eq!(config.posts_dir, CardConfig::default().posts_dir);
        assert_eq!(config.browser.command, BrowserConfig::default().command);
        assert_eq!(config.browser.window_size, [1200, 630]);
        assert_eq!(config.browser.virtual_time_budget_ms, 5000);
    }
}
