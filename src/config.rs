//! Page configuration.
//!
//! Read once at startup from an optional inline JSON block:
//!
//! ```html
//! <script type="application/json" id="cv-config">
//!   { "locales_path": "/static/locales", "download": { "url": "cv.pdf" } }
//! </script>
//! ```
//!
//! Every field has a default, so an absent block or a partial one is fine.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the inline configuration block.
pub const CONFIG_ELEMENT_ID: &str = "cv-config";

pub const DEFAULT_LOCALES_PATH: &str = "locales";
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_PDF_URL: &str = "assets/documents/David_Ardila_CV.pdf";
pub const DEFAULT_PDF_FILE_NAME: &str = "David_Ardila_CV.pdf";
pub const DEFAULT_DOWNLOAD_SELECTOR: &str = "[data-download-cv]";
pub const DEFAULT_BUSY_LABEL: &str = "Downloading...";
pub const DEFAULT_RESET_DELAY_MS: u32 = 1000;
pub const DEFAULT_REVEAL_SELECTOR: &str = ".section";
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;
pub const DEFAULT_REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Error returned by [`SiteConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse site config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid site config: {0}")]
    Invalid(String),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Directory holding `<code>.json` dictionaries, relative to the page.
    pub locales_path: String,
    /// `error`, `warn`, `info`, `debug` or `trace`.
    pub log_level: String,
    pub hover: Vec<HoverTarget>,
    pub reveal: RevealConfig,
    pub download: DownloadConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locales_path: DEFAULT_LOCALES_PATH.to_owned(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
            hover: default_hover_targets(),
            reveal: RevealConfig::default(),
            download: DownloadConfig::default(),
        }
    }
}

/// Elements that get a background color while hovered.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct HoverTarget {
    pub selector: String,
    pub color: String,
}

impl HoverTarget {
    fn new(selector: &str, color: &str) -> Self {
        Self { selector: selector.to_owned(), color: color.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub selector: String,
    /// Visible fraction that triggers the reveal, in `[0, 1]`.
    pub threshold: f64,
    pub root_margin: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: DEFAULT_REVEAL_SELECTOR.to_owned(),
            threshold: DEFAULT_REVEAL_THRESHOLD,
            root_margin: DEFAULT_REVEAL_ROOT_MARGIN.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    pub url: String,
    pub file_name: String,
    /// Buttons that trigger the download.
    pub selector: String,
    pub busy_label: String,
    pub reset_delay_ms: u32,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_PDF_URL.to_owned(),
            file_name: DEFAULT_PDF_FILE_NAME.to_owned(),
            selector: DEFAULT_DOWNLOAD_SELECTOR.to_owned(),
            busy_label: DEFAULT_BUSY_LABEL.to_owned(),
            reset_delay_ms: DEFAULT_RESET_DELAY_MS,
        }
    }
}

fn default_hover_targets() -> Vec<HoverTarget> {
    vec![
        HoverTarget::new(".experience-item", "var(--hover-color)"),
        HoverTarget::new(".education-item", "var(--hover-color)"),
        HoverTarget::new(".skill-category", "var(--hover-color)"),
        HoverTarget::new(".languages", "var(--hover-color)"),
        HoverTarget::new(".header", "var(--hover-light)"),
        HoverTarget::new(".summary-text", "var(--hover-light)"),
    ]
}

impl SiteConfig {
    /// Parse and validate configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or wrong field types
    /// and [`ConfigError::Invalid`] when a value is out of range.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locales_path.trim().is_empty() {
            return Err(ConfigError::Invalid("locales_path must not be empty".into()));
        }
        if self.download.url.trim().is_empty() {
            return Err(ConfigError::Invalid("download.url must not be empty".into()));
        }
        if !(0.0..=1.0).contains(&self.reveal.threshold) {
            return Err(ConfigError::Invalid(format!(
                "reveal.threshold must be within [0, 1], got {}",
                self.reveal.threshold
            )));
        }
        self.level()?;
        Ok(())
    }

    /// Parsed log level.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for an unknown level name.
    pub fn level(&self) -> Result<log::Level, ConfigError> {
        self.log_level
            .parse::<log::Level>()
            .map_err(|_| ConfigError::Invalid(format!("unknown log_level '{}'", self.log_level)))
    }
}
