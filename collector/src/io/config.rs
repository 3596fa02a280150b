//! Collector configuration stored as `collector.toml` in the data directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;
use tracing::debug;

use crate::core::render::{COMMENT_WIDTH, MAX_COMMENT_WIDTH};
use crate::core::summary::RECENT_LIMIT;

/// Collector configuration (TOML).
///
/// Every field is optional in the file; missing fields take the defaults
/// below, which match the layout the tool has always used.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CollectorConfig {
    /// Customer store, relative to the data directory.
    pub customers_file: String,

    /// Review store, relative to the data directory.
    pub reviews_file: String,

    /// Default CSV export target, relative to the data directory.
    pub export_file: String,

    pub report: ReportConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// How many trailing reviews the report shows.
    pub recent_limit: usize,

    /// Comments longer than this many characters are cut in the report.
    pub comment_width: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            recent_limit: RECENT_LIMIT,
            comment_width: COMMENT_WIDTH,
        }
    }
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            customers_file: "customers.json".to_string(),
            reviews_file: "reviews.json".to_string(),
            export_file: "reviews_export.csv".to_string(),
            report: ReportConfig::default(),
        }
    }
}

impl CollectorConfig {
    pub fn validate(&self) -> Result<()> {
        for (key, value) in [
            ("customers_file", &self.customers_file),
            ("reviews_file", &self.reviews_file),
            ("export_file", &self.export_file),
        ] {
            if value.trim().is_empty() {
                return Err(anyhow!("{key} must be a non-empty file name"));
            }
        }
        if self.customers_file == self.reviews_file {
            return Err(anyhow!("customers_file and reviews_file must differ"));
        }
        if self.report.recent_limit == 0 {
            return Err(anyhow!("report.recent_limit must be > 0"));
        }
        if self.report.comment_width == 0 || self.report.comment_width > MAX_COMMENT_WIDTH {
            return Err(anyhow!(
                "report.comment_width must be between 1 and {MAX_COMMENT_WIDTH}"
            ));
        }
        Ok(())
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CollectorConfig::default()`.
pub fn load_config(path: &Path) -> Result<CollectorConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(CollectorConfig::default());
    }
    let contents = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: CollectorConfig =
        toml::from_str(&contents).with_context(|| format!("parse {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}
