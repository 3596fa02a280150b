//! Canonical file locations inside a collector data directory.

use std::path::{Path, PathBuf};

use super::config::CollectorConfig;

/// Config file name, always looked up directly under the data directory.
pub const CONFIG_FILE: &str = "collector.toml";

/// All paths the collector reads or writes for one data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub root: PathBuf,
    pub customers_path: PathBuf,
    pub reviews_path: PathBuf,
    pub export_path: PathBuf,
}

impl DataPaths {
    pub fn new(root: impl Into<PathBuf>, config: &CollectorConfig) -> Self {
        let root = root.into();
        Self {
            customers_path: root.join(&config.customers_file),
            reviews_path: root.join(&config.reviews_file),
            export_path: root.join(&config.export_file),
            root,
        }
    }

    /// Resolve a user-supplied export target against the data directory.
    pub fn resolve_export(&self, target: Option<&Path>) -> PathBuf {
        match target {
            None => self.export_path.clone(),
            Some(path) if path.is_absolute() => path.to_path_buf(),
            Some(path) => self.root.join(path),
        }
    }
}

/// Location of `collector.toml`, which must be read before the other paths exist.
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}
