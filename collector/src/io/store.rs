//! JSON store load/save helpers.
//!
//! Each store is a pretty-printed JSON array rewritten in full on every save.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Load a collection from `path`.
///
/// A missing or unreadable file yields an empty collection. A file that can
/// be read but does not parse is an error: starting empty there would wipe
/// the records on the next save.
pub fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "store missing, starting empty");
            return Ok(Vec::new());
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "store unreadable, starting empty");
            return Ok(Vec::new());
        }
    };
    let records: Vec<T> = serde_json::from_str(&contents)
        .with_context(|| format!("parse store {}", path.display()))?;
    debug!(path = %path.display(), count = records.len(), "store loaded");
    Ok(records)
}

/// Overwrite `path` with the full collection.
pub fn save_collection<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    debug!(path = %path.display(), count = records.len(), "writing store");
    let mut buf = serde_json::to_string_pretty(records).context("serialize store")?;
    buf.push('\n');
    write_atomic(path, &buf)
}

/// Write via a sibling temp file and rename over the target.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let parent = path
        .parent()
        .with_context(|| format!("store path missing parent {}", path.display()))?;
    fs::create_dir_all(parent).with_context(|| format!("create directory {}", parent.display()))?;
    let mut tmp_name = path.file_name().unwrap_or_default().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = parent.join(tmp_name);
    fs::write(&tmp_path, contents)
        .with_context(|| format!("write temp file {}", tmp_path.display()))?;
    if let Err(err) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(err).with_context(|| format!("replace {}", path.display()));
    }
    Ok(())
}
