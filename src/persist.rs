//! Persisting documents to disk.
//!
//! Writes go through a temporary file in the target directory followed by a
//! rename, so an interrupted or failed write never truncates the previous
//! file content.

use crate::error::{ConfigError, ConfigResult};
use serde_yaml::Value;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Serialize `document` to `path` as block-style YAML.
///
/// Parent directories are created as needed. Mapping key order is preserved
/// and non-ASCII text is written literally (UTF-8, no BOM, no escaping).
pub fn write_document(path: &Path, document: &Value) -> ConfigResult<()> {
    let text = serde_yaml::to_string(document).map_err(|source| ConfigError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    let dir = parent_dir(path);
    fs::create_dir_all(dir).map_err(|source| io_error(path, source))?;

    // Write next to the target so the rename stays on one filesystem.
    let mut file = NamedTempFile::new_in(dir).map_err(|source| io_error(path, source))?;
    file.write_all(text.as_bytes())
        .map_err(|source| io_error(path, source))?;
    file.persist(path).map_err(|e| io_error(path, e.error))?;
    Ok(())
}

/// The directory that should hold `path`; `.` when the path has no parent
/// component.
fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

fn io_error(path: &Path, source: std::io::Error) -> ConfigError {
    ConfigError::Io {
        path: path.to_path_buf(),
        source,
    }
}
