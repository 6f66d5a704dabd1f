//! The configuration document and its built-in defaults.

use crate::error::{ConfigError, ConfigResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// The root configuration value: a tree of mappings, sequences, and scalars.
///
/// Mapping keys keep their insertion order, so a document survives load/save
/// cycles without reordering.
pub type Document = Value;

/// Build the fallback document used when no config file exists or an
/// existing file cannot be parsed.
///
/// Returns a fresh value on every call so stores never alias each other's
/// defaults.
pub fn default_document() -> Document {
    let mut section = Mapping::new();
    section.insert("value_1".into(), "".into());
    section.insert("value_2".into(), "".into());
    section.insert("value_3".into(), "".into());

    let mut root = Mapping::new();
    root.insert("config_name".into(), Value::Mapping(section));
    Value::Mapping(root)
}

/// An empty top-level mapping.
pub fn empty_document() -> Document {
    Value::Mapping(Mapping::new())
}

/// Parse YAML text into a document.
///
/// A file holding only comments or whitespace parses as null; that case
/// normalizes to an empty mapping so the root is always usable.
pub fn parse_document(text: &str) -> Result<Document, serde_yaml::Error> {
    let value: Value = serde_yaml::from_str(text)?;
    Ok(match value {
        Value::Null => empty_document(),
        other => other,
    })
}

/// Read and parse the document at `path`.
pub fn read_document(path: &Path) -> ConfigResult<Document> {
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_document(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
