//! The configuration store.
//!
//! [`ConfigStore`] binds one YAML document to a file path. Construction
//! loads the file, creating it from the built-in defaults when missing;
//! `set` persists every mutation immediately; all I/O failures degrade to
//! the in-memory state with a logged warning instead of an error.

use crate::document::{self, Document};
use crate::path;
use crate::persist;
use serde::de::DeserializeOwned;
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Config location used when the caller does not supply one, relative to the
/// process working directory.
pub const DEFAULT_CONFIG_PATH: &str = "../config/config.yaml";

/// A configuration document bound to a file on disk.
///
/// The store always holds a fully formed document: an unreadable or
/// malformed file falls back to the defaults (leaving the file itself
/// untouched), and a missing file is created from them. The in-memory tree
/// and the file stay in step because every mutation persists synchronously.
///
/// The document is exclusively owned; clones are independent stores over the
/// same path, with last-writer-wins semantics on disk.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
    document: Document,
}

impl ConfigStore {
    /// Open the store at [`DEFAULT_CONFIG_PATH`].
    pub fn new() -> Self {
        Self::open(DEFAULT_CONFIG_PATH)
    }

    /// Open the store at `path`, loading the file or creating it from the
    /// default document when it does not exist.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let document = load_or_create(&path);
        Self { path, document }
    }

    /// Resolve a dotted path, e.g. `get("network.timeout")`.
    ///
    /// Returns `None` when any segment is missing or an intermediate value
    /// cannot be descended into. A full descent returns the stored value,
    /// nested mappings and sequences included.
    pub fn get(&self, path: &str) -> Option<&Value> {
        path::lookup(&self.document, path)
    }

    /// Resolve a dotted path, falling back to `default` when unresolved.
    pub fn get_or(&self, path: &str, default: Value) -> Value {
        self.get(path).cloned().unwrap_or(default)
    }

    /// Resolve a dotted path and deserialize the value into `T`.
    ///
    /// Deserialization is strict: a value that does not already have the
    /// requested shape yields `None`, the same as an unresolved path.
    pub fn get_as<T: DeserializeOwned>(&self, path: &str) -> Option<T> {
        let value = self.get(path)?.clone();
        serde_yaml::from_value(value).ok()
    }

    /// Assign a value at a dotted path and persist the document.
    ///
    /// Intermediate mappings are created as needed; a non-mapping value in
    /// the way is replaced by a fresh mapping. The write happens
    /// synchronously, so the file reflects the mutation before this returns.
    pub fn set(&mut self, path: &str, value: impl Into<Value>) {
        path::assign(&mut self.document, path, value.into());
        self.save();
    }

    /// Persist the current document unconditionally.
    ///
    /// A failed write is logged; the previous file content is left as it
    /// was and the in-memory document keeps the mutation.
    pub fn save(&self) {
        if let Err(e) = persist::write_document(&self.path, &self.document) {
            warn!("failed to save config: {e}");
        }
    }

    /// Discard the in-memory document and re-read the file, picking up any
    /// external edits.
    pub fn reload(&mut self) {
        self.document = load_or_create(&self.path);
    }

    /// The `config_name` section, or an empty mapping when it is absent or
    /// not a mapping.
    pub fn custom_config(&self) -> Mapping {
        self.get("config_name")
            .and_then(Value::as_mapping)
            .cloned()
            .unwrap_or_default()
    }

    /// The file path backing this store.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The full in-memory document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Load the document at `path`, creating the file from defaults when it is
/// missing.
///
/// Failures never escape: a missing file that cannot be written still
/// yields the in-memory defaults, and an existing file that cannot be read
/// or parsed yields the defaults while its on-disk bytes stay untouched.
fn load_or_create(path: &Path) -> Document {
    if !path.exists() {
        let document = document::default_document();
        debug!(path = %path.display(), "config file missing, creating defaults");
        if let Err(e) = persist::write_document(path, &document) {
            warn!("failed to create default config: {e}");
        }
        return document;
    }

    match document::read_document(path) {
        Ok(document) => document,
        Err(e) => {
            warn!("failed to load config, falling back to defaults: {e}");
            document::default_document()
        }
    }
}
