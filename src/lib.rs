//! Dotted-path YAML configuration store.
//!
//! Loads a configuration document from disk, creates it from built-in
//! defaults when the file is missing, exposes dot-separated path access over
//! the in-memory tree, and persists every mutation back to the file
//! immediately.
//!
//! ```no_run
//! use config_store::ConfigStore;
//!
//! let mut config = ConfigStore::open("config/app.yaml");
//! config.set("network.timeout", 60);
//! let timeout = config.get_as::<u64>("network.timeout").unwrap_or(30);
//! assert_eq!(timeout, 60);
//! ```

pub mod document;
pub mod error;
pub mod path;
pub mod persist;
pub mod store;

pub use document::{Document, default_document};
pub use error::ConfigError;
pub use store::{ConfigStore, DEFAULT_CONFIG_PATH};
