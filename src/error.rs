//! Error types for configuration load and persist failures.

use std::path::PathBuf;
use thiserror::Error;

/// Failures that can occur while reading or writing the configuration file.
///
/// These never cross the [`ConfigStore`](crate::ConfigStore) boundary: the
/// store logs them and keeps serving its in-memory state. The variants exist
/// so internal code can report exactly what failed, and on which file,
/// before the boundary collapses the error into a fallback.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read or written.
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file exists but does not hold valid YAML.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The in-memory document could not be serialized.
    #[error("failed to serialize document for {}: {source}", .path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}

/// Result type for internal configuration I/O.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
