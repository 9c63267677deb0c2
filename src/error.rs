use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the pyqt-forge library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Application identity was rejected at construction time.
    #[error("application identity is incomplete: {0}")]
    Misconfigured(String),

    /// Key absent from both the persisted record and the default schema.
    #[error("unknown configuration key {0:?}")]
    KeyNotFound(String),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// License descriptor missing a required field, or not valid JSON.
    /// Raised at scan time: a bad descriptor is a packaging defect.
    #[error("invalid license descriptor {}: {source}", path.display())]
    LicenseMeta {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// `version.txt` content that is not a dotted integer sequence.
    #[error("invalid version string {raw:?}")]
    Version { raw: String },

    /// External tool missing from `PATH`.
    #[error("executable {0:?} not found on PATH")]
    ToolNotFound(String),

    /// External tool could not be spawned.
    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },
}
