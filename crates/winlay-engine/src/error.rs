use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors produced while persisting or loading snapshot sequences.
///
/// Per-window OS failures never surface here; they are absorbed by
/// skipping the window during capture or replay.
#[derive(Debug, Error)]
pub enum Error {
    /// The snapshot file exists but could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The snapshot file could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        /// File that failed to write.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The snapshot file exists but is not valid snapshot JSON. The file
    /// is self-produced, so this indicates corruption the user must know
    /// about.
    #[error("failed to parse {path}: {source}")]
    Parse {
        /// File that failed to parse.
        path: PathBuf,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// A snapshot sequence could not be encoded as JSON.
    #[error("failed to encode snapshots: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Result alias for snapshot persistence.
pub type Result<T> = std::result::Result<T, Error>;
