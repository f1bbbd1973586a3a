//! Error type for local document storage.

use std::path::PathBuf;

/// Error type for document store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize document {name}: {source}")]
    Serialize {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to parse document {name}: {source}")]
    Parse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
