use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("failed to read snapshot {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unexpected snapshot shape: {0}")]
    Shape(String),
}

pub type SnapshotResult<T> = std::result::Result<T, SnapshotError>;
