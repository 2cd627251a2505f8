//! Crate-level error type.

use std::path::PathBuf;

use thiserror::Error;

use crate::ingest::IngestError;

#[derive(Debug, Error)]
pub enum Error {
    /// Input file could not be opened
    #[error("failed to open {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input could not be parsed into assignments
    #[error(transparent)]
    Ingest(#[from] IngestError),

    /// Report could not be rendered as JSON
    #[cfg(feature = "serde1")]
    #[error("failed to render JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
