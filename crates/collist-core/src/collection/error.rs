//! Error type for loading a collection export.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CollectionError {
    /// Input file does not exist. Displayed exactly as the CLI reports it.
    #[error("File not found")]
    NotFound { path: PathBuf },

    #[error("read collection file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Not JSON, or no top-level `item` array.
    #[error("invalid collection format: {0}")]
    InvalidFormat(#[from] serde_json::Error),
}

impl CollectionError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, CollectionError::NotFound { .. })
    }
}
