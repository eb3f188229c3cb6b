//! Store error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while persisting the register
///
/// Loading never fails; see [`crate::store::LoadOutcome`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// Filesystem failure while writing the data file
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document could not be serialized
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
