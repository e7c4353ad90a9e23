use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for create-release-notes operations
#[derive(Error, Debug)]
pub enum ReleaseNotesError {
    #[error("Version parsing error: {0}")]
    Version(String),

    #[error("Release date error: {0}")]
    Date(String),

    #[error("Changelog error: marker line {marker:?} not found in {}", .path.display())]
    MarkerNotFound { marker: String, path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in create-release-notes
pub type Result<T> = std::result::Result<T, ReleaseNotesError>;

impl ReleaseNotesError {
    /// Create a version error with context
    pub fn version(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Version(msg.into())
    }

    /// Create a release date error with context
    pub fn date(msg: impl Into<String>) -> Self {
        ReleaseNotesError::Date(msg.into())
    }
}
