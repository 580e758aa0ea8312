//! Error types for release handling

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for core operations
pub type CoreResult<T> = Result<T, CoreError>;

/// Error type for release, cache and configuration handling
#[derive(Error, Debug)]
pub enum CoreError {
    /// The release manifest is missing required data or is inconsistent
    #[error("invalid release: {0}")]
    InvalidRelease(String),

    /// An artifact referenced by the release was never downloaded
    #[error("artifact not found in cache: {artifact} {version} (expected at {})", path.display())]
    ArtifactNotFound {
        artifact: String,
        version: String,
        path: PathBuf,
    },

    /// Configuration values are out of range or malformed
    #[error("configuration error: {0}")]
    InvalidConfig(String),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CoreError {
    /// Returns true when the error means a required artifact could not be resolved
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::ArtifactNotFound { .. })
    }
}
