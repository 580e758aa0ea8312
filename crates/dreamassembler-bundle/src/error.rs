//! Error types for archive assembly.

use crate::ArchiveFormat;
use dreamassembler_core::{Cancelled, CoreError, Side};
use thiserror::Error;

/// Errors that can occur while assembling or reading an archive.
#[derive(Debug, Error)]
pub enum AssembleError {
    /// The format cannot produce an archive for this side.
    #[error("{format} archives cannot be built for side {side}")]
    UnsupportedSide { format: ArchiveFormat, side: Side },

    /// Invalid release or an artifact missing from the cache.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A progress callback asked to stop.
    #[error("assembly {0}")]
    Cancelled(#[from] Cancelled),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP archive error.
    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// A path that cannot be used as an archive entry or destination.
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Missing file inside an archive.
    #[error("Missing file: {0}")]
    MissingFile(String),
}

impl AssembleError {
    /// True if a progress callback aborted the run.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled(_))
    }

    /// True if the format/side combination was rejected before any I/O.
    #[must_use]
    pub fn is_unsupported_side(&self) -> bool {
        matches!(self, Self::UnsupportedSide { .. })
    }

    /// True if a referenced artifact was not in the cache.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(err) if err.is_not_found())
    }
}
