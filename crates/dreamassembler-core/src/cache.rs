//! Lookup of previously downloaded artifacts.

use crate::{CoreError, CoreResult, VersionReference};
use std::path::{Path, PathBuf};

/// Maps an artifact and one of its versions to a file on local disk.
///
/// Implementations only look things up; downloading is someone else's job.
/// The file name of the returned path becomes the entry name in the archive.
pub trait CacheLocator {
    /// Path of the cached file, or [`CoreError::ArtifactNotFound`] if it was
    /// never downloaded.
    fn resolve(&self, artifact: &str, version: &VersionReference) -> CoreResult<PathBuf>;
}

impl<T: CacheLocator + ?Sized> CacheLocator for &T {
    fn resolve(&self, artifact: &str, version: &VersionReference) -> CoreResult<PathBuf> {
        (**self).resolve(artifact, version)
    }
}

/// Cache laid out as `<root>/<artifact>/<tag>/<filename>`.
#[derive(Debug, Clone)]
pub struct DirectoryCache {
    root: PathBuf,
}

impl DirectoryCache {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Where an artifact version lives, whether or not it exists yet.
    #[must_use]
    pub fn location(&self, artifact: &str, version: &VersionReference) -> PathBuf {
        self.root
            .join(artifact)
            .join(&version.tag)
            .join(&version.filename)
    }
}

impl CacheLocator for DirectoryCache {
    fn resolve(&self, artifact: &str, version: &VersionReference) -> CoreResult<PathBuf> {
        let path = self.location(artifact, version);
        if path.is_file() {
            Ok(path)
        } else {
            Err(CoreError::ArtifactNotFound {
                artifact: artifact.to_string(),
                version: version.tag.clone(),
                path,
            })
        }
    }
}
