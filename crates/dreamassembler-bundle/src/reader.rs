//! Archive inspection.
//!
//! The [`ArchiveReader`] opens an assembled archive (or a config bundle) and
//! reports what is inside.

use crate::builder::compute_sha256;
use crate::{AssembleError, AssembleResult};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use zip::ZipArchive;

/// Reader for zip archives produced by the builder.
///
/// # Example
///
/// ```no_run
/// use dreamassembler_bundle::ArchiveReader;
///
/// let mut reader = ArchiveReader::open("releases/zip/GTNewHorizons-CLIENT-2.7.0.zip")?;
/// for entry in reader.entries()? {
///     println!("{} {}", entry.name, entry.sha256.as_deref().unwrap_or("-"));
/// }
/// # Ok::<(), dreamassembler_bundle::AssembleError>(())
/// ```
#[derive(Debug)]
pub struct ArchiveReader {
    archive: ZipArchive<File>,
}

/// Summary of one archive entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    pub is_dir: bool,
    /// Uncompressed size in bytes.
    pub size: u64,
    /// SHA256 of the uncompressed contents; `None` for directories.
    pub sha256: Option<String>,
}

impl ArchiveReader {
    /// Open an archive for reading.
    pub fn open<P: AsRef<Path>>(path: P) -> AssembleResult<Self> {
        let file = File::open(path.as_ref())?;
        let archive = ZipArchive::new(file)?;
        Ok(Self { archive })
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.archive.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.archive.len() == 0
    }

    /// List all entry names in archive order.
    #[must_use]
    pub fn list_files(&self) -> Vec<String> {
        (0..self.archive.len())
            .filter_map(|i| self.archive.name_for_index(i).map(String::from))
            .collect()
    }

    /// Check if an entry exists.
    #[must_use]
    pub fn has_file(&self, path: &str) -> bool {
        self.archive.index_for_name(path).is_some()
    }

    /// Check if an entry exists and is a directory marker.
    pub fn is_dir(&mut self, path: &str) -> bool {
        self.archive
            .by_name(path)
            .map(|entry| entry.is_dir())
            .unwrap_or(false)
    }

    /// Read an entry as bytes.
    pub fn read_file(&mut self, path: &str) -> AssembleResult<Vec<u8>> {
        let mut file = self
            .archive
            .by_name(path)
            .map_err(|_| AssembleError::MissingFile(format!("File not found in archive: {path}")))?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)?;
        Ok(contents)
    }

    /// Read an entry as a string.
    pub fn read_file_string(&mut self, path: &str) -> AssembleResult<String> {
        let mut file = self
            .archive
            .by_name(path)
            .map_err(|_| AssembleError::MissingFile(format!("File not found in archive: {path}")))?;

        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        Ok(contents)
    }

    /// Describe every entry in archive order.
    pub fn entries(&mut self) -> AssembleResult<Vec<EntryInfo>> {
        let mut entries = Vec::with_capacity(self.archive.len());
        for index in 0..self.archive.len() {
            let mut file = self.archive.by_index(index)?;
            let is_dir = file.is_dir();
            let sha256 = if is_dir {
                None
            } else {
                let mut contents = Vec::new();
                file.read_to_end(&mut contents)?;
                Some(compute_sha256(&contents))
            };
            entries.push(EntryInfo {
                name: file.name().to_string(),
                is_dir,
                size: file.size(),
                sha256,
            });
        }
        Ok(entries)
    }
}
