//! List command implementation

use anyhow::{Context, Result};
use dreamassembler_bundle::ArchiveReader;
use std::path::Path;

/// List the contents of an archive.
pub fn run(archive_path: &Path) -> Result<()> {
    let mut reader = ArchiveReader::open(archive_path)
        .with_context(|| format!("Failed to open: {}", archive_path.display()))?;

    let entries = reader
        .entries()
        .with_context(|| format!("Failed to read: {}", archive_path.display()))?;

    println!("Archive: {}", archive_path.display());
    println!("Entries: {}", entries.len());

    println!("\nFiles:");
    for entry in &entries {
        match &entry.sha256 {
            Some(digest) => println!("  {digest}  {:>10}  {}", entry.size, entry.name),
            None => println!("  {:<64}  {:>10}  {}", "-", "", entry.name),
        }
    }

    Ok(())
}
