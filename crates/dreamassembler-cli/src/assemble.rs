//! Assemble command implementation

use crate::SideSelection;
use crate::manifest::load_release;
use anyhow::{Context, Result};
use dreamassembler_bundle::{ArchiveBuilder, ArchiveFormat, AssembleError};
use dreamassembler_core::{
    AssemblerConfig, Cancelled, DirectoryCache, ProgressEvent, ProgressTracker, Side,
};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Assemble the selected sides of a release and return the written archives.
pub fn run(
    release_path: &Path,
    config: &AssemblerConfig,
    format: ArchiveFormat,
    selection: SideSelection,
) -> Result<Vec<PathBuf>> {
    let release = load_release(release_path)?;

    let output_dir = format.output_dir(&config.output_dir);
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir.display()))?;

    let builder = ArchiveBuilder::new(&release, DirectoryCache::new(&config.cache_dir))
        .with_output_dir(&config.output_dir)
        .with_branding(config.branding.clone());

    let sides: Vec<Side> = match selection {
        SideSelection::One(side) => vec![side],
        SideSelection::All => format.sides().to_vec(),
    };

    println!("Assembling {} {format} release {}", release.config.name, release.version);

    let mut written = Vec::with_capacity(sides.len());
    for side in sides {
        let destination = builder
            .archive_path(format, side)
            .with_context(|| format!("Cannot build {side} archive"))?;

        let mut tracker = ProgressTracker::new();
        let mut on_progress = |event: &ProgressEvent| {
            println!("  {}", tracker.apply(event));
            Ok::<(), Cancelled>(())
        };

        match builder.assemble(format, side, Some(&mut on_progress)) {
            Ok(path) => {
                println!("✓ {side}: {}", path.display());
                written.push(path);
            }
            Err(err) => {
                if wrote_partial_archive(&err) {
                    remove_partial(&destination);
                }
                return Err(err).with_context(|| format!("Failed to assemble {side} archive"));
            }
        }
    }

    info!(archives = written.len(), "Assembly finished");
    Ok(written)
}

/// Errors raised once the destination file has been created.
///
/// Earlier failures leave any archive from a previous run untouched.
fn wrote_partial_archive(err: &AssembleError) -> bool {
    matches!(
        err,
        AssembleError::Io(_) | AssembleError::Zip(_) | AssembleError::Cancelled(_)
    )
}

fn remove_partial(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => warn!(path = %path.display(), "Removed partial archive"),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
        Err(err) => warn!(path = %path.display(), error = %err, "Could not remove partial archive"),
    }
}
