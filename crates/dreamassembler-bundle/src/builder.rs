//! Archive assembly.
//!
//! The [`ArchiveBuilder`] writes one side's archive for a release: the side's
//! mod jars first, in manifest order, then every config-bundle entry that is
//! not excluded for that side, in the bundle's own order.

use crate::{ArchiveFormat, AssembleError, AssembleResult, FormatLayout, MetadataEntry};
use dreamassembler_core::{
    Branding, CacheLocator, ProgressCallback, ProgressEvent, Release, ReleaseMod, Side,
};
use std::collections::HashSet;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use zip::write::SimpleFileOptions;
use zip::{DateTime, ZipArchive, ZipWriter};

/// Builder for modpack archives.
///
/// Bound to one release and one cache. Holds no state between calls, so the
/// client and server archives can be built one after the other from the same
/// builder.
///
/// # Example
///
/// ```no_run
/// use dreamassembler_bundle::{ArchiveBuilder, ArchiveFormat};
/// use dreamassembler_core::{
///     Cancelled, DirectoryCache, ProgressEvent, ProgressTracker, Release, Side,
/// };
///
/// # fn load_release() -> Release { unimplemented!() }
/// let release = load_release();
/// let builder = ArchiveBuilder::new(&release, DirectoryCache::new("cache"))
///     .with_output_dir("releases");
///
/// let mut tracker = ProgressTracker::new();
/// let mut report = |event: &ProgressEvent| {
///     println!("{}", tracker.apply(event));
///     Ok::<(), Cancelled>(())
/// };
/// builder.assemble(ArchiveFormat::MultiMc, Side::Client, Some(&mut report))?;
/// # Ok::<(), dreamassembler_bundle::AssembleError>(())
/// ```
pub struct ArchiveBuilder<'r, L> {
    release: &'r Release,
    locator: L,
    output_root: PathBuf,
    branding: Branding,
}

/// A mod resolved to its cached file.
struct PlannedMod<'r> {
    entry: &'r ReleaseMod,
    source: PathBuf,
    /// Entry name inside the mods folder, taken from `source`.
    file_name: String,
}

impl<'r, L: CacheLocator> ArchiveBuilder<'r, L> {
    /// Create a builder writing below the current directory with default branding.
    pub fn new(release: &'r Release, locator: L) -> Self {
        Self {
            release,
            locator,
            output_root: PathBuf::from("."),
            branding: Branding::default(),
        }
    }

    /// Set the output root. Each format writes into its own directory below it.
    #[must_use]
    pub fn with_output_dir(mut self, output_root: impl Into<PathBuf>) -> Self {
        self.output_root = output_root.into();
        self
    }

    #[must_use]
    pub fn with_branding(mut self, branding: Branding) -> Self {
        self.branding = branding;
        self
    }

    #[must_use]
    pub fn release(&self) -> &Release {
        self.release
    }

    /// Destination of the archive for `format` and `side`.
    pub fn archive_path(&self, format: ArchiveFormat, side: Side) -> AssembleResult<PathBuf> {
        ensure_supported(format, side)?;
        Ok(self.destination(format, &self.layout(format, side)))
    }

    /// Write the archive for `format` and `side` and return its path.
    ///
    /// The destination directory must already exist. On error the destination
    /// may hold a partial archive; callers should delete it.
    pub fn assemble(
        &self,
        format: ArchiveFormat,
        side: Side,
        mut progress: Option<ProgressCallback<'_>>,
    ) -> AssembleResult<PathBuf> {
        ensure_supported(format, side)?;
        self.release.validate()?;

        let layout = self.layout(format, side);
        let mods = self.plan_mods(side, &layout)?;
        let config_source = self
            .locator
            .resolve(&self.release.config.name, &self.release.config.version)?;
        let destination = self.destination(format, &layout);

        info!(
            format = %format,
            side = %side,
            version = %self.release.version,
            mods = mods.len(),
            path = %destination.display(),
            "Assembling archive"
        );

        let options = entry_options();
        let delta = 100.0 / (mods.len() + 1) as f64;
        let mut zip = ZipWriter::new(File::create(&destination)?);

        for planned in &mods {
            let filename = &planned.file_name;
            report(&mut progress, self.step_event(side, delta, filename))?;

            let archive_path = format!("{}{filename}", layout.mods_prefix);
            debug!(mod_name = %planned.entry.info.name, %archive_path, "Adding mod");
            zip.start_file(archive_path, options)?;
            let mut source = File::open(&planned.source)?;
            io::copy(&mut source, &mut zip)?;
        }

        report(
            &mut progress,
            self.step_event(side, delta, &self.release.config.version.filename),
        )?;
        self.copy_config(side, &config_source, &layout, &mut zip)?;

        zip.finish()?;

        if let Some(metadata) = &layout.metadata {
            append_metadata(&destination, metadata)?;
        }

        info!(path = %destination.display(), "Archive written");
        Ok(destination)
    }

    /// Build every side `format` supports, each as an independent run.
    pub fn assemble_all(
        &self,
        format: ArchiveFormat,
        mut progress: Option<ProgressCallback<'_>>,
    ) -> AssembleResult<Vec<PathBuf>> {
        let mut written = Vec::new();
        for side in format.sides() {
            let callback: Option<ProgressCallback<'_>> = match progress.as_mut() {
                Some(callback) => Some(&mut **callback),
                None => None,
            };
            written.push(self.assemble(format, *side, callback)?);
        }
        Ok(written)
    }

    fn layout(&self, format: ArchiveFormat, side: Side) -> FormatLayout {
        format.layout(&self.branding, &self.release.version, side)
    }

    fn destination(&self, format: ArchiveFormat, layout: &FormatLayout) -> PathBuf {
        format.output_dir(&self.output_root).join(&layout.file_name)
    }

    /// Resolve every mod for `side` before anything is written.
    fn plan_mods(&self, side: Side, layout: &FormatLayout) -> AssembleResult<Vec<PlannedMod<'r>>> {
        let release: &'r Release = self.release;
        let mut seen = HashSet::new();
        let mut planned = Vec::new();

        for entry in release.mods_for(side) {
            let source = self.locator.resolve(&entry.info.name, &entry.version)?;
            let file_name = source
                .file_name()
                .and_then(|name| name.to_str())
                .map(String::from)
                .ok_or_else(|| {
                    AssembleError::InvalidPath(format!(
                        "{} resolved to {}, which has no usable file name",
                        entry.info.name,
                        source.display()
                    ))
                })?;
            if !seen.insert(file_name.clone()) {
                return Err(AssembleError::InvalidPath(format!(
                    "{}{file_name} would be written twice",
                    layout.mods_prefix
                )));
            }
            planned.push(PlannedMod {
                entry,
                source,
                file_name,
            });
        }

        Ok(planned)
    }

    fn copy_config<W: Write + io::Seek>(
        &self,
        side: Side,
        config_source: &Path,
        layout: &FormatLayout,
        zip: &mut ZipWriter<W>,
    ) -> AssembleResult<()> {
        let mut config = ZipArchive::new(File::open(config_source)?)?;
        let exclusions = &self.release.exclusions;
        let mut skipped = 0usize;

        for index in 0..config.len() {
            let entry = config.by_index_raw(index)?;
            let name = entry.name().to_string();

            if exclusions.is_excluded(side, &name) {
                debug!(entry = %name, side = %side, "Skipping excluded config entry");
                skipped += 1;
                continue;
            }

            let target = format!("{}{name}", layout.config_prefix);
            if name.ends_with('/') {
                zip.add_directory(target, entry_options())?;
            } else {
                zip.raw_copy_file_rename(entry, target)?;
            }
        }

        debug!(
            entries = config.len(),
            skipped,
            source = %config_source.display(),
            "Config bundle copied"
        );
        Ok(())
    }

    fn step_event(&self, side: Side, delta: f64, filename: &str) -> ProgressEvent {
        ProgressEvent::new(
            delta,
            format!(
                "Packing {side} archive version {}: {filename}. Progress: {{0}}%",
                self.release.version
            ),
        )
    }
}

fn ensure_supported(format: ArchiveFormat, side: Side) -> AssembleResult<()> {
    if format.supports(side) {
        Ok(())
    } else {
        Err(AssembleError::UnsupportedSide { format, side })
    }
}

fn report(progress: &mut Option<ProgressCallback<'_>>, event: ProgressEvent) -> AssembleResult<()> {
    if let Some(callback) = progress.as_deref_mut() {
        callback(&event)?;
    }
    Ok(())
}

/// Options for entries the builder writes itself.
///
/// The timestamp is pinned so that rebuilding an unchanged release gives a
/// byte-identical archive.
fn entry_options() -> SimpleFileOptions {
    SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated)
        .last_modified_time(DateTime::default())
}

/// Reopen a finished archive and add one metadata file to it.
fn append_metadata(destination: &Path, metadata: &MetadataEntry) -> AssembleResult<()> {
    let file = OpenOptions::new().read(true).write(true).open(destination)?;
    let mut zip = ZipWriter::new_append(file)?;
    zip.start_file(metadata.path.as_str(), entry_options())?;
    zip.write_all(metadata.contents.as_bytes())?;
    zip.finish()?;
    debug!(entry = %metadata.path, "Appended metadata");
    Ok(())
}

/// Compute SHA256 hash of data and return as hex string.
pub fn compute_sha256(data: &[u8]) -> String {
    use sha2::{Digest, Sha256};

    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}
