//! Modpack archive assembly for DreamAssembler
//!
//! This crate turns a [`Release`](dreamassembler_core::Release) into one zip
//! archive per side. Mod jars are copied flat into the format's mods folder,
//! and the shared config bundle is unpacked into the format's config root with
//! the side's exclusions filtered out.
//!
//! # Archive Layouts
//!
//! ```text
//! zip/GTNewHorizons-CLIENT-2.7.0.zip         (ArchiveFormat::Plain)
//! ├── mods/
//! │   ├── NotEnoughItems-2.5.4.jar
//! │   └── ...
//! ├── config/...                               (config bundle, filtered)
//! └── scripts/...
//!
//! mmc/GT New Horizons 2.7.0 (MMC).zip         (ArchiveFormat::MultiMc, client only)
//! └── GT New Horizons 2.7.0/
//!     ├── mmc-pack.json
//!     └── .minecraft/
//!         ├── mods/...
//!         └── config/...
//! ```
//!
//! # Example
//!
//! ```no_run
//! use dreamassembler_bundle::{ArchiveBuilder, ArchiveFormat};
//! use dreamassembler_core::{DirectoryCache, Release, Side};
//!
//! # fn load_release() -> Release { unimplemented!() }
//! let release = load_release();
//! let builder = ArchiveBuilder::new(&release, DirectoryCache::new("cache"))
//!     .with_output_dir("releases");
//!
//! let archive = builder.assemble(ArchiveFormat::Plain, Side::Server, None)?;
//! println!("wrote {}", archive.display());
//! # Ok::<(), dreamassembler_bundle::AssembleError>(())
//! ```

mod error;
mod format;
mod metadata;

pub mod builder;
pub mod reader;

pub use builder::ArchiveBuilder;
pub use error::AssembleError;
pub use format::{ArchiveFormat, FormatLayout, MetadataEntry};
pub use metadata::{LAUNCHER_TAG, MMC_PACK_FILE, MMC_PACK_JSON};
pub use reader::{ArchiveReader, EntryInfo};

/// Result type for assembly operations.
pub type AssembleResult<T> = Result<T, AssembleError>;

/// Archive file extension.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// Folder holding mod jars inside the game directory.
pub const MODS_DIR: &str = "mods/";
