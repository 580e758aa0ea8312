//! Output archive conventions.

use crate::metadata::{LAUNCHER_TAG, MMC_PACK_FILE, MMC_PACK_JSON};
use crate::{ARCHIVE_EXTENSION, MODS_DIR};
use dreamassembler_core::{Branding, Side};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// Supported archive formats.
///
/// Each variant fixes a file name convention, where mods and configs go inside
/// the archive, and any metadata appended after the base archive is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArchiveFormat {
    /// Mods under `mods/`, configs at the archive root. Both sides.
    Plain,
    /// MultiMC/Prism instance: everything under `<root>/.minecraft/` plus
    /// `<root>/mmc-pack.json`. Client only.
    MultiMc,
}

/// A file appended to an archive after the base contents are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    /// Path within the archive.
    pub path: String,
    pub contents: &'static str,
}

/// Concrete names and prefixes for one archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatLayout {
    /// Archive file name, without directory.
    pub file_name: String,
    /// Prefix prepended to each mod's file name. Ends with `/`.
    pub mods_prefix: String,
    /// Prefix prepended to each config entry name. Empty or ends with `/`.
    pub config_prefix: String,
    pub metadata: Option<MetadataEntry>,
}

impl ArchiveFormat {
    /// Get the format key string (e.g., "plain").
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::MultiMc => "mmc",
        }
    }

    /// Parse a format from its string representation.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "plain" => Some(Self::Plain),
            "mmc" | "multimc" => Some(Self::MultiMc),
            _ => None,
        }
    }

    /// Get all formats.
    #[must_use]
    pub fn all() -> &'static [ArchiveFormat] {
        &[Self::Plain, Self::MultiMc]
    }

    /// Sides this format can be built for.
    #[must_use]
    pub fn sides(&self) -> &'static [Side] {
        match self {
            Self::Plain => Side::all(),
            Self::MultiMc => &[Side::Client],
        }
    }

    #[must_use]
    pub fn supports(&self, side: Side) -> bool {
        self.sides().contains(&side)
    }

    /// Directory under the output root that holds this format's archives.
    #[must_use]
    pub fn directory_name(&self) -> &'static str {
        match self {
            Self::Plain => "zip",
            Self::MultiMc => "mmc",
        }
    }

    /// This format's output directory below `output_root`.
    #[must_use]
    pub fn output_dir(&self, output_root: &Path) -> PathBuf {
        output_root.join(self.directory_name())
    }

    /// Folder every entry of the archive lives under, if any.
    #[must_use]
    pub fn archive_root(&self, branding: &Branding, version: &str) -> Option<String> {
        match self {
            Self::Plain => None,
            Self::MultiMc => Some(instance_root(branding, version)),
        }
    }

    /// Resolve names and prefixes for one archive.
    ///
    /// Does not check [`supports`](Self::supports); callers do that first.
    #[must_use]
    pub fn layout(&self, branding: &Branding, version: &str, side: Side) -> FormatLayout {
        match self {
            Self::Plain => FormatLayout {
                file_name: format!(
                    "{}-{side}-{version}.{ARCHIVE_EXTENSION}",
                    branding.pack_name
                ),
                mods_prefix: MODS_DIR.to_string(),
                config_prefix: String::new(),
                metadata: None,
            },
            Self::MultiMc => {
                let root = instance_root(branding, version);
                let game_dir = format!("{root}/.minecraft/");
                FormatLayout {
                    file_name: format!(
                        "{} {version} ({LAUNCHER_TAG}).{ARCHIVE_EXTENSION}",
                        branding.display_name
                    ),
                    mods_prefix: format!("{game_dir}{MODS_DIR}"),
                    config_prefix: game_dir,
                    metadata: Some(MetadataEntry {
                        path: format!("{root}/{MMC_PACK_FILE}"),
                        contents: MMC_PACK_JSON,
                    }),
                }
            }
        }
    }
}

fn instance_root(branding: &Branding, version: &str) -> String {
    format!("{} {version}", branding.display_name)
}

impl fmt::Display for ArchiveFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
