//! Release manifest consumed by the assembler.
//!
//! A release pins one version of every mod plus one version of the shared
//! config bundle. It is produced elsewhere (release resolution, manifest
//! editing) and only read here.

use crate::{CoreError, CoreResult, ExclusionSet, ModSide, Side};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One resolved version of a mod or of the config bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionReference {
    /// Version tag (e.g., "2.5.4").
    pub tag: String,

    /// File name of the downloaded artifact (e.g., "NotEnoughItems-2.5.4.jar").
    pub filename: String,
}

impl VersionReference {
    pub fn new(tag: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            filename: filename.into(),
        }
    }
}

/// Identity of a mod in the modpack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModReference {
    /// Mod name, unique within a release.
    pub name: String,

    /// Which archives the mod goes into.
    pub side: ModSide,

    /// License identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Source repository URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
}

impl ModReference {
    pub fn new(name: impl Into<String>, side: ModSide) -> Self {
        Self {
            name: name.into(),
            side,
            license: None,
            repo_url: None,
        }
    }
}

/// A mod pinned to one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseMod {
    #[serde(flatten)]
    pub info: ModReference,

    pub version: VersionReference,
}

/// The config bundle pinned to one version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigBundle {
    /// Artifact name used for cache lookup.
    pub name: String,

    pub version: VersionReference,
}

impl ConfigBundle {
    pub fn new(name: impl Into<String>, version: VersionReference) -> Self {
        Self {
            name: name.into(),
            version,
        }
    }
}

/// Top-level manifest for one assembly run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Modpack version (e.g., "2.7.0").
    pub version: String,

    pub config: ConfigBundle,

    #[serde(default)]
    pub exclusions: ExclusionSet,

    /// Mods in manifest order.
    #[serde(default)]
    pub mods: Vec<ReleaseMod>,
}

impl Release {
    /// Create a release with no mods and no exclusions.
    pub fn new(version: impl Into<String>, config: ConfigBundle) -> Self {
        Self {
            version: version.into(),
            config,
            exclusions: ExclusionSet::default(),
            mods: Vec::new(),
        }
    }

    /// Append a mod, keeping manifest order.
    #[must_use]
    pub fn with_mod(mut self, info: ModReference, version: VersionReference) -> Self {
        self.mods.push(ReleaseMod { info, version });
        self
    }

    #[must_use]
    pub fn with_exclusions(mut self, exclusions: ExclusionSet) -> Self {
        self.exclusions = exclusions;
        self
    }

    /// Mods that belong in the archive for `side`, in manifest order.
    pub fn mods_for(&self, side: Side) -> impl Iterator<Item = &ReleaseMod> {
        self.mods.iter().filter(move |m| m.info.side.includes(side))
    }

    /// Parse a release from JSON.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the release to pretty JSON.
    pub fn to_json(&self) -> CoreResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check that the release can be assembled.
    pub fn validate(&self) -> CoreResult<()> {
        if self.version.trim().is_empty() {
            return Err(CoreError::InvalidRelease(
                "release version is empty".to_string(),
            ));
        }

        if self.config.name.is_empty() {
            return Err(CoreError::InvalidRelease(
                "config bundle name is empty".to_string(),
            ));
        }
        validate_version(&self.config.name, &self.config.version)?;

        let mut seen = HashSet::new();
        for entry in &self.mods {
            let name = &entry.info.name;
            if name.is_empty() {
                return Err(CoreError::InvalidRelease("mod name is empty".to_string()));
            }
            if !seen.insert(name.as_str()) {
                return Err(CoreError::InvalidRelease(format!(
                    "mod '{name}' is listed more than once"
                )));
            }
            validate_version(name, &entry.version)?;
            if entry.version.filename.contains(['/', '\\']) {
                return Err(CoreError::InvalidRelease(format!(
                    "mod '{name}' has a file name with a path separator: {}",
                    entry.version.filename
                )));
            }
        }

        Ok(())
    }
}

fn validate_version(artifact: &str, version: &VersionReference) -> CoreResult<()> {
    if version.tag.is_empty() {
        return Err(CoreError::InvalidRelease(format!(
            "'{artifact}' has an empty version tag"
        )));
    }
    if version.filename.is_empty() {
        return Err(CoreError::InvalidRelease(format!(
            "'{artifact}' {} has an empty file name",
            version.tag
        )));
    }
    Ok(())
}
