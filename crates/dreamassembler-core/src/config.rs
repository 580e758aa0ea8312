//! Assembler configuration types

use crate::{CoreError, CoreResult, LogLevel};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Names used when naming archives and their internal root folders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Branding {
    /// Compact pack name used in plain archive file names
    #[serde(default = "default_pack_name")]
    pub pack_name: String,

    /// Human-readable pack name used by the launcher format
    #[serde(default = "default_display_name")]
    pub display_name: String,
}

fn default_pack_name() -> String {
    "GTNewHorizons".to_string()
}

fn default_display_name() -> String {
    "GT New Horizons".to_string()
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            pack_name: default_pack_name(),
            display_name: default_display_name(),
        }
    }
}

/// Locations and naming used by an assembly run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssemblerConfig {
    /// Root of the download cache
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Root under which each archive format gets its own directory
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default)]
    pub branding: Branding,

    /// Initial log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from("cache")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("releases")
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AssemblerConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_cache_dir(),
            output_dir: default_output_dir(),
            branding: Branding::default(),
            log_level: default_log_level(),
        }
    }
}

impl AssemblerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> CoreResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Parsed log level
    pub fn log_level(&self) -> CoreResult<LogLevel> {
        LogLevel::parse(&self.log_level).ok_or_else(|| {
            CoreError::InvalidConfig(format!("unknown log level: {}", self.log_level))
        })
    }

    pub fn validate(&self) -> CoreResult<()> {
        if self.branding.pack_name.trim().is_empty() {
            return Err(CoreError::InvalidConfig("pack name is empty".to_string()));
        }
        if self.branding.display_name.trim().is_empty() {
            return Err(CoreError::InvalidConfig(
                "display name is empty".to_string(),
            ));
        }
        if self.branding.pack_name.contains(['/', '\\'])
            || self.branding.display_name.contains(['/', '\\'])
        {
            return Err(CoreError::InvalidConfig(
                "pack names must not contain path separators".to_string(),
            ));
        }
        self.log_level()?;
        Ok(())
    }
}
