//! Loading dreamassembler.toml

use anyhow::{Context, Result};
use dreamassembler_core::AssemblerConfig;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "dreamassembler.toml";

/// Load settings from `path`, or from `./dreamassembler.toml` if it exists.
///
/// An explicit path must exist. With no path and no default file, the
/// built-in defaults are used.
pub fn load(path: Option<&Path>) -> Result<AssemblerConfig> {
    let config = match path {
        Some(path) => from_file(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).is_file() => from_file(DEFAULT_CONFIG_FILE)?,
        None => AssemblerConfig::default(),
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

/// Parse settings from a TOML file
pub fn from_file(path: impl AsRef<Path>) -> Result<AssemblerConfig> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read config: {:?}", path.as_ref()))?;

    from_str(&content)
}

/// Parse settings from a TOML string
pub fn from_str(content: &str) -> Result<AssemblerConfig> {
    toml::from_str(content).context("Failed to parse config")
}

/// Command-line flags win over file values.
pub fn apply_overrides(
    config: &mut AssemblerConfig,
    cache_dir: Option<PathBuf>,
    output_dir: Option<PathBuf>,
) {
    if let Some(cache_dir) = cache_dir {
        config.cache_dir = cache_dir;
    }
    if let Some(output_dir) = output_dir {
        config.output_dir = output_dir;
    }
}

#[cfg(test)]
#[path = "settings/settings_tests.rs"]
mod settings_tests;
