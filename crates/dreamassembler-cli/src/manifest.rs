//! Release manifest loading and validation

use anyhow::{Context, Result};
use dreamassembler_core::{Release, Side};
use std::path::Path;

/// Load and validate a release manifest from a TOML file
pub fn load_release(path: impl AsRef<Path>) -> Result<Release> {
    let content = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("Failed to read release manifest: {:?}", path.as_ref()))?;

    let release = parse_release(&content)?;
    release
        .validate()
        .with_context(|| format!("Invalid release manifest: {:?}", path.as_ref()))?;
    Ok(release)
}

/// Parse a release manifest without validating it
pub fn parse_release(content: &str) -> Result<Release> {
    toml::from_str(content).context("Failed to parse release manifest")
}

/// Check command implementation
pub fn check(path: &Path) -> Result<()> {
    println!("Checking release manifest: {}", path.display());

    let release = load_release(path)?;

    println!("✓ Release: {}", release.version);
    println!(
        "✓ Config: {} {} ({})",
        release.config.name, release.config.version.tag, release.config.version.filename
    );
    println!("✓ Mods: {}", release.mods.len());
    for side in Side::all() {
        println!(
            "  {side}: {} mods, {} excluded config entries",
            release.mods_for(*side).count(),
            release.exclusions.for_side(*side).len()
        );
    }
    println!("\nRelease manifest is valid!");

    Ok(())
}

#[cfg(test)]
#[path = "manifest/manifest_tests.rs"]
mod manifest_tests;
