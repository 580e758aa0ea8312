#![allow(non_snake_case)]

use super::*;
use dreamassembler_core::ModSide;
use std::fs;
use tempfile::TempDir;

const RELEASE_TOML: &str = r#"
version = "2.7.0"

[config]
name = "GT-New-Horizons-Modpack"
version = { tag = "2.7.0", filename = "GT-New-Horizons-Modpack-2.7.0.zip" }

[exclusions]
client = ["serverutilities/serverutilities.cfg"]
server = ["journeymap/"]

[[mods]]
name = "NotEnoughItems"
side = "BOTH"
license = "LGPL-3.0"
version = { tag = "2.5.4", filename = "NotEnoughItems-2.5.4.jar" }

[[mods]]
name = "journeymap"
side = "CLIENT"
version = { tag = "5.2.6", filename = "journeymap-1.7.10-5.2.6.jar" }

[[mods]]
name = "ServerUtilities"
side = "SERVER"
version = { tag = "2.0.60", filename = "ServerUtilities-2.0.60.jar" }
"#;

// Release manifest parsing tests

#[test]
fn parse_release___full_manifest___reads_every_section() {
    let release = parse_release(RELEASE_TOML).unwrap();

    assert_eq!(release.version, "2.7.0");
    assert_eq!(release.config.name, "GT-New-Horizons-Modpack");
    assert_eq!(release.config.version.tag, "2.7.0");
    assert_eq!(release.mods.len(), 3);
    assert_eq!(release.mods[0].info.side, ModSide::Both);
    assert_eq!(release.mods[0].info.license.as_deref(), Some("LGPL-3.0"));
    assert_eq!(release.mods[1].info.license, None);
    assert_eq!(release.mods[2].version.filename, "ServerUtilities-2.0.60.jar");
    assert!(release.exclusions.is_excluded(Side::Client, "serverutilities/serverutilities.cfg"));
    assert!(release.exclusions.is_excluded(Side::Server, "journeymap/"));
}

#[test]
fn parse_release___no_mods_or_exclusions___defaults_to_empty() {
    let toml = r#"
version = "2.7.0"

[config]
name = "pack-config"
version = { tag = "2.7.0", filename = "pack-config.zip" }
"#;

    let release = parse_release(toml).unwrap();

    assert!(release.mods.is_empty());
    assert!(release.exclusions.is_empty());
}

#[test]
fn parse_release___unknown_side___returns_error() {
    let toml = RELEASE_TOML.replace("side = \"CLIENT\"", "side = \"NEITHER\"");

    let result = parse_release(&toml);

    assert!(result.is_err());
}

#[test]
fn parse_release___missing_config___returns_error() {
    let result = parse_release("version = \"2.7.0\"\n");

    assert!(result.is_err());
}

// Loading and checking from disk

#[test]
fn load_release___valid_file___returns_release() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("release.toml");
    fs::write(&path, RELEASE_TOML).unwrap();

    let release = load_release(&path).unwrap();

    assert_eq!(release.mods_for(Side::Client).count(), 2);
    assert_eq!(release.mods_for(Side::Server).count(), 2);
}

#[test]
fn load_release___duplicate_mod___fails_validation() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("release.toml");
    let toml = RELEASE_TOML.replace("name = \"journeymap\"", "name = \"NotEnoughItems\"");
    fs::write(&path, toml).unwrap();

    let result = load_release(&path);

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Invalid release manifest"), "{message}");
}

#[test]
fn load_release___missing_file___returns_error() {
    let result = load_release("/nonexistent/release.toml");

    assert!(result.is_err());
}

#[test]
fn check___valid_file___succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("release.toml");
    fs::write(&path, RELEASE_TOML).unwrap();

    check(&path).unwrap();
}

#[test]
fn check___empty_version___fails() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("release.toml");
    fs::write(&path, RELEASE_TOML.replacen("version = \"2.7.0\"", "version = \"\"", 1)).unwrap();

    assert!(check(&path).is_err());
}
