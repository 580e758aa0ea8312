#![allow(non_snake_case)]

use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn from_str___full_file___reads_every_field() {
    let toml = r#"
cache_dir = "/srv/gtnh/cache"
output_dir = "/srv/gtnh/releases"
log_level = "debug"

[branding]
pack_name = "MyPack"
display_name = "My Pack"
"#;

    let config = from_str(toml).unwrap();

    assert_eq!(config.cache_dir, PathBuf::from("/srv/gtnh/cache"));
    assert_eq!(config.output_dir, PathBuf::from("/srv/gtnh/releases"));
    assert_eq!(config.log_level, "debug");
    assert_eq!(config.branding.pack_name, "MyPack");
    assert_eq!(config.branding.display_name, "My Pack");
}

#[test]
fn from_str___empty_file___uses_defaults() {
    let config = from_str("").unwrap();

    assert_eq!(config, AssemblerConfig::default());
}

#[test]
fn from_str___partial_branding___keeps_other_default() {
    let config = from_str("[branding]\npack_name = \"Other\"\n").unwrap();

    assert_eq!(config.branding.pack_name, "Other");
    assert_eq!(config.branding.display_name, "GT New Horizons");
}

#[test]
fn from_str___invalid_toml___returns_error() {
    let result = from_str("cache_dir = [");

    assert!(result.is_err());
}

#[test]
fn load___explicit_missing_file___returns_error() {
    let temp_dir = TempDir::new().unwrap();

    let path = temp_dir.path().join("missing.toml");

    let result = load(Some(path.as_path()));

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("Failed to read config"), "{message}");
}

#[test]
fn load___explicit_file___validates() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("dreamassembler.toml");
    fs::write(&path, "log_level = \"loud\"\n").unwrap();

    let result = load(Some(path.as_path()));

    let message = format!("{:#}", result.unwrap_err());
    assert!(message.contains("unknown log level"), "{message}");
}

#[test]
fn apply_overrides___only_given_flags_change() {
    let mut config = AssemblerConfig::default();

    apply_overrides(&mut config, None, Some(PathBuf::from("out")));

    assert_eq!(config.cache_dir, PathBuf::from("cache"));
    assert_eq!(config.output_dir, PathBuf::from("out"));
}
