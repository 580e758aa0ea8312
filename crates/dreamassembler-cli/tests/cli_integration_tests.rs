//! Integration tests for the dreamassembler binary.
//!
//! Runs the built executable against a release laid out in a temp dir.

#![allow(non_snake_case)]

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

const RELEASE_TOML: &str = r#"
version = "2.7.0"

[config]
name = "pack-config"
version = { tag = "2.7.0", filename = "pack-config-2.7.0.zip" }

[exclusions]
client = ["sub/b.cfg"]

[[mods]]
name = "A"
side = "BOTH"
version = { tag = "v1", filename = "A.jar" }

[[mods]]
name = "B"
side = "CLIENT"
version = { tag = "v2", filename = "B.jar" }

[[mods]]
name = "C"
side = "SERVER"
version = { tag = "v3", filename = "C.jar" }
"#;

fn dreamassembler(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dreamassembler"))
        .args(args)
        .current_dir(cwd)
        .output()
        .unwrap()
}

/// Helper to write a file into the cache layout.
fn cache_file(root: &Path, artifact: &str, tag: &str, filename: &str) -> PathBuf {
    let path = root.join(artifact).join(tag).join(filename);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    path
}

fn setup(temp_dir: &TempDir) -> PathBuf {
    let cache = temp_dir.path().join("cache");
    for (name, tag) in [("A", "v1"), ("B", "v2"), ("C", "v3")] {
        fs::write(cache_file(&cache, name, tag, &format!("{name}.jar")), name).unwrap();
    }

    let bundle = cache_file(&cache, "pack-config", "2.7.0", "pack-config-2.7.0.zip");
    let mut zip = ZipWriter::new(File::create(bundle).unwrap());
    zip.start_file("configA.cfg", SimpleFileOptions::default()).unwrap();
    zip.write_all(b"a").unwrap();
    zip.add_directory("sub/", SimpleFileOptions::default()).unwrap();
    zip.start_file("sub/b.cfg", SimpleFileOptions::default()).unwrap();
    zip.write_all(b"b").unwrap();
    zip.finish().unwrap();

    let release = temp_dir.path().join("release.toml");
    fs::write(&release, RELEASE_TOML).unwrap();
    release
}

#[test]
fn assemble___default_locations___writes_both_plain_archives() {
    let temp_dir = TempDir::new().unwrap();
    setup(&temp_dir);

    let output = dreamassembler(&["assemble", "--release", "release.toml"], temp_dir.path());

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let zip_dir = temp_dir.path().join("releases").join("zip");
    assert!(zip_dir.join("GTNewHorizons-CLIENT-2.7.0.zip").is_file());
    assert!(zip_dir.join("GTNewHorizons-SERVER-2.7.0.zip").is_file());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Progress: 100.00%"), "{stdout}");
}

#[test]
fn assemble___config_file_and_flags___flags_win() {
    let temp_dir = TempDir::new().unwrap();
    setup(&temp_dir);
    fs::write(
        temp_dir.path().join("dreamassembler.toml"),
        "output_dir = \"from-file\"\n\n[branding]\ndisplay_name = \"Test Pack\"\n",
    )
    .unwrap();

    let output = dreamassembler(
        &[
            "assemble",
            "--release",
            "release.toml",
            "--format",
            "mmc",
            "--output-dir",
            "from-flag",
        ],
        temp_dir.path(),
    );

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    assert!(
        temp_dir
            .path()
            .join("from-flag/mmc/Test Pack 2.7.0 (MMC).zip")
            .is_file()
    );
    assert!(!temp_dir.path().join("from-file").exists());
}

#[test]
fn assemble___missing_cache___fails() {
    let temp_dir = TempDir::new().unwrap();
    setup(&temp_dir);

    let output = dreamassembler(
        &["assemble", "--release", "release.toml", "--cache-dir", "elsewhere"],
        temp_dir.path(),
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("artifact not found in cache"), "{stderr}");
}

#[test]
fn check___valid_release___succeeds() {
    let temp_dir = TempDir::new().unwrap();
    setup(&temp_dir);

    let output = dreamassembler(&["check", "--release", "release.toml"], temp_dir.path());

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("Release manifest is valid"));
}

#[test]
fn list___assembled_archive___shows_entries() {
    let temp_dir = TempDir::new().unwrap();
    setup(&temp_dir);
    let assembled = dreamassembler(
        &["assemble", "--release", "release.toml", "--side", "server"],
        temp_dir.path(),
    );
    assert!(assembled.status.success());

    let output = dreamassembler(
        &["list", "releases/zip/GTNewHorizons-SERVER-2.7.0.zip"],
        temp_dir.path(),
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("mods/C.jar"), "{stdout}");
    assert!(stdout.contains("sub/b.cfg"), "{stdout}");
    assert!(!stdout.contains("mods/B.jar"), "{stdout}");
}

#[test]
fn list___missing_archive___fails() {
    let temp_dir = TempDir::new().unwrap();

    let output = dreamassembler(&["list", "nope.zip"], temp_dir.path());

    assert!(!output.status.success());
}
