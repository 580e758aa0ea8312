//! dreamassembler CLI - Modpack archive assembler
//!
//! Commands:
//! - `dreamassembler assemble` - Build client and server archives for a release
//! - `dreamassembler check` - Validate a release manifest
//! - `dreamassembler list` - Show the entries of an archive

use clap::{Parser, Subcommand};
use dreamassembler_bundle::ArchiveFormat;
use dreamassembler_core::{LogLevel, Side};
use dreamassembler_logging::{ReloadHandle, init_logging};
use std::path::PathBuf;
use tracing::warn;

mod assemble;
mod list;
mod manifest;
mod settings;

#[derive(Parser)]
#[command(name = "dreamassembler")]
#[command(author, version, about = "Assembles modpack release archives", long_about = None)]
struct Cli {
    /// Log level (trace, debug, info, warn, error, off); overrides the config file
    #[arg(long, global = true, value_parser = parse_log_level)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble archives for a release from the download cache
    Assemble {
        /// Path to the release manifest (TOML)
        #[arg(short, long)]
        release: PathBuf,

        /// Path to dreamassembler.toml (default: ./dreamassembler.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Archive format (plain, mmc)
        #[arg(short, long, default_value = "plain", value_parser = parse_format)]
        format: ArchiveFormat,

        /// Side to build (client, server, all)
        #[arg(short, long, default_value = "all", value_parser = parse_side_selection)]
        side: SideSelection,

        /// Root of the download cache
        #[arg(long)]
        cache_dir: Option<PathBuf>,

        /// Root of the output directories
        #[arg(short, long)]
        output_dir: Option<PathBuf>,
    },

    /// Validate a release manifest
    Check {
        /// Path to the release manifest (TOML)
        #[arg(short, long)]
        release: PathBuf,
    },

    /// List the entries of an archive with their digests
    List {
        /// Path to the archive
        archive: PathBuf,
    },
}

/// Which sides an `assemble` run builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideSelection {
    One(Side),
    All,
}

fn parse_log_level(value: &str) -> Result<LogLevel, String> {
    LogLevel::parse(value).ok_or_else(|| format!("unknown log level: {value}"))
}

fn parse_format(value: &str) -> Result<ArchiveFormat, String> {
    ArchiveFormat::parse(value).ok_or_else(|| format!("unknown archive format: {value}"))
}

fn parse_side_selection(value: &str) -> Result<SideSelection, String> {
    if value.eq_ignore_ascii_case("all") {
        return Ok(SideSelection::All);
    }
    Side::parse(value)
        .map(SideSelection::One)
        .ok_or_else(|| format!("unknown side: {value} (expected client, server or all)"))
}

/// Switch to the configured level, logging instead of failing if it cannot be applied.
fn apply_log_level(handle: &ReloadHandle, level: LogLevel) -> bool {
    match handle.reload_level(level) {
        Ok(()) => true,
        Err(err) => {
            warn!(error = %err, level = %level, "Could not apply configured log level");
            false
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_level.unwrap_or(LogLevel::Info));

    match cli.command {
        Commands::Assemble {
            release,
            config,
            format,
            side,
            cache_dir,
            output_dir,
        } => {
            let mut settings = settings::load(config.as_deref())?;
            settings::apply_overrides(&mut settings, cache_dir, output_dir);
            if cli.log_level.is_none() {
                apply_log_level(ReloadHandle::global(), settings.log_level()?);
            }
            assemble::run(&release, &settings, format, side)?;
        }
        Commands::Check { release } => {
            manifest::check(&release)?;
        }
        Commands::List { archive } => {
            list::run(&archive)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use clap::CommandFactory;

    #[test]
    fn Cli___definition___is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_side_selection___all_and_single_sides() {
        assert_eq!(parse_side_selection("all"), Ok(SideSelection::All));
        assert_eq!(parse_side_selection("ALL"), Ok(SideSelection::All));
        assert_eq!(
            parse_side_selection("client"),
            Ok(SideSelection::One(Side::Client))
        );
        assert_eq!(
            parse_side_selection("Server"),
            Ok(SideSelection::One(Side::Server))
        );
        assert!(parse_side_selection("both").is_err());
    }

    #[test]
    fn apply_log_level___uninitialized_handle___reports_failure() {
        let handle = ReloadHandle::new();

        assert!(!apply_log_level(&handle, LogLevel::Debug));
        assert_eq!(handle.current_level(), None);
    }

    #[test]
    fn parse_format___known_and_unknown() {
        assert_eq!(parse_format("mmc"), Ok(ArchiveFormat::MultiMc));
        assert_eq!(parse_format("plain"), Ok(ArchiveFormat::Plain));
        assert!(parse_format("tar").is_err());
    }

    #[test]
    fn Cli___parse___assemble_with_defaults() {
        let cli = Cli::try_parse_from(["dreamassembler", "assemble", "--release", "r.toml"]).unwrap();

        assert!(cli.log_level.is_none());
        match cli.command {
            Commands::Assemble { format, side, .. } => {
                assert_eq!(format, ArchiveFormat::Plain);
                assert_eq!(side, SideSelection::All);
            }
            _ => panic!("expected assemble"),
        }
    }

    #[test]
    fn Cli___parse___global_log_level_after_subcommand() {
        let cli = Cli::try_parse_from([
            "dreamassembler",
            "list",
            "pack.zip",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(cli.log_level, Some(LogLevel::Debug));
    }
}
