//! dreamassembler-core - Release model and collaborators for pack assembly
//!
//! This crate provides the types shared by the archive assembler and its callers:
//! - [`Side`] and [`ModSide`] for client/server targeting
//! - [`Release`] with its mods, config bundle and [`ExclusionSet`]
//! - [`CacheLocator`] for finding previously downloaded artifacts
//! - [`ProgressEvent`] and [`ProgressTracker`] for progress reporting
//! - [`AssemblerConfig`] for output locations and branding
//! - [`CoreError`] for error handling

mod cache;
mod config;
mod error;
mod exclusions;
mod progress;
mod release;
mod side;

pub use cache::{CacheLocator, DirectoryCache};
pub use config::{AssemblerConfig, Branding};
pub use error::{CoreError, CoreResult};
pub use exclusions::ExclusionSet;
pub use progress::{Cancelled, ProgressCallback, ProgressEvent, ProgressTracker};
pub use release::{ConfigBundle, ModReference, Release, ReleaseMod, VersionReference};
pub use side::{ModSide, Side};

/// Log levels understood by the logging setup and configuration files
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
    Off = 5,
}

impl LogLevel {
    pub fn from_u8(value: u8) -> Self {
        match value {
            0 => LogLevel::Trace,
            1 => LogLevel::Debug,
            2 => LogLevel::Info,
            3 => LogLevel::Warn,
            4 => LogLevel::Error,
            _ => LogLevel::Off,
        }
    }

    /// Parse a level name, ignoring ASCII case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "trace" => Some(LogLevel::Trace),
            "debug" => Some(LogLevel::Debug),
            "info" => Some(LogLevel::Info),
            "warn" | "warning" => Some(LogLevel::Warn),
            "error" => Some(LogLevel::Error),
            "off" => Some(LogLevel::Off),
            _ => None,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AssemblerConfig, CacheLocator, CoreError, CoreResult, ExclusionSet, LogLevel, ModSide,
        ProgressEvent, ProgressTracker, Release, Side,
    };
}
