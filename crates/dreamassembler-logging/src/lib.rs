//! dreamassembler-logging - Console logging for the assembler
//!
//! This crate provides:
//! - [`init_logging`] to install a stderr subscriber at a given level
//! - [`ReloadHandle`] to change that level after startup

mod layer;
mod reload;

pub use dreamassembler_core::LogLevel;
pub use layer::init_logging;
pub use reload::ReloadHandle;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{LogLevel, ReloadHandle, init_logging};
}
