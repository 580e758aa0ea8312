//! Subscriber setup for console output

use crate::reload::{ReloadHandle, convert_level_to_filter};
use dreamassembler_core::LogLevel;
use tracing_subscriber::{fmt, reload};

/// Initialize the logging system at `level`, writing to stderr.
///
/// Call this once at startup; later calls leave the installed subscriber in
/// place and return `false`. The level can be changed afterwards through
/// [`ReloadHandle::global`].
pub fn init_logging(level: LogLevel) -> bool {
    use tracing_subscriber::prelude::*;

    let (filter, handle) = reload::Layer::new(convert_level_to_filter(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer());

    // Ignore the error if a global subscriber is already set
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }

    ReloadHandle::global().set_handle(handle, level);
    true
}

fn console_layer<S>() -> impl tracing_subscriber::Layer<S>
where
    S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
{
    fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
}
