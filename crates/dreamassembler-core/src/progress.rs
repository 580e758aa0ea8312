//! Progress reporting
//!
//! The assembler emits a stream of [`ProgressEvent`]s through a callback passed
//! in for one call. It keeps no running total; callers that display a
//! percentage accumulate the deltas themselves, usually with a
//! [`ProgressTracker`].

use thiserror::Error;

/// Placeholder in [`ProgressEvent::label`] that is replaced with the
/// accumulated percentage.
pub const PERCENT_PLACEHOLDER: &str = "{0}";

/// One step of progress.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressEvent {
    /// Percentage points completed by this step.
    pub delta: f64,

    /// Human-readable label containing one `{0}` placeholder.
    pub label: String,
}

impl ProgressEvent {
    pub fn new(delta: f64, label: impl Into<String>) -> Self {
        Self {
            delta,
            label: label.into(),
        }
    }

    /// Label with the placeholder replaced by `percent`.
    #[must_use]
    pub fn render(&self, percent: f64) -> String {
        self.label
            .replace(PERCENT_PLACEHOLDER, &format!("{percent:.2}"))
    }
}

/// Returned by a progress callback to stop the operation that reported progress.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cancelled: {0}")]
pub struct Cancelled(pub String);

/// Progress callback handed to a single assembly call.
pub type ProgressCallback<'a> = &'a mut dyn FnMut(&ProgressEvent) -> Result<(), Cancelled>;

/// Caller-side accumulator for progress events.
#[derive(Debug, Clone, Default)]
pub struct ProgressTracker {
    value: f64,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event's delta and return its rendered label.
    ///
    /// The running total is kept unrounded and never exceeds 100; only the
    /// reported value is rounded to two decimals.
    pub fn apply(&mut self, event: &ProgressEvent) -> String {
        self.value = (self.value + event.delta).min(100.0);
        event.render(self.value())
    }

    /// Accumulated percentage, rounded to two decimals.
    #[must_use]
    pub fn value(&self) -> f64 {
        (self.value * 100.0).round() / 100.0
    }

    pub fn reset(&mut self) {
        self.value = 0.0;
    }
}
