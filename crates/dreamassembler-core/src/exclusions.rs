//! Per-side config exclusions.

use crate::Side;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Config-bundle entries to drop when assembling each side's archive.
///
/// Paths are matched by exact equality against entry names inside the config
/// zip, so a directory entry is written with its trailing `/` (`"journeymap/"`)
/// and excluding it does not exclude the files below it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExclusionSet {
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub client: BTreeSet<String>,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub server: BTreeSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclusions for one side.
    #[must_use]
    pub fn for_side(&self, side: Side) -> &BTreeSet<String> {
        match side {
            Side::Client => &self.client,
            Side::Server => &self.server,
        }
    }

    /// Add an exclusion for one side. Returns false if it was already present.
    pub fn insert(&mut self, side: Side, path: impl Into<String>) -> bool {
        let set = match side {
            Side::Client => &mut self.client,
            Side::Server => &mut self.server,
        };
        set.insert(path.into())
    }

    /// Remove an exclusion for one side. Returns false if it was not present.
    pub fn remove(&mut self, side: Side, path: &str) -> bool {
        let set = match side {
            Side::Client => &mut self.client,
            Side::Server => &mut self.server,
        };
        set.remove(path)
    }

    #[must_use]
    pub fn is_excluded(&self, side: Side, entry_name: &str) -> bool {
        self.for_side(side).contains(entry_name)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.client.is_empty() && self.server.is_empty()
    }
}
