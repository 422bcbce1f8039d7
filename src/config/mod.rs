//! JSON configuration loading: one object mapping source patterns to their
//! rotation options.
//!
//! Separated from struct definitions so that the loading logic stays
//! independent of the serde schema.

mod structs;

pub use structs::{EmptyFileBehavior, MissingFileBehavior, RotationOptions};

use crate::internal;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// The whole config file:
/// `{ "/var/log/app.log": { "rotate": "daily", ... }, ... }`.
///
/// A `BTreeMap` keeps multi-entry runs in one deterministic order regardless
/// of how the file is written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct Config {
    pub entries: BTreeMap<String, RotationOptions>,
}

impl Config {
    /// Reads and parses the config file at `path`.
    ///
    /// # Errors
    /// I/O failure reading the file, or malformed JSON. Unknown enum names in
    /// any entry ("compress": "zip") are parse errors, not silent defaults.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        internal::debug("CONFIG", &format!("Loading config from {}", path.display()));
        let content = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        internal::debug(
            "CONFIG",
            &format!("{} source pattern(s) configured", config.entries.len()),
        );
        Ok(config)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
