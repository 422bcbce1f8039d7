//! Configuration struct definitions.

use crate::rotate::{CleanupAction, CompressionScheme};
use crate::schedule::RotationSchedule;
use crate::strategy::{DEFAULT_DATE_FORMAT, StrategyKind};
use serde::Deserialize;
use std::path::PathBuf;

/// Per-source rotation options. `#[serde(default)]` on the struct means an
/// entry can be as small as `{}` and still rotate sensibly.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RotationOptions {
    /// Alternate directory receiving new rotations. Must already exist; the
    /// tool never creates it. `None` keeps rotations next to the source.
    pub destination: Option<PathBuf>,
    /// Compression applied while copying into the rotation slot.
    pub compress: CompressionScheme,
    /// Calendar half of the eligibility test.
    pub rotate: RotationSchedule,
    /// Size half of the eligibility test, in human notation ("10MB", "2GiB").
    /// A value parsing to zero disables the size trigger.
    pub size: String,
    /// How many rotations to keep, counting the one about to be written.
    /// Zero or negative keeps everything.
    pub max_rotations: i32,
    /// What to do with a zero-byte source.
    pub when_empty: EmptyFileBehavior,
    /// What to do when the source does not exist.
    pub when_missing: MissingFileBehavior,
    /// Applied to the source once its contents are safely in the slot.
    pub cleanup: CleanupAction,
    /// Naming scheme for rotated files.
    pub strategy: StrategyKind,
    /// strftime suffix layout for the date strategy.
    pub date_format: String,
}

impl Default for RotationOptions {
    fn default() -> Self {
        Self {
            destination: None,
            compress: CompressionScheme::default(),
            rotate: RotationSchedule::default(),
            size: "1MB".to_string(),
            max_rotations: 3,
            when_empty: EmptyFileBehavior::default(),
            when_missing: MissingFileBehavior::default(),
            cleanup: CleanupAction::default(),
            strategy: StrategyKind::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Zero-byte sources usually mean nothing was written since the last
/// rotation; whether that deserves an archive file is the operator's call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyFileBehavior {
    /// Rotate the empty file like any other.
    #[default]
    Rotate,
    /// Leave it alone, non-fatally.
    Skip,
    /// Fail the run.
    Error,
}

/// Missing sources are routine when applications create their logs lazily.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingFileBehavior {
    /// Warn and move on.
    #[default]
    Skip,
    /// Fail the run.
    Error,
}
