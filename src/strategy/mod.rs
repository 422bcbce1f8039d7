//! Naming strategies decide what rotated files are called, how existing
//! rotations are recognized among their directory siblings, and in what order
//! they age out. The engine stays strategy-agnostic: it asks for the chain,
//! shifts it, and copies into the next slot.

mod date;
mod numeric;

pub use date::{DEFAULT_DATE_FORMAT, DateStrategy};
pub use numeric::NumericStrategy;

use crate::rotate::CompressionScheme;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

/// A rotation naming scheme.
///
/// Implementations must recover the chain order purely from filenames; the
/// engine never stats files to decide which rotation is newer.
pub trait RotationStrategy {
    /// Existing rotations of `log_file` among its directory siblings, newest
    /// first.
    ///
    /// # Errors
    /// Directory scan failure or an undecodable filename.
    fn existing_rotations(&self, log_file: &Path) -> Result<Vec<PathBuf>, crate::Error>;

    /// Newest prior rotation, if any. The engine uses its timestamp as the
    /// age anchor for the data currently in `log_file`.
    ///
    /// # Errors
    /// Same failure modes as [`Self::existing_rotations`].
    fn last_rotated_file(&self, log_file: &Path) -> Result<Option<PathBuf>, crate::Error> {
        Ok(self.existing_rotations(log_file)?.into_iter().next())
    }

    /// Where the contents of `log_file` go when it rotates now. Also answers
    /// for already-rotated names, which is how chain shifting works: the slot
    /// for `app.1.log` is `app.2.log`.
    ///
    /// # Errors
    /// An undecodable filename.
    fn next_rotation_path(&self, log_file: &Path) -> Result<PathBuf, crate::Error>;
}

/// Config-facing selector for the closed set of strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// `app.log`, `app.1.log`, `app.2.log`, ...
    Numeric,
    /// `app.log`, `app-20260823.log`, ...
    #[default]
    Date,
}

impl StrategyKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Numeric => "numeric",
            Self::Date => "date",
        }
    }

    /// Builds the strategy for one config entry. `today` is the run's date,
    /// passed in so every dated name minted by the run agrees with the
    /// engine's clock.
    ///
    /// # Errors
    /// [`crate::Error::DateFormat`] when the date strategy is selected with
    /// an unusable suffix format.
    pub fn build(
        self,
        compression: CompressionScheme,
        date_format: &str,
        today: NaiveDate,
    ) -> Result<Box<dyn RotationStrategy>, crate::Error> {
        match self {
            Self::Numeric => Ok(Box::new(NumericStrategy::new(compression))),
            Self::Date => Ok(Box::new(DateStrategy::new(compression, date_format, today)?)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
