//! After a rotation the source file still holds the rotated contents. What
//! happens to it next depends on how the writing application behaves: daemons
//! holding the file open need a truncate, one-shot jobs can lose it entirely.

use serde::Deserialize;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::path::Path;

/// Post-rotation treatment of the source file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanupAction {
    /// Leave the source untouched.
    None,
    /// Empty the source in place. Keeps the inode, so writers holding the
    /// file open keep appending to the same file.
    #[default]
    Truncate,
    /// Remove the source.
    Delete,
    /// Remove the source and create a fresh empty file under the same name.
    /// Unlike truncate this swaps the inode.
    Recreate,
}

impl CleanupAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Truncate => "truncate",
            Self::Delete => "delete",
            Self::Recreate => "recreate",
        }
    }

    /// Applies the action to `file`. Callers only invoke this once the
    /// rotation copy is safely on disk.
    ///
    /// # Errors
    /// I/O failure opening, truncating, removing or recreating the file.
    pub fn apply(self, file: &Path) -> Result<(), crate::Error> {
        match self {
            Self::None => Ok(()),
            Self::Truncate => {
                OpenOptions::new().write(true).truncate(true).open(file)?;
                Ok(())
            }
            Self::Delete => {
                fs::remove_file(file)?;
                Ok(())
            }
            Self::Recreate => {
                fs::remove_file(file)?;
                File::create(file)?;
                Ok(())
            }
        }
    }
}

impl fmt::Display for CleanupAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
