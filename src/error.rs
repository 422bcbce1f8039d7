//! Unified error type for all rotolog operations.

use std::path::PathBuf;

/// Error type for rotolog operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// JSON config parsing error.
    ConfigParse(serde_json::Error),
    /// Size string that cannot be converted to a byte count.
    SizeFormat(String),
    /// Date suffix pattern that is not a usable strftime format.
    DateFormat(String),
    /// Source file is missing and the missing-file policy is `error`.
    MissingSource(PathBuf),
    /// Source file is empty and the empty-file policy is `error`.
    EmptySource(PathBuf),
    /// Destination directory problem.
    Destination(String),
    /// Invalid path.
    InvalidPath(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::SizeFormat(s) => write!(f, "cannot convert '{s}' to a size in bytes"),
            Self::DateFormat(s) => write!(f, "invalid date format: {s}"),
            Self::MissingSource(p) => write!(f, "source file {} does not exist", p.display()),
            Self::EmptySource(p) => write!(f, "source file {} is empty", p.display()),
            Self::Destination(s) => write!(f, "destination {s}"),
            Self::InvalidPath(s) => write!(f, "invalid path: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::ConfigParse(e)
    }
}
