//! Severity levels for rotolog's console diagnostics.

use std::fmt;

/// Derives `Ord` so the console can compare a message's level against the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Per-file decision details, too noisy outside of debugging a config.
    Trace = 0,
    /// The rotation plan: what shifts where, what gets deleted.
    Debug = 1,
    /// Normal milestones: config loaded, file rotated.
    #[default]
    Info = 2,
    /// Skipped files and policy warnings that stop nothing.
    Warn = 3,
    /// Failures that abort a file or the whole run.
    Error = 4,
}

impl Level {
    /// Lowercase, matching how levels are spelled everywhere else in the tool.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }

    /// Uppercase tag used in console lines.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
