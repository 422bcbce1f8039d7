#![forbid(unsafe_code)]

//! `rotolog` - Scheduled log rotation with retention, compression and
//! cleanup policies.
//!
//! Rotates configured log files once they are old or large enough, with:
//! - Two naming strategies (numeric counters, date suffixes)
//! - Calendar schedules (daily, weekly, monthly) and byte-size thresholds
//! - Retention limits that expire the oldest rotations first
//! - Optional gzip compression of the archived copy
//! - Configurable cleanup of the live file (truncate, delete, recreate)
//!
//! # Example
//!
//! ```no_run
//! use rotolog::{CompressionScheme, NumericStrategy, RotationOptions, Rotator};
//! use std::path::Path;
//!
//! let strategy = NumericStrategy::new(CompressionScheme::Gzip);
//! let options = RotationOptions::default();
//! let rotator = Rotator::new(false);
//! if rotator.rotate(Path::new("/var/log/app.log"), &strategy, &options, false)? {
//!     println!("rotated");
//! }
//! # Ok::<(), rotolog::Error>(())
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `rotolog` command-line binary

// Core modules (always available)
pub mod config;
pub mod error;
pub mod internal;
pub mod level;
pub mod rotate;
pub mod schedule;
pub mod strategy;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::{Config, EmptyFileBehavior, MissingFileBehavior, RotationOptions};
pub use error::Error;
pub use level::Level;
pub use rotate::{
    CleanupAction, CompressionScheme, CompressionWriter, Rotator, format_size, parse_size,
};
pub use schedule::RotationSchedule;
pub use strategy::{
    DEFAULT_DATE_FORMAT, DateStrategy, NumericStrategy, RotationStrategy, StrategyKind,
};
