//! CLI module for rotolog.
//!
//! This module provides the command-line interface using Clap.

use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::rotate::{CleanupAction, Rotator};
use chrono::Local;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// rotolog - Archive old log files on a schedule.
#[derive(Debug, Parser)]
#[command(name = "rotolog", version, about = "Automatically archives old log files")]
pub struct Cli {
    /// JSON configuration file mapping log files to rotation options.
    pub config: PathBuf,

    /// Verbose details will be written to the console.
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable dry run mode. Actions will be printed, but no files will be
    /// modified.
    #[arg(short, long)]
    pub dryrun: bool,

    /// Force all logs to rotate, even if they are not otherwise eligible.
    #[arg(short, long)]
    pub force: bool,
}

/// A missing or unreadable config file is an operator mistake, not a
/// rotation failure; cron wrappers distinguish the two by exit code.
const EXIT_BAD_CONFIG: u8 = 2;

/// Runs one full rotation pass over every configured entry.
///
/// Entries are processed in config order; the first fatal error aborts the
/// rest of the run.
#[must_use]
pub fn run(cli: &Cli) -> ExitCode {
    internal::init(if cli.verbose { Level::Debug } else { Level::Info });

    if !cli.config.is_file() {
        eprintln!(
            "Configuration file '{}' does not exist",
            cli.config.display()
        );
        return ExitCode::from(EXIT_BAD_CONFIG);
    }
    let config = match Config::load_from(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Cannot read configuration file '{}': {e}",
                cli.config.display()
            );
            return ExitCode::from(EXIT_BAD_CONFIG);
        }
    };
    if config.is_empty() {
        internal::warn("CLI", "Configuration maps no source patterns, nothing to do");
        return ExitCode::SUCCESS;
    }

    // One clock sample for the entire run: the engine's schedule decisions
    // and every dated name minted by the strategies must agree.
    let now = Local::now();
    let rotator = Rotator::new(cli.dryrun).at_time(now);

    let mut rotated = 0usize;
    let mut skipped = 0usize;

    for (pattern, options) in &config.entries {
        let mut options = options.clone();
        if cli.dryrun {
            options.cleanup = CleanupAction::None;
        }
        if let Some(dir) = options.destination.take() {
            let raw = dir.to_string_lossy().into_owned();
            options.destination = Some(PathBuf::from(shellexpand::tilde(&raw).into_owned()));
        }

        internal::debug(
            "CLI",
            &format!(
                "{pattern}: strategy={}, rotate={}, size={}, maxRotations={}, compress={}, cleanup={}",
                options.strategy,
                options.rotate,
                options.size,
                options.max_rotations,
                options.compress,
                options.cleanup
            ),
        );

        let strategy = match options.strategy.build(
            options.compress,
            &options.date_format,
            now.date_naive(),
        ) {
            Ok(strategy) => strategy,
            Err(e) => {
                internal::error("CLI", &format!("{pattern}: {e}"));
                return ExitCode::FAILURE;
            }
        };

        let source = shellexpand::tilde(pattern);
        match rotator.rotate(
            Path::new(source.as_ref()),
            strategy.as_ref(),
            &options,
            cli.force,
        ) {
            Ok(true) => rotated += 1,
            Ok(false) => skipped += 1,
            Err(e) => {
                internal::error("CLI", &format!("{pattern}: {e}"));
                return ExitCode::FAILURE;
            }
        }
    }

    if cli.dryrun {
        internal::info(
            "CLI",
            &format!("Dry run complete: {rotated} pattern(s) would rotate, {skipped} skipped"),
        );
    } else {
        internal::info(
            "CLI",
            &format!("Rotation complete: {rotated} pattern(s) rotated, {skipped} skipped"),
        );
    }

    ExitCode::SUCCESS
}
