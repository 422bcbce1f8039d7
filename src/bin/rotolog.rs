//! Cron-friendly entry point: parse the command line, run one rotation pass,
//! exit with a code wrappers can act on.
//!
//! Usage:
//!   rotolog <config.json>                Rotate per the config file
//!   rotolog -d <config.json>             Dry run, print the plan only
//!   rotolog -f <config.json>             Rotate everything regardless of age
//!   rotolog -v <config.json>             Verbose console output

use clap::Parser;
use rotolog::cli::{self, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    cli::run(&Cli::parse())
}
