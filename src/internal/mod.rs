//! Rotolog's own console diagnostics. The CLI initializes this once from its
//! flags; library consumers that never call `init` get a silent crate.
//!
//! Uses `OnceLock` so the console is initialized at most once, even if
//! multiple entry points (CLI, tests) race to call `init`.

use crate::level::Level;
use chrono::Local;
use std::io::Write;
use std::sync::OnceLock;

static CONSOLE: OnceLock<Console> = OnceLock::new();

#[derive(Debug)]
struct Console {
    min_level: Level,
}

impl Console {
    fn write(&self, level: Level, scope: &str, msg: &str) {
        if level < self.min_level {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let tag = format!("[{}]", level.tag());
        // Warnings and errors go to stderr.
        if level >= Level::Warn {
            let _ = writeln!(std::io::stderr(), "{timestamp} {tag:<7} {scope}  {msg}");
        } else {
            let _ = writeln!(std::io::stdout(), "{timestamp} {tag:<7} {scope}  {msg}");
        }
    }
}

/// Only the first call takes effect; later calls are no-ops.
pub fn init(min_level: Level) {
    let was_init = CONSOLE.get().is_some();
    CONSOLE.get_or_init(|| Console { min_level });
    if !was_init {
        debug("INTERNAL", &format!("console ready at level {min_level}"));
    }
}

/// Calls before `init` are dropped silently instead of crashing.
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(console) = CONSOLE.get() {
        console.write(level, scope, msg);
    }
}

/// Visible only at Trace: per-file decision chatter.
pub fn trace(scope: &str, msg: &str) {
    log(Level::Trace, scope, msg);
}

/// Visible only at Debug: the rotation plan, shift by shift.
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

/// Normal operational milestones (config loaded, file rotated).
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

/// Non-fatal anomalies: skipped files, ineligible sources.
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

/// Failures that abort a file or the run.
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
