#![cfg(feature = "cli")]

use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_rotolog"))
        .args(args)
        .output()
        .expect("failed to run rotolog")
}

fn write_config(dir: &Path, body: &str) -> String {
    let path = dir.join("rotolog.json");
    fs::write(&path, body).unwrap();
    path.to_str().unwrap().to_string()
}

#[test]
fn help_shows_usage() {
    let output = run(&["--help"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
    assert!(stdout.contains("rotolog"));
}

#[test]
fn version_prints_version_string() {
    let output = run(&["--version"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("rotolog "));
}

#[test]
fn missing_config_exits_with_usage_error() {
    let dir = tempdir().unwrap();
    let absent = dir.path().join("none.json");
    let output = run(&[absent.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not exist"));
}

#[test]
fn malformed_config_exits_with_usage_error() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "{ not json");
    let output = run(&[&config]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Cannot read configuration file"));
}

#[test]
fn empty_config_is_a_successful_noop() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "{}");
    let output = run(&[&config]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nothing to do"));
}

#[test]
fn rotates_a_configured_file() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("app.log");
    fs::write(&log, "payload").unwrap();
    let config = write_config(
        dir.path(),
        &format!(
            r#"{{"{}": {{"rotate": "sizeonly", "size": "1b", "strategy": "numeric", "cleanup": "delete"}}}}"#,
            log.display()
        ),
    );

    let output = run(&[&config]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rotation complete: 1 pattern(s) rotated"));
    assert_eq!(
        fs::read_to_string(dir.path().join("app.1.log")).unwrap(),
        "payload"
    );
    assert!(!log.exists());
}

#[test]
fn dry_run_leaves_files_alone() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("app.log");
    fs::write(&log, "payload").unwrap();
    let config = write_config(
        dir.path(),
        &format!(
            r#"{{"{}": {{"rotate": "sizeonly", "size": "1b", "strategy": "numeric", "cleanup": "delete"}}}}"#,
            log.display()
        ),
    );

    let output = run(&["--dryrun", &config]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Dry run complete: 1 pattern(s) would rotate"));
    assert_eq!(fs::read_to_string(&log).unwrap(), "payload");
    assert!(!dir.path().join("app.1.log").exists());
}

#[test]
fn force_flag_overrides_eligibility() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("app.log");
    fs::write(&log, "tiny").unwrap();
    // Fresh file under the default 1MB threshold: only --force rotates it.
    let config = write_config(
        dir.path(),
        &format!(r#"{{"{}": {{"strategy": "numeric"}}}}"#, log.display()),
    );

    let output = run(&[&config]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("1 skipped"));

    let output = run(&["--force", &config]);
    assert!(output.status.success());
    assert!(dir.path().join("app.1.log").exists());
}

#[test]
fn bad_size_fails_the_run() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("app.log");
    fs::write(&log, "payload").unwrap();
    let config = write_config(
        dir.path(),
        &format!(
            r#"{{"{}": {{"rotate": "sizeonly", "size": "abc"}}}}"#,
            log.display()
        ),
    );

    let output = run(&[&config]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot convert 'abc' to a size in bytes"));
}

#[test]
fn verbose_prints_entry_settings() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("app.log");
    fs::write(&log, "payload").unwrap();
    let config = write_config(
        dir.path(),
        &format!(
            r#"{{"{}": {{"rotate": "sizeonly", "size": "1b", "strategy": "numeric"}}}}"#,
            log.display()
        ),
    );

    let output = run(&["--verbose", &config]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("strategy=numeric"));
    assert!(stdout.contains("size=1b"));
}

#[test]
fn verbose_prints_the_shift_plan() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("app.log");
    fs::write(&log, "fresh").unwrap();
    fs::write(dir.path().join("app.1.log"), "archived").unwrap();
    let config = write_config(
        dir.path(),
        &format!(
            r#"{{"{}": {{"rotate": "sizeonly", "size": "1b", "strategy": "numeric"}}}}"#,
            log.display()
        ),
    );

    let output = run(&["--verbose", &config]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Rotating archived logs: app.1.log"));
    assert!(stdout.contains("No archived logs to delete"));
    assert_eq!(
        fs::read_to_string(dir.path().join("app.2.log")).unwrap(),
        "archived"
    );
}
