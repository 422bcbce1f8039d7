//! Tests for date-suffix rotation through the engine.

use chrono::NaiveDate;
use rotolog::{
    CleanupAction, CompressionScheme, DateStrategy, RotationOptions, RotationSchedule,
    RotationStrategy, Rotator,
};
use std::fs;
use tempfile::tempdir;

fn fixed_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 23).unwrap()
}

fn date_strategy() -> DateStrategy {
    DateStrategy::new(CompressionScheme::None, rotolog::DEFAULT_DATE_FORMAT, fixed_day()).unwrap()
}

fn size_only(size: &str) -> RotationOptions {
    RotationOptions {
        rotate: RotationSchedule::SizeOnly,
        size: size.to_string(),
        ..RotationOptions::default()
    }
}

#[test]
fn rotation_lands_in_a_dated_file() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("app.log");
    fs::write(&log, "august logs").unwrap();

    let rotated = Rotator::new(false)
        .rotate(&log, &date_strategy(), &size_only("1b"), false)
        .unwrap();

    assert!(rotated);
    let archive = dir.path().join("app-20260823.log");
    assert_eq!(fs::read_to_string(archive).unwrap(), "august logs");
    // Default cleanup truncates in place.
    assert_eq!(fs::metadata(&log).unwrap().len(), 0);
}

#[test]
fn same_day_rotations_collapse_into_one_file() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("app.log");
    let strategy = date_strategy();
    let rotator = Rotator::new(false);
    let options = size_only("1b");

    fs::write(&log, "morning").unwrap();
    rotator.rotate(&log, &strategy, &options, false).unwrap();
    fs::write(&log, "evening").unwrap();
    rotator.rotate(&log, &strategy, &options, false).unwrap();

    // The second rotation overwrites the day's archive.
    assert_eq!(
        fs::read_to_string(dir.path().join("app-20260823.log")).unwrap(),
        "evening"
    );
    let dated: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .filter(|name| name.starts_with("app-"))
        .collect();
    assert_eq!(dated.len(), 1);
}

#[test]
fn dated_sources_are_skipped_not_overwritten() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("app-20260820.log");
    fs::write(&log, "already archived").unwrap();

    let rotated = Rotator::new(false)
        .rotate(&log, &date_strategy(), &size_only("1b"), false)
        .unwrap();

    assert!(!rotated);
    assert_eq!(fs::read_to_string(&log).unwrap(), "already archived");
}

#[test]
fn old_dated_rotations_expire_past_the_retention_limit() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("app.log");
    fs::write(&log, "today").unwrap();
    for name in ["app-20260820.log", "app-20260821.log", "app-20260822.log"] {
        fs::write(dir.path().join(name), "old").unwrap();
    }

    let mut options = size_only("1b");
    options.max_rotations = 2;
    Rotator::new(false)
        .rotate(&log, &date_strategy(), &options, false)
        .unwrap();

    // Newest survivor plus today's rotation; both older dates deleted.
    assert!(dir.path().join("app-20260823.log").exists());
    assert!(dir.path().join("app-20260822.log").exists());
    assert!(!dir.path().join("app-20260821.log").exists());
    assert!(!dir.path().join("app-20260820.log").exists());
}

#[test]
fn sibling_discovery_ignores_unrelated_files() {
    let dir = tempdir().unwrap();
    for name in [
        "app.log",
        "app-20260820.log",
        "app-20260821.log",
        "other-20260820.log",
        "notes.txt",
    ] {
        fs::write(dir.path().join(name), "x").unwrap();
    }

    let rotations = date_strategy()
        .existing_rotations(&dir.path().join("app.log"))
        .unwrap();

    let names: Vec<_> = rotations
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    // Newest first.
    assert_eq!(names, ["app-20260821.log", "app-20260820.log"]);
}

#[test]
fn gzip_dated_rotation_appends_one_extension() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("app.log");
    fs::write(&log, "compress me").unwrap();

    let mut options = size_only("1b");
    options.compress = CompressionScheme::Gzip;
    options.cleanup = CleanupAction::Delete;
    let strategy = DateStrategy::new(
        CompressionScheme::Gzip,
        rotolog::DEFAULT_DATE_FORMAT,
        fixed_day(),
    )
    .unwrap();

    Rotator::new(false)
        .rotate(&log, &strategy, &options, false)
        .unwrap();

    assert!(dir.path().join("app-20260823.log.gz").exists());
    assert!(!dir.path().join("app-20260823.log.gz.gz").exists());
    assert!(!log.exists());
}

#[test]
fn custom_date_formats_name_the_rotation() {
    let dir = tempdir().unwrap();
    let log = dir.path().join("app.log");
    fs::write(&log, "x").unwrap();

    let strategy =
        DateStrategy::new(CompressionScheme::None, ".%Y-%m-%d", fixed_day()).unwrap();
    Rotator::new(false)
        .rotate(&log, &strategy, &size_only("1b"), false)
        .unwrap();

    assert!(dir.path().join("app.2026-08-23.log").exists());
}
