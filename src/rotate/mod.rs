//! The rotation engine: decides whether each matched file is due, shifts the
//! existing rotation chain to make room, streams the live file into its slot,
//! and finally cleans up the source.

mod cleanup;
mod compress;
pub(crate) mod files;
mod size;

pub use cleanup::CleanupAction;
pub use compress::{CompressionScheme, CompressionWriter};
pub use size::{format_size, parse_size};

use crate::config::{EmptyFileBehavior, MissingFileBehavior, RotationOptions};
use crate::internal;
use crate::strategy::RotationStrategy;
use chrono::{DateTime, Local};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

/// One rotation pass. Carries the dry-run switch and the single `now` every
/// schedule decision in the run observes.
#[derive(Debug, Clone, Copy)]
pub struct Rotator {
    dry_run: bool,
    now: DateTime<Local>,
}

impl Rotator {
    /// Engine for a run starting now. With `dry_run` set, decisions and
    /// logging still happen but nothing on disk is touched.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            now: Local::now(),
        }
    }

    /// Overrides the sampled clock, pinning schedule decisions to a fixed
    /// instant.
    #[must_use]
    pub const fn at_time(mut self, now: DateTime<Local>) -> Self {
        self.now = now;
        self
    }

    /// Rotates every file matching `source`, which may name one file or glob
    /// over its parent directory. Matches are processed independently; one
    /// skipped file does not stop its siblings.
    ///
    /// Returns whether every matched file actually rotated.
    ///
    /// # Errors
    /// Policy violations ([`crate::Error::MissingSource`],
    /// [`crate::Error::EmptySource`], [`crate::Error::Destination`]), a bad
    /// size threshold, or I/O failure during shift, copy or cleanup. An error
    /// aborts the remaining matches.
    pub fn rotate(
        &self,
        source: &Path,
        strategy: &dyn RotationStrategy,
        options: &RotationOptions,
        force: bool,
    ) -> Result<bool, crate::Error> {
        let matches = files::expand_pattern(source)?;
        if matches.len() > 1 {
            internal::debug(
                "ROTATE",
                &format!("{} files match {}", matches.len(), source.display()),
            );
        }
        let mut all_rotated = true;
        for file in &matches {
            all_rotated &= self.rotate_single(file, strategy, options, force)?;
        }
        Ok(all_rotated)
    }

    fn rotate_single(
        &self,
        file: &Path,
        strategy: &dyn RotationStrategy,
        options: &RotationOptions,
        force: bool,
    ) -> Result<bool, crate::Error> {
        if !file.exists() {
            if options.when_missing == MissingFileBehavior::Error {
                return Err(crate::Error::MissingSource(file.to_path_buf()));
            }
            internal::warn("ROTATE", &format!("File {} does not exist", file.display()));
            return Ok(false);
        }

        if let Some(destination) = &options.destination {
            if !destination.exists() {
                return Err(crate::Error::Destination(format!(
                    "directory '{}' does not exist",
                    destination.display()
                )));
            }
            if !destination.is_dir() {
                return Err(crate::Error::Destination(format!(
                    "path '{}' is not a directory",
                    destination.display()
                )));
            }
        }

        let threshold = parse_size(&options.size)?;

        if !force
            && !self.old_enough(file, strategy, options)?
            && !large_enough(file, threshold)?
        {
            internal::warn(
                "ROTATE",
                &format!(
                    "{} is not old or large enough to rotate, skipping",
                    file.display()
                ),
            );
            return Ok(false);
        }

        if fs::metadata(file)?.len() == 0 {
            match options.when_empty {
                EmptyFileBehavior::Skip => {
                    internal::info("ROTATE", &format!("{} is empty, skipping", file.display()));
                    return Ok(false);
                }
                EmptyFileBehavior::Error => {
                    return Err(crate::Error::EmptySource(file.to_path_buf()));
                }
                EmptyFileBehavior::Rotate => {
                    internal::info(
                        "ROTATE",
                        &format!("{} is empty, rotating empty file", file.display()),
                    );
                }
            }
        }

        let destination_file = match &options.destination {
            Some(dir) => strategy.next_rotation_path(&dir.join(files::file_name(file)?))?,
            None => strategy.next_rotation_path(file)?,
        };
        if destination_file == *file {
            // The source is already a rotated name, for example a
            // date-suffixed file picked up by a glob.
            internal::warn(
                "ROTATE",
                &format!(
                    "{} already carries a rotation suffix, skipping",
                    file.display()
                ),
            );
            return Ok(false);
        }

        internal::info(
            "ROTATE",
            &format!("Rotating {} to {}", file.display(), destination_file.display()),
        );

        self.shift_old_files(file, strategy, options.max_rotations)?;
        self.copy_contents(file, &destination_file, options.compress)?;
        if !self.dry_run {
            internal::debug(
                "ROTATE",
                &format!("Applying {} cleanup to {}", options.cleanup, file.display()),
            );
            options.cleanup.apply(file)?;
        }

        Ok(true)
    }

    /// The age anchor is the newest prior rotation when one exists, else the
    /// source file itself. A truncated-in-place source keeps its creation
    /// stamp, so only the chain records when the last rotation happened.
    fn old_enough(
        &self,
        file: &Path,
        strategy: &dyn RotationStrategy,
        options: &RotationOptions,
    ) -> Result<bool, crate::Error> {
        let reference = match strategy.last_rotated_file(file)? {
            Some(last) if last.exists() => files::reference_time(&last)?,
            _ => files::reference_time(file)?,
        };
        internal::trace(
            "ROTATE",
            &format!("Age reference for {} is {reference}", file.display()),
        );
        Ok(options.rotate.should_rotate(&reference, &self.now))
    }

    /// Makes room for the next rotation: everything past the retention limit
    /// is deleted, the kept chain is renamed one slot older, oldest first.
    /// A shift aimed at a name that is still occupied fails rather than
    /// overwrite it.
    fn shift_old_files(
        &self,
        file: &Path,
        strategy: &dyn RotationStrategy,
        max_rotations: i32,
    ) -> Result<(), crate::Error> {
        let rotations = strategy.existing_rotations(file)?;

        // max_rotations counts the slot the live file is about to fill, so
        // one less of the existing chain survives. Non-positive keeps all.
        let kept = if max_rotations > 0 {
            rotations
                .len()
                .min(usize::try_from(max_rotations - 1).unwrap_or(0))
        } else {
            rotations.len()
        };
        let (to_shift, to_delete) = rotations.split_at(kept);

        // Both plan lines list processing order, oldest first.
        if to_shift.is_empty() {
            internal::debug("ROTATE", "No archived logs to rotate");
        } else {
            internal::debug(
                "ROTATE",
                &format!("Rotating archived logs: {}", join_names(to_shift.iter().rev())),
            );
        }
        if to_delete.is_empty() {
            internal::debug("ROTATE", "No archived logs to delete");
        } else {
            internal::debug(
                "ROTATE",
                &format!("Deleting archived logs: {}", join_names(to_delete.iter().rev())),
            );
        }

        for old in to_delete.iter().rev() {
            if !self.dry_run {
                fs::remove_file(old)?;
            }
        }
        for rotation in to_shift.iter().rev() {
            let shifted = strategy.next_rotation_path(rotation)?;
            if *rotation == shifted {
                // Date-style names stay put.
                continue;
            }
            internal::debug(
                "ROTATE",
                &format!(
                    "Rotating file {} to {}",
                    rotation.display(),
                    shifted.display()
                ),
            );
            if !self.dry_run {
                if shifted.exists() {
                    // Lexical ordering shifts log.9 before log.10, aiming it
                    // at a slot that is still occupied. Never rename over an
                    // existing rotation.
                    return Err(crate::Error::Io(std::io::Error::new(
                        ErrorKind::AlreadyExists,
                        format!(
                            "cannot rotate {} to {}: destination already exists",
                            rotation.display(),
                            shifted.display()
                        ),
                    )));
                }
                fs::rename(rotation, &shifted)?;
            }
        }

        Ok(())
    }

    /// Streams the source's bytes through the compression scheme into the
    /// rotation slot. The source is only ever read.
    fn copy_contents(
        &self,
        source: &Path,
        destination: &Path,
        compression: CompressionScheme,
    ) -> Result<(), crate::Error> {
        if self.dry_run {
            internal::debug("ROTATE", "Dry run: skipping copy and cleanup");
            return Ok(());
        }

        let mut reader = BufReader::new(File::open(source)?);
        let writer = BufWriter::new(File::create(destination)?);
        let mut encoder = compression.wrap(writer);

        let mut buffer = [0u8; 8192];
        loop {
            let bytes_read = reader.read(&mut buffer)?;
            if bytes_read == 0 {
                break;
            }
            encoder.write_all(&buffer[..bytes_read])?;
        }
        encoder.finish()?.flush()?;

        Ok(())
    }
}

/// Size half of the eligibility test. A non-positive threshold disables it;
/// otherwise any file at or past the threshold is due.
fn large_enough(file: &Path, threshold: i64) -> Result<bool, crate::Error> {
    if threshold <= 0 {
        return Ok(false);
    }
    let len = fs::metadata(file)?.len();
    let large = i64::try_from(len).map_or(true, |size| size >= threshold);
    if large {
        internal::debug(
            "ROTATE",
            &format!(
                "{} holds {} and reached the size threshold",
                file.display(),
                format_size(len)
            ),
        );
    }
    Ok(large)
}

/// Filenames only, comma separated, for the shift/delete plan lines.
fn join_names<'a>(paths: impl Iterator<Item = &'a PathBuf>) -> String {
    paths
        .map(|path| {
            path.file_name().map_or_else(
                || path.display().to_string(),
                |name| name.to_string_lossy().into_owned(),
            )
        })
        .collect::<Vec<_>>()
        .join(", ")
}
