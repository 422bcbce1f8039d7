//! Date-suffix rotation: `app.log` copies to `app-20260823.log`. Dated names
//! never shift; the chain only grows at the newest end and expires at the
//! oldest, and two rotations on the same day collapse into one file.

use super::RotationStrategy;
use crate::rotate::CompressionScheme;
use crate::rotate::files;
use chrono::NaiveDate;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Suffix layout producing `app-20260823.log`.
pub const DEFAULT_DATE_FORMAT: &str = "-%Y%m%d";

/// Strategy state is fixed per run: the strftime suffix format, its rendering
/// for the run's date, and that rendering's width for the fast detection path.
#[derive(Debug, Clone)]
pub struct DateStrategy {
    compression: CompressionScheme,
    date_format: String,
    today_suffix: String,
    suffix_len: usize,
}

impl DateStrategy {
    /// Validates `date_format` by rendering it for `today` once, so later
    /// naming is infallible. Rendering catches both malformed strftime items
    /// and specifiers a date cannot fill in, like `%H`.
    ///
    /// # Errors
    /// [`crate::Error::DateFormat`] when the format cannot render a date or
    /// renders to nothing.
    pub fn new(
        compression: CompressionScheme,
        date_format: &str,
        today: NaiveDate,
    ) -> Result<Self, crate::Error> {
        let mut today_suffix = String::new();
        if write!(today_suffix, "{}", today.format(date_format)).is_err() || today_suffix.is_empty()
        {
            return Err(crate::Error::DateFormat(date_format.to_string()));
        }
        Ok(Self {
            compression,
            date_format: date_format.to_string(),
            suffix_len: today_suffix.len(),
            today_suffix,
        })
    }

    /// Whether `stem` ends in a parseable date suffix starting at or after
    /// byte `min_bound`.
    ///
    /// The common case is fixed-width suffixes, answered by parsing the
    /// trailing `suffix_len` bytes. Formats with variable-width fields render
    /// to other widths for other dates, so on a miss every tail of the stem
    /// is tried, shortest first.
    fn has_date_suffix(&self, stem: &str, min_bound: usize) -> bool {
        if stem.len() >= self.suffix_len {
            let start = stem.len() - self.suffix_len;
            if start >= min_bound
                && stem.is_char_boundary(start)
                && NaiveDate::parse_from_str(&stem[start..], &self.date_format).is_ok()
            {
                return true;
            }
        }
        for (start, _) in stem.char_indices().rev() {
            if start < min_bound {
                break;
            }
            if NaiveDate::parse_from_str(&stem[start..], &self.date_format).is_ok() {
                return true;
            }
        }
        false
    }
}

impl RotationStrategy for DateStrategy {
    fn existing_rotations(&self, log_file: &Path) -> Result<Vec<PathBuf>, crate::Error> {
        let (stem, _) = files::split_file_name(files::file_name(log_file)?);
        let mut rotations: Vec<PathBuf> = files::list_files(&files::parent_dir(log_file))?
            .into_iter()
            .filter(|path| {
                path.file_name().and_then(|n| n.to_str()).is_some_and(|sibling| {
                    let (sibling_stem, _) = files::split_file_name(sibling);
                    sibling_stem.starts_with(stem)
                        && self.has_date_suffix(sibling_stem, stem.len())
                })
            })
            .collect();
        // Date suffixes in the default layout sort lexically, so newest first
        // is simply descending filename order.
        rotations.sort_by(|a, b| b.file_name().cmp(&a.file_name()));
        Ok(rotations)
    }

    fn next_rotation_path(&self, log_file: &Path) -> Result<PathBuf, crate::Error> {
        let name = files::file_name(log_file)?;
        let (stem, extensions) = files::split_file_name(name);
        if self.has_date_suffix(stem, 0) {
            // Already dated. Shifting never renames these.
            return Ok(log_file.to_path_buf());
        }
        let mut rotated = String::from(stem);
        rotated.push_str(&self.today_suffix);
        for ext in &extensions {
            rotated.push('.');
            rotated.push_str(ext);
        }
        Ok(log_file.with_file_name(self.compression.append_extension(&rotated)))
    }
}
