//! Numeric-suffix rotation: `app.log` copies to `app.1.log`, the previous
//! `app.1.log` shifts to `app.2.log`, and so on. Smaller counters are newer.

use super::RotationStrategy;
use crate::rotate::CompressionScheme;
use crate::rotate::files;
use regex::Regex;
use std::path::{Path, PathBuf};

/// Counter position: the slot sits just before the final extension, or one
/// extension further in when names end with the compression extension. With
/// gzip, `app.3.log.gz` keeps `.log.gz` together and counts in the middle.
#[derive(Debug, Clone, Copy)]
pub struct NumericStrategy {
    compression: CompressionScheme,
}

impl NumericStrategy {
    #[must_use]
    pub const fn new(compression: CompressionScheme) -> Self {
        Self { compression }
    }

    /// How many extension parts trail the counter slot in rotated names.
    fn parts_after_counter(self, extensions: &[&str]) -> usize {
        let compression_ext = self.compression.extension();
        if !compression_ext.is_empty() && extensions.last().copied() == Some(compression_ext) {
            2
        } else {
            1
        }
    }

    /// Anchored matcher for rotated siblings of `name`: the stem, a counter,
    /// the original extensions, and the compression extension when one is
    /// configured and not already part of the name.
    fn sibling_matcher(self, name: &str) -> Result<Regex, crate::Error> {
        let (stem, extensions) = files::split_file_name(name);
        let mut pattern = String::from("^");
        pattern.push_str(&regex::escape(stem));
        pattern.push_str(r"\.\d+");
        for ext in &extensions {
            pattern.push_str(&regex::escape(&format!(".{ext}")));
        }
        let compression_ext = self.compression.extension();
        if !compression_ext.is_empty() && extensions.last().copied() != Some(compression_ext) {
            pattern.push_str(&regex::escape(&format!(".{compression_ext}")));
        }
        pattern.push('$');
        Regex::new(&pattern).map_err(|_| crate::Error::InvalidPath(name.to_string()))
    }
}

impl RotationStrategy for NumericStrategy {
    fn existing_rotations(&self, log_file: &Path) -> Result<Vec<PathBuf>, crate::Error> {
        let matcher = self.sibling_matcher(files::file_name(log_file)?)?;
        let mut rotations: Vec<PathBuf> = files::list_files(&files::parent_dir(log_file))?
            .into_iter()
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(|n| matcher.is_match(n))
            })
            .collect();
        // Plain filename order, not numeric order: `.10` sorts before `.2`.
        rotations.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(rotations)
    }

    fn next_rotation_path(&self, log_file: &Path) -> Result<PathBuf, crate::Error> {
        let name = files::file_name(log_file)?;
        let (stem, extensions) = files::split_file_name(name);

        let after = self.parts_after_counter(&extensions);
        let counter_slot = (extensions.len() > after).then(|| extensions.len() - 1 - after);
        let next = counter_slot
            .and_then(|slot| extensions[slot].parse::<u32>().ok())
            .unwrap_or(0)
            + 1;

        let mut rotated = String::from(stem);
        let insert_at = counter_slot.unwrap_or(0);
        for ext in &extensions[..insert_at] {
            rotated.push('.');
            rotated.push_str(ext);
        }
        rotated.push('.');
        rotated.push_str(&next.to_string());
        let resume_from = counter_slot.map_or(insert_at, |slot| slot + 1);
        for ext in &extensions[resume_from..] {
            rotated.push('.');
            rotated.push_str(ext);
        }

        Ok(log_file.with_file_name(self.compression.append_extension(&rotated)))
    }
}
