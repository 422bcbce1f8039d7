//! Filesystem primitives shared by strategy discovery and the rotation
//! engine: directory scans, glob expansion, filename splitting and
//! timestamps.

use chrono::{DateTime, Local};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Filename component as UTF-8. Rotation naming is string surgery, so paths
/// without a decodable final component are rejected up front.
pub fn file_name(path: &Path) -> Result<&str, crate::Error> {
    path.file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| crate::Error::InvalidPath(path.display().to_string()))
}

/// Directory holding `path`, with bare relative names anchored to the
/// current directory so `read_dir` has something to open.
pub(crate) fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Lists the files in `dir` sorted by name, so ordering decisions made on the
/// result are reproducible across filesystems with unordered readdir.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, crate::Error> {
    let mut entries = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() {
            entries.push(path);
        }
    }
    entries.sort();
    Ok(entries)
}

/// Splits a filename into the stem before the first dot and the ordered list
/// of extension parts after it. A single leading dot belongs to the stem, so
/// `.bashrc` has a stem and no extensions while `archive.tar.gz` splits into
/// `archive` and `["tar", "gz"]`.
#[must_use]
pub fn split_file_name(name: &str) -> (&str, Vec<&str>) {
    let search_from = usize::from(name.starts_with('.'));
    let Some(first_dot) = name[search_from..].find('.').map(|i| i + search_from) else {
        return (name, Vec::new());
    };
    (&name[..first_dot], name[first_dot + 1..].split('.').collect())
}

fn has_glob(name: &str) -> bool {
    name.contains(['*', '?'])
}

/// Translates a shell-style filename pattern (`*` and `?` wildcards) into an
/// anchored regex over whole filenames.
fn glob_to_regex(pattern: &str) -> Result<Regex, crate::Error> {
    let mut expr = String::with_capacity(pattern.len() + 8);
    expr.push('^');
    for c in pattern.chars() {
        match c {
            '*' => expr.push_str(".*"),
            '?' => expr.push('.'),
            _ => expr.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    expr.push('$');
    Regex::new(&expr).map_err(|_| crate::Error::InvalidPath(pattern.to_string()))
}

/// Expands a configured source into the concrete files it matches. Patterns
/// only apply to the final component; the parent directory is literal.
///
/// A pattern that matches nothing falls back to the literal path so the
/// missing-file policy decides what happens.
pub fn expand_pattern(source: &Path) -> Result<Vec<PathBuf>, crate::Error> {
    let name = file_name(source)?;
    let parent = parent_dir(source);
    if !has_glob(name) || !parent.is_dir() {
        return Ok(vec![source.to_path_buf()]);
    }

    let matcher = glob_to_regex(name)?;
    let matches: Vec<PathBuf> = list_files(&parent)?
        .into_iter()
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| matcher.is_match(n))
        })
        .collect();

    if matches.is_empty() {
        return Ok(vec![source.to_path_buf()]);
    }
    Ok(matches)
}

/// Timestamp anchoring age decisions: creation time where the filesystem
/// records one, modification time where it does not.
pub fn reference_time(path: &Path) -> Result<DateTime<Local>, crate::Error> {
    let meta = fs::metadata(path)?;
    let stamp = meta.created().or_else(|_| meta.modified())?;
    Ok(DateTime::from(stamp))
}
