//! Duplicate-line detection
//!
//! Single-file mode: groups lines by exact trailing-whitespace-trimmed
//! text, keeps groups occurring more than once, sorts by count descending
//! with ties broken by first occurrence, and returns the top 20.

use std::collections::HashMap;
use std::path::Path;

use crate::core::error::ScourError;
use crate::core::lines::LineReader;
use crate::ops::resolve_target;

/// Hard cap on returned groups.
pub const DUP_CAP: usize = 20;

/// Default minimum trimmed line length for a candidate line.
pub const DEFAULT_MIN_LENGTH: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateGroup {
    /// Trailing-whitespace-trimmed line text (full, untruncated).
    pub text: String,
    /// Number of occurrences; always > 1.
    pub count: usize,
}

/// Find duplicated lines in one file.
///
/// Only lines whose fully-trimmed length is at least `min_length`
/// characters are candidates.
pub fn find_duplicates(
    path: &Path,
    min_length: usize,
) -> Result<Vec<DuplicateGroup>, ScourError> {
    resolve_target(path)?;
    let reader = LineReader::open(path).map_err(|e| ScourError::io(path, e))?;

    // text -> (count, first-occurrence index) for the deterministic
    // tie-break.
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut order = 0usize;

    for (_, text) in reader {
        if text.trim().chars().count() < min_length {
            continue;
        }
        let key = text.trim_end().to_string();
        let entry = counts.entry(key).or_insert_with(|| {
            order += 1;
            (0, order)
        });
        entry.0 += 1;
    }

    let mut groups: Vec<(DuplicateGroup, usize)> = counts
        .into_iter()
        .filter(|(_, (count, _))| *count > 1)
        .map(|(text, (count, first))| (DuplicateGroup { text, count }, first))
        .collect();

    groups.sort_by(|a, b| b.0.count.cmp(&a.0.count).then(a.1.cmp(&b.1)));
    groups.truncate(DUP_CAP);

    Ok(groups.into_iter().map(|(g, _)| g).collect())
}
