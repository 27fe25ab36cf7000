//! File discovery by shell-style wildcard
//!
//! Matches the wildcard against the file name of every file reachable
//! from the root, at any depth. Only files are returned; there is no
//! result cap.

use std::path::{Path, PathBuf};

use globset::Glob;

use crate::core::error::ScourError;
use crate::core::walk::{ExtensionFilter, Walker};

/// Find files whose name matches `pattern` (e.g. `*.rs`, `test_*`).
pub fn find(root: &Path, pattern: &str) -> Result<Vec<PathBuf>, ScourError> {
    let matcher = Glob::new(pattern)
        .map_err(|source| ScourError::InvalidGlob {
            pattern: pattern.to_string(),
            source,
        })?
        .compile_matcher();

    let mut matches = Vec::new();
    for record in Walker::new(root, ExtensionFilter::accept_all())? {
        if let Some(name) = record.path.file_name() {
            if matcher.is_match(name) {
                matches.push(record.path);
            }
        }
    }
    Ok(matches)
}
