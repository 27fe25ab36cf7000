//! Recursive tree traversal with extension filtering
//!
//! Uses the ignore crate's walker with all ignore-file handling disabled:
//! every entry under the root is a candidate, hidden files included.
//! Directory entries are sorted by file name so traversal order (and
//! therefore result order in every mode) is deterministic.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;

use crate::core::error::ScourError;

/// Extension bucket used when a file name carries no suffix.
pub const NO_EXTENSION: &str = "no extension";

/// Allow-list of normalized extension strings; empty accepts everything.
///
/// Matching is case-sensitive and exact. Leading dots are stripped when
/// the filter is built, so "py" and ".py" select the same files.
#[derive(Debug, Clone, Default)]
pub struct ExtensionFilter {
    allowed: Option<HashSet<String>>,
}

impl ExtensionFilter {
    /// Filter that accepts every file.
    pub fn accept_all() -> Self {
        Self::default()
    }

    /// Parse a comma-separated selector list, e.g. "py,js, ts".
    ///
    /// Blank entries are dropped; an entirely blank list accepts all.
    pub fn parse(list: &str) -> Self {
        let allowed: HashSet<String> = list
            .split(',')
            .map(|ext| ext.trim().trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .map(str::to_string)
            .collect();
        if allowed.is_empty() {
            Self::accept_all()
        } else {
            Self {
                allowed: Some(allowed),
            }
        }
    }

    /// Build from a fixed list of extensions (already without dots).
    pub fn from_extensions<'a, I>(exts: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let allowed: HashSet<String> = exts.into_iter().map(str::to_string).collect();
        if allowed.is_empty() {
            Self::accept_all()
        } else {
            Self {
                allowed: Some(allowed),
            }
        }
    }

    pub fn accepts(&self, extension: &str) -> bool {
        match &self.allowed {
            None => true,
            Some(set) => set.contains(extension),
        }
    }
}

/// A file discovered by the walker. Directories are never yielded.
#[derive(Debug, Clone)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Normalized extension without the dot, or [`NO_EXTENSION`].
    pub extension: String,
}

/// Normalized extension of a file name: the text after the last dot,
/// or the "no extension" sentinel (a bare leading dot, as in `.gitignore`,
/// does not count as a suffix).
pub fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_string)
        .unwrap_or_else(|| NO_EXTENSION.to_string())
}

/// Lazy recursive enumeration of the files under a root.
///
/// Unreadable entries, broken symlinks and directories that vanish
/// mid-walk are skipped silently; one bad entry never aborts the walk.
pub struct Walker {
    inner: ignore::Walk,
    filter: ExtensionFilter,
}

impl Walker {
    /// Start a walk. Fails with `InvalidRoot` when the root is missing
    /// or is not a directory.
    pub fn new(root: &Path, filter: ExtensionFilter) -> Result<Self, ScourError> {
        if !root.is_dir() {
            return Err(ScourError::invalid_root(root));
        }

        let mut builder = WalkBuilder::new(root);
        builder
            .hidden(false)
            .ignore(false)
            .git_ignore(false)
            .git_global(false)
            .git_exclude(false)
            .parents(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        Ok(Self {
            inner: builder.build(),
            filter,
        })
    }
}

impl Iterator for Walker {
    type Item = FileRecord;

    fn next(&mut self) -> Option<FileRecord> {
        loop {
            let entry = match self.inner.next()? {
                Ok(e) => e,
                Err(_) => continue,
            };

            let is_file = entry
                .file_type()
                .map(|t| t.is_file())
                .unwrap_or(false);
            if !is_file {
                continue;
            }

            let extension = extension_of(entry.path());
            if !self.filter.accepts(&extension) {
                continue;
            }

            return Some(FileRecord {
                path: entry.into_path(),
                extension,
            });
        }
    }
}
