//! Operation-level error taxonomy
//!
//! Per-file faults during a tree walk (permission denied, transient I/O,
//! undecodable bytes) are never surfaced here; the offending file is
//! skipped and the walk continues. These variants cover faults that abort
//! a whole operation: a bad root, a malformed pattern, or a missing
//! single-file target.

use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScourError {
    /// Root path missing or not a directory.
    #[error("invalid root directory '{0}': not found or not a directory")]
    InvalidRoot(String),

    /// Malformed regex supplied to a search operation.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: Box<regex::Error>,
    },

    /// Malformed glob supplied to the find operation.
    #[error("invalid glob '{pattern}': {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    /// Single-file operation given a nonexistent target.
    #[error("file '{0}' not found")]
    FileNotFound(String),

    /// Single-file operation given an unreadable target.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl ScourError {
    pub fn invalid_root(root: &Path) -> Self {
        ScourError::InvalidRoot(root.display().to_string())
    }

    pub fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        ScourError::InvalidPattern {
            pattern: pattern.to_string(),
            source: Box::new(source),
        }
    }

    pub fn file_not_found(path: &Path) -> Self {
        ScourError::FileNotFound(path.display().to_string())
    }

    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ScourError::Io {
            path: path.display().to_string(),
            source,
        }
    }
}
