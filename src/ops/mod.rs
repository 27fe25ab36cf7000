//! Analysis modes
//!
//! Each mode is one pure operation over the shared traversal engine:
//! walk + extension filter + line reader. The tree-based modes plug into
//! [`scan_lines`] with a [`LineVisitor`] instead of carrying their own
//! copy of the walk logic; the single-file modes use the line reader
//! directly.

pub mod count;
pub mod dups;
pub mod find;
pub mod imports;
pub mod markers;
pub mod search;
pub mod stats;

use std::path::Path;

use crate::core::error::ScourError;
use crate::core::lines::LineReader;
use crate::core::walk::{ExtensionFilter, FileRecord, Walker};

/// Visitor verdict after each line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    /// End the whole traversal (used by capped modes).
    Stop,
}

/// Per-line consumer for a tree scan.
pub trait LineVisitor {
    /// Called once for every file that opened successfully, before its
    /// first line.
    fn file(&mut self, _record: &FileRecord) {}

    /// Called for every line of every visited file.
    fn line(&mut self, record: &FileRecord, line_no: u32, text: &str) -> Flow;
}

/// Walk `root`, stream every filtered file through the visitor.
///
/// Files that fail to open are skipped without calling the visitor.
pub fn scan_lines<V: LineVisitor>(
    root: &Path,
    filter: ExtensionFilter,
    visitor: &mut V,
) -> Result<(), ScourError> {
    for record in Walker::new(root, filter)? {
        let reader = match LineReader::open(&record.path) {
            Ok(r) => r,
            Err(_) => continue,
        };
        visitor.file(&record);
        for (line_no, text) in reader {
            if visitor.line(&record, line_no, &text) == Flow::Stop {
                return Ok(());
            }
        }
    }
    Ok(())
}

/// Resolve a single-file target: it must exist and be a file.
pub fn resolve_target(path: &Path) -> Result<(), ScourError> {
    if !path.is_file() {
        return Err(ScourError::file_not_found(path));
    }
    Ok(())
}
