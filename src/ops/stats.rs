//! Single-file statistics
//!
//! Whole-file counts: bytes, lines, words, characters, non-empty lines.
//! Reads the entire file with lossy decoding since every figure needs the
//! full content anyway.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::core::error::ScourError;
use crate::core::walk::extension_of;
use crate::ops::resolve_target;

#[derive(Debug, Clone, Serialize)]
pub struct FileStats {
    pub file: String,
    pub size_bytes: u64,
    /// Count of `\n`-separated segments, so a trailing newline yields a
    /// final empty line.
    pub lines: usize,
    pub words: usize,
    pub characters: usize,
    pub non_empty_lines: usize,
    pub extension: String,
}

pub fn file_stats(path: &Path) -> Result<FileStats, ScourError> {
    resolve_target(path)?;
    let size_bytes = fs::metadata(path)
        .map_err(|e| ScourError::io(path, e))?
        .len();
    let bytes = fs::read(path).map_err(|e| ScourError::io(path, e))?;
    let content = String::from_utf8_lossy(&bytes);

    Ok(FileStats {
        file: path.display().to_string(),
        size_bytes,
        lines: content.split('\n').count(),
        words: content.split_whitespace().count(),
        characters: content.chars().count(),
        non_empty_lines: content
            .split('\n')
            .filter(|l| !l.trim().is_empty())
            .count(),
        extension: extension_of(path),
    })
}
