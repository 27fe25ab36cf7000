//! Marker (TODO/FIXME) scanning
//!
//! Scans files with common general-purpose-language suffixes for deferred
//! work markers. One hit per line at most, kind upper-cased, message
//! trimmed. No result cap.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::ScourError;
use crate::core::walk::{ExtensionFilter, FileRecord};
use crate::ops::{scan_lines, Flow, LineVisitor};

/// Source-file suffixes eligible for marker scanning.
pub const SOURCE_EXTENSIONS: &[&str] =
    &["py", "js", "ts", "java", "cpp", "c", "go", "rs", "rb", "php"];

static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(TODO|FIXME|NOTE|XXX|HACK):\s*(.+)").expect("invalid MARKER_RE regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerHit {
    pub path: PathBuf,
    pub line: u32,
    /// Marker keyword, normalized to upper case.
    pub kind: String,
    /// Text after the colon, trimmed.
    pub message: String,
}

struct MarkerVisitor {
    hits: Vec<MarkerHit>,
}

impl LineVisitor for MarkerVisitor {
    fn line(&mut self, record: &FileRecord, line_no: u32, text: &str) -> Flow {
        if let Some(caps) = MARKER_RE.captures(text) {
            self.hits.push(MarkerHit {
                path: record.path.clone(),
                line: line_no,
                kind: caps[1].to_uppercase(),
                message: caps[2].trim().to_string(),
            });
        }
        Flow::Continue
    }
}

pub fn find_markers(root: &Path) -> Result<Vec<MarkerHit>, ScourError> {
    let filter = ExtensionFilter::from_extensions(SOURCE_EXTENSIONS.iter().copied());
    let mut visitor = MarkerVisitor { hits: Vec::new() };
    scan_lines(root, filter, &mut visitor)?;
    Ok(visitor.hits)
}
