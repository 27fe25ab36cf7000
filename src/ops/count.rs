//! Line-count aggregation
//!
//! Streams every filtered file through the line reader, bucketing totals
//! by extension. Files that fail to open are skipped and do not count
//! toward the file total; a file that opens but is empty still registers
//! its extension bucket at zero.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Serialize;

use crate::core::error::ScourError;
use crate::core::walk::{ExtensionFilter, FileRecord};
use crate::ops::{scan_lines, Flow, LineVisitor};

/// Aggregate totals for one traversal.
///
/// Invariant: `total_lines == by_extension.values().sum()`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LineCountSummary {
    pub total_files: usize,
    pub total_lines: usize,
    pub by_extension: BTreeMap<String, usize>,
}

struct CountVisitor {
    summary: LineCountSummary,
}

impl LineVisitor for CountVisitor {
    fn file(&mut self, record: &FileRecord) {
        self.summary.total_files += 1;
        self.summary
            .by_extension
            .entry(record.extension.clone())
            .or_insert(0);
    }

    fn line(&mut self, record: &FileRecord, _line_no: u32, _text: &str) -> Flow {
        self.summary.total_lines += 1;
        if let Some(bucket) = self.summary.by_extension.get_mut(&record.extension) {
            *bucket += 1;
        }
        Flow::Continue
    }
}

pub fn count_lines(
    root: &Path,
    filter: ExtensionFilter,
) -> Result<LineCountSummary, ScourError> {
    let mut visitor = CountVisitor {
        summary: LineCountSummary::default(),
    };
    scan_lines(root, filter, &mut visitor)?;
    Ok(visitor.summary)
}
