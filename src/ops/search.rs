//! Pattern search (grep-like)
//!
//! Case-insensitive regex match over every line of every filtered file.
//! Collection stops at the cap: the first 100 hits in traversal order,
//! not the best 100.

use std::path::{Path, PathBuf};

use regex::{Regex, RegexBuilder};

use crate::core::error::ScourError;
use crate::core::walk::{ExtensionFilter, FileRecord};
use crate::ops::{scan_lines, Flow, LineVisitor};

/// Hard cap on hits across the whole traversal.
pub const SEARCH_CAP: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub path: PathBuf,
    /// 1-based line number.
    pub line: u32,
    /// Line text with trailing whitespace trimmed.
    pub text: String,
}

struct SearchVisitor {
    regex: Regex,
    hits: Vec<SearchHit>,
}

impl LineVisitor for SearchVisitor {
    fn line(&mut self, record: &FileRecord, line_no: u32, text: &str) -> Flow {
        if self.regex.is_match(text) {
            self.hits.push(SearchHit {
                path: record.path.clone(),
                line: line_no,
                text: text.trim_end().to_string(),
            });
            if self.hits.len() >= SEARCH_CAP {
                return Flow::Stop;
            }
        }
        Flow::Continue
    }
}

/// Search `root` for `pattern`, restricted by `filter`.
///
/// An invalid pattern fails before any traversal begins.
pub fn search(
    root: &Path,
    pattern: &str,
    filter: ExtensionFilter,
) -> Result<Vec<SearchHit>, ScourError> {
    let regex = RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| ScourError::invalid_pattern(pattern, e))?;

    let mut visitor = SearchVisitor {
        regex,
        hits: Vec::new(),
    };
    scan_lines(root, filter, &mut visitor)?;
    Ok(visitor.hits)
}
