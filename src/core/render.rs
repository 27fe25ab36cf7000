//! Deterministic report formatting
//!
//! Every operation's findings become exactly one textual payload. Empty
//! result sets render a sentinel line instead of empty output, and
//! operation failures render as a single `Error: ...` string on the same
//! channel so the host always receives a response.

use crate::core::error::ScourError;
use crate::ops::count::LineCountSummary;
use crate::ops::dups::DuplicateGroup;
use crate::ops::markers::MarkerHit;
use crate::ops::search::SearchHit;
use crate::ops::stats::FileStats;
use std::path::PathBuf;

/// Display width for duplicate-line excerpts.
const DUP_DISPLAY_WIDTH: usize = 80;

pub fn render_error(err: &ScourError) -> String {
    format!("Error: {err}")
}

pub fn render_search(pattern: &str, hits: &[SearchHit]) -> String {
    if hits.is_empty() {
        return format!("No matches found for pattern '{pattern}'");
    }
    hits.iter()
        .map(|h| format!("{}:{}: {}", h.path.display(), h.line, h.text))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_find(pattern: &str, paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return format!("No files found matching '{pattern}'");
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_count(summary: &LineCountSummary) -> String {
    serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".to_string())
}

pub fn render_markers(hits: &[MarkerHit]) -> String {
    if hits.is_empty() {
        return "No TODOs/FIXMEs found".to_string();
    }
    hits.iter()
        .map(|h| format!("{}:{} - {}: {}", h.path.display(), h.line, h.kind, h.message))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_duplicates(groups: &[DuplicateGroup]) -> String {
    if groups.is_empty() {
        return "No duplicate lines found".to_string();
    }
    groups
        .iter()
        .map(|g| format!("({}x) {}", g.count, clip(&g.text, DUP_DISPLAY_WIDTH)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_imports(imports: &[String]) -> String {
    if imports.is_empty() {
        return "No imports found".to_string();
    }
    imports.join("\n")
}

pub fn render_stats(stats: &FileStats) -> String {
    serde_json::to_string_pretty(stats).unwrap_or_else(|_| "{}".to_string())
}

/// Truncate to the first `width` characters, marking the cut with `...`
/// only when something was actually removed.
fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width).collect();
    clipped.push_str("...");
    clipped
}
