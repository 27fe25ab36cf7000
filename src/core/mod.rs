//! Core infrastructure shared by all analysis modes
//!
//! - error: the operation-level error taxonomy
//! - walk: recursive tree traversal with extension filtering
//! - lines: fault-tolerant line-by-line file reading
//! - render: deterministic report formatting

pub mod error;
pub mod lines;
pub mod render;
pub mod walk;
