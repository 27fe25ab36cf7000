//! scour - a code tree analysis CLI
//!
//! scour provides:
//! - Pattern search across a source tree (grep-like, capped)
//! - File discovery by shell-style wildcard
//! - Line-count statistics bucketed by extension
//! - TODO/FIXME marker scanning
//! - Duplicate-line detection, import extraction and file statistics
//!   for single files

use anyhow::Result;
use clap::Parser;

mod cli;
mod core;
mod ops;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::run(cli)
}
