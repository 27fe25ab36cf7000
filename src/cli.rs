//! CLI module - command-line interface definitions and handlers

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use crate::core::render;
use crate::core::walk::ExtensionFilter;
use crate::ops;

/// scour - a code tree analysis CLI for searching, counting and auditing
/// source files.
#[derive(Parser, Debug)]
#[command(name = "scour")]
#[command(
    author,
    version,
    about,
    long_about = r#"scour answers one analysis question per invocation and prints exactly
one payload on stdout.

Tree commands (search/find/count/markers) walk every file under ROOT,
hidden files included, skipping entries they cannot read. File commands
(dups/imports/stats) analyze a single named file.

Failures never crash the process: the payload becomes a single
"Error: ..." line and the exit code stays 0.

Examples:
    scour search "fn main" --ext rs
    scour find "*.py"
    scour count --ext py,js,ts
    scour markers
    scour dups src/main.rs --min-length 12
    scour imports src/app.ts
    scour stats README.md
"#
)]
pub struct Cli {
    /// Root directory for tree operations.
    #[arg(
        long,
        global = true,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Root directory for tree operations (defaults to the current directory).\n\n\
Single-file targets given to dups/imports/stats are resolved relative to\n\
this root unless absolute."
    )]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search file contents with a case-insensitive regex (grep-like).
    #[command(
        long_about = "Search every file under ROOT for a regex, case-insensitively.\n\n\
One line per hit: path:line: text. Collection stops at the first 100\n\
hits in traversal order.\n\n\
Examples:\n\
  scour search \"TODO|FIXME\"\n\
  scour search \"def \\w+\" --ext py\n"
    )]
    Search {
        /// Regex pattern to search for.
        #[arg(value_name = "PATTERN")]
        pattern: String,

        /// Comma-separated file extensions to search (e.g. "py,js,ts").
        #[arg(
            long,
            value_name = "LIST",
            long_help = "Comma-separated file extensions to search (e.g. \"py,js,ts\").\n\n\
If omitted, all files are searched. Matching is case-sensitive and a\n\
leading dot is ignored."
        )]
        ext: Option<String>,
    },

    /// Find files by shell-style wildcard on the file name.
    #[command(
        long_about = "Find files under ROOT whose name matches a shell-style wildcard,\n\
at any depth. Directories are never returned.\n\n\
Examples:\n\
  scour find \"*.rs\"\n\
  scour find \"test_*\"\n"
    )]
    Find {
        /// File-name pattern (supports * wildcards).
        #[arg(value_name = "PATTERN")]
        pattern: String,
    },

    /// Count lines under ROOT, bucketed by extension.
    #[command(
        long_about = "Count lines across every file under ROOT and print a JSON summary:\n\
total_files, total_lines, and a by_extension map.\n\n\
Files that cannot be opened are skipped and not counted.\n\n\
Examples:\n\
  scour count\n\
  scour count --ext py,rs\n"
    )]
    Count {
        /// Comma-separated file extensions to count.
        #[arg(long, value_name = "LIST")]
        ext: Option<String>,
    },

    /// Find TODO/FIXME/NOTE/XXX/HACK markers in source files.
    #[command(
        long_about = "Scan source files under ROOT (common language suffixes only) for\n\
deferred-work markers. One line per hit: path:line - KIND: message.\n\n\
Example:\n\
  scour markers\n"
    )]
    Markers,

    /// Find duplicate lines in one file.
    #[command(
        long_about = "Group identical lines of FILE (trailing whitespace ignored), report\n\
groups occurring more than once, most frequent first, top 20. Displayed\n\
text is clipped to 80 characters.\n\n\
Examples:\n\
  scour dups src/main.rs\n\
  scour dups data.csv --min-length 20\n"
    )]
    Dups {
        /// File to analyze (relative to ROOT unless absolute).
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Minimum trimmed line length to consider.
        #[arg(long, default_value = "10", value_name = "N")]
        min_length: usize,
    },

    /// Extract import statements from one code file.
    #[command(
        long_about = "Print the import lines of FILE verbatim (trimmed), in file order.\n\
Recognizes Python-style (import / from ... import) and JS-style\n\
(import / const|var ... = require()) statements.\n\n\
Example:\n\
  scour imports src/app.py\n"
    )]
    Imports {
        /// File to analyze (relative to ROOT unless absolute).
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Print statistics for one file (size, lines, words, characters).
    #[command(
        long_about = "Print a JSON block of whole-file statistics: size_bytes, lines,\n\
words, characters, non_empty_lines and the normalized extension.\n\n\
Example:\n\
  scour stats README.md\n"
    )]
    Stats {
        /// File to analyze (relative to ROOT unless absolute).
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
}

/// Resolve a single-file target against the root.
fn resolve(root: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        root.join(file)
    }
}

fn extension_filter(list: Option<&str>) -> ExtensionFilter {
    list.map(ExtensionFilter::parse).unwrap_or_default()
}

/// Run one operation and fold its outcome into a single payload.
fn payload(root: &Path, command: &Commands) -> String {
    match command {
        Commands::Search { pattern, ext } => {
            match ops::search::search(root, pattern, extension_filter(ext.as_deref())) {
                Ok(hits) => render::render_search(pattern, &hits),
                Err(e) => render::render_error(&e),
            }
        }

        Commands::Find { pattern } => match ops::find::find(root, pattern) {
            Ok(paths) => render::render_find(pattern, &paths),
            Err(e) => render::render_error(&e),
        },

        Commands::Count { ext } => {
            match ops::count::count_lines(root, extension_filter(ext.as_deref())) {
                Ok(summary) => render::render_count(&summary),
                Err(e) => render::render_error(&e),
            }
        }

        Commands::Markers => match ops::markers::find_markers(root) {
            Ok(hits) => render::render_markers(&hits),
            Err(e) => render::render_error(&e),
        },

        Commands::Dups { file, min_length } => {
            match ops::dups::find_duplicates(&resolve(root, file), *min_length) {
                Ok(groups) => render::render_duplicates(&groups),
                Err(e) => render::render_error(&e),
            }
        }

        Commands::Imports { file } => {
            match ops::imports::extract_imports(&resolve(root, file)) {
                Ok(imports) => render::render_imports(&imports),
                Err(e) => render::render_error(&e),
            }
        }

        Commands::Stats { file } => match ops::stats::file_stats(&resolve(root, file)) {
            Ok(stats) => render::render_stats(&stats),
            Err(e) => render::render_error(&e),
        },
    }
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    // Absolute root when possible; a bad root falls through to the
    // operation's own validation.
    let root = cli.root.canonicalize().unwrap_or_else(|_| cli.root.clone());
    println!("{}", payload(&root, &cli.command));
    Ok(())
}
