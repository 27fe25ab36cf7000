//! Import-statement extraction
//!
//! Line-level heuristics, not AST parsing: a line qualifies when, after
//! trimming, it starts like a Python import (`import` / `from … import`)
//! or a JavaScript/TypeScript import (`import` / `const|var … = require(`).
//! Matching lines are returned verbatim (trimmed), in file order, without
//! deduplication.

use std::path::Path;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::ScourError;
use crate::core::lines::LineReader;
use crate::ops::resolve_target;

static PY_IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(import |from .+ import )").expect("invalid PY_IMPORT_RE regex")
});

static JS_IMPORT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(import |const .+ = require\(|var .+ = require\()")
        .expect("invalid JS_IMPORT_RE regex")
});

pub fn extract_imports(path: &Path) -> Result<Vec<String>, ScourError> {
    resolve_target(path)?;
    let reader = LineReader::open(path).map_err(|e| ScourError::io(path, e))?;

    let mut imports = Vec::new();
    for (_, text) in reader {
        let trimmed = text.trim();
        if PY_IMPORT_RE.is_match(trimmed) || JS_IMPORT_RE.is_match(trimmed) {
            imports.push(trimmed.to_string());
        }
    }
    Ok(imports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn extract(content: &str) -> Vec<String> {
        let temp = tempdir().unwrap();
        let path = temp.path().join("code");
        fs::write(&path, content).unwrap();
        extract_imports(&path).unwrap()
    }

    #[test]
    fn test_python_imports_in_file_order() {
        let imports = extract("import os\n    x = 1\nfrom foo import bar\n");
        assert_eq!(imports, vec!["import os", "from foo import bar"]);
    }

    #[test]
    fn test_javascript_imports() {
        let imports = extract(
            "import fs from 'fs';\nconst path = require('path');\nvar os = require('os');\nlet x = 1;\n",
        );
        assert_eq!(imports.len(), 3);
        assert_eq!(imports[1], "const path = require('path');");
    }

    #[test]
    fn test_indented_imports_are_matched() {
        let imports = extract("def f():\n    import json\n");
        assert_eq!(imports, vec!["import json"]);
    }

    #[test]
    fn test_no_dedup() {
        let imports = extract("import os\nimport os\n");
        assert_eq!(imports.len(), 2);
    }

    #[test]
    fn test_non_import_lines_ignored() {
        let imports = extract("x = 'import os'\n# from a import b\nimportant = 1\n");
        assert!(imports.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = extract_imports(Path::new("/no/such/file.py")).err().unwrap();
        assert!(matches!(err, ScourError::FileNotFound(_)));
    }
}
