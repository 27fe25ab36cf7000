use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn scour_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("scour"))
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

#[test]
fn search_prints_path_line_and_text() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("src/app.py"), "x = 1\ndef handler():\n");

    let assert = scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("search")
        .arg("def handler")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let line = stdout.lines().next().unwrap();
    assert!(line.ends_with("src/app.py:2: def handler():"));
}

#[test]
fn search_filters_by_extension() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.py"), "needle\n");
    write_file(&temp.path().join("b.md"), "needle\n");

    scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("search")
        .arg("needle")
        .arg("--ext")
        .arg("py")
        .assert()
        .success()
        .stdout(predicate::str::contains("a.py"))
        .stdout(predicate::str::contains("b.md").not());
}

#[test]
fn search_caps_output_at_100_lines() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("big.txt"), &"needle\n".repeat(300));

    let assert = scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("search")
        .arg("needle")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert_eq!(stdout.trim_end().lines().count(), 100);
}

#[test]
fn search_no_matches_sentinel() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "nothing\n");

    scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("search")
        .arg("absent_token")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No matches found for pattern 'absent_token'",
        ));
}

#[test]
fn search_invalid_regex_is_error_payload_only() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "content\n");

    let assert = scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("search")
        .arg("[unclosed")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.starts_with("Error: invalid pattern '[unclosed'"));
    // No partial hit output mixed with the error text.
    assert!(!stdout.contains("a.txt"));
}

#[test]
fn find_lists_matching_files_recursively() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("main.rs"), "");
    write_file(&temp.path().join("src/deep/lib.rs"), "");
    write_file(&temp.path().join("src/notes.md"), "");

    scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("find")
        .arg("*.rs")
        .assert()
        .success()
        .stdout(predicate::str::contains("main.rs"))
        .stdout(predicate::str::contains("lib.rs"))
        .stdout(predicate::str::contains("notes.md").not());
}

#[test]
fn find_no_files_sentinel() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.txt"), "");

    scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("find")
        .arg("*.zig")
        .assert()
        .success()
        .stdout(predicate::str::contains("No files found matching '*.zig'"));
}

#[test]
fn count_emits_consistent_json_summary() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("a.py"), "1\n2\n3\n");
    write_file(&temp.path().join("b.rs"), "1\n2\n");
    write_file(&temp.path().join("sub/c.py"), "1\n");

    let assert = scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("count")
        .assert()
        .success();

    let value: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid json summary");
    assert_eq!(value["total_files"], 3);
    assert_eq!(value["total_lines"], 6);
    assert_eq!(value["by_extension"]["py"], 4);
    assert_eq!(value["by_extension"]["rs"], 2);
}

#[test]
fn markers_report_kind_and_message() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("main.cpp"),
        "int x;\n// TODO: fix this\n",
    );
    write_file(&temp.path().join("notes.md"), "// TODO: not source\n");

    let assert = scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("markers")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert!(stdout.contains("main.cpp:2 - TODO: fix this"));
    assert!(!stdout.contains("notes.md"));
}

#[test]
fn markers_none_found_sentinel() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("clean.rs"), "fn main() {}\n");

    scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("markers")
        .assert()
        .success()
        .stdout(predicate::str::contains("No TODOs/FIXMEs found"));
}

#[test]
fn dups_orders_groups_and_clips_display() {
    let temp = tempdir().unwrap();
    let long = "z".repeat(90);
    let mut body = String::new();
    body.push_str("this is long enough\nthis is long enough\n");
    body.push_str(&format!("{long}\n{long}\n{long}\n"));
    write_file(&temp.path().join("data.txt"), &body);

    let assert = scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("dups")
        .arg("data.txt")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    let lines: Vec<_> = stdout.trim_end().lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], format!("(3x) {}...", "z".repeat(80)));
    assert_eq!(lines[1], "(2x) this is long enough");
}

#[test]
fn dups_min_length_flag() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("data.txt"), "dup\ndup\n");

    scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("dups")
        .arg("data.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("No duplicate lines found"));

    scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("dups")
        .arg("data.txt")
        .arg("--min-length")
        .arg("3")
        .assert()
        .success()
        .stdout(predicate::str::contains("(2x) dup"));
}

#[test]
fn dups_missing_file_is_error_payload() {
    let temp = tempdir().unwrap();

    scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("dups")
        .arg("gone.txt")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Error: file '"))
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn imports_returns_raw_lines_in_order() {
    let temp = tempdir().unwrap();
    write_file(
        &temp.path().join("app.py"),
        "import os\n    x = 1\nfrom foo import bar\n",
    );

    let assert = scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("imports")
        .arg("app.py")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout);
    assert_eq!(stdout.trim_end(), "import os\nfrom foo import bar");
}

#[test]
fn imports_none_found_sentinel() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("plain.txt"), "no code here\n");

    scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("imports")
        .arg("plain.txt")
        .assert()
        .success()
        .stdout(predicate::str::contains("No imports found"));
}

#[test]
fn stats_reports_file_figures() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("sample.py"), "one two\n\nthree\n");

    let assert = scour_cmd()
        .arg("--root")
        .arg(temp.path())
        .arg("stats")
        .arg("sample.py")
        .assert()
        .success();

    let value: Value =
        serde_json::from_slice(&assert.get_output().stdout).expect("valid json stats");
    assert_eq!(value["size_bytes"], 15);
    assert_eq!(value["lines"], 4);
    assert_eq!(value["words"], 3);
    assert_eq!(value["non_empty_lines"], 2);
    assert_eq!(value["extension"], "py");
}

#[test]
fn tree_commands_report_invalid_root() {
    for args in [
        vec!["search", "x"],
        vec!["find", "*"],
        vec!["count"],
        vec!["markers"],
    ] {
        scour_cmd()
            .arg("--root")
            .arg("/no/such/directory")
            .args(&args)
            .assert()
            .success()
            .stdout(predicate::str::starts_with(
                "Error: invalid root directory",
            ));
    }
}
