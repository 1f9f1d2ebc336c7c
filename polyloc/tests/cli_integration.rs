//! Integration tests for polyloc CLI

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::{tempdir, TempDir};

const GO_SOURCE: &str = "package main\n\n// entry point\nfunc main() {\n}\n";
const PY_SOURCE: &str = "# helper\nx = 1\n";

fn run_polyloc(args: &[&str]) -> (String, String, bool) {
    let output = Command::new(env!("CARGO_BIN_EXE_polyloc"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let success = output.status.success();

    (stdout, stderr, success)
}

/// `main.go` and `dup.go` share content; `app.py` and a skipped `.git` dir.
fn fixture() -> TempDir {
    let dir = tempdir().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join(".git")).unwrap();
    fs::write(root.join("src/main.go"), GO_SOURCE).unwrap();
    fs::write(root.join("src/dup.go"), GO_SOURCE).unwrap();
    fs::write(root.join("app.py"), PY_SOURCE).unwrap();
    fs::write(root.join("notes.unknownext"), "whatever\n").unwrap();
    fs::write(root.join(".git/config.py"), "x = 1\n").unwrap();
    dir
}

fn path_arg(path: &Path) -> &str {
    path.to_str().unwrap()
}

fn json(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout).expect("Invalid JSON output")
}

#[test]
fn test_cli_help() {
    let (stdout, _, success) = run_polyloc(&["--help"]);

    assert!(success);
    assert!(stdout.contains("polyloc"));
    assert!(stdout.contains("--by-file"));
    assert!(stdout.contains("--sort"));
    assert!(stdout.contains("--output"));
    assert!(stdout.contains("--include-lang"));
    assert!(stdout.contains("--not-match-d"));
    assert!(stdout.contains("--keep-duplicates"));
}

#[test]
fn test_cli_version() {
    let (stdout, _, success) = run_polyloc(&["--version"]);

    assert!(success);
    assert!(stdout.contains("polyloc"));
}

#[test]
fn test_table_output() {
    let dir = fixture();
    let (stdout, _, success) = run_polyloc(&[path_arg(dir.path())]);

    assert!(success);
    assert!(stdout.contains("Language"));
    assert!(stdout.contains("blank"));
    assert!(stdout.contains("comment"));
    assert!(stdout.contains("code"));
    assert!(stdout.lines().any(|l| l.starts_with("Go ")));
    assert!(stdout.lines().any(|l| l.starts_with("Python ")));
    assert!(stdout.lines().any(|l| l.starts_with("Total ")));
}

#[test]
fn test_json_output() {
    let dir = fixture();
    let (stdout, _, success) =
        run_polyloc(&[path_arg(dir.path()), "--output", "json", "--sort", "name"]);

    assert!(success);
    let parsed = json(&stdout);
    let languages = parsed["languages"].as_array().unwrap();
    assert_eq!(languages.len(), 2);
    assert_eq!(languages[0]["name"], "Go");
    assert_eq!(languages[0]["files"], 1);
    assert_eq!(languages[0]["codes"], 3);
    assert_eq!(languages[0]["comments"], 1);
    assert_eq!(languages[0]["blanks"], 1);
    assert_eq!(languages[1]["name"], "Python");
    assert_eq!(parsed["total"]["files"], 2);
    assert_eq!(parsed["total"]["codes"], 4);
}

#[test]
fn test_keep_duplicates() {
    let dir = fixture();
    let (stdout, _, success) =
        run_polyloc(&[path_arg(dir.path()), "--output", "json", "--keep-duplicates"]);

    assert!(success);
    let parsed = json(&stdout);
    assert_eq!(parsed["total"]["files"], 3);
    assert_eq!(parsed["total"]["codes"], 7);
}

#[test]
fn test_by_file_output() {
    let dir = fixture();
    let (stdout, _, success) = run_polyloc(&[path_arg(dir.path()), "--by-file"]);

    assert!(success);
    assert!(stdout.contains("File"));
    assert!(stdout.contains("app.py"));
    assert!(!stdout.contains("config.py"));
    assert!(stdout.lines().any(|l| l.starts_with("Total ")));
}

#[test]
fn test_by_file_json() {
    let dir = fixture();
    let (stdout, _, success) = run_polyloc(&[
        path_arg(dir.path()),
        "--by-file",
        "--output",
        "json",
        "--sort",
        "comments",
    ]);

    assert!(success);
    let parsed = json(&stdout);
    let files = parsed["files"].as_array().unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0]["language"], "Go");
    assert_eq!(files[1]["language"], "Python");
}

#[test]
fn test_by_file_rejects_sort_by_files() {
    let dir = fixture();
    let (_, stderr, success) =
        run_polyloc(&[path_arg(dir.path()), "--by-file", "--sort", "files"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_language_filters() {
    let dir = fixture();
    let (stdout, _, success) =
        run_polyloc(&[path_arg(dir.path()), "--output", "json", "--include-lang", "Python"]);

    assert!(success);
    let parsed = json(&stdout);
    assert_eq!(parsed["languages"].as_array().unwrap().len(), 1);
    assert_eq!(parsed["languages"][0]["name"], "Python");

    let (stdout, _, success) =
        run_polyloc(&[path_arg(dir.path()), "--output", "json", "--exclude-ext", "go,py"]);

    assert!(success);
    let parsed = json(&stdout);
    assert_eq!(parsed["total"]["files"], 0);
}

#[test]
fn test_path_filters() {
    let dir = fixture();
    let (stdout, _, success) = run_polyloc(&[
        path_arg(dir.path()),
        "--output",
        "json",
        "--not-match-d",
        "src$",
    ]);

    assert!(success);
    let parsed = json(&stdout);
    assert_eq!(parsed["total"]["files"], 1);
    assert_eq!(parsed["languages"][0]["name"], "Python");
}

#[test]
fn test_invalid_regex() {
    let dir = fixture();
    let (_, stderr, success) = run_polyloc(&[path_arg(dir.path()), "--match", "(unclosed"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_invalid_path() {
    let (_, stderr, success) = run_polyloc(&["/nonexistent/path"]);

    assert!(!success);
    assert!(stderr.contains("Error:"));
}

#[test]
fn test_show_lang() {
    let (stdout, _, success) = run_polyloc(&["--show-lang"]);

    assert!(success);
    assert!(stdout.lines().any(|l| l.starts_with("Go ") && l.ends_with("(go, go2)")));
    assert!(stdout.lines().any(|l| l.starts_with("Python ")));
}
