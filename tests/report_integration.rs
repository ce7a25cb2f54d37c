//! Integration tests for collecting and reporting the largest entries

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

fn largest_dirs() -> Command {
    Command::cargo_bin("largest-dirs").unwrap()
}

fn write_file(path: &Path, len: usize) {
    File::create(path)
        .unwrap()
        .write_all(&vec![0u8; len])
        .unwrap();
}

fn create_test_tree() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::create_dir(root.join("data")).unwrap();
    write_file(&root.join("data/big.bin"), 20 * 1024);
    write_file(&root.join("mid.bin"), 10 * 1024);
    write_file(&root.join("small.bin"), 5 * 1024);

    dir
}

fn config_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_du_backend_lists_largest() {
    let dir = create_test_tree();

    let output = largest_dirs()
        .args(["--apparent-size", "--backend", "du"])
        .arg(dir.path())
        .arg("3")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.starts_with("Top 3 largest directories:"));
    assert!(stdout.contains("20 KB"));
    assert!(stdout.contains("big.bin"));
    assert!(!stdout.contains("mid.bin"));
    assert!(!stdout.contains("small.bin"));
}

#[test]
fn test_native_backend_lists_largest() {
    let dir = create_test_tree();

    let output = largest_dirs()
        .args(["--apparent-size", "--backend", "native"])
        .arg(dir.path())
        .arg("4")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(stdout.contains("big.bin"));
    assert!(stdout.contains("mid.bin"));
    assert!(!stdout.contains("small.bin"));
    assert!(stdout.find("big.bin").unwrap() < stdout.find("mid.bin").unwrap());
}

#[test]
fn test_limit_above_entry_count() {
    let dir = TempDir::new().unwrap();
    write_file(&dir.path().join("only.bin"), 2048);

    largest_dirs()
        .args(["--backend", "native"])
        .arg(dir.path())
        .arg("100")
        .assert()
        .success()
        .stdout(predicate::str::contains("Top 100 largest directories:"))
        .stdout(predicate::str::contains("only.bin"));
}

#[test]
fn test_json_output() {
    let dir = create_test_tree();

    let output = largest_dirs()
        .args(["--json", "--apparent-size", "--backend", "native"])
        .arg(dir.path())
        .arg("2")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let rows = json.as_array().unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["rank"], 0);
    assert_eq!(rows[0]["path"], dir.path().to_str().unwrap());
    assert!(rows[0]["size"].as_u64().unwrap() >= rows[1]["size"].as_u64().unwrap());
}

#[test]
fn test_nonexistent_path_fails() {
    largest_dirs()
        .arg("/nonexistent/path/12345")
        .arg("5")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty());

    largest_dirs()
        .args(["--backend", "native", "/nonexistent/path/12345", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("/nonexistent/path/12345"));
}

#[test]
fn test_missing_program_fails() {
    let config = config_file("[collector]\ncommand = \"largest-dirs-no-such-program\"\n");

    largest_dirs()
        .arg("--config")
        .arg(config.path())
        .args(["/tmp", "5"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to execute"));
}

#[test]
fn test_unparseable_size_aborts_without_table() {
    // echo prints "notanumber <root>", a line whose size is not a number
    let config = config_file("[collector]\ncommand = \"echo\"\nargs = [\"notanumber\"]\n");

    largest_dirs()
        .arg("--config")
        .arg(config.path())
        .args(["/x", "5"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Top").not())
        .stderr(predicate::str::contains("Failed to parse size 'notanumber'"));
}

#[test]
fn test_paths_with_spaces() {
    let config = config_file("[collector]\ncommand = \"echo\"\nargs = [\"4096\"]\n");

    largest_dirs()
        .arg("--config")
        .arg(config.path())
        .args(["/my dir", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/my dir"))
        .stdout(predicate::str::contains("4 KB"));

    largest_dirs()
        .arg("--config")
        .arg(config.path())
        .args(["--first-token-paths", "/my dir", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/my dir").not())
        .stdout(predicate::str::contains("/my"));
}
