//! E2E tests for reading omitted values from `--input FILE`

use std::fs;
use std::process::Command;
use tempfile::NamedTempFile;

const CLI_BINARY: &str = env!("CARGO_BIN_EXE_kata");

#[test]
fn test_reverse_from_file() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, "-120\n").unwrap();

    let output = Command::new(CLI_BINARY)
        .args(["--input", temp_file.path().to_str().unwrap(), "reverse"])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "-21");
}

#[test]
fn test_profit_from_file() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, "6\n7 1 5\n3 6 4\n").unwrap();

    let output = Command::new(CLI_BINARY)
        .args(["profit", "-i", temp_file.path().to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "5");
}

#[test]
fn test_palindrome_from_file() {
    let temp_file = NamedTempFile::new().unwrap();
    fs::write(&temp_file, "Was it a car or a cat I saw?\n").unwrap();

    let output = Command::new(CLI_BINARY)
        .args(["palindrome", "--input", temp_file.path().to_str().unwrap()])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), "Palindrome");
}

#[test]
fn test_missing_input_file() {
    let output = Command::new(CLI_BINARY)
        .args(["--input", "nonexistent_input_12345.txt", "reverse"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("nonexistent_input_12345.txt"));
}
