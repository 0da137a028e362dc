//! E2E tests for CLI workflows driven by arguments and stdin

use std::io::Write;
use std::process::{Command, Output, Stdio};

const CLI_BINARY: &str = env!("CARGO_BIN_EXE_kata");

fn run_command(args: &[&str]) -> Output {
    Command::new(CLI_BINARY)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap_or_else(|_| panic!("Failed to execute {CLI_BINARY}"))
}

fn run_with_stdin(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(CLI_BINARY)
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap_or_else(|_| panic!("Failed to execute {CLI_BINARY}"));

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_reverse_argument() {
    let output = run_command(&["reverse", "123"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "321");
}

#[test]
fn test_reverse_negative_argument() {
    let output = run_command(&["reverse", "-123"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "-321");
}

#[test]
fn test_reverse_reads_stdin() {
    let output = run_with_stdin(&["reverse"], "1534236469\n");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "0");
}

#[test]
fn test_reverse_strict_overflow_fails() {
    let output = run_command(&["reverse", "--strict", "-2147483648"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_OVERFLOW"));
}

#[test]
fn test_invalid_integer_reports_input_error() {
    let output = run_with_stdin(&["reverse"], "twelve\n");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_INPUT"));
    assert!(stderr.contains("twelve"));
}

#[test]
fn test_product_reads_count_then_values() {
    let output = run_with_stdin(&["product"], "5\n-1 1 0 -3 3\n");

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "0 0 9 0 0");
}

#[test]
fn test_park_default_demo() {
    let output = run_command(&["park"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "true\ntrue\nfalse\nfalse");
}

#[test]
fn test_divide_by_zero_fails() {
    let output = run_command(&["divide", "1", "0"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERR_DIV_ZERO"));
}

#[test]
fn test_verbose_logs_to_stderr_only() {
    let output = run_command(&["-vv", "reverse", "1534236469"]);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "0");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("reversal exceeds i32::MAX"));
}

#[test]
fn test_missing_subcommand_fails() {
    let output = run_command(&[]);
    assert!(!output.status.success());
}
