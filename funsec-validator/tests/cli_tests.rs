#![allow(clippy::unwrap_used)]
//! End-to-end tests for the `funsec-validator` binary: stdout token and exit status.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn run(args: &[&str], path: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_funsec-validator"))
        .args(args)
        .arg(path)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn run_on(content: &[u8]) -> Output {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("input.fasta");
    fs::write(&path, content).unwrap();
    run(&[], &path)
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn test_valid_file_exits_zero_silently() {
    let output = run_on(b">seq1\nACDEFG\n>seq2\nMNPQRS\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "");
}

#[test]
fn test_each_rule_prints_its_token_and_exits_one() {
    let cases: [(&[u8], &str); 4] = [
        (b"NOTFASTA\nACDEFG\n", "ERROR\n"),
        (b">this header line is definitely too long xx\nACDEFG\n", "ERROR1\n"),
        (b">seq 1\nACDEFG\n", "ERROR2\n"),
        (b">seq1\nACDEFZ\n", "ERROR3\n"),
    ];
    for (content, token) in cases {
        let output = run_on(content);
        assert_eq!(output.status.code(), Some(1), "token {token}");
        assert_eq!(stdout(&output), token);
    }
}

#[test]
fn test_unreadable_file_prints_error_and_exits_two() {
    let output = run_on(&[0xFF, 0xFE, 0x80]);
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "ERROR\n");

    let tmp = TempDir::new().unwrap();
    let output = run(&[], &tmp.path().join("missing.fasta"));
    assert_eq!(output.status.code(), Some(2));
    assert_eq!(stdout(&output), "ERROR\n");
}

#[test]
fn test_logs_never_reach_stdout() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("input.fasta");
    fs::write(&path, b">seq1\nACDEFZ\n").unwrap();

    let output = run(&["-vv"], &path);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "ERROR3\n");
    assert!(!output.stderr.is_empty(), "expected debug logs on stderr");
}

#[test]
fn test_json_format() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("input.fasta");
    fs::write(&path, b">seq1\nACDEFG\n").unwrap();

    let output = run(&["--format", "json"], &path);
    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["ok"], serde_json::Value::Bool(true));
    assert_eq!(json["records"], 1);
}

#[test]
fn test_missing_argument_is_usage_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_funsec-validator"))
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
}
