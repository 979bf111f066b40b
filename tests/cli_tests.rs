// Command-line Tests for ygconcat
// These tests run the built binary inside a temporary working directory

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ygconcat"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

/// Merged output goes to stdout
#[test]
fn test_cli_merges_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("element0.yg"), "H1\nA\nB\n\nH2\nC\n\n").unwrap();
    fs::write(dir.path().join("element1.yg"), "h1\nX\n\nh2\nY\nZ\n\n").unwrap();

    let output = run(dir.path(), &["2"]);
    assert!(output.status.success());
    assert_eq!(output.stdout, b"H1\nA\nB\nX\n\nH2\nC\nY\nZ\n\n");
}

/// Wrong argument count prints usage and exits with 1
#[test]
fn test_cli_usage() {
    let dir = TempDir::new().unwrap();

    for args in [&[][..], &["1", "2"][..]] {
        let output = run(dir.path(), args);
        assert_eq!(output.status.code(), Some(1));
        assert!(String::from_utf8_lossy(&output.stderr).contains("Usage: ygconcat <nElems>"));
        assert!(output.stdout.is_empty());
    }
}

/// Non-numeric and zero counts fail
#[test]
fn test_cli_bad_count() {
    let dir = TempDir::new().unwrap();

    for arg in ["abc", "-1", "0"] {
        let output = run(dir.path(), &[arg]);
        assert_eq!(output.status.code(), Some(1), "count {arg}");
        assert!(String::from_utf8_lossy(&output.stderr).contains("Error"));
    }
}

/// Missing element files fail with a diagnostic naming the file
#[test]
fn test_cli_missing_file() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("element0.yg"), "H\nA\n\n").unwrap();

    let output = run(dir.path(), &["2"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("element1.yg"));
}
