//! CLI integration tests
//!
//! These tests run the built binaries from temporary working directories to
//! check that:
//! - `file-probe` answers relative to the working directory it is launched in
//! - `resource-reader` only ever reads the copy bundled into the executable
//! - Both ignore their arguments and always exit successfully

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

fn file_probe_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_file-probe"))
}

fn resource_reader_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_resource-reader"))
}

fn run_in(bin: &Path, cwd: &Path, args: &[&str]) -> Output {
    Command::new(bin)
        .args(args)
        .current_dir(cwd)
        .env_remove("RUST_LOG")
        .env_remove("RESOURCE_PROBE_LOG_LEVEL")
        .output()
        .expect("Failed to execute binary")
}

fn bundled_new_csv() -> Vec<u8> {
    fs::read(Path::new(env!("CARGO_MANIFEST_DIR")).join("resources/new.csv"))
        .expect("Failed to read resources/new.csv")
}

/// Helper to create a working directory containing files/new.csv
fn create_probe_dir(content: &str) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::create_dir_all(dir.path().join("files")).expect("Failed to create files/");
    fs::write(dir.path().join("files/new.csv"), content).expect("Failed to write new.csv");
    dir
}

#[test]
fn test_file_probe_absent() {
    let dir = TempDir::new().unwrap();
    let output = run_in(&file_probe_bin(), dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(output.stdout, b"false\n");
}

#[test]
fn test_file_probe_present() {
    let dir = create_probe_dir("a,b\n");
    let output = run_in(&file_probe_bin(), dir.path(), &[]);

    assert!(output.status.success());
    assert_eq!(output.stdout, b"true\n");
}

#[test]
fn test_file_probe_depends_on_launch_directory() {
    let with_file = create_probe_dir("a,b\n");
    let nested = with_file.path().join("files");

    let from_root = run_in(&file_probe_bin(), with_file.path(), &[]);
    let from_nested = run_in(&file_probe_bin(), &nested, &[]);

    assert_eq!(from_root.stdout, b"true\n");
    assert_eq!(from_nested.stdout, b"false\n");
}

#[test]
fn test_file_probe_directory_is_not_a_file() {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join("files/new.csv")).unwrap();

    let output = run_in(&file_probe_bin(), dir.path(), &[]);
    assert_eq!(output.stdout, b"false\n");
}

#[test]
fn test_file_probe_ignores_arguments() {
    let dir = TempDir::new().unwrap();
    let output = run_in(&file_probe_bin(), dir.path(), &["--help", "files/new.csv", "-q"]);

    assert!(output.status.success());
    assert_eq!(output.stdout, b"false\n");
}

#[test]
fn test_resource_reader_prints_bundled_content() {
    let dir = TempDir::new().unwrap();
    let output = run_in(&resource_reader_bin(), dir.path(), &[]);

    assert!(output.status.success());
    assert!(output.stderr.is_empty());

    let newline = output
        .stdout
        .iter()
        .position(|b| *b == b'\n')
        .expect("No estimate line");
    let estimate = std::str::from_utf8(&output.stdout[..newline]).unwrap();
    assert!(estimate.parse::<u64>().is_ok(), "estimate was {:?}", estimate);
    assert_eq!(&output.stdout[newline + 1..], bundled_new_csv().as_slice());
}

#[test]
fn test_resource_reader_ignores_working_directory() {
    // A decoy new.csv in the cwd, both at the root and under files/
    let dir = create_probe_dir("decoy\n");
    fs::write(dir.path().join("new.csv"), "decoy\n").unwrap();

    let output = run_in(&resource_reader_bin(), dir.path(), &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(!stdout.contains("decoy"));
    assert!(output.stdout.ends_with(&bundled_new_csv()));
}

#[test]
fn test_resource_reader_is_idempotent() {
    let dir = TempDir::new().unwrap();
    let first = run_in(&resource_reader_bin(), dir.path(), &[]);
    let second = run_in(&resource_reader_bin(), dir.path(), &["ignored", "--flag"]);

    assert!(second.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn test_logging_goes_to_stderr_only() {
    let dir = TempDir::new().unwrap();
    let quiet = run_in(&file_probe_bin(), dir.path(), &[]);
    let verbose = Command::new(file_probe_bin())
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("RESOURCE_PROBE_LOG_LEVEL", "debug")
        .output()
        .expect("Failed to execute file-probe");

    assert_eq!(quiet.stdout, verbose.stdout);
    assert!(String::from_utf8_lossy(&verbose.stderr).contains("Probed file"));
}
