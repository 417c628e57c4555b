//! Runs the compiled binaries against an `input.txt` in a scratch working directory.

use std::fs;
use std::process::{Command, Output};

use indoc::indoc;
use tempfile::TempDir;

const SAMPLE: &str = indoc! {"
    1000
    2000
    3000

    4000

    5000
    6000

    7000
    8000
    9000

    10000
"};

fn run_in(dir: &TempDir, bin: &str) -> Output {
    Command::new(bin)
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute binary")
}

fn with_input(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("input.txt"), contents).unwrap();
    dir
}

#[test]
fn test_max_group_prints_largest_sum() {
    let dir = with_input(SAMPLE);

    let output = run_in(&dir, env!("CARGO_BIN_EXE_max_group"));

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "24000\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn test_top_three_prints_total() {
    let dir = with_input(SAMPLE);

    let output = run_in(&dir, env!("CARGO_BIN_EXE_top_three"));

    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "45000\n");
}

#[test]
fn test_missing_input_fails() {
    let dir = TempDir::new().unwrap();

    for bin in [
        env!("CARGO_BIN_EXE_max_group"),
        env!("CARGO_BIN_EXE_top_three"),
    ] {
        let output = run_in(&dir, bin);

        assert!(!output.status.success());
        assert!(output.stdout.is_empty());
        assert!(String::from_utf8_lossy(&output.stderr).contains("input.txt"));
    }
}

#[test]
fn test_malformed_line_fails() {
    let dir = with_input("1\n2\n\nthree\n");

    let output = run_in(&dir, env!("CARGO_BIN_EXE_max_group"));

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("\"three\""));
}

#[test]
fn test_top_three_too_few_groups_fails() {
    let dir = with_input("1\n\n2\n");

    let output = run_in(&dir, env!("CARGO_BIN_EXE_top_three"));

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
