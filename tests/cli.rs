//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;

fn excellon2gcode() -> Command {
    cargo_bin_cmd!("excellon2gcode")
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_cli_help() {
    excellon2gcode()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Excellon"));
}

#[test]
fn test_cli_version() {
    excellon2gcode()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_converts_file_to_stdout() {
    let expected = std::fs::read_to_string(fixture("board.ngc")).unwrap();
    excellon2gcode()
        .arg("--input")
        .arg(fixture("board.drl"))
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_cli_reads_stdin_by_default() {
    excellon2gcode()
        .write_stdin("M48\n; comment\nX100Y200\nY300\nX150\n%\n")
        .assert()
        .success()
        .stdout(
            "g90\ng0 f100\ng1 f10\ng0 z 0.125\n\
             g0 x 100 y 200\ng1 z -0.125\ng1 z 0.125\n\
             g0 x 100 y 300\ng1 z -0.125\ng1 z 0.125\n\
             g0 x 150 y 300\ng1 z -0.125\ng1 z 0.125\n",
        );
}

#[test]
fn test_cli_accepts_carriage_return_line_endings() {
    excellon2gcode()
        .write_stdin("X1Y2\rY3\r")
        .assert()
        .success()
        .stdout(
            "g90\ng0 f100\ng1 f10\ng0 z 0.125\n\
             g0 x 1 y 2\ng1 z -0.125\ng1 z 0.125\n\
             g0 x 1 y 3\ng1 z -0.125\ng1 z 0.125\n",
        );
}

#[test]
fn test_cli_dash_means_stdio() {
    excellon2gcode()
        .args(["-i", "-", "-o", "-"])
        .write_stdin("")
        .assert()
        .success()
        .stdout("g90\ng0 f100\ng1 f10\ng0 z 0.125\n");
}

#[test]
fn test_cli_height_and_depth() {
    excellon2gcode()
        .args(["-Z", "2.5", "-z", "-1.75"])
        .write_stdin("X1Y1\n")
        .assert()
        .success()
        .stdout("g90\ng0 f100\ng1 f10\ng0 z 2.5\ng0 x 1 y 1\ng1 z -1.75\ng1 z 2.5\n");
}

#[test]
fn test_cli_long_options_accept_negative_values() {
    excellon2gcode()
        .args(["--height", "-0.5", "--depth", "-3"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("g0 z -0.5\n"));
}

#[test]
fn test_cli_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("board.ngc");

    excellon2gcode()
        .arg("-i")
        .arg(fixture("board.drl"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let expected = std::fs::read_to_string(fixture("board.ngc")).unwrap();
    assert_eq!(std::fs::read_to_string(&out).unwrap(), expected);
}

#[test]
fn test_cli_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();

    excellon2gcode()
        .arg("-i")
        .arg(dir.path().join("missing.drl"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open input file"));
}

#[test]
fn test_cli_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();

    excellon2gcode()
        .arg("-o")
        .arg(dir.path().join("no-such-dir").join("out.ngc"))
        .write_stdin("X1Y1\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to create output file"));
}

#[test]
fn test_cli_rejects_non_numeric_height() {
    excellon2gcode()
        .args(["--height", "high"])
        .write_stdin("X1Y1\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_cli_verbose_logs_to_stderr_only() {
    excellon2gcode()
        .arg("-vv")
        .write_stdin("X1Y1\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("g90\n"))
        .stderr(predicate::str::contains("wrote drilling program"));
}
