use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::NamedTempFile;


fn source_file(code: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(code.as_bytes()).unwrap();
    file
}

#[test]
fn runs_program_from_file() {
    let file = source_file("++++++++[>++++[>++>+++>+++>+<<<<-]>+>+>->>+[<]<-]>>.>---.+++++++..+++.");
    let mut cmd = Command::cargo_bin("bfrun").unwrap();
    cmd.arg(file.path())
        .assert()
        .success()
        .stdout("Hello")
        .stderr(predicate::str::is_empty());
}

#[test]
fn echoes_one_byte_from_stdin() {
    let file = source_file(",.");
    let mut cmd = Command::cargo_bin("bfrun").unwrap();
    cmd.arg(file.path())
        .write_stdin("A")
        .assert()
        .success()
        .stdout("A");
}

#[test]
fn end_of_input_exits_zero() {
    let file = source_file(",.");
    let mut cmd = Command::cargo_bin("bfrun").unwrap();
    cmd.arg(file.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn unmatched_bracket_is_rejected() {
    let file = source_file("+[+");
    let mut cmd = Command::cargo_bin("bfrun").unwrap();
    cmd.arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unmatched '[' at position 1."));
}

#[test]
fn unmatched_close_bracket_is_rejected() {
    let file = source_file("]");
    let mut cmd = Command::cargo_bin("bfrun").unwrap();
    cmd.arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unmatched ']' at position 0."));
}

#[test]
fn missing_file_reports_error() {
    let mut cmd = Command::cargo_bin("bfrun").unwrap();
    cmd.arg("no_such_program.bf")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error reading the Brainfuck file"));
}

#[test]
fn missing_argument_is_a_usage_error() {
    let mut cmd = Command::cargo_bin("bfrun").unwrap();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("SRC_FILE"));
}

#[test]
fn dump_command_writes_diagnostics_to_stderr() {
    let file = source_file("+>++#");
    let mut cmd = Command::cargo_bin("bfrun").unwrap();
    cmd.arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("1 [1, 2, 0"));
}
