//! CLI end-to-end tests, driving the `lugha` binary as a subprocess
//! rather than calling `compile_and_run` in-process.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn lugha() -> Command {
    Command::cargo_bin("lugha").expect("lugha binary")
}

#[test]
fn help_flag_prints_usage() {
    lugha()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn stdin_program_prints_json_artifacts() {
    lugha()
        .write_stdin("عرف س = 10 ؟ لو (س > 5) { عرض (\"كبير\") ؟ }")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"output\""))
        .stdout(predicate::str::contains("كبير"));
}

#[test]
fn output_only_flag_omits_the_other_artifacts() {
    lugha()
        .arg("--output-only")
        .write_stdin("عرض (1 + 2) ؟")
        .assert()
        .success()
        .stdout(predicate::str::contains("3"))
        .stdout(predicate::str::contains("tokens").not());
}

#[test]
fn compiling_a_file_argument_reads_from_that_file() {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "عرض (42) ؟").expect("write source");

    lugha()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("42"));
}

#[test]
fn runtime_error_is_reported_as_json_and_a_failure_exit_code() {
    lugha()
        .write_stdin("عرف ص = 10 ؟ عرف ع = ص / 0 ؟")
        .assert()
        .failure()
        .stdout(predicate::str::contains("\"error\""));
}
