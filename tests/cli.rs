use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cli() -> Command {
    Command::cargo_bin("pyqt-forge").unwrap()
}

#[test]
fn test_help_lists_action_flags() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--compile-ui"))
        .stdout(predicate::str::contains("--build-linux"))
        .stdout(predicate::str::contains("--lupdate-file"));
}

#[test]
fn test_version_flag() {
    cli()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pyqt-forge"));
}

#[test]
fn test_missing_package_argument_is_a_usage_error() {
    cli()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_nonexistent_package_fails() {
    cli()
        .arg("/definitely/not/a/package")
        .arg("--compile-ui")
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_no_action_flags_is_a_no_op() {
    let temp = TempDir::new().unwrap();
    cli().arg(temp.path()).assert().success();
}
