use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

/// A command with a clean environment and a cwd without a .env file, so the
/// binary sees exactly the variables each test sets.
fn clean_command() -> (Command, tempfile::TempDir) {
    let dir = tempdir().expect("Creating temp working dir failed");
    let mut cmd = Command::cargo_bin("rmm-report").expect("Binary exists");
    cmd.env_clear().current_dir(dir.path());
    (cmd, dir)
}

#[test]
fn run_without_configuration_exits_with_misconfigured_status() {
    let (mut cmd, _dir) = clean_command();

    cmd.arg("run")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("NRMM_KEY_ID"));
}

#[test]
fn run_with_partial_configuration_names_the_missing_variable() {
    let (mut cmd, _dir) = clean_command();

    cmd.arg("run")
        .env("NRMM_KEY_ID", "key-id")
        .env("NRMM_SECRET", "key-secret")
        .env("DEVICE_GROUP", "servers")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("S3_BUCKET"));
}

#[test]
fn preview_with_unreachable_directory_fails_with_generic_status() {
    let (mut cmd, dir) = clean_command();
    let output = dir.path().join("report.csv");

    // Fully configured, but the directory endpoint refuses connections: this
    // is an upstream fetch failure, not a misconfiguration.
    cmd.arg("preview")
        .arg("--output")
        .arg(&output)
        .env("NRMM_KEY_ID", "key-id")
        .env("NRMM_SECRET", "key-secret")
        .env("S3_BUCKET", "reports-bucket")
        .env("DEVICE_GROUP", "servers")
        .env("NRMM_BASE_URL", "http://127.0.0.1:9")
        .assert()
        .code(1);
    assert!(!output.exists(), "No report file should be written on failure");
}

#[test]
fn help_describes_the_report_commands() {
    let (mut cmd, _dir) = clean_command();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run").and(predicate::str::contains("preview")));
}
