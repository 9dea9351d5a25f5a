use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_malformed_data_file_aborts_startup() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("todo_data.json");
    std::fs::write(&data_file, "{ \"lists\": [ oops").unwrap();

    let mut cmd = Command::cargo_bin("todoz").unwrap();
    cmd.env_remove("RUST_LOG")
        .env("NO_COLOR", "1")
        .arg("--port")
        .arg("0")
        .arg("--data-file")
        .arg(&data_file)
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to start server"));

    // The broken file is not overwritten
    let content = std::fs::read_to_string(&data_file).unwrap();
    assert_eq!(content, "{ \"lists\": [ oops");
}

#[test]
fn test_help_lists_flags() {
    let mut cmd = Command::cargo_bin("todoz").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--data-file"))
        .stdout(predicate::str::contains("--port"))
        .stdout(predicate::str::contains("--serialize-requests"));
}
