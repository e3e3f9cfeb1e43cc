//! Startup failure tests for the server binary.

use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_proxyauth");

#[test]
fn test_missing_realm_file_aborts() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(BIN)
        .current_dir(dir.path())
        .arg("0")
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("users.json"), "stderr: {stderr}");
}

#[test]
fn test_malformed_realm_file_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let users = dir.path().join("realms.json");
    std::fs::write(&users, r#"[{"domain": "topcoder.com", "users": [{"username": "#).unwrap();

    let output = Command::new(BIN)
        .arg("0")
        .arg("--users")
        .arg(&users)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("realms.json"), "stderr: {stderr}");
}

#[test]
fn test_invalid_config_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("proxyauth.toml");
    std::fs::write(&config, "[timeouts]\nrequest_secs = 0\n").unwrap();

    let output = Command::new(BIN)
        .arg("--config")
        .arg(&config)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("request_secs"), "stderr: {stderr}");
}

#[test]
fn test_non_numeric_port_rejected() {
    let output = Command::new(BIN).arg("eighty").output().unwrap();
    assert!(!output.status.success());
}
