//! Error scenario integration tests

use std::process::Command;

use tempfile::TempDir;

fn smart_paste_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_smart-paste"))
}

fn isolated(config_home: &TempDir) -> Command {
    let mut cmd = smart_paste_bin();
    cmd.env("XDG_CONFIG_HOME", config_home.path())
        .env("HOME", config_home.path());
    cmd
}

#[test]
fn config_get_unknown_key() {
    let home = TempDir::new().unwrap();
    let output = isolated(&home)
        .args(["config", "get", "unknown_key"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_unknown_key() {
    let home = TempDir::new().unwrap();
    let output = isolated(&home)
        .args(["config", "set", "unknown_key", "value"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Unknown") || stderr.contains("Valid"),
        "Expected error about unknown key, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_cache_ttl() {
    let home = TempDir::new().unwrap();
    let output = isolated(&home)
        .args(["config", "set", "cache_ttl", "soon"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("cache_ttl") || stderr.contains("duration"),
        "Expected error about invalid duration, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_log_level() {
    let home = TempDir::new().unwrap();
    let output = isolated(&home)
        .args(["config", "set", "log_level", "loud"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Valid options") || stderr.contains("log_level"),
        "Expected error about invalid log level, got: {}",
        stderr
    );
}

#[test]
fn config_set_invalid_boolean() {
    let home = TempDir::new().unwrap();
    let output = isolated(&home)
        .args(["config", "set", "restore_clipboard", "maybe"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("true") || stderr.contains("false"),
        "Expected error about invalid boolean, got: {}",
        stderr
    );
}

#[test]
fn config_list_with_no_file() {
    let home = TempDir::new().unwrap();
    let output = isolated(&home)
        .args(["config", "list"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("not set"),
        "Expected config list output, got: {}",
        stdout
    );
}

#[test]
fn unknown_subcommand_rejected() {
    let output = smart_paste_bin()
        .arg("transcribe")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(2));
}
