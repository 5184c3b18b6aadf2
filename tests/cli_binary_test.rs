//! Binary integration tests for CLI commands
//!
//! These tests run the actual saludador binary to exercise the CLI code paths.

#![expect(clippy::unwrap_used, reason = "integration test assertions")]

use std::path::Path;
use std::process::Command;

fn saludador_bin(config_home: &Path) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_saludador"));
    command
        .env("XDG_CONFIG_HOME", config_home)
        .env_remove("DEBUG");
    command
}

#[test]
fn test_cli_help() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = saludador_bin(temp_dir.path())
        .arg("--help")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Type your name, get a greeting"));
    assert!(stdout.contains("greet"));
}

#[test]
fn test_cli_version() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = saludador_bin(temp_dir.path())
        .arg("--version")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_greet() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = saludador_bin(temp_dir.path())
        .args(["greet", "Ana"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "👋 Hola, Ana!");
}

#[test]
fn test_cli_greet_caps_long_name() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = saludador_bin(temp_dir.path())
        .args(["greet", "abcdefghijklmnopqrstuvwxy"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "👋 Hola, abcdefghijklmnopqrst!");
}

#[test]
fn test_cli_greet_blank_name_fails() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = saludador_bin(temp_dir.path())
        .args(["greet", "   "])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Por favor, introduce un nombre válido."));
}

#[test]
fn test_cli_config_show() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = saludador_bin(temp_dir.path())
        .arg("config")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("poll_interval_ms"));
    assert!(stdout.contains("mouse_capture"));
}

#[test]
fn test_cli_config_path() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = saludador_bin(temp_dir.path())
        .args(["config", "--path"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("saludador"));
}

#[test]
fn test_cli_config_from_flag() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("custom.json");
    std::fs::write(&path, r#"{"poll_interval_ms": 250}"#).unwrap();

    let output = saludador_bin(temp_dir.path())
        .arg("config")
        .arg("--config")
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("250"));
}

#[test]
fn test_cli_config_rejects_bad_keybinding() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let path = temp_dir.path().join("bad.json");
    std::fs::write(&path, r#"{"keys": {"bindings": {"Hyper+x": "quit"}}}"#).unwrap();

    let output = saludador_bin(temp_dir.path())
        .args(["config", "--config"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid keybinding"));
}

#[test]
fn test_cli_invalid_argument_shows_help() {
    let temp_dir = tempfile::TempDir::new().unwrap();
    let output = saludador_bin(temp_dir.path())
        .arg("--invalid-flag")
        .output()
        .unwrap();

    assert!(!output.status.success());

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("error:"));

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Usage:"));
}
