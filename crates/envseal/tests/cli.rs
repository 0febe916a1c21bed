// SPDX-FileCopyrightText: 2026 Envseal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Runs the compiled `envseal` binary against temporary stores.

use std::process::Command;

fn envseal(dir: &std::path::Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_envseal"));
    cmd.current_dir(dir).env_clear();
    cmd
}

#[test]
fn expose_prints_only_salt_and_hash_keys() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "FOO_SALT=a\nFOO_HASH=b\nUNRELATED=c\n").unwrap();

    let output = envseal(dir.path())
        .args(["expose"])
        .env("AMBIENT_HASH", "d")
        .env("NOT_EXPOSED", "e")
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "AMBIENT_HASH=d\nFOO_HASH=b\nFOO_SALT=a\n"
    );
}

#[test]
fn expose_without_store_succeeds_empty() {
    let dir = tempfile::tempdir().unwrap();
    let output = envseal(dir.path()).args(["expose", "--json"]).output().unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed, serde_json::json!({}));
}

#[test]
fn store_path_comes_from_local_config() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("envseal.toml"), "[store]\npath = \"custom.env\"\n").unwrap();
    std::fs::write(dir.path().join("custom.env"), "X_SALT=01\n").unwrap();

    let output = envseal(dir.path()).args(["expose"]).output().unwrap();
    assert_eq!(String::from_utf8(output.stdout).unwrap(), "X_SALT=01\n");
}

#[test]
fn invalid_config_aborts() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("envseal.toml"), "[logging]\nlevel = \"loud\"\n").unwrap();

    let output = envseal(dir.path()).args(["expose"]).output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn enroll_refuses_piped_input() {
    let dir = tempfile::tempdir().unwrap();
    let output = envseal(dir.path())
        .args(["enroll"])
        .stdin(std::process::Stdio::piped())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(!dir.path().join(".env").exists());
}
