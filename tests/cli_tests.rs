//! Integration tests for the notes-app binary that need no datastore

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{notes_cmd, unused_port};

#[test]
fn test_help() {
    notes_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fetch a note"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn test_unreachable_datastore_exits_non_zero() {
    let temp = TempDir::new().unwrap();

    notes_cmd()
        .current_dir(temp.path())
        .env("NOTES_DB_PORT", unused_port().to_string())
        .env("NOTES_DB_ACQUIRE_TIMEOUT_SECS", "1")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Could not reach the datastore"));
}

#[test]
fn test_config_file_is_used() {
    let temp = TempDir::new().unwrap();
    let config_path = temp.path().join("notes.toml");
    fs::write(
        &config_path,
        format!("port = {}\nacquire_timeout_secs = 1\n", unused_port()),
    )
    .unwrap();

    notes_cmd()
        .current_dir(temp.path())
        .arg("--config")
        .arg(&config_path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not reach the datastore"));
}

#[test]
fn test_dotenv_file_is_loaded() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(".env"), "NOTES_DB_PORT=not-a-port\n").unwrap();

    notes_cmd()
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for NOTES_DB_PORT"));
}

#[test]
fn test_missing_config_file() {
    let temp = TempDir::new().unwrap();

    notes_cmd()
        .current_dir(temp.path())
        .arg("--config")
        .arg(temp.path().join("missing.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read config file"));
}

#[test]
fn test_invalid_port() {
    let temp = TempDir::new().unwrap();

    notes_cmd()
        .current_dir(temp.path())
        .env("NOTES_DB_PORT", "mysql")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value for NOTES_DB_PORT"));
}
