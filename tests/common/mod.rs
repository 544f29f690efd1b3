#![allow(dead_code, deprecated)]

use assert_cmd::Command;
use std::net::TcpListener;

/// The binary with every datastore setting cleared from the environment.
pub fn notes_cmd() -> Command {
    let mut cmd = Command::cargo_bin("notes-app").unwrap();
    for key in [
        "DATABASE_URL",
        "NOTES_CONFIG",
        "NOTES_DB_HOST",
        "NOTES_DB_PORT",
        "NOTES_DB_USER",
        "NOTES_DB_PASSWORD",
        "NOTES_DB_NAME",
        "NOTES_DB_MAX_CONNECTIONS",
        "NOTES_DB_ACQUIRE_TIMEOUT_SECS",
        "RUST_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

/// A local port nothing is listening on.
pub fn unused_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    listener.local_addr().unwrap().port()
}

/// `DATABASE_URL` for tests that need a live MySQL server.
pub fn database_url() -> String {
    std::env::var("DATABASE_URL").expect("DATABASE_URL required")
}
