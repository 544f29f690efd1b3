//! Tracing setup
//!
//! Logs go to stderr so stdout carries only the fetched note.
//!
//!   notes-app --debug ...               # Debug logging
//!   RUST_LOG=notes_app=trace notes-app  # Fine-grained log control

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Initialize tracing with console output. `RUST_LOG` wins over `debug`.
pub fn init_tracing(debug: bool) -> Result<()> {
    let default_level = if debug { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(debug)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
