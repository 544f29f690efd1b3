//! Database Connection Management
//!
//! This module builds the MySQL connection pool from a [`DatabaseConfig`]. The pool
//! is owned by whoever calls [`create_pool`] and is passed by reference to the
//! queries that need it.
//!
//! ## Pool Behavior
//!
//! - **Lazy**: no connection is opened until the first query
//! - **Pool Size**: `max_connections` from the config
//! - **Acquire Timeout**: `acquire_timeout_secs` from the config; an unreachable
//!   server surfaces as a pool timeout once it elapses
//! - **Reuse**: connections are returned to the pool after each query

use sqlx::MySqlPool;
use sqlx::mysql::MySqlPoolOptions;
use tracing::info;

use crate::config::DatabaseConfig;
use crate::error::ConfigError;

/// Creates a lazily connecting pool for `config`.
///
/// Must be called from within a tokio runtime.
///
/// # Errors
///
/// Returns a [`ConfigError`] if the config cannot be turned into connect options
/// (for example an invalid `DATABASE_URL`). Network errors only appear once the
/// pool is used.
pub fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, ConfigError> {
    let options = config.connect_options()?;

    if config.url.is_some() {
        info!(
            max_connections = config.max_connections,
            "Configuring datastore pool from DATABASE_URL"
        );
    } else {
        info!(
            host = %config.host,
            port = config.port,
            database = %config.database,
            max_connections = config.max_connections,
            "Configuring datastore pool"
        );
    }

    Ok(MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .connect_lazy_with(options))
}
