//! Error types for notes-app

use sqlx::mysql::MySqlDatabaseError;
use thiserror::Error;

/// MySQL server error numbers that get their own [`DatastoreError`] kind.
mod mysql_codes {
    pub const DB_ACCESS_DENIED: u16 = 1044;
    pub const ACCESS_DENIED: u16 = 1045;
    pub const BAD_DB: u16 = 1049;
    pub const NO_SUCH_TABLE: u16 = 1146;
}

/// Failure talking to the datastore.
///
/// "Not found" is never one of these; lookups report it as `Ok(None)`.
#[derive(Debug, Error)]
pub enum DatastoreError {
    #[error("Could not reach the datastore: {0}")]
    Connection(#[source] sqlx::Error),

    #[error("Datastore rejected the credentials: {0}")]
    Authentication(#[source] sqlx::Error),

    #[error("Datastore has no such database: {0}")]
    UnknownDatabase(#[source] sqlx::Error),

    #[error("Datastore has no such table: {0}")]
    MissingTable(#[source] sqlx::Error),

    #[error("Query failed: {0}")]
    Query(#[source] sqlx::Error),

    #[error("Could not decode row: {0}")]
    Decode(#[source] sqlx::Error),
}

/// Which [`DatastoreError`] a MySQL server error number maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerErrorKind {
    Authentication,
    UnknownDatabase,
    MissingTable,
    Other,
}

impl ServerErrorKind {
    pub fn from_number(number: u16) -> Self {
        match number {
            mysql_codes::ACCESS_DENIED | mysql_codes::DB_ACCESS_DENIED => {
                ServerErrorKind::Authentication
            }
            mysql_codes::BAD_DB => ServerErrorKind::UnknownDatabase,
            mysql_codes::NO_SUCH_TABLE => ServerErrorKind::MissingTable,
            _ => ServerErrorKind::Other,
        }
    }
}

impl From<sqlx::Error> for DatastoreError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => DatastoreError::Connection(error),
            sqlx::Error::Database(db) => {
                let kind = db
                    .try_downcast_ref::<MySqlDatabaseError>()
                    .map(|e| ServerErrorKind::from_number(e.number()))
                    .unwrap_or(ServerErrorKind::Other);
                match kind {
                    ServerErrorKind::Authentication => DatastoreError::Authentication(error),
                    ServerErrorKind::UnknownDatabase => DatastoreError::UnknownDatabase(error),
                    ServerErrorKind::MissingTable => DatastoreError::MissingTable(error),
                    ServerErrorKind::Other => DatastoreError::Query(error),
                }
            }
            sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::Decode(_) => DatastoreError::Decode(error),
            _ => DatastoreError::Query(error),
        }
    }
}

/// Problems loading [`crate::config::DatabaseConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Could not read config file {path}: {source}")]
    Read {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Invalid DATABASE_URL: {0}")]
    InvalidUrl(#[source] sqlx::Error),
}
