//! Note accessor
//!
//! Owns the connection pool and exposes the single read operation.

use sqlx::MySqlPool;
use tracing::debug;

use crate::config::DatabaseConfig;
use crate::database::connection::create_pool;
use crate::error::{ConfigError, DatastoreError};
use crate::models::note::{Note, NoteId};

/// Read access to the `notes` table.
///
/// Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct NoteAccessor {
    pool: MySqlPool,
}

impl NoteAccessor {
    /// Builds the accessor with a lazily connecting pool. No connection is made
    /// until the first fetch.
    pub fn connect(config: &DatabaseConfig) -> Result<Self, ConfigError> {
        Ok(Self::from_pool(create_pool(config)?))
    }

    pub fn from_pool(pool: MySqlPool) -> Self {
        NoteAccessor { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Fetches the note whose `id` equals `id`.
    ///
    /// Returns `Ok(None)` when no row matches. Connection, credential and query
    /// failures are returned as [`DatastoreError`]; none of them is reported as
    /// "not found".
    pub async fn fetch_note_by_id(
        &self,
        id: impl Into<NoteId>,
    ) -> Result<Option<Note>, DatastoreError> {
        let id = id.into();
        let note = Note::find_one(&self.pool, &id).await?;
        debug!(%id, found = note.is_some(), "Fetched note");
        Ok(note)
    }

    /// Closes the pool, waiting for checked-out connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
