//! notes-app - read notes from a MySQL datastore
//!
//! [`NoteAccessor`] owns a connection pool built from a [`DatabaseConfig`] and
//! fetches single rows of the `notes` table by id.

pub mod accessor;
pub mod cli;
pub mod config;
pub mod database;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod utils;

pub use accessor::NoteAccessor;
pub use config::DatabaseConfig;
pub use error::{ConfigError, DatastoreError};
pub use models::note::{Note, NoteId};
