//! Database Resource Traits
//!
//! This module defines the `DatabaseResource` trait which must be implemented by any
//! struct that wants to use the database macros.

use sqlx::{Error, mysql::MySqlRow};

/// Trait that must be implemented by any struct used with database macros.
///
/// The table a resource lives in is derived from the type name by the macros
/// (`Note` reads from `notes`).
///
/// # Example Implementation
///
/// ```rust,ignore
/// use notes_app::database::traits::DatabaseResource;
/// use sqlx::{Error, Row, mysql::MySqlRow};
///
/// pub struct Tag {
///     pub id: i64,
///     pub name: String,
/// }
///
/// impl DatabaseResource for Tag {
///     fn from_row(row: &MySqlRow) -> Result<Self, Error> {
///         Ok(Tag {
///             id: row.try_get("id")?,
///             name: row.try_get("name")?,
///         })
///     }
/// }
/// ```
pub trait DatabaseResource {
    /// Converts a database row to the implementing struct.
    ///
    /// Use `row.try_get()` to extract fields by column name; decoding errors
    /// should be returned, not unwrapped.
    fn from_row(row: &MySqlRow) -> Result<Self, Error>
    where
        Self: Sized;
}
