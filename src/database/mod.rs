//! Database Layer
//!
//! Read access to MySQL through SQLx. Resources implement `DatabaseResource` and
//! are fetched with the query macros, which derive the table name from the type
//! name (camelCase to snake_case + pluralization) and bind every value as a
//! parameter.
//!
//! ## Module Structure
//!
//! - `connection.rs` - Pool construction from `DatabaseConfig`
//! - `traits.rs` - DatabaseResource trait definition
//! - `values.rs` - DatabaseValue enum for bind parameters
//! - `query_macros.rs` - SQL building and the `find_one_resource_where_fields!` macro
//! - `row.rs` - Generic decoding of arbitrary columns into JSON values
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use notes_app::config::DatabaseConfig;
//! use notes_app::database::connection::create_pool;
//! use notes_app::find_one_resource_where_fields;
//! use notes_app::models::note::Note;
//!
//! async fn example() -> anyhow::Result<()> {
//!     let pool = create_pool(&DatabaseConfig::default())?;
//!     let params = vec![("id", 2i64.into())];
//!     let note: Option<Note> = find_one_resource_where_fields!(Note, &pool, params).await?;
//!     pool.close().await;
//!     Ok(())
//! }
//! ```

pub mod connection;
pub mod query_macros;
pub mod row;
pub mod traits;
pub mod values;
