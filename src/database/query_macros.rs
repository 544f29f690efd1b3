//! Query Macros for Database Operations
//!
//! This module provides macros for finding and retrieving resources from the database.
//! All macros work with any struct that implements the `DatabaseResource` trait.

use crate::database::values::DatabaseValue;

/// Builds `SELECT * FROM {table}` with one `AND`-joined comparison per param.
///
/// Only `?` placeholders are emitted for values; callers bind
/// `DatabaseValue::binds` of each param in the same order as `params`.
pub fn select_where_fields(
    table: &str,
    params: &[(&str, DatabaseValue)],
    limit: Option<u32>,
) -> String {
    let mut query = format!("SELECT * FROM {}", table);
    if !params.is_empty() {
        query.push_str(" WHERE ");
    }
    for (i, (field, value)) in params.iter().enumerate() {
        query.push_str(&value.comparison(field));
        if i < params.len() - 1 {
            query.push_str(" AND ");
        }
    }
    if let Some(limit) = limit {
        query.push_str(&format!(" LIMIT {}", limit));
    }
    query
}

/// Finds a single resource matching the specified field conditions.
///
/// This macro generates a SELECT query with WHERE clauses and LIMIT 1. If multiple
/// resources match, only the first one is returned; if none match the result is
/// `Ok(None)`.
///
/// The resource must be named by its bare type name, since the table name is
/// derived from it (`Note` reads from `notes`).
///
/// # Arguments
/// * `$resource` - The resource type (must implement DatabaseResource)
/// * `$pool` - A `&MySqlPool` to run the query on
/// * `$params` - Vector of `(&str, DatabaseValue)` tuples for field conditions
///
/// # Returns
/// `Result<Option<Resource>, sqlx::Error>`
///
/// # Example
/// ```rust,ignore
/// let params = vec![("id", 2i64.into())];
/// let note = find_one_resource_where_fields!(Note, &pool, params).await?;
/// ```
#[macro_export]
macro_rules! find_one_resource_where_fields {
    ($resource:ty, $pool:expr, $params:expr) => {{
        use $crate::database::{
            query_macros::select_where_fields, traits::DatabaseResource, values::DatabaseValue,
        };
        use $crate::utils::strings::table_name_for;

        async {
            let resource_name = table_name_for(stringify!($resource));

            let params: Vec<(&str, DatabaseValue)> = $params;
            let query = select_where_fields(&resource_name, &params, Some(1));

            let mut query = sqlx::query(&query);
            for (_, value) in params.iter() {
                for bind in value.binds() {
                    query = query.bind(bind);
                }
            }

            match query.fetch_optional($pool).await {
                Ok(Some(row)) => <$resource as DatabaseResource>::from_row(&row).map(Some),
                Ok(None) => Ok(None),
                Err(e) => Err(e),
            }
        }
    }};
}
