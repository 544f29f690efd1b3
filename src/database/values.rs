//! Database Value Types
//!
//! This module provides the `DatabaseValue` enum, the bind parameter type used by
//! the query macros. Values are always sent to MySQL as bound parameters; they never
//! appear in SQL text.

use sqlx::mysql::{MySql, MySqlTypeInfo};
use sqlx::{Database, Encode, Type, encode::IsNull, error::BoxDynError};
use std::fmt::{self, Display};

use crate::models::note::NoteId;

/// A bind parameter with its native MySQL encoding.
///
/// # Variants
///
/// - `Int(i64)` - Compared natively (so an index on the column is used) and also
///   against the column's text form, so a text column holding `'02'` or `'2abc'`
///   does not match `2`
/// - `Text(String)` - Compared against the column's text form, so MySQL never
///   coerces the parameter to a number (`'2; DROP TABLE notes'` does not equal `2`)
///
/// # Examples
///
/// ```rust
/// use notes_app::database::values::DatabaseValue;
///
/// let value: DatabaseValue = 42i64.into();
/// assert_eq!(value.comparison("id"), "id = ? AND CAST(id AS CHAR) = ?");
/// assert_eq!(value.binds().len(), 2);
///
/// let value: DatabaseValue = "abc".into();
/// assert_eq!(value.comparison("id"), "CAST(id AS CHAR) = ?");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseValue {
    Int(i64),
    Text(String),
}

impl DatabaseValue {
    /// The `WHERE` fragment comparing `field` against this value. Its placeholders
    /// line up with [`DatabaseValue::binds`].
    pub fn comparison(&self, field: &str) -> String {
        match self {
            DatabaseValue::Int(_) => format!("{0} = ? AND CAST({0} AS CHAR) = ?", field),
            DatabaseValue::Text(_) => format!("CAST({} AS CHAR) = ?", field),
        }
    }

    /// Parameters to bind, in placeholder order, for [`DatabaseValue::comparison`].
    pub fn binds(&self) -> Vec<DatabaseValue> {
        match self {
            DatabaseValue::Int(i) => vec![DatabaseValue::Int(*i), DatabaseValue::Text(i.to_string())],
            DatabaseValue::Text(_) => vec![self.clone()],
        }
    }
}

impl Display for DatabaseValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<'q> Encode<'q, MySql> for DatabaseValue {
    fn encode_by_ref(
        &self,
        buf: &mut <MySql as Database>::ArgumentBuffer<'q>,
    ) -> Result<IsNull, BoxDynError> {
        match self {
            DatabaseValue::Int(i) => Encode::<MySql>::encode_by_ref(i, buf),
            DatabaseValue::Text(s) => Encode::<MySql>::encode_by_ref(s, buf),
        }
    }

    fn produces(&self) -> Option<MySqlTypeInfo> {
        match self {
            DatabaseValue::Int(_) => Some(<i64 as Type<MySql>>::type_info()),
            DatabaseValue::Text(_) => Some(<String as Type<MySql>>::type_info()),
        }
    }
}

impl Type<MySql> for DatabaseValue {
    fn type_info() -> MySqlTypeInfo {
        <String as Type<MySql>>::type_info()
    }
}

impl From<i64> for DatabaseValue {
    fn from(i: i64) -> Self {
        DatabaseValue::Int(i)
    }
}

impl From<&str> for DatabaseValue {
    fn from(s: &str) -> Self {
        DatabaseValue::Text(s.to_string())
    }
}

impl From<String> for DatabaseValue {
    fn from(s: String) -> Self {
        DatabaseValue::Text(s)
    }
}

impl From<&NoteId> for DatabaseValue {
    fn from(id: &NoteId) -> Self {
        match id {
            NoteId::Integer(i) => DatabaseValue::Int(*i),
            NoteId::Text(s) => DatabaseValue::Text(s.clone()),
        }
    }
}
