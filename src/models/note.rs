use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use sqlx::{Error, MySqlPool, mysql::MySqlRow};
use std::convert::Infallible;
use std::fmt::{self, Display};
use std::str::FromStr;
use tracing::debug;

use crate::{
    database::{row::decode_columns, traits::DatabaseResource, values::DatabaseValue},
    error::DatastoreError,
};

/// Identifier of a row in `notes`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteId {
    Integer(i64),
    Text(String),
}

impl FromStr for NoteId {
    type Err = Infallible;

    /// Whole base-10 integers become `Integer`, anything else is kept as `Text`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.parse::<i64>() {
            Ok(i) => NoteId::Integer(i),
            Err(_) => NoteId::Text(s.to_string()),
        })
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoteId::Integer(i) => write!(f, "{}", i),
            NoteId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for NoteId {
    fn from(i: i64) -> Self {
        NoteId::Integer(i)
    }
}

impl From<&str> for NoteId {
    fn from(s: &str) -> Self {
        NoteId::Text(s.to_string())
    }
}

impl From<String> for NoteId {
    fn from(s: String) -> Self {
        NoteId::Text(s)
    }
}

/// A row of `notes`. Only `id` is interpreted; every other column is kept as
/// returned, in result-set order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Note {
    pub id: NoteId,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Note {
    pub fn get(&self, column: &str) -> Option<&Value> {
        self.fields.get(column)
    }

    pub async fn find_one(pool: &MySqlPool, id: &NoteId) -> Result<Option<Self>, DatastoreError> {
        let params: Vec<(&str, DatabaseValue)> = vec![("id", id.into())];
        match crate::find_one_resource_where_fields!(Note, pool, params).await {
            Ok(note) => Ok(note),
            Err(e) => {
                debug!(%id, error = %e, "[Note::find_one] Failed to get note");
                Err(e.into())
            }
        }
    }
}

fn note_id_from_value(value: Value) -> Result<NoteId, Error> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(NoteId::Integer(i)),
            None => Ok(NoteId::Text(n.to_string())),
        },
        Value::String(s) => Ok(NoteId::Text(s)),
        other => Err(Error::Decode(
            format!("unsupported id value: {}", other).into(),
        )),
    }
}

impl DatabaseResource for Note {
    fn from_row(row: &MySqlRow) -> Result<Self, Error> {
        let mut fields = decode_columns(row)?;
        let id = match fields.shift_remove("id") {
            Some(id) => note_id_from_value(id)?,
            None => return Err(Error::ColumnNotFound("id".to_string())),
        };

        Ok(Note { id, fields })
    }
}
