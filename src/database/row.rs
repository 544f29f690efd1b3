//! Generic row decoding
//!
//! Turns every column of a `MySqlRow` into a `serde_json::Value`, keyed by column
//! name in result-set order. Used for resources whose columns are not known
//! ahead of time (`SELECT *`).

use serde_json::{Map, Number, Value};
use sqlx::mysql::types::MySqlTime;
use sqlx::mysql::{MySql, MySqlRow};
use sqlx::{Column, Decode, Row, Type, TypeInfo, ValueRef};
use time::{Date, PrimitiveDateTime};

use crate::utils::time::{format_duration, format_timestamp};

/// How a column is decoded, chosen from its MySQL type name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Signed,
    Unsigned,
    Year,
    Boolean,
    Float,
    DateTime,
    Date,
    Time,
    Json,
    Text,
}

impl ColumnKind {
    pub fn from_type_name(name: &str) -> Self {
        if name.ends_with("UNSIGNED") {
            return ColumnKind::Unsigned;
        }
        match name {
            "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => ColumnKind::Signed,
            "YEAR" => ColumnKind::Year,
            "BOOLEAN" => ColumnKind::Boolean,
            "FLOAT" | "DOUBLE" => ColumnKind::Float,
            "DATETIME" | "TIMESTAMP" => ColumnKind::DateTime,
            "DATE" => ColumnKind::Date,
            "TIME" => ColumnKind::Time,
            "JSON" => ColumnKind::Json,
            _ => ColumnKind::Text,
        }
    }
}

/// Decodes all columns of `row`.
pub fn decode_columns(row: &MySqlRow) -> Result<Map<String, Value>, sqlx::Error> {
    let mut columns = Map::new();
    for column in row.columns() {
        let kind = ColumnKind::from_type_name(column.type_info().name());
        let value = decode_column(row, column.ordinal(), kind)?;
        columns.insert(column.name().to_string(), value);
    }
    Ok(columns)
}

pub fn decode_column(row: &MySqlRow, index: usize, kind: ColumnKind) -> Result<Value, sqlx::Error> {
    if row.try_get_raw(index)?.is_null() {
        return Ok(Value::Null);
    }

    match kind {
        ColumnKind::Signed => Ok(Value::from(row.try_get::<i64, _>(index)?)),
        ColumnKind::Unsigned => Ok(Value::from(row.try_get::<u64, _>(index)?)),
        // YEAR arrives as a small integer but is not a type sqlx maps to one
        ColumnKind::Year => Ok(Value::from(row.try_get_unchecked::<i64, _>(index)?)),
        ColumnKind::Boolean => Ok(Value::from(row.try_get::<bool, _>(index)?)),
        ColumnKind::Float => {
            let v: f64 = row.try_get(index)?;
            Ok(Number::from_f64(v).map(Value::Number).unwrap_or(Value::Null))
        }
        ColumnKind::DateTime => temporal_or_null(row, index, |v: PrimitiveDateTime| {
            format_timestamp(v)
                .map(Value::String)
                .map_err(|e| sqlx::Error::Decode(Box::new(e)))
        }),
        ColumnKind::Date => temporal_or_null(row, index, |v: Date| Ok(Value::String(v.to_string()))),
        // TIME is a signed duration and may exceed 24 hours
        ColumnKind::Time => Ok(Value::String(format_duration(&row.try_get::<MySqlTime, _>(index)?))),
        ColumnKind::Json => match row.try_get::<Value, _>(index) {
            Ok(value) => Ok(value),
            Err(sqlx::Error::ColumnDecode { .. }) => decode_text(row, index),
            Err(e) => Err(e),
        },
        ColumnKind::Text => decode_text(row, index),
    }
}

/// Decodes a DATE or DATETIME as `T`. The zero date (`0000-00-00`) has no
/// calendar value and becomes `null`; any other decode failure is returned.
fn temporal_or_null<'r, T, F>(row: &'r MySqlRow, index: usize, into: F) -> Result<Value, sqlx::Error>
where
    T: Decode<'r, MySql> + Type<MySql>,
    F: FnOnce(T) -> Result<Value, sqlx::Error>,
{
    match row.try_get::<T, _>(index) {
        Ok(value) => into(value),
        Err(err @ sqlx::Error::ColumnDecode { .. }) => {
            let bytes: Vec<u8> = row.try_get_unchecked(index)?;
            if is_zero_temporal(&bytes) {
                Ok(Value::Null)
            } else {
                Err(err)
            }
        }
        Err(e) => Err(e),
    }
}

/// Binary rows send the zero date as an empty (all-zero) value; text rows send
/// it literally.
pub fn is_zero_temporal(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| *b == 0) || bytes.starts_with(b"0000-00-00")
}

/// DECIMAL, ENUM, SET, BIT and the text/blob types all arrive as length-prefixed
/// bytes; anything that is not valid UTF-8 is converted lossily.
fn decode_text(row: &MySqlRow, index: usize) -> Result<Value, sqlx::Error> {
    match row.try_get_unchecked::<String, _>(index) {
        Ok(text) => Ok(Value::String(text)),
        Err(sqlx::Error::ColumnDecode { .. }) => {
            let bytes: Vec<u8> = row.try_get_unchecked(index)?;
            Ok(Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        }
        Err(e) => Err(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_kinds() {
        assert_eq!(ColumnKind::from_type_name("INT"), ColumnKind::Signed);
        assert_eq!(ColumnKind::from_type_name("BIGINT"), ColumnKind::Signed);
        assert_eq!(ColumnKind::from_type_name("INT UNSIGNED"), ColumnKind::Unsigned);
        assert_eq!(
            ColumnKind::from_type_name("TINYINT UNSIGNED"),
            ColumnKind::Unsigned
        );
        assert_eq!(ColumnKind::from_type_name("YEAR"), ColumnKind::Year);
        assert_eq!(ColumnKind::from_type_name("BOOLEAN"), ColumnKind::Boolean);
    }

    #[test]
    fn test_temporal_kinds() {
        assert_eq!(ColumnKind::from_type_name("TIMESTAMP"), ColumnKind::DateTime);
        assert_eq!(ColumnKind::from_type_name("DATETIME"), ColumnKind::DateTime);
        assert_eq!(ColumnKind::from_type_name("DATE"), ColumnKind::Date);
        assert_eq!(ColumnKind::from_type_name("TIME"), ColumnKind::Time);
    }

    #[test]
    fn test_zero_dates_are_recognized() {
        assert!(is_zero_temporal(&[]));
        assert!(is_zero_temporal(&[0]));
        assert!(is_zero_temporal(&[0, 0, 0, 0]));
        assert!(is_zero_temporal(b"0000-00-00 00:00:00"));
        assert!(!is_zero_temporal(&[4, 0xE8, 0x07, 3, 5]));
        assert!(!is_zero_temporal(b"2024-03-05"));
    }

    #[test]
    fn test_everything_else_is_text() {
        for name in ["VARCHAR", "TEXT", "DECIMAL", "ENUM", "BLOB", "BIT", "GEOMETRY"] {
            assert_eq!(ColumnKind::from_type_name(name), ColumnKind::Text, "{}", name);
        }
        assert_eq!(ColumnKind::from_type_name("JSON"), ColumnKind::Json);
    }
}
