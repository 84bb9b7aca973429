//! SQL conversions for flat records

use crate::nba::flatten::{CellValue, Column, SqlType};
use rusqlite::types::{ToSql, ToSqlOutput, Type, Value, ValueRef};

impl ToSql for CellValue {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(match self {
            CellValue::Text(s) => ToSqlOutput::Borrowed(ValueRef::Text(s.as_bytes())),
            CellValue::Integer(n) => ToSqlOutput::Owned(Value::Integer(*n)),
            CellValue::Boolean(b) => ToSqlOutput::Owned(Value::Integer(i64::from(*b))),
            CellValue::Null => ToSqlOutput::Owned(Value::Null),
        })
    }
}

/// Read a stored value back as the cell type its column declares.
///
/// Booleans are stored as 0/1 integers.
pub(crate) fn cell_from_sql(
    idx: usize,
    column: &Column,
    value: ValueRef<'_>,
) -> rusqlite::Result<CellValue> {
    match value {
        ValueRef::Null => Ok(CellValue::Null),
        ValueRef::Integer(n) => Ok(match column.sql_type {
            SqlType::Boolean => CellValue::Boolean(n != 0),
            _ => CellValue::Integer(n),
        }),
        ValueRef::Text(bytes) => Ok(CellValue::Text(String::from_utf8_lossy(bytes).into_owned())),
        ValueRef::Real(f) => Ok(CellValue::Text(f.to_string())),
        ValueRef::Blob(_) => Err(rusqlite::Error::InvalidColumnType(
            idx,
            column.name.to_string(),
            Type::Blob,
        )),
    }
}
