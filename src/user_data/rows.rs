//! Positional serialization of rows with no governed shape
//!
//! The external table can carry any columns, so values are decoded by the
//! column's PostgreSQL type and emitted in column order. NULL maps to JSON
//! null; types without a JSON analog fall back to their text form where the
//! driver can produce one, else null.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Number, Value};
use tokio_postgres::types::Type;
use tokio_postgres::Row;
use uuid::Uuid;

/// Serialize one row as a JSON array of values in column order
pub fn row_values(row: &Row) -> Result<Vec<Value>, tokio_postgres::Error> {
    row.columns()
        .iter()
        .enumerate()
        .map(|(idx, col)| column_value(row, idx, col.type_()))
        .collect()
}

fn column_value(row: &Row, idx: usize, ty: &Type) -> Result<Value, tokio_postgres::Error> {
    let value = if *ty == Type::BOOL {
        row.try_get::<_, Option<bool>>(idx)?.map(Value::Bool)
    } else if *ty == Type::INT2 {
        row.try_get::<_, Option<i16>>(idx)?.map(Value::from)
    } else if *ty == Type::INT4 {
        row.try_get::<_, Option<i32>>(idx)?.map(Value::from)
    } else if *ty == Type::INT8 {
        row.try_get::<_, Option<i64>>(idx)?.map(Value::from)
    } else if *ty == Type::FLOAT4 {
        row.try_get::<_, Option<f32>>(idx)?
            .and_then(|v| Number::from_f64(f64::from(v)))
            .map(Value::Number)
    } else if *ty == Type::FLOAT8 {
        row.try_get::<_, Option<f64>>(idx)?
            .and_then(Number::from_f64)
            .map(Value::Number)
    } else if *ty == Type::TEXT || *ty == Type::VARCHAR || *ty == Type::BPCHAR || *ty == Type::NAME
    {
        row.try_get::<_, Option<String>>(idx)?.map(Value::String)
    } else if *ty == Type::UUID {
        row.try_get::<_, Option<Uuid>>(idx)?
            .map(|v| Value::String(v.to_string()))
    } else if *ty == Type::DATE {
        row.try_get::<_, Option<NaiveDate>>(idx)?
            .map(|v| Value::String(v.to_string()))
    } else if *ty == Type::TIMESTAMP {
        row.try_get::<_, Option<NaiveDateTime>>(idx)?
            .map(|v| Value::String(v.to_string()))
    } else if *ty == Type::TIMESTAMPTZ {
        row.try_get::<_, Option<DateTime<Utc>>>(idx)?
            .map(|v| Value::String(v.to_rfc3339()))
    } else if *ty == Type::JSON || *ty == Type::JSONB {
        row.try_get::<_, Option<Value>>(idx)?
    } else {
        // Unrecognized column type; take a text rendering if the driver
        // offers one, otherwise emit null rather than fail the whole row.
        row.try_get::<_, Option<String>>(idx)
            .unwrap_or(None)
            .map(Value::String)
    };

    Ok(value.unwrap_or(Value::Null))
}
