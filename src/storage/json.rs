//! JSON file order source

use crate::core::error::QueryError;
use crate::core::order::OrderId;
use crate::core::record::OrderRecord;
use crate::core::store::OrderSource;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Reads a JSON array of order records from a file
///
/// The file is re-read on every fetch, so each load sees the current
/// contents.
#[derive(Debug, Clone)]
pub struct JsonOrderSource {
    path: PathBuf,
    name: String,
}

impl JsonOrderSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl OrderSource for JsonOrderSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn fetch_records(&self) -> Result<Vec<OrderRecord>, QueryError> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| QueryError::Source {
            message: format!("failed to read {}: {}", self.name, e),
        })?;
        parse_records(&content)
    }
}

/// Parse a JSON array of order records
///
/// Elements are decoded one at a time, so a field with the wrong type is
/// reported as [`QueryError::MalformedRecord`] against its order id. Only an
/// unreadable document or an element without a string `id` is a
/// [`QueryError::Source`] error.
pub fn parse_records(json: &str) -> Result<Vec<OrderRecord>, QueryError> {
    let values: Vec<Value> = serde_json::from_str(json)?;
    values
        .into_iter()
        .enumerate()
        .map(|(index, value)| decode_record(index, value))
        .collect()
}

fn decode_record(index: usize, value: Value) -> Result<OrderRecord, QueryError> {
    let Some(id) = value.get("id").and_then(Value::as_str).map(OrderId::new) else {
        return Err(QueryError::Source {
            message: format!("order record #{} has no string id", index),
        });
    };

    if let Some((field, e)) = value.as_object().and_then(first_invalid_field) {
        return Err(QueryError::MalformedRecord {
            order_id: id,
            field,
            reason: format!("has the wrong type: {}", e),
        });
    }

    serde_json::from_value(value).map_err(|e| QueryError::MalformedRecord {
        order_id: id,
        field: "record",
        reason: e.to_string(),
    })
}

fn first_invalid_field(record: &Map<String, Value>) -> Option<(&'static str, serde_json::Error)> {
    check_field::<String>(record, "customerName")
        .or_else(|| check_field::<String>(record, "pizzaType"))
        .or_else(|| check_field::<u32>(record, "quantity"))
        .or_else(|| check_field::<String>(record, "orderDate"))
        .or_else(|| check_field::<String>(record, "status"))
        .or_else(|| check_field::<Decimal>(record, "total"))
}

fn check_field<T: DeserializeOwned>(
    record: &Map<String, Value>,
    field: &'static str,
) -> Option<(&'static str, serde_json::Error)> {
    let value = record.get(field)?;
    serde_json::from_value::<Option<T>>(value.clone())
        .err()
        .map(|e| (field, e))
}
