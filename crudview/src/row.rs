//! Property access for rows shown in a data table.

#[cfg(test)]
#[path = "row_test.rs"]
mod row_test;

use crate::value::CellValue;

/// A record the table engine can display.
///
/// `field` resolves a column key. `fields` returns every property value,
/// which free-text search scans in full (not only the declared columns).
pub trait Row {
    fn field(&self, key: &str) -> CellValue;

    fn fields(&self) -> Vec<CellValue>;

    /// Case-insensitive substring match over every property.
    fn matches(&self, needle_lowercase: &str) -> bool {
        self.fields().iter().any(|value| value.contains_lowercase(needle_lowercase))
    }
}

impl Row for serde_json::Value {
    fn field(&self, key: &str) -> CellValue {
        let mut current = self;
        for part in key.split('.') {
            match current.get(part) {
                Some(next) => current = next,
                None => return CellValue::Null,
            }
        }
        json_to_cell(current)
    }

    fn fields(&self) -> Vec<CellValue> {
        match self {
            serde_json::Value::Object(map) => map.values().map(json_to_cell).collect(),
            other => vec![json_to_cell(other)],
        }
    }
}

fn json_to_cell(value: &serde_json::Value) -> CellValue {
    match value {
        serde_json::Value::Null => CellValue::Null,
        serde_json::Value::Bool(b) => CellValue::Bool(*b),
        serde_json::Value::Number(n) => n.as_f64().map_or(CellValue::Null, CellValue::Number),
        serde_json::Value::String(s) => CellValue::Text(s.clone()),
        serde_json::Value::Array(items) => CellValue::List(items.iter().map(json_to_cell).collect()),
        serde_json::Value::Object(_) => CellValue::Text(value.to_string()),
    }
}
