//! Row records: arbitrary field name → JSON value maps.

use serde::Serialize;
use serde_json::{Map, Value};

/// One table row
pub type Record = Map<String, Value>;

/// Text form of a value for search, filters and exports.
///
/// `null` has no text; nested arrays/objects are rendered as compact JSON.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
    }
}

/// Text of `record[key]`, `None` when missing or null
pub fn field_text(record: &Record, key: &str) -> Option<String> {
    record.get(key).and_then(value_text)
}

/// Serializes a DTO into a record; non-object values produce an empty record
pub fn to_record<T: Serialize>(item: &T) -> Record {
    match serde_json::to_value(item) {
        Ok(Value::Object(map)) => map,
        _ => Record::new(),
    }
}

pub fn to_records<T: Serialize>(items: &[T]) -> Vec<Record> {
    items.iter().map(to_record).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_text() {
        assert_eq!(value_text(&json!(null)), None);
        assert_eq!(value_text(&json!("a,b")), Some("a,b".to_string()));
        assert_eq!(value_text(&json!(12.5)), Some("12.5".to_string()));
        assert_eq!(value_text(&json!(false)), Some("false".to_string()));
        assert_eq!(value_text(&json!({"k": 1})), Some("{\"k\":1}".to_string()));
    }

    #[test]
    fn test_to_record_from_struct() {
        #[derive(Serialize)]
        struct Row {
            name: &'static str,
            sent: u32,
        }
        let rec = to_record(&Row { name: "Spring", sent: 3 });
        assert_eq!(field_text(&rec, "name").as_deref(), Some("Spring"));
        assert_eq!(field_text(&rec, "sent").as_deref(), Some("3"));
        assert_eq!(field_text(&rec, "missing"), None);
        assert!(to_record(&5).is_empty());
    }
}
