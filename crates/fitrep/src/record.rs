//! Form record parsing

use crate::{FitrepError, Result};
use serde_json::{Map, Value};
use std::io::Read;

/// One evaluation's answers, keyed by form field name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormRecord {
    values: Map<String, Value>,
}

impl FormRecord {
    /// Get the raw value for a form key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Get a value as a string slice, if it is a JSON string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Render a value as text; absent and null become empty
    pub fn text(&self, key: &str) -> String {
        self.get(key).map(value_to_string).unwrap_or_default()
    }

    /// Whether a value counts as set
    ///
    /// `true`, non-zero numbers and non-empty strings, arrays and objects
    /// are truthy. Absent, `null`, `false`, zero and empty values are not.
    pub fn is_truthy(&self, key: &str) -> bool {
        match self.get(key) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
            Some(Value::String(s)) => !s.is_empty(),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
        }
    }

    /// Number of keys in the record
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the record has no keys
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl TryFrom<Value> for FormRecord {
    type Error = FitrepError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(values) => Ok(Self { values }),
            Value::Null => Err(FitrepError::NotAnObject("null")),
            Value::Bool(_) => Err(FitrepError::NotAnObject("a boolean")),
            Value::Number(_) => Err(FitrepError::NotAnObject("a number")),
            Value::String(_) => Err(FitrepError::NotAnObject("a string")),
            Value::Array(_) => Err(FitrepError::NotAnObject("an array")),
        }
    }
}

/// Parse a form record from a JSON string
pub fn parse_form_record(json: &str) -> Result<FormRecord> {
    let value: Value = serde_json::from_str(json)?;
    FormRecord::try_from(value)
}

/// Read a form record from any reader (typically stdin)
pub fn read_form_record<R: Read>(reader: R) -> Result<FormRecord> {
    let value: Value = serde_json::from_reader(reader)?;
    let record = FormRecord::try_from(value)?;
    tracing::debug!(keys = record.len(), "read form record");
    Ok(record)
}

/// Convert a JSON value to the text written into the template
///
/// Booleans are written as `True`/`False`.
pub fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "True".to_string(),
        Value::Bool(false) => "False".to_string(),
        Value::Null => String::new(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_value_to_string() {
        assert_eq!(value_to_string(&json!("hello")), "hello");
        assert_eq!(value_to_string(&json!(42)), "42");
        assert_eq!(value_to_string(&json!(3.5)), "3.5");
        assert_eq!(value_to_string(&json!(4.0)), "4.0");
        assert_eq!(value_to_string(&json!(true)), "True");
        assert_eq!(value_to_string(&json!(false)), "False");
        assert_eq!(value_to_string(&json!(null)), "");
        assert_eq!(value_to_string(&json!(["a", 1])), r#"["a",1]"#);
    }

    #[test]
    fn test_parse_form_record() {
        let record = parse_form_record(r#"{"rateeName": "Doe, Jane", "leadership": 3}"#).unwrap();
        assert_eq!(record.len(), 2);
        assert_eq!(record.text("rateeName"), "Doe, Jane");
        assert_eq!(record.text("leadership"), "3");
        assert_eq!(record.text("missing"), "");
        assert_eq!(record.get_str("leadership"), None);
    }

    #[test]
    fn test_parse_rejects_non_object() {
        assert!(matches!(
            parse_form_record("[1, 2]"),
            Err(FitrepError::NotAnObject("an array"))
        ));
        assert!(matches!(
            parse_form_record("{not json"),
            Err(FitrepError::ParseError(_))
        ));
    }

    #[test]
    fn test_read_form_record() {
        let record = read_form_record(&b"{\"status\": \"FTS\"}"[..]).unwrap();
        assert_eq!(record.get_str("status"), Some("FTS"));
    }

    #[test]
    fn test_is_truthy() {
        let record = parse_form_record(
            r#"{"t": true, "f": false, "one": 1, "zero": 0, "s": "yes", "empty": "",
                "arr": [], "obj": {"a": 1}, "nil": null}"#,
        )
        .unwrap();
        assert!(record.is_truthy("t"));
        assert!(!record.is_truthy("f"));
        assert!(record.is_truthy("one"));
        assert!(!record.is_truthy("zero"));
        assert!(record.is_truthy("s"));
        assert!(!record.is_truthy("empty"));
        assert!(!record.is_truthy("arr"));
        assert!(record.is_truthy("obj"));
        assert!(!record.is_truthy("nil"));
        assert!(!record.is_truthy("absent"));
    }
}
