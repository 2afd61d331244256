//! Plain-data snapshots of a listing's tracked fields.
//!
//! Diffing works on snapshots, never on live records: a snapshot is a
//! point-in-time copy reduced to plain JSON data, so persistence wrappers
//! and lazy accessors can't leak into comparison.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ModerationError, Result};

/// A point-in-time copy of a record's fields as plain data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Snapshot {
    fields: Map<String, Value>,
}

impl Snapshot {
    /// An empty snapshot; every field reads as absent.
    pub fn new() -> Self {
        Self { fields: Map::new() }
    }

    /// Reduce any serializable record to a plain-data snapshot.
    ///
    /// This is the seam between rich domain types and the diff: whatever
    /// the record type does internally, only its serialized fields reach
    /// comparison.
    pub fn from_record<T: Serialize>(record: &T) -> Result<Self> {
        match serde_json::to_value(record)? {
            Value::Object(fields) => Ok(Self { fields }),
            other => Err(ModerationError::NotAnObject {
                kind: value_kind(&other),
            }),
        }
    }

    /// Wrap an already-parsed JSON value. Non-objects yield an empty
    /// snapshot rather than an error, matching how absent records diff.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(fields) => Self { fields },
            _ => Self::new(),
        }
    }

    /// Look up a field. A missing key reads as `None`.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Set a field value.
    pub fn set(&mut self, field: impl Into<String>, value: Value) {
        self.fields.insert(field.into(), value);
    }

    /// True when no fields are present.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Shape of one field value as seen by moderation.
///
/// One exhaustive classification instead of ad hoc type probing at each
/// call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    /// The field is not present in the snapshot.
    Absent,
    /// A plain string.
    Text(&'a str),
    /// A non-string primitive: number, boolean, or explicit null.
    Scalar(&'a Value),
    /// An ordered sequence. Element order is meaningful.
    Items(&'a [Value]),
    /// A structured object.
    Record(&'a Map<String, Value>),
}

impl<'a> FieldValue<'a> {
    /// Classify an optional raw value into its shape.
    pub fn of(value: Option<&'a Value>) -> Self {
        match value {
            None => FieldValue::Absent,
            Some(Value::String(text)) => FieldValue::Text(text),
            Some(Value::Array(items)) => FieldValue::Items(items),
            Some(Value::Object(record)) => FieldValue::Record(record),
            Some(scalar) => FieldValue::Scalar(scalar),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct DemoRecord {
        title: String,
        #[serde(rename = "teamSize")]
        team_size: u32,
    }

    #[test]
    fn from_record_reduces_to_plain_fields() {
        let record = DemoRecord {
            title: "Gutter cleaning".to_string(),
            team_size: 3,
        };
        let snapshot = Snapshot::from_record(&record).unwrap();
        assert_eq!(snapshot.get("title"), Some(&json!("Gutter cleaning")));
        assert_eq!(snapshot.get("teamSize"), Some(&json!(3)));
        assert_eq!(snapshot.get("missing"), None);
    }

    #[test]
    fn from_record_rejects_non_objects() {
        let error = Snapshot::from_record(&"just a string").unwrap_err();
        assert!(matches!(
            error,
            ModerationError::NotAnObject { kind: "string" }
        ));
    }

    #[test]
    fn from_value_tolerates_non_objects() {
        let snapshot = Snapshot::from_value(json!([1, 2, 3]));
        assert!(snapshot.is_empty());
    }

    #[test]
    fn field_value_classifies_shapes() {
        let text = json!("words");
        let items = json!(["a", "b"]);
        let record = json!({"k": "v"});
        let number = json!(12);
        let null = Value::Null;

        assert_eq!(FieldValue::of(None), FieldValue::Absent);
        assert!(matches!(FieldValue::of(Some(&text)), FieldValue::Text("words")));
        assert!(matches!(FieldValue::of(Some(&items)), FieldValue::Items(_)));
        assert!(matches!(FieldValue::of(Some(&record)), FieldValue::Record(_)));
        assert!(matches!(FieldValue::of(Some(&number)), FieldValue::Scalar(_)));
        assert!(matches!(FieldValue::of(Some(&null)), FieldValue::Scalar(_)));
    }
}
