//! Canonical value normalization for change detection.
//!
//! Snapshots come from persisted documents, so two structurally identical
//! values can differ in object key order or carry storage bookkeeping
//! fields (`__v`, `_id`, `id`). Change detection never compares raw
//! values; it compares the canonical string forms produced here.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Storage bookkeeping keys stripped at every nesting level before
/// comparison. The persistence layer inserts these; they carry no user
/// meaning.
pub const INTERNAL_KEYS: [&str; 3] = ["__v", "_id", "id"];

/// Canonical, comparison-stable string form of a field value.
///
/// - a missing or null value becomes the literal `"null"`
/// - strings are used as-is; numbers and booleans use their display form
/// - arrays and objects become compact JSON with internal keys stripped
///   and object keys sorted at every level
///
/// Array element order is preserved: order carries meaning for FAQ
/// entries and similar sub-lists.
pub fn canonical_form(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "null".to_string(),
        Some(Value::String(text)) => text.clone(),
        Some(Value::Bool(flag)) => flag.to_string(),
        Some(Value::Number(number)) => number.to_string(),
        Some(structured) => scrub(structured).to_string(),
    }
}

/// True when two raw values normalize to the same canonical form.
pub fn values_equal(old: Option<&Value>, new: Option<&Value>) -> bool {
    canonical_form(old) == canonical_form(new)
}

/// Rebuild a structured value without internal keys and with object keys
/// in sorted order. Sorting is explicit rather than relying on the JSON
/// map's iteration order, so canonical forms stay deterministic even when
/// another crate in the build enables `preserve_order`.
fn scrub(value: &Value) -> Value {
    match value {
        Value::Object(fields) => {
            let sorted: BTreeMap<&String, &Value> = fields
                .iter()
                .filter(|(key, _)| !INTERNAL_KEYS.contains(&key.as_str()))
                .collect();
            let mut scrubbed = Map::with_capacity(sorted.len());
            for (key, inner) in sorted {
                scrubbed.insert(key.clone(), scrub(inner));
            }
            Value::Object(scrubbed)
        }
        Value::Array(items) => Value::Array(items.iter().map(scrub).collect()),
        primitive => primitive.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_and_null_share_a_form() {
        assert_eq!(canonical_form(None), "null");
        assert_eq!(canonical_form(Some(&Value::Null)), "null");
        assert!(values_equal(None, Some(&Value::Null)));
    }

    #[test]
    fn strings_are_used_verbatim() {
        let value = json!("Deep cleaning");
        assert_eq!(canonical_form(Some(&value)), "Deep cleaning");
    }

    #[test]
    fn primitives_use_display_form() {
        assert_eq!(canonical_form(Some(&json!(42))), "42");
        assert_eq!(canonical_form(Some(&json!(2.5))), "2.5");
        assert_eq!(canonical_form(Some(&json!(true))), "true");
    }

    #[test]
    fn object_key_order_does_not_matter() {
        let a = json!({"question": "Q?", "answer": "A."});
        let b = json!({"answer": "A.", "question": "Q?"});
        assert_eq!(canonical_form(Some(&a)), canonical_form(Some(&b)));
    }

    #[test]
    fn internal_keys_are_stripped_at_every_level() {
        let stored = json!({
            "_id": "abc123",
            "__v": 3,
            "faq": [{"id": 7, "question": "Q?", "answer": "A."}],
        });
        let fresh = json!({
            "faq": [{"question": "Q?", "answer": "A."}],
        });
        assert_eq!(canonical_form(Some(&stored)), canonical_form(Some(&fresh)));
    }

    #[test]
    fn internal_key_only_difference_is_not_a_change() {
        let old = json!([{"_id": "a", "name": "Tiling"}]);
        let new = json!([{"_id": "b", "name": "Tiling"}]);
        assert!(values_equal(Some(&old), Some(&new)));
    }

    #[test]
    fn array_order_is_significant() {
        let a = json!(["first", "second"]);
        let b = json!(["second", "first"]);
        assert!(!values_equal(Some(&a), Some(&b)));
    }

    #[test]
    fn canonical_form_is_deterministic() {
        let value = json!({
            "z": {"b": 1, "a": [{"id": 1, "k": "v"}]},
            "a": "text",
        });
        let first = canonical_form(Some(&value));
        let second = canonical_form(Some(&value));
        assert_eq!(first, second);
        assert_eq!(first, r#"{"a":"text","z":{"a":[{"k":"v"}],"b":1}}"#);
    }
}
