//! The document model.
//!
//! A store's entire contents are one JSON object: a mapping from string
//! keys to arbitrary JSON values. `serde_json` is built with the
//! `preserve_order` feature so iteration over top-level keys follows
//! insertion order.

use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// The root in-memory value of a store: an ordered mapping from string
/// keys to arbitrary JSON values.
pub type Document = Map<String, Value>;

/// Serializes a document to JSON bytes with the given indentation width.
///
/// An indent of `0` produces compact output; anything else produces
/// pretty-printed output indented by that many spaces.
pub fn to_json_bytes(document: &Document, indent: usize) -> Result<Vec<u8>> {
    use serde::Serialize;

    if indent == 0 {
        return serde_json::to_vec(document).map_err(|e| Error::Serialization(e.to_string()));
    }

    let indent_unit = vec![b' '; indent];
    let mut buf = Vec::with_capacity(128);
    let formatter = PrettyFormatter::with_indent(&indent_unit);
    let mut serializer = Serializer::with_formatter(&mut buf, formatter);
    document
        .serialize(&mut serializer)
        .map_err(|e| Error::Serialization(e.to_string()))?;
    Ok(buf)
}

/// Parses bytes read from a backing file into a document.
///
/// The root must be a JSON object; anything else means the file does not
/// hold a store and the caller must treat it as fatal.
pub fn from_json_bytes(bytes: &[u8]) -> Result<Document> {
    let value: Value =
        serde_json::from_slice(bytes).map_err(|e| Error::Corrupt(e.to_string()))?;
    match value {
        Value::Object(map) => Ok(map),
        other => Err(Error::Corrupt(format!(
            "expected a top-level object, found {}",
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.insert("b".to_string(), json!(1));
        doc.insert("a".to_string(), json!({ "nested": [1, 2, 3] }));
        doc
    }

    #[test]
    fn test_compact_serialization() {
        let bytes = to_json_bytes(&sample(), 0).unwrap();
        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            r#"{"b":1,"a":{"nested":[1,2,3]}}"#
        );
    }

    #[test]
    fn test_indented_serialization() {
        let bytes = to_json_bytes(&sample(), 4).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.contains("\n    \"b\": 1"));
    }

    #[test]
    fn test_round_trip_preserves_insertion_order() {
        let bytes = to_json_bytes(&sample(), 2).unwrap();
        let parsed = from_json_bytes(&bytes).unwrap();
        let keys: Vec<_> = parsed.keys().cloned().collect();
        assert_eq!(keys, vec!["b".to_string(), "a".to_string()]);
    }

    #[test]
    fn test_invalid_json_is_corrupt() {
        let err = from_json_bytes(b"{ not json").unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn test_non_object_root_is_corrupt() {
        let err = from_json_bytes(b"[1, 2, 3]").unwrap_err();
        assert!(matches!(err, Error::Corrupt(_)));
    }
}
