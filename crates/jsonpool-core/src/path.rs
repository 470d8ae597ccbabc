//! Dotted-path addressing over JSON values.
//!
//! A path is a dot-separated sequence of segments locating a nested value
//! inside a top-level entry, e.g. `"profile.tags.0"`. A string segment
//! addresses a mapping field; when the current value is an array and the
//! segment parses as a non-negative integer it addresses an index.
//!
//! Read traversal checks key *presence*, never truthiness: `0`, `""`,
//! `false` and `null` are all present values, distinct from a missing
//! segment. Read traversal yields `None` the moment a segment is missing
//! and never mutates anything. Write traversal auto-creates empty
//! mappings at missing intermediate segments.

use serde_json::{Map, Value};

/// Splits a dotted path into its segments.
///
/// The empty path has no segments and addresses the value itself; empty
/// segments (from doubled dots) are skipped.
pub fn segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('.').filter(|s| !s.is_empty())
}

/// Resolves `path` against `root` for reading.
///
/// Returns `None` as soon as any segment is missing, without creating
/// anything. The empty path resolves to `root`.
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut node = root;
    for seg in segments(path) {
        node = match node {
            Value::Object(map) => map.get(seg)?,
            Value::Array(arr) => arr.get(seg.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(node)
}

/// Whether every segment of `path` exists under `root`.
///
/// Presence, not truthiness: a `null` at the terminal segment counts.
pub fn contains(root: &Value, path: &str) -> bool {
    get(root, path).is_some()
}

/// Resolves `path` against `root` for writing, returning a mutable
/// reference to the terminal slot.
///
/// Missing intermediate segments are created as empty mappings. An
/// intermediate that exists but is neither a mapping nor an
/// index-addressed array is replaced by an empty mapping. Array indices
/// past the end pad the array with `null` up to the index. A slot created
/// along the way holds `null` until the caller assigns it.
pub fn entry<'a>(root: &'a mut Value, path: &str) -> &'a mut Value {
    let mut node = root;
    for seg in segments(path) {
        let index = match node {
            Value::Array(_) => seg.parse::<usize>().ok(),
            _ => None,
        };
        node = match (node, index) {
            (Value::Array(arr), Some(idx)) => {
                if idx >= arr.len() {
                    arr.resize(idx + 1, Value::Null);
                }
                &mut arr[idx]
            }
            (other, _) => {
                if !other.is_object() {
                    *other = Value::Object(Map::new());
                }
                match other {
                    Value::Object(map) => map.entry(seg).or_insert(Value::Null),
                    _ => unreachable!("replaced with an object above"),
                }
            }
        };
    }
    node
}
