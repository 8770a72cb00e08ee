use el_defs::CustomObjectError;
use serde::Serialize;
use serde_json::{Map, Value};

pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}

pub fn join_path(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

pub fn join_index(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

pub fn shape_error(path: String, expected: &'static str, found: &Value) -> CustomObjectError {
    CustomObjectError::Shape {
        path,
        expected,
        found: value_kind(found),
    }
}

/// Returns the mapping stored under `key`, creating it when the key is missing or null.
/// `parent_path` is only used to name the key in errors.
pub fn ensure_object<'a>(
    parent: &'a mut Map<String, Value>,
    parent_path: &str,
    key: &str,
) -> Result<&'a mut Map<String, Value>, CustomObjectError> {
    let entry = parent.entry(key).or_insert(Value::Null);
    if entry.is_null() {
        *entry = Value::Object(Map::new());
    }
    match entry {
        Value::Object(map) => Ok(map),
        other => Err(shape_error(join_path(parent_path, key), "a mapping", other)),
    }
}

/// Same as [`ensure_object`] for sequences.
pub fn ensure_array<'a>(
    parent: &'a mut Map<String, Value>,
    parent_path: &str,
    key: &str,
) -> Result<&'a mut Vec<Value>, CustomObjectError> {
    let entry = parent.entry(key).or_insert(Value::Null);
    if entry.is_null() {
        *entry = Value::Array(Vec::new());
    }
    match entry {
        Value::Array(items) => Ok(items),
        other => Err(shape_error(join_path(parent_path, key), "a sequence", other)),
    }
}

/// Walks `segments` down from `root`, creating every missing mapping on the way.
pub fn resolve_object_path<'a>(
    root: &'a mut Map<String, Value>,
    segments: &[&str],
) -> Result<&'a mut Map<String, Value>, CustomObjectError> {
    let mut current = root;
    let mut path = String::new();
    for segment in segments {
        current = ensure_object(current, &path, segment)?;
        path = join_path(&path, segment);
    }
    Ok(current)
}

pub fn to_object<T: Serialize>(value: &T) -> Result<Map<String, Value>, serde_json::Error> {
    serde_json::to_value(value).and_then(serde_json::from_value)
}
