//! Flattening of nested JSON documents into dotted setting keys.

use serde_json::Value;

use super::error::SourceError;

/// Flatten `document` into `(dotted.key, value)` pairs.
///
/// Strings are kept verbatim, numbers and booleans use their JSON text, and
/// `null` leaves are skipped. Arrays are rejected.
pub(super) fn flatten(document: &Value) -> Result<Vec<(String, String)>, SourceError> {
    let Value::Object(_) = document else {
        return Err(SourceError::UnsupportedValue {
            key: String::new(),
            message: "top-level value must be an object".to_string(),
        });
    };

    let mut entries = Vec::new();
    flatten_into(String::new(), document, &mut entries)?;
    Ok(entries)
}

fn flatten_into(
    prefix: String,
    value: &Value,
    entries: &mut Vec<(String, String)>,
) -> Result<(), SourceError> {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_into(path, child, entries)?;
            }
        }
        Value::String(s) => entries.push((prefix, s.clone())),
        Value::Number(n) => entries.push((prefix, n.to_string())),
        Value::Bool(b) => entries.push((prefix, b.to_string())),
        Value::Null => {}
        Value::Array(_) => {
            return Err(SourceError::UnsupportedValue {
                key: prefix,
                message: "arrays are not supported".to_string(),
            });
        }
    }
    Ok(())
}
