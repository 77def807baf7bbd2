//! JSON input: build a [`Value`] from a JSON document.
//!
//! Object member order is preserved (serde_json `preserve_order`), so the
//! export lists keys in the order they appear in the source text.

use serde_json::Value as Json;

use crate::error::Result;
use crate::reflect::Record;
use crate::value::{Container, Key, Value};

/// What JSON objects turn into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonObjects {
    /// Containers with string keys. Canonical integer keys such as `"2"`
    /// become integer keys.
    #[default]
    Arrays,
    /// Anonymous records. Member names are kept verbatim as field names.
    Records,
}

/// Convert a parsed JSON tree.
///
/// Integers that fit `i64` become [`Value::Int`]; all other numbers become
/// [`Value::Float`].
pub fn from_json(json: &Json, objects: JsonObjects) -> Value {
    match json {
        Json::Null => Value::Null,
        Json::Bool(b) => Value::Bool(*b),
        Json::Number(n) => match n.as_i64() {
            Some(i) => Value::Int(i),
            None => Value::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        Json::String(s) => Value::String(s.clone()),
        Json::Array(items) => Value::Container(items.iter().map(|v| from_json(v, objects)).collect()),
        Json::Object(map) => match objects {
            JsonObjects::Arrays => {
                let mut c = Container::new();
                for (k, v) in map {
                    c.insert(Key::normalize(k.clone()), from_json(v, objects));
                }
                Value::Container(c)
            }
            JsonObjects::Records => {
                let mut r = Record::anonymous();
                for (k, v) in map {
                    r = r.field(k.clone(), from_json(v, objects));
                }
                Value::record(r)
            }
        },
    }
}

/// Parse JSON text and convert it.
pub fn from_json_str(text: &str, objects: JsonObjects) -> Result<Value> {
    let json: Json = serde_json::from_str(text)?;
    tracing::debug!(?objects, bytes = text.len(), "parsed JSON input");
    Ok(from_json(&json, objects))
}
