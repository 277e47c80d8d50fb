//! Response envelope normalization.
//!
//! The API answers either `{ "data": ..., "meta": ... }` or a flat object.
//! Both are folded into [`Envelope`] right after parsing so callers see one
//! shape.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{ApiError, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub data: Value,
    pub meta: Option<Value>,
}

impl Envelope {
    /// Unwrap a `data` envelope, or treat the whole value as data.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(mut map) if map.contains_key("data") => {
                let data = map.remove("data").unwrap_or(Value::Null);
                let meta = map.remove("meta");
                Self { data, meta }
            }
            other => Self {
                data: other,
                meta: None,
            },
        }
    }

    /// Deserialize the payload.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T> {
        serde_json::from_value(self.data).map_err(|e| ApiError::malformed(e.to_string()))
    }

    /// A non-empty string field of the payload. Numbers are rendered as text
    /// so numeric ids come back usable in URLs.
    pub fn str_field(&self, key: &str) -> Option<String> {
        match self.data.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}

/// Error-body message resolution: first structured error, then the top-level
/// message, then `"<status> <statusText>"`.
pub fn resolve_error_message(body: Option<&Value>, status: u16, status_text: &str) -> String {
    let structured = body
        .and_then(|b| b.get("errors"))
        .and_then(|errors| errors.get(0))
        .and_then(|first| first.get("message"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty());
    let top_level = body
        .and_then(|b| b.get("message"))
        .and_then(Value::as_str)
        .filter(|m| !m.is_empty());

    structured
        .or(top_level)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{} {}", status, status_text).trim_end().to_string())
}
