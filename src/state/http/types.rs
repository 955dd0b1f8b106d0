use serde::Deserialize;
use serde_json::Value;

/// Error body returned by the backend, e.g. `{"detail": "Token invalido"}`.
///
/// Validation failures carry a list of objects instead of a string.
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub detail: Value,
}

impl ErrorResponse {
    pub fn message(&self) -> Option<String> {
        match &self.detail {
            Value::Null => None,
            Value::String(detail) => Some(detail.clone()),
            other => Some(other.to_string()),
        }
    }
}
