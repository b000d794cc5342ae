use serde::de::DeserializeOwned;

use crate::core::IexError;

/// A decoded REST response body.
///
/// JSON responses are parsed; CSV and binary responses pass through untouched.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    Json(serde_json::Value),
    Text(String),
    Binary(Vec<u8>),
}

impl Payload {
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Payload::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Payload::Json(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Payload::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Payload::Binary(b) => Some(b),
            _ => None,
        }
    }

    /// Deserializes a JSON payload into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`IexError::Data`] if the payload is not JSON or does not match `T`.
    pub fn deserialize<T: DeserializeOwned>(self) -> Result<T, IexError> {
        match self {
            Payload::Json(v) => serde_json::from_value(v)
                .map_err(|e| IexError::Data(format!("json decode error: {e}"))),
            Payload::Text(_) => Err(IexError::Data("expected json payload, got text".into())),
            Payload::Binary(_) => Err(IexError::Data("expected json payload, got binary".into())),
        }
    }
}
