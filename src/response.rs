//! The uniform response envelope and result normalization.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// The normalized `{statusCode, body, ...}` response produced by
/// dispatch.
///
/// Keys a handler sets beyond `statusCode` and `body` survive in
/// `extra` and are flattened back on serialization, so the wire shape
/// matches what the handler returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    #[serde(default)]
    pub body: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResponseEnvelope {
    #[must_use]
    pub fn new(status_code: u16, body: impl Into<Value>) -> Self {
        Self {
            status_code,
            body: body.into(),
            extra: Map::new(),
        }
    }

    /// An error envelope with a `{"error": message}` body.
    #[must_use]
    pub fn error(status_code: u16, message: &str) -> Self {
        Self::new(status_code, json!({ "error": message }))
    }

    /// Shape a raw invocation result into an envelope.
    ///
    /// Non-object values (primitives, arrays, null) are wrapped as the
    /// body with a success-based status code. Objects must opt in to a
    /// success code: a missing or non-integer `statusCode` key is
    /// forced to 500 even when the handler completed normally.
    #[must_use]
    pub fn normalize(result: Value, success: bool) -> Self {
        match result {
            Value::Object(mut map) => {
                let status_code = map
                    .remove("statusCode")
                    .and_then(|v| v.as_u64())
                    .and_then(|n| u16::try_from(n).ok())
                    .unwrap_or(500);
                let body = map.remove("body").unwrap_or(Value::Null);
                Self {
                    status_code,
                    body,
                    extra: map,
                }
            }
            other => Self::new(if success { 200 } else { 500 }, other),
        }
    }
}
