//! API-gateway style event envelope
//!
//! Request: `{body: <JSON string | object>, ...}`.
//! Response: `{statusCode, headers, body: <JSON string>}`.

use std::collections::BTreeMap;

use axum::http::StatusCode;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};

/// Extract the request data from an event.
///
/// A non-empty string body is parsed as JSON; an object body is used as-is;
/// anything else (absent, null, empty string) is an empty object.
pub fn event_data(event: &Value) -> AppResult<Value> {
    match event.get("body") {
        Some(Value::String(s)) if !s.is_empty() => Ok(serde_json::from_str(s)?),
        Some(obj @ Value::Object(_)) => Ok(obj.clone()),
        _ => Ok(Value::Object(Map::new())),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl EventResponse {
    pub fn new(status: StatusCode, body: &impl Serialize) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        let (status, body) = match serde_json::to_string(body) {
            Ok(body) => (status, body),
            Err(e) => {
                let err = AppError::Internal(e.to_string());
                (err.status(), err.body().to_string())
            }
        };

        Self {
            status_code: status.as_u16(),
            headers,
            body,
        }
    }

    /// Wrap a handler outcome, mapping errors to their status and body
    pub fn from_result<T: Serialize>(result: AppResult<T>) -> Self {
        match result {
            Ok(body) => Self::new(StatusCode::OK, &body),
            Err(err) => {
                if let AppError::Internal(detail) = &err {
                    tracing::error!("Internal error: {}", detail);
                }
                Self::new(err.status(), &err.body())
            }
        }
    }
}
