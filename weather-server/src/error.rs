//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

/// Message for a weather request without four numeric features
pub const FEATURES_ERROR: &str = "features must include numeric temp, hum, pres, wind";

/// Message for a logistic request whose features are not an array
pub const FEATURES_LIST_ERROR: &str = "features must be a list";

#[derive(Debug, Error)]
pub enum AppError {
    // Malformed input
    #[error("Body is not valid JSON")]
    InvalidJson,

    #[error("{0}")]
    BadRequest(String),

    // Unexpected failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidJson | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// JSON error body: `{error[, detail]}`
    pub fn body(&self) -> Value {
        match self {
            AppError::InvalidJson => json!({ "error": self.to_string() }),
            AppError::BadRequest(msg) => json!({ "error": msg }),
            AppError::Internal(detail) => json!({ "error": "Internal error", "detail": detail }),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            AppError::Internal(detail) => tracing::error!("Internal error: {}", detail),
            other => tracing::debug!("Rejected request: {}", other),
        }

        (status, Json(self.body())).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(_: serde_json::Error) -> Self {
        AppError::InvalidJson
    }
}
