//! Panic boundary
//!
//! Turns a panicking handler into a 500 `{error, detail}` response so the
//! server keeps serving later requests.

use std::any::Any;

use axum::response::{IntoResponse, Response};

use crate::AppError;

/// Response for `CatchPanicLayer::custom`
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(detail).into_response()
}
