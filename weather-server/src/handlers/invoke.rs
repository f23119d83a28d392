//! Event-envelope handlers
//!
//! Same endpoints as `/predict` and `/score`, wrapped in the serverless
//! request/response envelope. The HTTP status is always 200; the inner
//! status travels in `statusCode`.

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use crate::handlers::{predict as forecast_route, score as score_route};
use crate::models::{event_data, parse_body, EventResponse};
use crate::{AppResult, AppState};

fn envelope_data(body: &Bytes) -> AppResult<Value> {
    let event = parse_body(body)?;
    event_data(&event)
}

pub async fn predict(State(state): State<AppState>, body: Bytes) -> Json<EventResponse> {
    let result = envelope_data(&body).and_then(|data| forecast_route::run(&state, &data));
    Json(EventResponse::from_result(result))
}

pub async fn score(State(state): State<AppState>, body: Bytes) -> Json<EventResponse> {
    let result = envelope_data(&body).and_then(|data| score_route::run(&state, &data));
    Json(EventResponse::from_result(result))
}
