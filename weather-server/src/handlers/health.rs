//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct ModelSummary {
    per_city: usize,
    classifier_enabled: bool,
    logistic_weights: usize,
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    timestamp: i64,
    models: ModelSummary,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let models = &state.models;
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().timestamp(),
        models: ModelSummary {
            per_city: models.regression.city_count(),
            classifier_enabled: models.classifier.is_enabled(),
            logistic_weights: models.logistic.weights.len(),
        },
    })
}
