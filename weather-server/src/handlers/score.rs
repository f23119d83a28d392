//! Generic logistic scoring handler

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;
use weather_core::inference::coerce_or_default;

use crate::models::{parse_body, ScoreDebug, ScoreRequest, ScoreResponse, ScoreResult};
use crate::{AppError, AppResult, AppState};

/// Probability and 0/1 label for a feature list
pub async fn score(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ScoreResponse>> {
    let data = parse_body(&body)?;
    Ok(Json(run(&state, &data)?))
}

/// Shared by the plain route and the event envelope
pub fn run(state: &AppState, data: &Value) -> AppResult<ScoreResponse> {
    let req = ScoreRequest::from_value(data)?;
    let features: Vec<f64> = req.features.iter().map(coerce_or_default).collect();
    let result = state.models.score_logistic(&features);

    if !result.probability.is_finite() {
        return Err(AppError::Internal(format!("non-finite logistic score z = {}", result.z)));
    }

    tracing::debug!(
        n_features = features.len(),
        probability = result.probability,
        label = result.label,
        "Logistic score"
    );

    let debug = state.config.is_debug().then(|| ScoreDebug {
        features: features.clone(),
        z: result.z,
    });

    Ok(ScoreResponse::new(
        ScoreResult {
            probability: result.probability,
            label: result.label,
        },
        debug,
    ))
}
