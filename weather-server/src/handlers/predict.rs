//! Weather forecast handler

use axum::{body::Bytes, extract::State, Json};
use serde_json::Value;

use crate::models::{
    parse_body, ForecastDebug, ForecastResponse, ForecastResult, TemperaturePrediction,
    WeatherRequest,
};
use crate::{AppError, AppResult, AppState};

/// Next-step temperature plus weather class for one reading
pub async fn predict(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<Json<ForecastResponse>> {
    let data = parse_body(&body)?;
    Ok(Json(run(&state, &data)?))
}

/// Shared by the plain route and the event envelope
pub fn run(state: &AppState, data: &Value) -> AppResult<ForecastResponse> {
    let req = WeatherRequest::from_value(data)?;
    let forecast = state.models.forecast(req.lookup_key(), &req.features);

    if !forecast.temperature_next.is_finite() {
        return Err(AppError::Internal(format!(
            "non-finite temperature prediction for city '{}'",
            req.lookup_key()
        )));
    }

    if let Some(probs) = &forecast.classification.probs {
        if !probs.is_finite() {
            return Err(AppError::Internal(
                "non-finite class probability; input is out of range for the classifier"
                    .to_string(),
            ));
        }
    }

    tracing::debug!(
        city = %req.lookup_key(),
        temperature_next = forecast.temperature_next,
        classification = ?forecast.classification.prediction,
        "Forecast"
    );

    let debug = state.config.is_debug().then(|| ForecastDebug {
        city: req.city.clone(),
        features: req.features,
    });

    Ok(ForecastResponse::new(
        ForecastResult {
            prediction: TemperaturePrediction {
                temperature_next: forecast.temperature_next,
            },
            classification: forecast.classification.into(),
        },
        debug,
    ))
}
