//! Response bodies

use serde::Serialize;
use weather_core::inference::{ClassProbabilities, Classification};
use weather_core::FeatureVector;

/// `{ok: true, result, debug?}`
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize, D: Serialize> {
    pub ok: bool,
    pub result: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<D>,
}

impl<T: Serialize, D: Serialize> ApiResponse<T, D> {
    pub fn new(result: T, debug: Option<D>) -> Self {
        Self {
            ok: true,
            result,
            debug,
        }
    }
}

// ============================================================================
// WEATHER
// ============================================================================

#[derive(Debug, Serialize)]
pub struct TemperaturePrediction {
    pub temperature_next: f64,
}

/// Classification as sent to clients; disabled is exactly `{enabled: false}`
#[derive(Debug, Serialize)]
pub struct ClassificationBody {
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub probs: Option<ClassProbabilities>,
}

impl From<Classification> for ClassificationBody {
    fn from(c: Classification) -> Self {
        if !c.enabled {
            return Self {
                enabled: false,
                prediction: None,
                probs: None,
            };
        }
        Self {
            enabled: true,
            prediction: c.prediction,
            probs: c.probs,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ForecastResult {
    pub prediction: TemperaturePrediction,
    pub classification: ClassificationBody,
}

/// Echo of the parsed weather inputs
#[derive(Debug, Serialize)]
pub struct ForecastDebug {
    pub city: String,
    pub features: FeatureVector,
}

pub type ForecastResponse = ApiResponse<ForecastResult, ForecastDebug>;

// ============================================================================
// LOGISTIC
// ============================================================================

#[derive(Debug, Serialize)]
pub struct ScoreResult {
    pub probability: f64,
    pub label: u8,
}

/// Coerced features and the linear score
#[derive(Debug, Serialize)]
pub struct ScoreDebug {
    pub features: Vec<f64>,
    pub z: f64,
}

pub type ScoreResponse = ApiResponse<ScoreResult, ScoreDebug>;
