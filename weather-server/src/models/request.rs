//! Request parsing
//!
//! Bodies are parsed by hand from `serde_json::Value` so every malformed
//! shape maps to a 400 with a stable message instead of an extractor
//! rejection.

use serde_json::{Map, Value};
use weather_core::FeatureVector;

use crate::error::{AppError, AppResult, FEATURES_ERROR, FEATURES_LIST_ERROR};

/// Lookup key used when the request carries no city
pub const DEFAULT_CITY_KEY: &str = "default";

/// Parse a raw body; an empty body is an empty object
pub fn parse_body(bytes: &[u8]) -> AppResult<Value> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    Ok(serde_json::from_slice(bytes)?)
}

fn as_object(data: &Value) -> AppResult<&Map<String, Value>> {
    data.as_object()
        .ok_or_else(|| AppError::BadRequest("Body must be a JSON object".to_string()))
}

/// JSON number, or a string holding a float; must be finite
fn numeric(value: Option<&Value>) -> Option<f64> {
    let v = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    v.is_finite().then_some(v)
}

// ============================================================================
// WEATHER
// ============================================================================

/// `{city, features: {temp, hum, pres, wind}}`
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherRequest {
    /// Trimmed city as sent (may be empty)
    pub city: String,
    pub features: FeatureVector,
}

impl WeatherRequest {
    pub fn from_value(data: &Value) -> AppResult<Self> {
        let data = as_object(data)?;

        let city = match data.get("city") {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.trim().to_string(),
            Some(other) => other.to_string().trim().to_string(),
        };

        let features = match data.get("features") {
            None => return Err(AppError::BadRequest(FEATURES_ERROR.to_string())),
            Some(value) => value
                .as_object()
                .ok_or_else(|| AppError::BadRequest(FEATURES_ERROR.to_string()))?,
        };

        let read = |name: &str| {
            numeric(features.get(name))
                .ok_or_else(|| AppError::BadRequest(FEATURES_ERROR.to_string()))
        };

        Ok(Self {
            city,
            features: FeatureVector::new(read("temp")?, read("hum")?, read("pres")?, read("wind")?),
        })
    }

    /// Key used for the per-city lookup
    pub fn lookup_key(&self) -> &str {
        if self.city.is_empty() {
            DEFAULT_CITY_KEY
        } else {
            &self.city
        }
    }
}

// ============================================================================
// LOGISTIC
// ============================================================================

/// `{features: [..]}`; elements are coerced later, never rejected
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreRequest {
    pub features: Vec<Value>,
}

impl ScoreRequest {
    pub fn from_value(data: &Value) -> AppResult<Self> {
        let data = as_object(data)?;
        match data.get("features") {
            Some(Value::Array(items)) => Ok(Self {
                features: items.clone(),
            }),
            _ => Err(AppError::BadRequest(FEATURES_LIST_ERROR.to_string())),
        }
    }
}
