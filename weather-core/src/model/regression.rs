//! Regression parameters: one linear next-step model per city
//!
//! File format:
//! `{task, features, per_city: {city: {weights, bias, method}}, default}`

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BIAS, TEMPERATURE_TASK};
use crate::features::{FeatureVector, FEATURE_COUNT, REGRESSION_FEATURE_LAYOUT};

/// How a city model was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegressionMethod {
    /// Least squares via normal equations
    Linear,
    /// Mean temperature (too few rows or singular Gram matrix)
    AvgFallback,
    /// Built-in entry used for unknown cities
    Default,
}

/// Linear next-step temperature model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionModel {
    #[serde(default)]
    pub weights: [f64; FEATURE_COUNT],
    #[serde(default = "default_bias")]
    pub bias: f64,
    #[serde(default = "default_method")]
    pub method: RegressionMethod,
}

fn default_bias() -> f64 {
    DEFAULT_BIAS
}

fn default_method() -> RegressionMethod {
    RegressionMethod::Default
}

impl RegressionModel {
    /// The built-in entry: zero weights, bias 20.0
    pub fn fallback() -> Self {
        Self {
            weights: [0.0; FEATURE_COUNT],
            bias: DEFAULT_BIAS,
            method: RegressionMethod::Default,
        }
    }

    /// Constant model predicting `mean`
    pub fn average(mean: f64) -> Self {
        Self {
            weights: [0.0; FEATURE_COUNT],
            bias: mean,
            method: RegressionMethod::AvgFallback,
        }
    }

    pub fn linear(weights: [f64; FEATURE_COUNT], bias: f64) -> Self {
        Self {
            weights,
            bias,
            method: RegressionMethod::Linear,
        }
    }

    /// weights . features + bias, unclamped
    pub fn predict(&self, features: &FeatureVector) -> f64 {
        features.dot(&self.weights) + self.bias
    }
}

impl Default for RegressionModel {
    fn default() -> Self {
        Self::fallback()
    }
}

/// Full regression parameter file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegressionParams {
    #[serde(default = "default_task")]
    pub task: String,
    #[serde(default = "default_features")]
    pub features: Vec<String>,
    #[serde(default)]
    pub per_city: BTreeMap<String, RegressionModel>,
    #[serde(default)]
    pub default: RegressionModel,
}

fn default_task() -> String {
    TEMPERATURE_TASK.to_string()
}

fn default_features() -> Vec<String> {
    REGRESSION_FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect()
}

impl RegressionParams {
    pub fn new(per_city: BTreeMap<String, RegressionModel>) -> Self {
        Self {
            task: default_task(),
            features: default_features(),
            per_city,
            default: RegressionModel::fallback(),
        }
    }

    /// Model for `city`; a miss returns the default entry, never an error
    pub fn model_for(&self, city: &str) -> &RegressionModel {
        self.per_city.get(city).unwrap_or(&self.default)
    }

    pub fn city_count(&self) -> usize {
        self.per_city.len()
    }
}

impl Default for RegressionParams {
    fn default() -> Self {
        Self::new(BTreeMap::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_names() {
        let json = serde_json::to_string(&RegressionMethod::AvgFallback).unwrap();
        assert_eq!(json, "\"avg_fallback\"");
        let m: RegressionMethod = serde_json::from_str("\"linear\"").unwrap();
        assert_eq!(m, RegressionMethod::Linear);
    }

    #[test]
    fn test_unknown_city_uses_default_entry() {
        let mut per_city = BTreeMap::new();
        per_city.insert("Lima".to_string(), RegressionModel::linear([1.0, 0.0, 0.0, 0.0], 0.5));
        let params = RegressionParams::new(per_city);

        let features = FeatureVector::new(17.14, 66.0, 1014.0, 2.24);
        assert_eq!(params.model_for("Bogota").predict(&features), 20.0);
        assert!((params.model_for("Lima").predict(&features) - 17.64).abs() < 1e-12);
    }

    #[test]
    fn test_parse_file_format() {
        let json = r#"{
            "task": "temperature_next",
            "features": ["temp_t", "hum_t", "pres_t", "wind_t"],
            "per_city": {
                "Cali": {"weights": [0.5, 0.1, 0.0, -0.2], "bias": 3.0, "method": "linear"}
            },
            "default": {"weights": [0, 0, 0, 0], "bias": 20.0, "method": "default"}
        }"#;
        let params: RegressionParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.city_count(), 1);
        assert_eq!(params.model_for("Cali").method, RegressionMethod::Linear);
        assert_eq!(params.default, RegressionModel::fallback());
    }

    #[test]
    fn test_missing_default_entry_is_builtin() {
        let params: RegressionParams = serde_json::from_str(r#"{"per_city": {}}"#).unwrap();
        assert_eq!(params.default.bias, 20.0);
        assert_eq!(params.task, "temperature_next");
    }

    #[test]
    fn test_weights_must_have_four_entries() {
        let json = r#"{"weights": [1.0, 2.0], "bias": 0.0, "method": "linear"}"#;
        assert!(serde_json::from_str::<RegressionModel>(json).is_err());
    }
}
