//! Generic logistic inference

use serde_json::Value;

use super::math::sigmoid;
use super::types::LogisticResult;
use crate::constants::LOGISTIC_THRESHOLD;
use crate::model::LogisticModel;

/// Numeric value of a JSON feature, or 0.0 for anything that is not a number.
///
/// Strings, booleans, nulls, arrays and objects all coerce to 0.0.
pub fn coerce_or_default(value: &Value) -> f64 {
    value.as_f64().unwrap_or(0.0)
}

/// z = bias + sum(w_i * x_i) over the shorter of weights and features
pub fn linear_score(model: &LogisticModel, features: &[f64]) -> f64 {
    model.bias
        + model
            .weights
            .iter()
            .zip(features.iter())
            .map(|(w, x)| w * x)
            .sum::<f64>()
}

/// Probability and 0/1 label; a probability of exactly 0.5 is labeled 1
pub fn score(model: &LogisticModel, features: &[f64]) -> LogisticResult {
    let z = linear_score(model, features);
    let probability = sigmoid(z);
    LogisticResult {
        probability,
        label: u8::from(probability >= LOGISTIC_THRESHOLD),
        z,
    }
}
