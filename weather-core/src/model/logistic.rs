//! Generic logistic scorer parameters: `{bias, weights}`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LogisticModel {
    #[serde(default)]
    pub bias: f64,
    #[serde(default)]
    pub weights: Vec<f64>,
}

impl LogisticModel {
    pub fn new(bias: f64, weights: Vec<f64>) -> Self {
        Self { bias, weights }
    }
}
