//! Feature Vector - Fixed input layout shared by both weather models
//!
//! Order is always (temp, hum, pres, wind). The regression weights and the
//! classifier means/variances are indexed in this same order.

use serde::{Deserialize, Serialize};

// ============================================================================
// FEATURE LAYOUT
// ============================================================================

/// Total number of features
pub const FEATURE_COUNT: usize = 4;

/// Feature names recorded in the classifier parameter file
pub const FEATURE_LAYOUT: [&str; FEATURE_COUNT] = ["temp", "hum", "pres", "wind"];

/// Feature names recorded in the regression parameter file (values at step t)
pub const REGRESSION_FEATURE_LAYOUT: [&str; FEATURE_COUNT] =
    ["temp_t", "hum_t", "pres_t", "wind_t"];

// ============================================================================
// FEATURE VECTOR
// ============================================================================

/// One weather reading in canonical order
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FeatureVector {
    pub temp: f64,
    pub hum: f64,
    pub pres: f64,
    pub wind: f64,
}

impl FeatureVector {
    pub fn new(temp: f64, hum: f64, pres: f64, wind: f64) -> Self {
        Self { temp, hum, pres, wind }
    }

    /// Values in layout order
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [self.temp, self.hum, self.pres, self.wind]
    }

    /// Dot product with a weight vector in layout order
    pub fn dot(&self, weights: &[f64; FEATURE_COUNT]) -> f64 {
        self.to_array()
            .iter()
            .zip(weights.iter())
            .map(|(x, w)| x * w)
            .sum()
    }
}
