use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::features::FeatureVector;

/// One parsed CSV row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub city: String,
    pub features: FeatureVector,
    /// Raw description text, label source for the classifier
    pub description: String,
    /// `None` when the timestamp was absent or unparseable
    pub timestamp: Option<NaiveDateTime>,
}

impl Observation {
    pub fn temp(&self) -> f64 {
        self.features.temp
    }

    /// Classifier view: label is the trimmed, lower-cased description
    pub fn to_labeled(&self) -> Option<LabeledObservation> {
        let label = self.description.trim().to_lowercase();
        if label.is_empty() {
            return None;
        }
        Some(LabeledObservation {
            features: self.features,
            label,
        })
    }
}

/// Feature vector with its class label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledObservation {
    pub features: FeatureVector,
    pub label: String,
}

impl LabeledObservation {
    pub fn new(features: FeatureVector, label: impl Into<String>) -> Self {
        Self {
            features,
            label: label.into(),
        }
    }
}
