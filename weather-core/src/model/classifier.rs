//! Gaussian naive Bayes parameters
//!
//! File format is either `{enabled: false, reason}` or
//! `{enabled: true, model: {classes, priors, means, vars}, features}`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::features::{FEATURE_COUNT, FEATURE_LAYOUT};

/// Per-class statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GaussianModel {
    /// Class labels in first-appearance order (tie-break order)
    pub classes: Vec<String>,
    pub priors: BTreeMap<String, f64>,
    pub means: BTreeMap<String, [f64; FEATURE_COUNT]>,
    pub vars: BTreeMap<String, [f64; FEATURE_COUNT]>,
}

impl GaussianModel {
    /// Check that every class carries usable statistics
    pub fn validate(&self) -> Result<(), String> {
        if self.classes.is_empty() {
            return Err("classifier has no classes".to_string());
        }
        for class in &self.classes {
            if !self.means.contains_key(class) {
                return Err(format!("missing means for class '{}'", class));
            }
            match self.vars.get(class) {
                None => return Err(format!("missing vars for class '{}'", class)),
                Some(vars) if vars.iter().any(|v| !(*v > 0.0)) => {
                    return Err(format!("non-positive variance for class '{}'", class));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    pub fn class_count(&self) -> usize {
        self.classes.len()
    }
}

/// Classifier parameter file: enabled with a model, or disabled with a reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawClassifierParams", into = "RawClassifierParams")]
pub enum ClassifierParams {
    Disabled {
        reason: Option<String>,
    },
    Enabled {
        model: GaussianModel,
        features: Vec<String>,
    },
}

impl ClassifierParams {
    pub fn disabled(reason: impl Into<String>) -> Self {
        ClassifierParams::Disabled {
            reason: Some(reason.into()),
        }
    }

    pub fn enabled(model: GaussianModel) -> Self {
        ClassifierParams::Enabled {
            model,
            features: FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn is_enabled(&self) -> bool {
        matches!(self, ClassifierParams::Enabled { .. })
    }

    pub fn model(&self) -> Option<&GaussianModel> {
        match self {
            ClassifierParams::Enabled { model, .. } => Some(model),
            ClassifierParams::Disabled { .. } => None,
        }
    }
}

impl Default for ClassifierParams {
    fn default() -> Self {
        ClassifierParams::Disabled { reason: None }
    }
}

// ============================================================================
// WIRE FORMAT
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawClassifierParams {
    #[serde(default)]
    enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    model: Option<GaussianModel>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    features: Option<Vec<String>>,
}

impl TryFrom<RawClassifierParams> for ClassifierParams {
    type Error = String;

    fn try_from(raw: RawClassifierParams) -> Result<Self, Self::Error> {
        if !raw.enabled {
            return Ok(ClassifierParams::Disabled { reason: raw.reason });
        }

        let model = raw
            .model
            .ok_or_else(|| "enabled classifier is missing 'model'".to_string())?;
        model.validate()?;

        let features = raw
            .features
            .unwrap_or_else(|| FEATURE_LAYOUT.iter().map(|s| s.to_string()).collect());

        Ok(ClassifierParams::Enabled { model, features })
    }
}

impl From<ClassifierParams> for RawClassifierParams {
    fn from(params: ClassifierParams) -> Self {
        match params {
            ClassifierParams::Disabled { reason } => RawClassifierParams {
                enabled: false,
                reason,
                model: None,
                features: None,
            },
            ClassifierParams::Enabled { model, features } => RawClassifierParams {
                enabled: true,
                reason: None,
                model: Some(model),
                features: Some(features),
            },
        }
    }
}
