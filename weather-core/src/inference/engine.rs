//! Model Bundle - immutable inference state
//!
//! Loaded once from the parameter files, then shared read-only.

use super::classify::classify;
use super::logistic;
use super::types::{Classification, Forecast, LogisticResult};
use crate::error::CoreResult;
use crate::features::FeatureVector;
use crate::model::{ClassifierParams, LogisticModel, RegressionParams};
use crate::storage::{load_json, ModelPaths};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModelBundle {
    pub regression: RegressionParams,
    pub classifier: ClassifierParams,
    pub logistic: LogisticModel,
}

impl ModelBundle {
    pub fn new(
        regression: RegressionParams,
        classifier: ClassifierParams,
        logistic: LogisticModel,
    ) -> Self {
        Self {
            regression,
            classifier,
            logistic,
        }
    }

    /// Load all parameter files.
    ///
    /// Missing files fall back to the built-in defaults; a file that exists
    /// but does not parse is an error.
    pub fn load(paths: &ModelPaths) -> CoreResult<Self> {
        let regression = match load_json::<RegressionParams>(&paths.regression)? {
            Some(params) => {
                log::info!(
                    "Loaded regression model: {} cities from {}",
                    params.city_count(),
                    paths.regression.display()
                );
                params
            }
            None => {
                log::warn!(
                    "Regression model not found at {} - using default entry only",
                    paths.regression.display()
                );
                RegressionParams::default()
            }
        };

        let classifier = match load_json::<ClassifierParams>(&paths.classifier)? {
            Some(params) => {
                match params.model() {
                    Some(model) => log::info!("Loaded classifier: {} classes", model.class_count()),
                    None => log::info!("Classifier parameters present but disabled"),
                }
                params
            }
            None => {
                log::warn!(
                    "Classifier model not found at {} - classification disabled",
                    paths.classifier.display()
                );
                ClassifierParams::default()
            }
        };

        let logistic = match load_json::<LogisticModel>(&paths.logistic)? {
            Some(model) => {
                log::info!("Loaded logistic model: {} weights", model.weights.len());
                model
            }
            None => {
                log::warn!(
                    "Logistic model not found at {} - using zero model",
                    paths.logistic.display()
                );
                LogisticModel::default()
            }
        };

        Ok(Self::new(regression, classifier, logistic))
    }

    /// Next-step temperature; unknown cities use the default entry
    pub fn predict_temperature(&self, city: &str, features: &FeatureVector) -> f64 {
        self.regression.model_for(city).predict(features)
    }

    pub fn classify(&self, features: &FeatureVector) -> Classification {
        classify(&self.classifier, features)
    }

    /// Regression and classification for one reading
    pub fn forecast(&self, city: &str, features: &FeatureVector) -> Forecast {
        Forecast {
            temperature_next: self.predict_temperature(city, features),
            classification: self.classify(features),
        }
    }

    pub fn score_logistic(&self, features: &[f64]) -> LogisticResult {
        logistic::score(&self.logistic, features)
    }
}
