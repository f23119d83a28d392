//! Gaussian naive Bayes classification

use super::math::{gaussian_log_density, softmax};
use super::types::{ClassProbabilities, Classification};
use crate::constants::PRIOR_FLOOR;
use crate::features::{FeatureVector, FEATURE_COUNT};
use crate::model::{ClassifierParams, GaussianModel};

/// Joint log-score per class, in class order
pub fn log_scores(model: &GaussianModel, x: &FeatureVector) -> Vec<(String, f64)> {
    let feats = x.to_array();
    let mut scores = Vec::with_capacity(model.classes.len());

    for class in &model.classes {
        let (Some(mu), Some(var)) = (model.means.get(class), model.vars.get(class)) else {
            continue;
        };
        let prior = model.priors.get(class).copied().unwrap_or(PRIOR_FLOOR);
        let mut score = prior.max(PRIOR_FLOOR).ln();
        for i in 0..FEATURE_COUNT {
            score += gaussian_log_density(feats[i], mu[i], var[i]);
        }
        scores.push((class.clone(), score));
    }

    scores
}

/// Posterior class probabilities for one reading.
///
/// A disabled classifier short-circuits to `Classification::disabled()`.
pub fn classify(params: &ClassifierParams, x: &FeatureVector) -> Classification {
    let Some(model) = params.model() else {
        return Classification::disabled();
    };

    let scores = log_scores(model, x);
    if scores.is_empty() {
        return Classification::disabled();
    }

    let values: Vec<f64> = scores.iter().map(|(_, s)| *s).collect();
    let probs = ClassProbabilities::new(
        scores
            .into_iter()
            .zip(softmax(&values))
            .map(|((label, _), p)| (label, p))
            .collect(),
    );
    let prediction = probs.argmax().map(str::to_string);

    Classification {
        enabled: true,
        prediction,
        probs: Some(probs),
    }
}
