//! Gaussian Classifier Trainer
//!
//! Priors are class frequencies; variances are population variances
//! (divide by count), floored at `VARIANCE_FLOOR`.

use std::collections::BTreeMap;

use crate::constants::{INSUFFICIENT_DATA, MIN_CLASSIFIER_ROWS, VARIANCE_FLOOR};
use crate::dataset::LabeledObservation;
use crate::features::FEATURE_COUNT;
use crate::model::{ClassifierParams, GaussianModel};

fn feature_means(rows: &[[f64; FEATURE_COUNT]]) -> [f64; FEATURE_COUNT] {
    let n = rows.len().max(1) as f64;
    let mut means = [0.0; FEATURE_COUNT];
    for (i, mean) in means.iter_mut().enumerate() {
        *mean = rows.iter().map(|x| x[i]).sum::<f64>() / n;
    }
    means
}

fn feature_vars(rows: &[[f64; FEATURE_COUNT]], means: &[f64; FEATURE_COUNT]) -> [f64; FEATURE_COUNT] {
    let n = rows.len().max(1) as f64;
    let mut vars = [0.0; FEATURE_COUNT];
    for (i, var) in vars.iter_mut().enumerate() {
        let ss: f64 = rows.iter().map(|x| (x[i] - means[i]).powi(2)).sum();
        *var = (ss / n).max(VARIANCE_FLOOR);
    }
    vars
}

/// Fit per-class priors, means and variances.
///
/// Fewer than `MIN_CLASSIFIER_ROWS` rows disables the classifier.
pub fn train_classifier(data: &[LabeledObservation]) -> ClassifierParams {
    if data.len() < MIN_CLASSIFIER_ROWS {
        log::info!(
            "Classification disabled: {} labeled rows < {}",
            data.len(),
            MIN_CLASSIFIER_ROWS
        );
        return ClassifierParams::disabled(INSUFFICIENT_DATA);
    }

    // Group by label, keeping first-appearance order
    let mut classes: Vec<String> = Vec::new();
    let mut by_class: BTreeMap<String, Vec<[f64; FEATURE_COUNT]>> = BTreeMap::new();
    for row in data {
        if !by_class.contains_key(&row.label) {
            classes.push(row.label.clone());
        }
        by_class
            .entry(row.label.clone())
            .or_default()
            .push(row.features.to_array());
    }

    let total = data.len() as f64;
    let mut priors = BTreeMap::new();
    let mut means = BTreeMap::new();
    let mut vars = BTreeMap::new();

    for (label, rows) in &by_class {
        let mu = feature_means(rows);
        priors.insert(label.clone(), rows.len() as f64 / total);
        vars.insert(label.clone(), feature_vars(rows, &mu));
        means.insert(label.clone(), mu);
    }

    log::info!("Trained classifier with {} classes", classes.len());

    ClassifierParams::enabled(GaussianModel {
        classes,
        priors,
        means,
        vars,
    })
}
