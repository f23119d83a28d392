//! Dataset Module - Offline training data
//!
//! Parses weather logs from CSV into immutable observations, then groups
//! them per city in time order for the regression trainer.

pub mod record;
pub mod reader;


use std::collections::BTreeMap;

pub use reader::{read_csv, read_observations, parse_timestamp};
pub use record::{LabeledObservation, Observation};

/// Group observations by city, each group ordered by timestamp.
///
/// Observations without a timestamp sort after every dated one and keep
/// their original relative order.
pub fn group_by_city(observations: &[Observation]) -> BTreeMap<String, Vec<Observation>> {
    let mut by_city: BTreeMap<String, Vec<Observation>> = BTreeMap::new();
    for obs in observations {
        by_city.entry(obs.city.clone()).or_default().push(obs.clone());
    }

    for points in by_city.values_mut() {
        points.sort_by_key(|o| (o.timestamp.is_none(), o.timestamp));
    }

    by_city
}

/// Labeled rows for the classifier, skipping rows with an empty label
pub fn labeled(observations: &[Observation]) -> Vec<LabeledObservation> {
    observations
        .iter()
        .filter_map(Observation::to_labeled)
        .collect()
}
