//! Inference output types

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Posterior probabilities in class order
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassProbabilities(Vec<(String, f64)>);

impl ClassProbabilities {
    pub fn new(entries: Vec<(String, f64)>) -> Self {
        Self(entries)
    }

    pub fn get(&self, label: &str) -> Option<f64> {
        self.0.iter().find(|(l, _)| l == label).map(|(_, p)| *p)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(l, p)| (l.as_str(), *p))
    }

    /// Every probability is a finite number
    pub fn is_finite(&self) -> bool {
        self.0.iter().all(|(_, p)| p.is_finite())
    }

    pub fn total(&self) -> f64 {
        self.0.iter().map(|(_, p)| p).sum()
    }

    /// Label with the highest probability; the first one wins a tie
    pub fn argmax(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for (label, p) in self.iter() {
            match best {
                Some((_, bp)) if !(p > bp) => {}
                _ => best = Some((label, p)),
            }
        }
        best.map(|(label, _)| label)
    }
}

impl Serialize for ClassProbabilities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (label, p) in &self.0 {
            map.serialize_entry(label, p)?;
        }
        map.end()
    }
}

/// Classification outcome; `prediction` and `probs` are `None` when disabled
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub enabled: bool,
    pub prediction: Option<String>,
    pub probs: Option<ClassProbabilities>,
}

impl Classification {
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            prediction: None,
            probs: None,
        }
    }
}

/// Combined weather inference result
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Forecast {
    pub temperature_next: f64,
    pub classification: Classification,
}

/// Generic logistic result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LogisticResult {
    pub probability: f64,
    pub label: u8,
    /// Linear score before the sigmoid
    #[serde(skip)]
    pub z: f64,
}
