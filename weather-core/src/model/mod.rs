//! Model Module - Trained parameter sets and their JSON formats
//!
//! Created by the offline trainers, loaded once at startup and read-only
//! afterwards.

pub mod regression;
pub mod classifier;
pub mod logistic;

// Re-export common types
pub use regression::{RegressionMethod, RegressionModel, RegressionParams};
pub use classifier::{ClassifierParams, GaussianModel};
pub use logistic::LogisticModel;
