//! Training Module - Offline batch trainers
//!
//! Both trainers are pure functions over parsed observations. Degenerate
//! input (too few rows, singular Gram matrix) yields deterministic fallback
//! parameters instead of an error.

pub mod regression;
pub mod classifier;


pub use regression::{train_city, train_temperature};
pub use classifier::train_classifier;
