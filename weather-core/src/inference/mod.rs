//! Inference Core - Stateless scoring over loaded parameters
//!
//! `ModelBundle` is built once at startup and passed by reference to every
//! request. Nothing here mutates it.

pub mod math;
pub mod types;
pub mod classify;
pub mod logistic;
pub mod engine;

// Re-export common types
pub use engine::ModelBundle;
pub use types::{ClassProbabilities, Classification, Forecast, LogisticResult};
pub use classify::classify;
pub use logistic::{coerce_or_default, score};
