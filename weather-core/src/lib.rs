//! Weather Core - statistical core of the weather inference service
//!
//! ```text
//!   CSV logs ──► dataset ──► training ──► model (JSON files)
//!                                             │
//!   request ─────────────────────► inference ◄┘
//! ```
//!
//! - `linalg`: Gauss-Jordan inversion for the normal equations
//! - `training`: per-city linear regression, Gaussian naive Bayes
//! - `inference`: next-step temperature, class posteriors, logistic scoring

pub mod constants;
pub mod error;
pub mod features;
pub mod linalg;
pub mod dataset;
pub mod model;
pub mod training;
pub mod inference;
pub mod storage;

pub use error::{CoreError, CoreResult};
pub use features::FeatureVector;
pub use inference::ModelBundle;
pub use storage::ModelPaths;
