//! Central Configuration Constants
//!
//! Single source of truth for training thresholds, numeric floors
//! and default file locations.

/// Minimum consecutive-pair rows before a city gets a linear model
pub const MIN_REGRESSION_ROWS: usize = 10;

/// Minimum labeled rows before the classifier is enabled
pub const MIN_CLASSIFIER_ROWS: usize = 200;

/// Pivot magnitude below which a matrix is treated as singular
pub const PIVOT_EPSILON: f64 = 1e-12;

/// Variance floor for Gaussian likelihoods
pub const VARIANCE_FLOOR: f64 = 1e-6;

/// Prior floor before taking the log
pub const PRIOR_FLOOR: f64 = 1e-6;

/// Bias of the built-in default regression entry
pub const DEFAULT_BIAS: f64 = 20.0;

/// Probability at or above which the logistic label is 1
pub const LOGISTIC_THRESHOLD: f64 = 0.5;

/// Regression task name written to the parameter file
pub const TEMPERATURE_TASK: &str = "temperature_next";

/// Reason recorded when the classifier is disabled for lack of data
pub const INSUFFICIENT_DATA: &str = "insufficient_data";

/// CSV timestamp format (day/month/year hour:minute:second)
pub const TIMESTAMP_FORMAT: &str = "%d/%m/%Y %H:%M:%S";

/// Default CSV input for the trainer
pub const DEFAULT_INPUT_CSV: &str = "data/weather.csv";

/// Default directory holding the parameter files
pub const DEFAULT_MODEL_DIR: &str = "lambda";

/// Regression parameter file name
pub const TEMP_MODEL_FILE: &str = "model_temp.json";

/// Classifier parameter file name
pub const CLASS_MODEL_FILE: &str = "model_class.json";

/// Generic logistic parameter file name
pub const LOGISTIC_MODEL_FILE: &str = "model_logistic.json";
