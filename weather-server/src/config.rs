//! Configuration module

use std::env;
use std::path::PathBuf;

use weather_core::constants::DEFAULT_MODEL_DIR;
use weather_core::ModelPaths;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Parameter file locations
    pub model_paths: ModelPaths,

    /// Raw LOG_LEVEL value, upper-cased
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let model_dir = env::var("MODEL_DIR").unwrap_or_else(|_| DEFAULT_MODEL_DIR.to_string());
        let defaults = ModelPaths::in_dir(&model_dir);

        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            model_paths: ModelPaths {
                regression: env::var("TEMP_MODEL_PATH")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.regression),
                classifier: env::var("CLASS_MODEL_PATH")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.classifier),
                logistic: env::var("LOGISTIC_MODEL_PATH")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.logistic),
            },

            log_level: env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "INFO".to_string())
                .to_uppercase(),
        }
    }

    /// Debug blocks are added to responses when LOG_LEVEL is DEBUG
    pub fn is_debug(&self) -> bool {
        self.log_level == "DEBUG"
    }

    /// Default tracing directive for LOG_LEVEL
    pub fn tracing_level(&self) -> &'static str {
        match self.log_level.as_str() {
            "DEBUG" => "debug",
            "TRACE" => "trace",
            "WARN" | "WARNING" => "warn",
            "ERROR" | "CRITICAL" => "error",
            _ => "info",
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            model_paths: ModelPaths::default(),
            log_level: "INFO".to_string(),
        }
    }
}
