//! Parameter file storage
//!
//! Flat pretty-printed JSON. A missing file is reported as `Ok(None)` so
//! the caller can pick its fallback; a malformed file is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::constants::{CLASS_MODEL_FILE, DEFAULT_MODEL_DIR, LOGISTIC_MODEL_FILE, TEMP_MODEL_FILE};
use crate::error::{CoreError, CoreResult};

/// Locations of the three parameter files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelPaths {
    pub regression: PathBuf,
    pub classifier: PathBuf,
    pub logistic: PathBuf,
}

impl ModelPaths {
    /// Standard file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            regression: dir.join(TEMP_MODEL_FILE),
            classifier: dir.join(CLASS_MODEL_FILE),
            logistic: dir.join(LOGISTIC_MODEL_FILE),
        }
    }
}

impl Default for ModelPaths {
    fn default() -> Self {
        Self::in_dir(DEFAULT_MODEL_DIR)
    }
}

/// Write `value` as pretty JSON, creating parent directories
pub fn save_json<T: Serialize>(value: &T, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| CoreError::io(parent, e))?;
        }
    }

    let json = serde_json::to_vec_pretty(value)?;
    fs::write(path, json).map_err(|e| CoreError::io(path, e))?;
    Ok(())
}

/// Read JSON from `path`; `Ok(None)` if the file does not exist
pub fn load_json<T: DeserializeOwned>(path: &Path) -> CoreResult<Option<T>> {
    if !path.exists() {
        return Ok(None);
    }

    let data = fs::read(path).map_err(|e| CoreError::io(path, e))?;
    let value = serde_json::from_slice(&data)?;
    Ok(Some(value))
}
