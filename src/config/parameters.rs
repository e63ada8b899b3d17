//! Export parameter structures.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location of the export parameter file
pub const DEFAULT_PARAMETERS_PATH: &str = "data/parameters/export.json";

/// Where and under which name timestamped exports are written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportParameters {
    /// Directory receiving generated files
    pub output_dir: PathBuf,
    /// Filename stem placed before the timestamp
    pub file_prefix: String,
    /// Filename extension, without the dot
    pub extension: String,
}

impl ExportParameters {
    /// Load from the default parameter file, or use defaults if it doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from(DEFAULT_PARAMETERS_PATH)
    }

    /// Load from JSON file or return defaults
    pub fn load_from<P: AsRef<Path>>(path: P) -> Self {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(params) => {
                    log::info!("Loaded export parameters from {:?}", path.as_ref());
                    params
                }
                Err(e) => {
                    log::warn!("Failed to parse export parameters: {}, using defaults", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Export parameters file not found, using defaults");
                Self::default()
            }
        }
    }
}

impl Default for ExportParameters {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("exports"),
            file_prefix: "ovito".to_string(),
            extension: "xyz".to_string(),
        }
    }
}
