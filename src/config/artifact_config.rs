//! Model artifact locations parsed from environment variables.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_MODEL_PATH: &str = "model_aqi_7days.onnx";
pub const DEFAULT_SCALER_PATH: &str = "scaler_aqi_7days.json";

/// Where the trained model and fitted scaler live on disk
#[derive(Debug, Clone, PartialEq)]
pub struct ArtifactEnvConfig {
    pub model_path: PathBuf,
    pub scaler_path: PathBuf,
}

impl Default for ArtifactEnvConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            scaler_path: PathBuf::from(DEFAULT_SCALER_PATH),
        }
    }
}

impl ArtifactEnvConfig {
    pub fn from_env() -> Self {
        Self {
            model_path: env::var("AQI_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_MODEL_PATH)),
            scaler_path: env::var("AQI_SCALER_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SCALER_PATH)),
        }
    }

    /// Command-line overrides win over the environment.
    pub fn with_overrides(mut self, model: Option<PathBuf>, scaler: Option<PathBuf>) -> Self {
        if let Some(model) = model {
            self.model_path = model;
        }
        if let Some(scaler) = scaler {
            self.scaler_path = scaler;
        }
        self
    }
}
