use std::path::PathBuf;
use thiserror::Error;

/// Errors a forecast request can end in.
///
/// Every variant is converted to exactly one user-visible message at the
/// boundary that produced it; none of them are retried.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ForecastError {
    #[error("Model resources unavailable: {reason}")]
    ResourceUnavailable { reason: String },

    #[error("Invalid number '{token}' at position {position}")]
    Parse { token: String, position: usize },

    #[error("Exactly {expected} readings are needed (required {expected}, got {actual})")]
    Validation { expected: usize, actual: usize },

    #[error("No input data supplied")]
    EmptyInput,
}

impl ForecastError {
    pub fn resource_unavailable(reason: impl Into<String>) -> Self {
        ForecastError::ResourceUnavailable {
            reason: reason.into(),
        }
    }

    /// Stable label used for metric labels and translation keys.
    pub fn kind(&self) -> &'static str {
        match self {
            ForecastError::ResourceUnavailable { .. } => "resource_unavailable",
            ForecastError::Parse { .. } => "parse_error",
            ForecastError::Validation { .. } => "validation_error",
            ForecastError::EmptyInput => "empty_input",
        }
    }
}

/// Errors raised while loading the scaler or model artifacts from disk
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("Artifact not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("ONNX runtime error: {reason}")]
    Runtime { reason: String },
}

impl From<ArtifactError> for ForecastError {
    fn from(err: ArtifactError) -> Self {
        ForecastError::resource_unavailable(err.to_string())
    }
}
