use super::onnx_predictor::OnnxPredictor;
use super::predictor::SequencePredictor;
use crate::config::ArtifactEnvConfig;
use crate::domain::errors::ArtifactError;
use crate::domain::ml::{FittedScaler, Scaler};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// Scaler and model, loaded once at startup and shared read-only afterwards.
#[derive(Clone)]
pub struct ForecastResources {
    scaler: Arc<dyn Scaler>,
    predictor: Arc<dyn SequencePredictor>,
}

impl ForecastResources {
    pub fn new(scaler: Arc<dyn Scaler>, predictor: Arc<dyn SequencePredictor>) -> Self {
        Self { scaler, predictor }
    }

    /// Loads both artifacts. If either one fails the whole load fails, so
    /// the caller never ends up with half a pipeline.
    pub fn load(config: &ArtifactEnvConfig) -> Result<Self, ArtifactError> {
        let scaler = load_scaler(&config.scaler_path).inspect_err(|e| {
            error!("Failed to load scaler: {}", e);
        })?;
        let predictor = OnnxPredictor::load(&config.model_path).inspect_err(|e| {
            error!("Failed to load model: {}", e);
        })?;

        info!(
            "Forecast resources ready: {} + {} ({})",
            scaler.name(),
            predictor.name(),
            predictor.version()
        );
        Ok(Self::new(Arc::new(scaler), Arc::new(predictor)))
    }

    pub fn scaler(&self) -> &dyn Scaler {
        self.scaler.as_ref()
    }

    pub fn predictor(&self) -> &dyn SequencePredictor {
        self.predictor.as_ref()
    }
}

/// Reads a fitted scaler exported as JSON.
pub fn load_scaler(path: &Path) -> Result<FittedScaler, ArtifactError> {
    if !path.exists() {
        return Err(ArtifactError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| ArtifactError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let scaler: FittedScaler =
        serde_json::from_str(&content).map_err(|e| ArtifactError::Decode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

    scaler.validate().map_err(|reason| ArtifactError::Decode {
        path: path.to_path_buf(),
        reason,
    })?;

    info!("Loaded {} from {:?}", scaler.name(), path);
    Ok(scaler)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_load_scaler_from_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.json");
        fs::write(&path, r#"{"kind":"standard","mean":[92.1],"std":[31.4]}"#).unwrap();

        let scaler = load_scaler(&path).unwrap();
        assert_eq!(scaler, FittedScaler::standard(92.1, 31.4));
    }

    #[test]
    fn test_load_scaler_rejects_invalid_parameters() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.json");
        fs::write(&path, r#"{"kind":"min_max","min":[0.0],"scale":[0.0]}"#).unwrap();

        assert!(matches!(
            load_scaler(&path),
            Err(ArtifactError::Decode { .. })
        ));
    }

    #[test]
    fn test_load_scaler_rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scaler.json");
        fs::write(&path, "not json").unwrap();

        assert!(matches!(
            load_scaler(&path),
            Err(ArtifactError::Decode { .. })
        ));
    }

    #[test]
    fn test_missing_scaler_fails_whole_load() {
        let config = ArtifactEnvConfig {
            model_path: PathBuf::from("missing_model.onnx"),
            scaler_path: PathBuf::from("missing_scaler.json"),
        };

        assert!(matches!(
            ForecastResources::load(&config),
            Err(ArtifactError::NotFound { .. })
        ));
    }

    #[test]
    fn test_missing_model_fails_whole_load() {
        let dir = tempfile::tempdir().unwrap();
        let scaler_path = dir.path().join("scaler.json");
        fs::write(&scaler_path, r#"{"kind":"min_max","min":[0.0],"scale":[0.01]}"#).unwrap();

        let config = ArtifactEnvConfig {
            model_path: dir.path().join("missing_model.onnx"),
            scaler_path,
        };

        match ForecastResources::load(&config) {
            Err(ArtifactError::NotFound { path }) => {
                assert!(path.ends_with("missing_model.onnx"));
            }
            Err(other) => panic!("unexpected error: {}", other),
            Ok(_) => panic!("load should fail without a model"),
        }
    }
}
