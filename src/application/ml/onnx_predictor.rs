use super::predictor::{INPUT_SHAPE, SequencePredictor, check_input_shape};
use crate::domain::errors::ArtifactError;
use ndarray::Array3;
use ort::session::Session;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::{debug, info};

/// LSTM forecaster exported to ONNX.
pub struct OnnxPredictor {
    // `Session::run` needs exclusive access; requests are sequential so the
    // lock is never contended.
    session: Mutex<Session>,
    model_path: PathBuf,
}

impl OnnxPredictor {
    pub fn load(model_path: impl AsRef<Path>) -> Result<Self, ArtifactError> {
        let model_path = model_path.as_ref().to_path_buf();
        if !model_path.exists() {
            return Err(ArtifactError::NotFound { path: model_path });
        }

        let session = Session::builder()
            .map_err(|e| ArtifactError::Runtime {
                reason: format!("Failed to create ONNX session builder: {}", e),
            })?
            .commit_from_file(&model_path)
            .map_err(|e| ArtifactError::Decode {
                path: model_path.clone(),
                reason: e.to_string(),
            })?;

        info!("Successfully loaded ONNX model from {:?}", model_path);
        Ok(Self {
            session: Mutex::new(session),
            model_path,
        })
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }
}

impl SequencePredictor for OnnxPredictor {
    fn predict(&self, window: &Array3<f64>) -> Result<f64, String> {
        check_input_shape(window)?;

        let flat_data: Vec<f32> = window.iter().map(|v| *v as f32).collect();
        if flat_data.iter().any(|v| !v.is_finite()) {
            return Err("Scaled input does not fit in f32".to_string());
        }
        let shape = INPUT_SHAPE.to_vec();

        let input_value = ort::value::Value::from_array((shape.as_slice(), flat_data))
            .map_err(|e| format!("Input value creation failed: {}", e))?;

        let mut session = self
            .session
            .lock()
            .map_err(|e| format!("Mutex lock failed: {}", e))?;

        let outputs = session
            .run(ort::inputs![input_value])
            .map_err(|e| e.to_string())?;
        let output_value = outputs
            .iter()
            .next()
            .map(|(_, v)| v)
            .ok_or("No output found")?;
        let data = output_value
            .try_extract_tensor::<f32>()
            .map_err(|e| e.to_string())?;
        let prediction = *data.1.iter().next().ok_or("Empty output")? as f64;

        debug!("ONNX raw prediction: {}", prediction);
        Ok(prediction)
    }

    fn name(&self) -> &str {
        "ONNX Runtime (LSTM)"
    }

    fn version(&self) -> &str {
        "window-7"
    }
}
