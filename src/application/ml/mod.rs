pub mod onnx_predictor;
pub mod predictor;
pub mod resources;

pub use onnx_predictor::OnnxPredictor;
pub use predictor::{INPUT_SHAPE, SequencePredictor};
pub use resources::{ForecastResources, load_scaler};
