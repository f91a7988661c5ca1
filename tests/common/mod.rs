use aqi_forecaster::application::forecast::ForecastPipeline;
use aqi_forecaster::application::ml::{ForecastResources, SequencePredictor};
use aqi_forecaster::domain::ml::FittedScaler;
use ndarray::Array3;
use std::sync::Arc;

/// Always returns the same normalized value
pub struct FixedPredictor(pub f64);

impl SequencePredictor for FixedPredictor {
    fn predict(&self, _window: &Array3<f64>) -> Result<f64, String> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "fixed"
    }

    fn version(&self) -> &str {
        "test"
    }
}

/// Naive persistence forecast: tomorrow looks like the last day
pub struct PersistencePredictor;

impl SequencePredictor for PersistencePredictor {
    fn predict(&self, window: &Array3<f64>) -> Result<f64, String> {
        Ok(window[[0, window.shape()[1] - 1, 0]])
    }

    fn name(&self) -> &str {
        "persistence"
    }

    fn version(&self) -> &str {
        "test"
    }
}

/// Pipeline whose model output, after the identity scaler, is `final_aqi`
pub fn pipeline_predicting(final_aqi: f64) -> ForecastPipeline {
    ForecastPipeline::ready(ForecastResources::new(
        Arc::new(FittedScaler::standard(0.0, 1.0)),
        Arc::new(FixedPredictor(final_aqi)),
    ))
}

pub fn persistence_pipeline(scaler: FittedScaler) -> ForecastPipeline {
    ForecastPipeline::ready(ForecastResources::new(
        Arc::new(scaler),
        Arc::new(PersistencePredictor),
    ))
}
