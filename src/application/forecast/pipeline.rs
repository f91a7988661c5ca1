use super::parser::{parse, validate};
use crate::application::ml::{ForecastResources, SequencePredictor};
use crate::config::ObservabilityEnvConfig;
use crate::domain::errors::ForecastError;
use crate::domain::forecast::{ForecastResult, HistoryWindow, WINDOW_SIZE};
use crate::domain::ml::Scaler;
use crate::infrastructure::observability::{Metrics, MetricsReporter};
use ndarray::Array2;
use std::time::Instant;
use tracing::{info, warn};

/// Runs one window through scaler and model and classifies the outcome.
pub fn predict(
    window: &HistoryWindow,
    scaler: &dyn Scaler,
    predictor: &dyn SequencePredictor,
) -> Result<ForecastResult, ForecastError> {
    // 1-2. Column of raw readings, normalized element-wise
    let column = Array2::from_shape_vec((WINDOW_SIZE, 1), window.readings().to_vec())
        .map_err(|e| ForecastError::resource_unavailable(format!("Reshape failed: {}", e)))?;
    let scaled = column.mapv(|v| scaler.forward(v));
    if let Some(bad) = scaled.iter().find(|v| !v.is_finite()) {
        return Err(ForecastError::resource_unavailable(format!(
            "Scaler produced a non-finite model input: {}",
            bad
        )));
    }

    // 3. (batch, timesteps, features)
    let model_input = scaled
        .into_shape((1, WINDOW_SIZE, 1))
        .map_err(|e| ForecastError::resource_unavailable(format!("Reshape failed: {}", e)))?;

    // 4. Forward pass
    let raw_prediction = predictor.predict(&model_input).map_err(|e| {
        ForecastError::resource_unavailable(format!("Inference failed ({}): {}", predictor.name(), e))
    })?;
    if !raw_prediction.is_finite() {
        return Err(ForecastError::resource_unavailable(format!(
            "Inference produced a non-finite value: {}",
            raw_prediction
        )));
    }

    // 5-7. Back to AQI units, delta and band
    let final_aqi = scaler.inverse(raw_prediction);
    if !final_aqi.is_finite() {
        return Err(ForecastError::resource_unavailable(format!(
            "Inverse scaling of {} overflowed",
            raw_prediction
        )));
    }
    Ok(ForecastResult::new(*window, raw_prediction, final_aqi))
}

/// The request path shared by the dashboard and the CLI.
///
/// Built once at startup around the outcome of [`ForecastResources::load`].
/// Without resources every request is rejected; there is no reload.
pub struct ForecastPipeline {
    resources: Option<ForecastResources>,
    unavailable_reason: String,
    metrics: Option<Metrics>,
}

impl ForecastPipeline {
    pub fn ready(resources: ForecastResources) -> Self {
        Self {
            resources: Some(resources),
            unavailable_reason: String::new(),
            metrics: None,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            resources: None,
            unavailable_reason: reason.into(),
            metrics: None,
        }
    }

    pub fn from_load<E: std::fmt::Display>(loaded: Result<ForecastResources, E>) -> Self {
        match loaded {
            Ok(resources) => Self::ready(resources),
            Err(e) => Self::unavailable(e.to_string()),
        }
    }

    pub fn with_metrics(mut self, metrics: Metrics) -> Self {
        metrics.set_resources_loaded(self.is_ready());
        self.metrics = Some(metrics);
        self
    }

    /// Attaches fresh metrics when observability is enabled and returns the
    /// reporter the binary emits at exit.
    pub fn observed(
        self,
        config: &ObservabilityEnvConfig,
    ) -> anyhow::Result<(Self, Option<MetricsReporter>)> {
        if !config.enabled {
            return Ok((self, None));
        }
        let metrics = Metrics::new()?;
        let reporter = MetricsReporter::new(metrics.clone());
        Ok((self.with_metrics(metrics), Some(reporter)))
    }

    pub fn is_ready(&self) -> bool {
        self.resources.is_some()
    }

    pub fn resources(&self) -> Result<&ForecastResources, ForecastError> {
        self.resources
            .as_ref()
            .ok_or_else(|| ForecastError::resource_unavailable(self.unavailable_reason.clone()))
    }

    /// Readiness gate, then empty check, parse, validate and predict.
    pub fn submit(&self, raw_text: &str) -> Result<ForecastResult, ForecastError> {
        let start = Instant::now();
        let outcome = self.run(raw_text);

        match &outcome {
            Ok(result) => info!(
                "Forecast: {:.2} ({}) from last reading {:.0}",
                result.final_aqi, result.band, result.last_reading
            ),
            Err(e) => warn!("Forecast rejected: {}", e),
        }

        if let Some(metrics) = &self.metrics {
            metrics.record_forecast(&outcome, start.elapsed());
        }
        outcome
    }

    fn run(&self, raw_text: &str) -> Result<ForecastResult, ForecastError> {
        let resources = self.resources()?;

        if raw_text.trim().is_empty() {
            return Err(ForecastError::EmptyInput);
        }

        let sequence = parse(raw_text)?;
        let window = validate(&sequence)?;
        predict(&window, resources.scaler(), resources.predictor())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::SeverityBand;
    use crate::domain::ml::FittedScaler;
    use ndarray::Array3;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Predicts the mean of the normalized window
    struct MeanPredictor;

    impl SequencePredictor for MeanPredictor {
        fn predict(&self, window: &Array3<f64>) -> Result<f64, String> {
            Ok(window.mean().unwrap_or(0.0))
        }
        fn name(&self) -> &str {
            "mean"
        }
        fn version(&self) -> &str {
            "test"
        }
    }

    struct ConstPredictor(f64, Arc<AtomicUsize>);

    impl SequencePredictor for ConstPredictor {
        fn predict(&self, _window: &Array3<f64>) -> Result<f64, String> {
            self.1.fetch_add(1, Ordering::SeqCst);
            Ok(self.0)
        }
        fn name(&self) -> &str {
            "const"
        }
        fn version(&self) -> &str {
            "test"
        }
    }

    struct FailingPredictor;

    impl SequencePredictor for FailingPredictor {
        fn predict(&self, _window: &Array3<f64>) -> Result<f64, String> {
            Err("session closed".to_string())
        }
        fn name(&self) -> &str {
            "failing"
        }
        fn version(&self) -> &str {
            "test"
        }
    }

    fn window() -> HistoryWindow {
        HistoryWindow::new([80.0, 85.0, 90.0, 88.0, 92.0, 95.0, 100.0])
    }

    #[test]
    fn test_predict_denormalizes_model_output() {
        let scaler = FittedScaler::min_max_from_range(0.0, 200.0);
        let result = predict(&window(), &scaler, &MeanPredictor).unwrap();

        let mean = (80.0 + 85.0 + 90.0 + 88.0 + 92.0 + 95.0 + 100.0) / 7.0;
        assert!((result.final_aqi - mean).abs() < 1e-9);
        assert_eq!(result.last_reading, 100.0);
        assert_eq!(result.delta, result.final_aqi - 100.0);
        assert_eq!(result.band, SeverityBand::Moderate);
    }

    #[test]
    fn test_predict_surfaces_inference_failure() {
        let scaler = FittedScaler::standard(0.0, 1.0);
        let err = predict(&window(), &scaler, &FailingPredictor).unwrap_err();

        assert_eq!(err.kind(), "resource_unavailable");
        assert!(err.to_string().contains("session closed"));
    }

    #[test]
    fn test_predict_rejects_nan_output() {
        let calls = Arc::new(AtomicUsize::new(0));
        let scaler = FittedScaler::standard(0.0, 1.0);
        let err = predict(&window(), &scaler, &ConstPredictor(f64::NAN, calls)).unwrap_err();

        assert_eq!(err.kind(), "resource_unavailable");
    }

    #[test]
    fn test_predict_rejects_overflowing_inverse() {
        let calls = Arc::new(AtomicUsize::new(0));
        let scaler = FittedScaler::min_max(0.0, 1e-300);
        assert!(scaler.validate().is_ok());

        let err = predict(&window(), &scaler, &ConstPredictor(1e10, calls)).unwrap_err();
        assert_eq!(err.kind(), "resource_unavailable");
        assert!(err.to_string().contains("overflowed"));
    }

    #[test]
    fn test_predict_rejects_overflowing_model_input() {
        let calls = Arc::new(AtomicUsize::new(0));
        let scaler = FittedScaler::min_max(0.0, 1e300);
        let huge = HistoryWindow::new([1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1e10]);

        let err = predict(&huge, &scaler, &ConstPredictor(0.5, calls.clone())).unwrap_err();
        assert_eq!(err.kind(), "resource_unavailable");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_unavailable_pipeline_rejects_everything() {
        let pipeline = ForecastPipeline::unavailable("model_aqi_7days.onnx missing");

        for input in ["", "80, 85, 90, 88, 92, 95, 100", "abc"] {
            let err = pipeline.submit(input).unwrap_err();
            assert_eq!(err.kind(), "resource_unavailable");
        }
    }

    #[test]
    fn test_observed_pipeline_reports_requests() {
        let calls = Arc::new(AtomicUsize::new(0));
        let resources = ForecastResources::new(
            Arc::new(FittedScaler::standard(0.0, 1.0)),
            Arc::new(ConstPredictor(72.0, calls)),
        );

        let (pipeline, reporter) = ForecastPipeline::ready(resources)
            .observed(&ObservabilityEnvConfig { enabled: true })
            .unwrap();
        let reporter = reporter.expect("reporter when enabled");

        pipeline.submit("1, 2, 3, 4, 5, 6, 7").unwrap();
        pipeline.submit("1, 2").unwrap_err();

        let snapshot = reporter.collect_snapshot();
        assert!(snapshot.resources_loaded);
        assert_eq!(snapshot.forecasts.ok, 1);
        assert_eq!(snapshot.forecasts.validation_error, 1);
        assert_eq!(snapshot.forecasts.last_predicted_aqi, Some(72.0));
    }

    #[test]
    fn test_observability_disabled_skips_metrics() {
        let (pipeline, reporter) = ForecastPipeline::unavailable("missing")
            .observed(&ObservabilityEnvConfig { enabled: false })
            .unwrap();

        assert!(reporter.is_none());
        assert!(pipeline.submit("1").is_err());
    }

    #[test]
    fn test_bad_input_never_reaches_model() {
        let calls = Arc::new(AtomicUsize::new(0));
        let resources = ForecastResources::new(
            Arc::new(FittedScaler::standard(0.0, 1.0)),
            Arc::new(ConstPredictor(0.0, calls.clone())),
        );
        let pipeline = ForecastPipeline::ready(resources);

        assert_eq!(pipeline.submit("   ").unwrap_err(), ForecastError::EmptyInput);
        assert_eq!(pipeline.submit("1, x").unwrap_err().kind(), "parse_error");
        assert_eq!(pipeline.submit("1, 2").unwrap_err().kind(), "validation_error");
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        assert!(pipeline.submit("1, 2, 3, 4, 5, 6, 7").is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
