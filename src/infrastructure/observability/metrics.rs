//! Prometheus metrics definitions for the AQI forecaster
//!
//! All metrics use the `aqi_` prefix and are read-only.

use crate::domain::errors::ForecastError;
use crate::domain::forecast::ForecastResult;
use prometheus::{
    CounterVec, Gauge, Histogram, HistogramOpts, Opts, Registry, TextEncoder,
    core::{AtomicF64, GenericGauge},
};
use std::sync::Arc;
use std::time::Duration;

/// Prometheus metrics for the forecast pipeline
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    /// Requests by outcome (`ok` or the error kind)
    pub forecasts_total: CounterVec,
    /// Successful forecasts by severity band
    pub forecast_bands_total: CounterVec,
    /// Most recent predicted AQI
    pub last_predicted_aqi: GenericGauge<AtomicF64>,
    /// End-to-end request latency in seconds
    pub request_latency_seconds: Histogram,
    /// 1 when model and scaler are loaded
    pub resources_loaded: GenericGauge<AtomicF64>,
}

impl Metrics {
    /// Create a new Metrics instance with all gauges and counters registered
    pub fn new() -> anyhow::Result<Self> {
        let registry = Registry::new();

        let forecasts_total = CounterVec::new(
            Opts::new("aqi_forecasts_total", "Forecast requests by outcome"),
            &["outcome"],
        )?;
        registry.register(Box::new(forecasts_total.clone()))?;

        let forecast_bands_total = CounterVec::new(
            Opts::new(
                "aqi_forecast_bands_total",
                "Successful forecasts by severity band",
            ),
            &["band"],
        )?;
        registry.register(Box::new(forecast_bands_total.clone()))?;

        let last_predicted_aqi = Gauge::with_opts(Opts::new(
            "aqi_last_predicted_aqi",
            "Most recent predicted next-day AQI",
        ))?;
        registry.register(Box::new(last_predicted_aqi.clone()))?;

        let request_latency_seconds = Histogram::with_opts(
            HistogramOpts::new(
                "aqi_request_latency_seconds",
                "Forecast request latency in seconds",
            )
            .buckets(vec![0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 1.0]),
        )?;
        registry.register(Box::new(request_latency_seconds.clone()))?;

        let resources_loaded = Gauge::with_opts(Opts::new(
            "aqi_resources_loaded",
            "Model and scaler load status (0=unavailable, 1=loaded)",
        ))?;
        registry.register(Box::new(resources_loaded.clone()))?;

        Ok(Self {
            registry: Arc::new(registry),
            forecasts_total,
            forecast_bands_total,
            last_predicted_aqi,
            request_latency_seconds,
            resources_loaded,
        })
    }

    /// Render all metrics in Prometheus text format
    pub fn render(&self) -> String {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        encoder
            .encode_to_string(&metric_families)
            .unwrap_or_default()
    }

    pub fn set_resources_loaded(&self, loaded: bool) {
        self.resources_loaded.set(if loaded { 1.0 } else { 0.0 });
    }

    /// Record one finished request
    pub fn record_forecast(
        &self,
        outcome: &Result<ForecastResult, ForecastError>,
        elapsed: Duration,
    ) {
        self.request_latency_seconds.observe(elapsed.as_secs_f64());

        match outcome {
            Ok(result) => {
                let band = result.band.to_string();
                self.forecasts_total.with_label_values(&["ok"]).inc();
                self.forecast_bands_total
                    .with_label_values(&[band.as_str()])
                    .inc();
                self.last_predicted_aqi.set(result.final_aqi);
            }
            Err(e) => {
                self.forecasts_total.with_label_values(&[e.kind()]).inc();
            }
        }
    }

    pub fn count(&self, outcome: &str) -> u64 {
        self.forecasts_total.with_label_values(&[outcome]).get() as u64
    }
}
