//! Push-based metrics reporter
//!
//! Emits a structured JSON summary to stdout on demand (the CLI does so on
//! exit). Nothing is served; data only flows outward.

use crate::infrastructure::observability::metrics::Metrics;
use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};

/// Metrics snapshot for JSON output
#[derive(Debug, Serialize)]
pub struct MetricsSnapshot {
    pub timestamp: String,
    pub uptime_seconds: u64,
    pub version: String,
    pub resources_loaded: bool,
    pub forecasts: ForecastSnapshot,
}

#[derive(Debug, Serialize)]
pub struct ForecastSnapshot {
    pub ok: u64,
    pub parse_error: u64,
    pub validation_error: u64,
    pub empty_input: u64,
    pub resource_unavailable: u64,
    pub last_predicted_aqi: Option<f64>,
}

pub struct MetricsReporter {
    metrics: Metrics,
    start_time: Instant,
}

impl MetricsReporter {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            metrics,
            start_time: Instant::now(),
        }
    }

    pub fn collect_snapshot(&self) -> MetricsSnapshot {
        let ok = self.metrics.count("ok");

        MetricsSnapshot {
            timestamp: chrono::Utc::now().to_rfc3339(),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            resources_loaded: self.metrics.resources_loaded.get() >= 1.0,
            forecasts: ForecastSnapshot {
                ok,
                parse_error: self.metrics.count("parse_error"),
                validation_error: self.metrics.count("validation_error"),
                empty_input: self.metrics.count("empty_input"),
                resource_unavailable: self.metrics.count("resource_unavailable"),
                last_predicted_aqi: (ok > 0).then(|| self.metrics.last_predicted_aqi.get()),
            },
        }
    }

    /// Print the snapshot with a filterable prefix
    pub fn emit(&self) {
        let snapshot = self.collect_snapshot();
        match serde_json::to_string(&snapshot) {
            Ok(json) => {
                println!("METRICS_JSON:{}", json);
                info!(
                    "Forecasts: {} ok | {} rejected | Uptime: {}s",
                    snapshot.forecasts.ok,
                    snapshot.forecasts.parse_error
                        + snapshot.forecasts.validation_error
                        + snapshot.forecasts.empty_input
                        + snapshot.forecasts.resource_unavailable,
                    snapshot.uptime_seconds
                );
            }
            Err(e) => warn!("Failed to serialize metrics: {}", e),
        }
    }
}
