//! Push-based observability for the forecaster
//!
//! Metrics live in a private Prometheus registry and leave the process only
//! as structured JSON on stdout. No HTTP server, no incoming requests.

pub mod metrics;
pub mod reporter;

pub use metrics::Metrics;
pub use reporter::MetricsReporter;
