//! Forecast request path: text in, classified next-day AQI out.

pub mod chart;
pub mod demo;
pub mod parser;
pub mod pipeline;

pub use chart::{ChartSeries, chart_series};
pub use parser::{parse, validate};
pub use pipeline::{ForecastPipeline, predict};
