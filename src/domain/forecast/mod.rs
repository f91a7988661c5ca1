pub mod severity;
pub mod types;

pub use severity::{Emphasis, SeverityBand};
pub use types::{ForecastResult, HistoryWindow, Reading, WINDOW_SIZE};
