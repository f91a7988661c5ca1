use super::severity::SeverityBand;
use crate::domain::errors::ForecastError;
use serde::{Deserialize, Serialize};

/// Number of past daily readings consumed per prediction.
pub const WINDOW_SIZE: usize = 7;

/// A single daily AQI observation.
pub type Reading = f64;

/// Exactly [`WINDOW_SIZE`] readings, oldest first.
///
/// The fixed-size array makes a window of any other length unrepresentable;
/// the only fallible way in is [`HistoryWindow::try_from_slice`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryWindow {
    readings: [Reading; WINDOW_SIZE],
}

impl HistoryWindow {
    pub fn new(readings: [Reading; WINDOW_SIZE]) -> Self {
        Self { readings }
    }

    pub fn try_from_slice(values: &[Reading]) -> Result<Self, ForecastError> {
        let readings: [Reading; WINDOW_SIZE] =
            values.try_into().map_err(|_| ForecastError::Validation {
                expected: WINDOW_SIZE,
                actual: values.len(),
            })?;
        Ok(Self { readings })
    }

    pub fn readings(&self) -> &[Reading; WINDOW_SIZE] {
        &self.readings
    }

    /// Most recent observation (day 7).
    pub fn last(&self) -> Reading {
        self.readings[WINDOW_SIZE - 1]
    }
}

/// Outcome of a successful forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    /// Predicted AQI for the next day, in original units
    pub final_aqi: f64,
    pub last_reading: Reading,
    /// `final_aqi - last_reading`, unrounded
    pub delta: f64,
    pub band: SeverityBand,
    /// Model output before the inverse scaling
    pub raw_prediction_scaled: f64,
    pub history: HistoryWindow,
}

impl ForecastResult {
    pub fn new(history: HistoryWindow, raw_prediction_scaled: f64, final_aqi: f64) -> Self {
        let last_reading = history.last();
        Self {
            final_aqi,
            last_reading,
            delta: final_aqi - last_reading,
            band: SeverityBand::classify(final_aqi),
            raw_prediction_scaled,
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_rejects_wrong_length() {
        let err = HistoryWindow::try_from_slice(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            ForecastError::Validation {
                expected: 7,
                actual: 3
            }
        );
    }

    #[test]
    fn test_last_is_most_recent() {
        let window = HistoryWindow::new([80.0, 85.0, 90.0, 88.0, 92.0, 95.0, 100.0]);
        assert_eq!(window.last(), 100.0);
    }

    #[test]
    fn test_result_delta_is_exact() {
        let window = HistoryWindow::new([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 100.0]);
        let result = ForecastResult::new(window, 0.42, 103.456);

        assert_eq!(result.delta, 103.456 - 100.0);
        assert_eq!(result.band, SeverityBand::Unhealthy);
    }
}
