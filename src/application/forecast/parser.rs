use crate::domain::errors::ForecastError;
use crate::domain::forecast::{HistoryWindow, Reading};

/// Parses comma-separated readings, keeping the input order.
///
/// Fails on the first token that is not a finite number; no partial
/// sequence escapes.
pub fn parse(raw_text: &str) -> Result<Vec<Reading>, ForecastError> {
    raw_text
        .split(',')
        .enumerate()
        .map(|(i, token)| {
            let token = token.trim();
            token
                .parse::<f64>()
                .ok()
                .filter(|v| v.is_finite())
                .ok_or_else(|| ForecastError::Parse {
                    token: token.to_string(),
                    position: i + 1,
                })
        })
        .collect()
}

/// Requires exactly seven readings; values themselves are taken as-is.
pub fn validate(sequence: &[Reading]) -> Result<HistoryWindow, ForecastError> {
    HistoryWindow::try_from_slice(sequence)
}
