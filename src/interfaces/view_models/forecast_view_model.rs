use crate::application::ml::INPUT_SHAPE;
use crate::domain::errors::ForecastError;
use crate::domain::forecast::{Emphasis, ForecastResult, SeverityBand};
use crate::infrastructure::i18n::I18nService;
use serde::Serialize;

/// Raw model-side view of a forecast, shown as JSON
#[derive(Debug, Clone, Serialize)]
pub struct TechnicalDetails {
    pub input_shape: String,
    pub raw_prediction_scaled: f64,
    pub final_aqi: f64,
    pub history: Vec<f64>,
    pub generated_at: String,
}

/// Display-ready strings for one forecast
#[derive(Debug, Clone)]
pub struct ForecastViewModel {
    pub last_reading: String,
    pub forecast: String,
    pub delta: String,
    /// Default (non-inverted) colouring: rising values use the success colour
    pub delta_rising: bool,
    pub band: SeverityBand,
    pub emphasis: Emphasis,
    pub status_label: String,
    pub details: TechnicalDetails,
}

impl ForecastViewModel {
    pub fn from_result(result: &ForecastResult, i18n: &I18nService) -> Self {
        Self {
            last_reading: format!("{:.0}", result.last_reading),
            forecast: format!("{:.2}", result.final_aqi),
            delta: format!("{:+.2}", result.delta),
            delta_rising: result.delta >= 0.0,
            band: result.band,
            emphasis: result.band.emphasis(),
            status_label: format!("{} {}", i18n.t(result.band.label_key()), result.band.icon()),
            details: TechnicalDetails {
                input_shape: format!(
                    "({}, {}, {})",
                    INPUT_SHAPE[0], INPUT_SHAPE[1], INPUT_SHAPE[2]
                ),
                raw_prediction_scaled: result.raw_prediction_scaled,
                final_aqi: result.final_aqi,
                history: result.history.readings().to_vec(),
                generated_at: chrono::Utc::now().to_rfc3339(),
            },
        }
    }

    pub fn details_json(&self) -> String {
        serde_json::to_string_pretty(&self.details).unwrap_or_default()
    }

    /// The single user-facing message for a failed request
    pub fn error_message(err: &ForecastError, i18n: &I18nService) -> String {
        match err {
            ForecastError::ResourceUnavailable { reason } => {
                i18n.tf(err.kind(), &[("reason", reason)])
            }
            ForecastError::Parse { token, position } => i18n.tf(
                err.kind(),
                &[("token", token), ("position", &position.to_string())],
            ),
            ForecastError::Validation { expected, actual } => i18n.tf(
                err.kind(),
                &[
                    ("expected", &expected.to_string()),
                    ("actual", &actual.to_string()),
                ],
            ),
            ForecastError::EmptyInput => i18n.t(err.kind()).to_string(),
        }
    }
}
