use serde::{Deserialize, Serialize};

/// Pre-fitted affine transform over a single feature.
pub trait Scaler: Send + Sync {
    /// Raw units -> model units
    fn forward(&self, value: f64) -> f64;

    /// Model units -> raw units
    fn inverse(&self, value: f64) -> f64;

    fn name(&self) -> &str;
}

/// Scaler parameters as exported from the training notebook.
///
/// Attribute arrays hold one entry per feature; the forecaster is univariate,
/// so exactly one entry is accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FittedScaler {
    /// `x * scale + min`
    MinMax { min: Vec<f64>, scale: Vec<f64> },
    /// `(x - mean) / std`
    Standard { mean: Vec<f64>, std: Vec<f64> },
}

impl FittedScaler {
    pub fn min_max(min: f64, scale: f64) -> Self {
        FittedScaler::MinMax {
            min: vec![min],
            scale: vec![scale],
        }
    }

    /// Builds the min-max scaler that maps `[data_min, data_max]` onto `[0, 1]`.
    pub fn min_max_from_range(data_min: f64, data_max: f64) -> Self {
        let scale = 1.0 / (data_max - data_min);
        Self::min_max(-data_min * scale, scale)
    }

    pub fn standard(mean: f64, std: f64) -> Self {
        FittedScaler::Standard {
            mean: vec![mean],
            std: vec![std],
        }
    }

    /// Checks the parameters describe an invertible single-feature transform.
    pub fn validate(&self) -> Result<(), String> {
        let (offset, factor, factor_name) = match self {
            FittedScaler::MinMax { min, scale } => (min, scale, "scale"),
            FittedScaler::Standard { mean, std } => (mean, std, "std"),
        };

        if offset.len() != 1 || factor.len() != 1 {
            return Err(format!(
                "expected parameters for exactly 1 feature, found {} and {}",
                offset.len(),
                factor.len()
            ));
        }
        if !offset[0].is_finite() || !factor[0].is_finite() {
            return Err("scaler parameters must be finite".to_string());
        }
        if factor[0] == 0.0 {
            return Err(format!("{} must be non-zero", factor_name));
        }
        Ok(())
    }

    // Indexing is safe once `validate` has passed; the loader enforces that.
    fn params(&self) -> (f64, f64) {
        match self {
            FittedScaler::MinMax { min, scale } => (min[0], scale[0]),
            FittedScaler::Standard { mean, std } => (mean[0], std[0]),
        }
    }
}

impl Scaler for FittedScaler {
    fn forward(&self, value: f64) -> f64 {
        let (a, b) = self.params();
        match self {
            FittedScaler::MinMax { .. } => value * b + a,
            FittedScaler::Standard { .. } => (value - a) / b,
        }
    }

    fn inverse(&self, value: f64) -> f64 {
        let (a, b) = self.params();
        match self {
            FittedScaler::MinMax { .. } => (value - a) / b,
            FittedScaler::Standard { .. } => value * b + a,
        }
    }

    fn name(&self) -> &str {
        match self {
            FittedScaler::MinMax { .. } => "MinMaxScaler",
            FittedScaler::Standard { .. } => "StandardScaler",
        }
    }
}
