use ndarray::Array3;

/// Shape every predictor is fed: (batch, timesteps, features)
pub const INPUT_SHAPE: [usize; 3] = [1, 7, 1];

/// Interface for pre-trained sequence models
pub trait SequencePredictor: Send + Sync {
    /// Predict the next normalized value from a normalized (1, 7, 1) window
    fn predict(&self, window: &Array3<f64>) -> Result<f64, String>;

    /// Get model name/type
    fn name(&self) -> &str;

    /// Get model version/id
    fn version(&self) -> &str;
}

/// Rejects windows the model was not exported for.
pub fn check_input_shape(window: &Array3<f64>) -> Result<(), String> {
    if window.shape() != INPUT_SHAPE {
        return Err(format!(
            "Expected input shape {:?}, got {:?}",
            INPUT_SHAPE,
            window.shape()
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_input_shape() {
        assert!(check_input_shape(&Array3::zeros((1, 7, 1))).is_ok());
        assert!(check_input_shape(&Array3::zeros((1, 6, 1))).is_err());
        assert!(check_input_shape(&Array3::zeros((7, 1, 1))).is_err());
    }
}
