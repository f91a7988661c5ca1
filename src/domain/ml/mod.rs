pub mod scaler;

pub use scaler::{FittedScaler, Scaler};
