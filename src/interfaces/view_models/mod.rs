pub mod forecast_view_model;

pub use forecast_view_model::{ForecastViewModel, TechnicalDetails};
