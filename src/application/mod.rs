pub mod forecast;
pub mod ml;
