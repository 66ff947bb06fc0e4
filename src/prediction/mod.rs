pub mod cache;
pub mod models;

pub use cache::{Lookup, PredictionCache};
pub use models::{Color, Prediction, Size};
