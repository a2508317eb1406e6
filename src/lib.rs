pub mod config;
pub mod estimators;
pub mod evaluation;
pub mod streams;
pub mod tasks;

pub use estimators::{Estimator, Ewma, EwmaError, EwmaState, SmoothingFactor, calculate_array};
