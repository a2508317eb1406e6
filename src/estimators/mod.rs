mod batch;
mod error;
mod estimator;
mod ewma;
mod smoothing_factor;

pub use batch::{calculate_array, calculate_into};
pub use error::EwmaError;
pub use estimator::Estimator;
pub use ewma::{Ewma, EwmaState};
pub use smoothing_factor::SmoothingFactor;
