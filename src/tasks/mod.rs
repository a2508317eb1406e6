mod alpha_sweep;
mod demo_report;
mod smoothing_task;

pub use alpha_sweep::{AlphaSweep, SweepSeries};
pub use demo_report::{DEMO_ALPHA, DEMO_SERIES, DEMO_SWEEP_ALPHAS, DemoReport};
pub use smoothing_task::SmoothingTask;
