mod preview;

pub use preview::{CurveFormat, SmoothingCurve, Snapshot};
