use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub samples_seen: u64,
    pub sample: f64,
    pub smoothed: f64,
}

impl Display for Snapshot {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "seen={}, sample={:.7}, ewma={:.3}",
            self.samples_seen, self.sample, self.smoothed
        )
    }
}
