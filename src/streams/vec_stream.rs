use crate::streams::SampleStream;
use std::io::Error;

/// Replays a fixed series of samples.
#[derive(Debug, Clone)]
pub struct VecSampleStream {
    samples: Vec<f64>,
    idx: usize,
}

impl VecSampleStream {
    pub fn new(samples: Vec<f64>) -> Self {
        Self { samples, idx: 0 }
    }

    pub fn samples(&self) -> &[f64] {
        &self.samples
    }
}

impl SampleStream for VecSampleStream {
    fn has_more_samples(&self) -> bool {
        self.idx < self.samples.len()
    }

    fn next_sample(&mut self) -> Option<f64> {
        let v = *self.samples.get(self.idx)?;
        self.idx += 1;
        Some(v)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.idx = 0;
        Ok(())
    }
}
