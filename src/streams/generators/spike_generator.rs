use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::{Error, ErrorKind};

use crate::streams::SampleStream;

/// Flat baseline signal with occasional spikes.
///
/// Each sample is `baseline`, except with probability `spike_probability`
/// it is drawn uniformly from `[spike_min, spike_max]`. Mirrors the shape of
/// sparse latency or rate metrics where most readings are near zero.
#[derive(Debug)]
pub struct SpikeGenerator {
    seed: u64,
    rng: StdRng,
    baseline: f64,
    spike_probability: f64,
    spike_min: f64,
    spike_max: f64,
    max_samples: Option<usize>,
    produced: usize,
}

impl SpikeGenerator {
    pub fn new(
        baseline: f64,
        spike_probability: f64,
        spike_min: f64,
        spike_max: f64,
        max_samples: Option<usize>,
        seed: u64,
    ) -> Result<Self, Error> {
        if !baseline.is_finite() || !spike_min.is_finite() || !spike_max.is_finite() {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "baseline and spike bounds must be finite",
            ));
        }
        if !(0.0..=1.0).contains(&spike_probability) {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "Spike probability must be in [0, 1]",
            ));
        }
        if spike_min > spike_max {
            return Err(Error::new(
                ErrorKind::InvalidInput,
                "spike_min must not exceed spike_max",
            ));
        }

        Ok(Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            baseline,
            spike_probability,
            spike_min,
            spike_max,
            max_samples,
            produced: 0,
        })
    }

    #[inline]
    fn gen_spike(&mut self) -> f64 {
        if self.spike_min == self.spike_max {
            self.spike_min
        } else {
            self.rng.random_range(self.spike_min..=self.spike_max)
        }
    }
}

impl SampleStream for SpikeGenerator {
    fn has_more_samples(&self) -> bool {
        self.max_samples.map_or(true, |max| self.produced < max)
    }

    fn next_sample(&mut self) -> Option<f64> {
        if !self.has_more_samples() {
            return None;
        }

        let sample = if self.rng.random_bool(self.spike_probability) {
            self.gen_spike()
        } else {
            self.baseline
        };
        self.produced += 1;
        Some(sample)
    }

    fn restart(&mut self) -> Result<(), Error> {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.produced = 0;
        Ok(())
    }
}
