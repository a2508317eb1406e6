use crate::estimators::Estimator;
use crate::evaluation::{SmoothingCurve, Snapshot};
use crate::streams::SampleStream;
use std::io::{Error, ErrorKind};
use std::sync::mpsc::Sender;
use tracing::{debug, info, warn};

/// Feeds every sample of a stream into an estimator and records the output.
pub struct SmoothingTask {
    estimator: Box<dyn Estimator>,
    stream: Box<dyn SampleStream>,

    curve: SmoothingCurve,

    max_samples: Option<u64>,
    sample_frequency: u64,

    processed: u64,
    skipped: u64,
    last_sample: f64,

    progress_tx: Option<Sender<Snapshot>>,
}

impl SmoothingTask {
    pub fn new(
        estimator: Box<dyn Estimator>,
        stream: Box<dyn SampleStream>,
        max_samples: Option<u64>,
        sample_frequency: u64,
    ) -> Result<Self, Error> {
        if sample_frequency == 0 {
            return Err(Error::new(ErrorKind::InvalidInput, "sample_frequency must be > 0"));
        }

        Ok(Self {
            estimator,
            stream,
            curve: SmoothingCurve::default(),
            max_samples,
            sample_frequency,
            processed: 0,
            skipped: 0,
            last_sample: f64::NAN,
            progress_tx: None,
        })
    }

    pub fn with_progress(mut self, tx: Sender<Snapshot>) -> Self {
        self.progress_tx = Some(tx);
        self
    }

    pub fn run(&mut self) -> Result<(), Error> {
        while self.stream.has_more_samples() {
            if let Some(n) = self.max_samples {
                if self.processed >= n {
                    break;
                }
            }
            let Some(sample) = self.stream.next_sample() else {
                break;
            };

            if !sample.is_finite() {
                self.skipped += 1;
                warn!(sample, position = self.processed, "skipping non-finite sample");
                continue;
            }

            self.processed += 1;
            self.last_sample = sample;
            self.estimator.add(sample);

            if self.processed % self.sample_frequency == 0 {
                self.push_snapshot();
            }
        }

        // an empty run has no smoothed value to record
        let covered = self.curve.latest().map(|s| s.samples_seen) == Some(self.processed);
        if self.processed > 0 && !covered {
            self.push_snapshot();
        }

        info!(
            processed = self.processed,
            skipped = self.skipped,
            estimate = self.estimator.estimation(),
            "smoothing run finished"
        );
        Ok(())
    }

    /// Clears the estimator and rewinds the stream for another run.
    pub fn restart(&mut self) -> Result<(), Error> {
        debug!(
            processed = self.processed,
            skipped = self.skipped,
            snapshots = self.curve.len(),
            "restarting smoothing run"
        );
        self.stream.restart()?;
        self.estimator.reset();
        self.curve = SmoothingCurve::default();
        self.processed = 0;
        self.skipped = 0;
        self.last_sample = f64::NAN;
        Ok(())
    }

    pub fn curve(&self) -> &SmoothingCurve {
        &self.curve
    }

    pub fn processed(&self) -> u64 {
        self.processed
    }

    pub fn skipped(&self) -> u64 {
        self.skipped
    }

    fn push_snapshot(&mut self) {
        let snapshot = Snapshot {
            samples_seen: self.processed,
            sample: self.last_sample,
            smoothed: self.estimator.estimation(),
        };

        if let Some(tx) = &self.progress_tx {
            let _ = tx.send(snapshot);
        }

        self.curve.push(snapshot);
    }
}
