use crate::config::{BuildError, DemoConfig, FixedSeriesParameters, SpikeParameters, StreamChoice};
use crate::estimators::Ewma;
use crate::streams::generators::SpikeGenerator;
use crate::streams::{SampleStream, VecSampleStream};
use crate::tasks::AlphaSweep;
use std::fs;
use std::path::Path;

impl From<FixedSeriesParameters> for VecSampleStream {
    fn from(p: FixedSeriesParameters) -> Self {
        VecSampleStream::new(p.values)
    }
}

impl TryFrom<SpikeParameters> for SpikeGenerator {
    type Error = BuildError;

    fn try_from(p: SpikeParameters) -> Result<Self, Self::Error> {
        let num_samples = usize::try_from(p.num_samples).map_err(|_| {
            BuildError::InvalidParameter("num_samples too large for usize".into())
        })?;

        SpikeGenerator::new(
            p.baseline,
            p.spike_probability,
            p.spike_min,
            p.spike_max,
            Some(num_samples),
            p.seed,
        )
        .map_err(|e| BuildError::InvalidParameter(e.to_string()))
    }
}

pub fn build_stream(choice: StreamChoice) -> Result<Box<dyn SampleStream>, BuildError> {
    match choice {
        StreamChoice::Fixed(p) => Ok(Box::new(VecSampleStream::from(p))),
        StreamChoice::Spikes(p) => {
            let s = SpikeGenerator::try_from(p)?;
            Ok(Box::new(s))
        }
    }
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<DemoConfig, BuildError> {
    let text = fs::read_to_string(path)?;
    let config: DemoConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

impl DemoConfig {
    /// Checks the settings deserialization cannot: sweep and frequency.
    pub fn validate(&self) -> Result<(), BuildError> {
        self.build_sweep()?;
        if self.sample_frequency == 0 {
            return Err(BuildError::InvalidParameter("sample_frequency must be > 0".into()));
        }
        Ok(())
    }

    pub fn build_estimator(&self) -> Ewma {
        Ewma::with_factor(self.alpha)
    }

    pub fn build_sweep(&self) -> Result<AlphaSweep, BuildError> {
        Ok(AlphaSweep::new(&self.sweep_values())?)
    }

    /// Drains the configured stream, honouring `max_samples`.
    pub fn samples(&self) -> Result<Vec<f64>, BuildError> {
        let mut stream = build_stream(self.stream.clone())?;
        let limit = self.max_samples.unwrap_or(u64::MAX);

        let mut out = Vec::new();
        while stream.has_more_samples() && (out.len() as u64) < limit {
            let Some(v) = stream.next_sample() else {
                break;
            };
            out.push(v);
        }
        Ok(out)
    }
}
