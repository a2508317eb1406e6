use crate::estimators::{EwmaError, SmoothingFactor, calculate_array};

/// Smoothed outputs of one series under a single smoothing factor.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepSeries {
    pub alpha: SmoothingFactor,
    pub outputs: Vec<f64>,
}

/// Runs the same series through one fresh estimator per smoothing factor.
#[derive(Debug, Clone)]
pub struct AlphaSweep {
    alphas: Vec<SmoothingFactor>,
}

impl AlphaSweep {
    pub fn new(alphas: &[f64]) -> Result<Self, EwmaError> {
        if alphas.is_empty() {
            return Err(EwmaError::InvalidParameter(
                "at least one alpha is required".to_string(),
            ));
        }
        let alphas = alphas
            .iter()
            .map(|&a| SmoothingFactor::new(a))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { alphas })
    }

    pub fn alphas(&self) -> &[SmoothingFactor] {
        &self.alphas
    }

    pub fn run(&self, values: &[f64]) -> Result<Vec<SweepSeries>, EwmaError> {
        self.alphas
            .iter()
            .map(|&alpha| {
                Ok(SweepSeries {
                    alpha,
                    outputs: calculate_array(values, alpha.value())?,
                })
            })
            .collect()
    }
}
