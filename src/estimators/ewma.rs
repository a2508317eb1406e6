use crate::estimators::{Estimator, EwmaError, SmoothingFactor};

/// Whether the filter has been seeded by a first sample.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EwmaState {
    #[default]
    Empty,
    Seeded(f64),
}

/// Exponentially weighted moving average.
///
/// The first sample seeds the filter unchanged; every later sample `x`
/// moves the running value `v` to `alpha * x + (1 - alpha) * v`, so the new
/// value always lies between `v` and `x`.
///
/// Holds no history: one `f64` of state plus the smoothing factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ewma {
    alpha: SmoothingFactor,
    state: EwmaState,
}

impl Ewma {
    /// Creates an empty estimator. Fails unless `0 < alpha <= 1`.
    pub fn new(alpha: f64) -> Result<Self, EwmaError> {
        SmoothingFactor::new(alpha).map(Self::with_factor)
    }

    /// Creates an empty estimator from an already validated factor.
    pub fn with_factor(alpha: SmoothingFactor) -> Self {
        Self {
            alpha,
            state: EwmaState::Empty,
        }
    }

    /// Folds `sample` into the average and returns the new value.
    ///
    /// Non-finite samples are rejected and leave the estimator untouched.
    pub fn update(&mut self, sample: f64) -> Result<f64, EwmaError> {
        if !sample.is_finite() {
            return Err(EwmaError::InvalidParameter(format!(
                "sample must be finite, got {sample}"
            )));
        }

        let next = match self.state {
            EwmaState::Empty => sample,
            EwmaState::Seeded(v) => {
                let a = self.alpha.value();
                // rounding may land one ulp outside the step; keep it inside
                (a * sample + (1.0 - a) * v).clamp(v.min(sample), v.max(sample))
            }
        };
        self.state = EwmaState::Seeded(next);
        Ok(next)
    }

    /// Current average, or `0.0` while no sample has been seen.
    ///
    /// Use [`current`](Self::current) to tell "empty" apart from a genuine zero.
    #[inline]
    pub fn value(&self) -> f64 {
        self.current().unwrap_or(0.0)
    }

    /// Current average, or `None` while no sample has been seen.
    #[inline]
    pub fn current(&self) -> Option<f64> {
        match self.state {
            EwmaState::Empty => None,
            EwmaState::Seeded(v) => Some(v),
        }
    }

    /// Current average, or [`EwmaError::NotInitialized`] while empty.
    pub fn try_value(&self) -> Result<f64, EwmaError> {
        self.current().ok_or(EwmaError::NotInitialized)
    }

    #[inline]
    pub fn is_seeded(&self) -> bool {
        matches!(self.state, EwmaState::Seeded(_))
    }

    #[inline]
    pub fn state(&self) -> EwmaState {
        self.state
    }

    #[inline]
    pub fn alpha(&self) -> SmoothingFactor {
        self.alpha
    }

    /// Drops the running value; the smoothing factor is kept.
    pub fn reset(&mut self) {
        self.state = EwmaState::Empty;
    }
}

impl Estimator for Ewma {
    #[inline]
    fn add(&mut self, v: f64) {
        // update only fails on non-finite input, which estimators skip
        let _ = self.update(v);
    }

    #[inline]
    fn estimation(&self) -> f64 {
        self.current().unwrap_or(f64::NAN)
    }

    fn reset(&mut self) {
        Ewma::reset(self);
    }
}
