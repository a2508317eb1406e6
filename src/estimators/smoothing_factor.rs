use crate::estimators::EwmaError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result};

/// Smoothing factor `alpha` of an exponentially weighted moving average.
///
/// Always lies in `(0, 1]`. Higher values give more weight to recent
/// samples; `1.0` disables smoothing entirely. Serializes as a bare number;
/// deserializing an out-of-range number fails.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct SmoothingFactor(f64);

impl SmoothingFactor {
    pub fn new(alpha: f64) -> std::result::Result<Self, EwmaError> {
        // NaN fails both comparisons, so it is rejected here as well.
        if alpha > 0.0 && alpha <= 1.0 {
            Ok(Self(alpha))
        } else {
            tracing::debug!(alpha, "rejected smoothing factor");
            Err(EwmaError::InvalidParameter(format!("alpha must be in (0, 1], got {alpha}")))
        }
    }

    /// Factor equivalent to an `n`-sample simple moving average: `2 / (n + 1)`.
    pub fn from_span(span: u32) -> std::result::Result<Self, EwmaError> {
        if span == 0 {
            return Err(EwmaError::InvalidParameter("span must be >= 1".to_string()));
        }
        Self::new(2.0 / (f64::from(span) + 1.0))
    }

    /// Factor under which a sample's weight halves every `half_life` updates.
    pub fn from_half_life(half_life: f64) -> std::result::Result<Self, EwmaError> {
        if !half_life.is_finite() || half_life <= 0.0 {
            return Err(EwmaError::InvalidParameter(format!(
                "half_life must be finite and > 0, got {half_life}"
            )));
        }
        Self::new(1.0 - 0.5f64.powf(1.0 / half_life))
    }

    /// Wraps a literal already known to lie in `(0, 1]`.
    pub(crate) fn from_literal(alpha: f64) -> Self {
        debug_assert!(alpha > 0.0 && alpha <= 1.0, "alpha literal out of range");
        Self(alpha)
    }

    #[inline]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Number of samples that carry most of the weight: `(2 - alpha) / alpha`.
    #[inline]
    pub fn effective_window(self) -> f64 {
        (2.0 - self.0) / self.0
    }
}

impl TryFrom<f64> for SmoothingFactor {
    type Error = EwmaError;

    fn try_from(alpha: f64) -> std::result::Result<Self, Self::Error> {
        Self::new(alpha)
    }
}

impl From<SmoothingFactor> for f64 {
    fn from(factor: SmoothingFactor) -> Self {
        factor.0
    }
}

impl Display for SmoothingFactor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_open_closed_unit_interval() {
        assert!(SmoothingFactor::new(1.0).is_ok());
        assert!(SmoothingFactor::new(0.0001).is_ok());
        assert_eq!(SmoothingFactor::new(0.3).unwrap().value(), 0.3);
    }

    #[test]
    fn rejects_out_of_range_and_nan() {
        for alpha in [0.0, -0.2, 1.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = SmoothingFactor::new(alpha).unwrap_err();
            assert!(matches!(err, EwmaError::InvalidParameter(_)), "alpha={alpha} gave {err:?}");
        }
    }

    #[test]
    fn span_maps_to_two_over_n_plus_one() {
        assert_eq!(SmoothingFactor::from_span(1).unwrap().value(), 1.0);
        assert_eq!(SmoothingFactor::from_span(3).unwrap().value(), 0.5);
        let a = SmoothingFactor::from_span(19).unwrap().value();
        assert!((a - 0.1).abs() < 1e-12);
        assert!(SmoothingFactor::from_span(0).is_err());
    }

    #[test]
    fn half_life_halves_weight() {
        assert_eq!(SmoothingFactor::from_half_life(1.0).unwrap().value(), 0.5);

        let a = SmoothingFactor::from_half_life(10.0).unwrap().value();
        let remaining = (1.0 - a).powi(10);
        assert!((remaining - 0.5).abs() < 1e-12);

        assert!(SmoothingFactor::from_half_life(0.0).is_err());
        assert!(SmoothingFactor::from_half_life(-3.0).is_err());
        assert!(SmoothingFactor::from_half_life(f64::NAN).is_err());
    }

    #[test]
    fn effective_window_matches_formula() {
        let f = SmoothingFactor::new(0.2).unwrap();
        assert!((f.effective_window() - 9.0).abs() < 1e-10);
        assert_eq!(SmoothingFactor::new(1.0).unwrap().effective_window(), 1.0);
    }

    #[test]
    fn conversions_round_trip_through_f64() {
        let f = SmoothingFactor::try_from(0.7).unwrap();
        assert_eq!(f64::from(f), 0.7);
        assert_eq!(f.to_string(), "0.7");
        assert!(SmoothingFactor::try_from(2.0).is_err());
    }

    #[test]
    fn serde_uses_bare_number_and_validates() {
        let f: SmoothingFactor = serde_json::from_str("0.3").unwrap();
        assert_eq!(f.value(), 0.3);
        assert_eq!(serde_json::to_string(&f).unwrap(), "0.3");

        for bad in ["0.0", "1.5", "-0.2"] {
            let err = serde_json::from_str::<SmoothingFactor>(bad).unwrap_err();
            assert!(err.to_string().contains("alpha must be in (0, 1]"), "{bad}: {err}");
        }
    }
}
