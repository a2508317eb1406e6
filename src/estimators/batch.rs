use crate::estimators::{Ewma, EwmaError};

/// Smooths `values` with a fresh [`Ewma`] and returns one output per input.
///
/// `result[i]` is what `update` returns after feeding `values[0..=i]` to a
/// newly created estimator. Empty input, an invalid `alpha` or a non-finite
/// element fail the whole call; no partial output is produced.
pub fn calculate_array(values: &[f64], alpha: f64) -> Result<Vec<f64>, EwmaError> {
    if values.is_empty() {
        return Err(EwmaError::InvalidParameter("values must not be empty".to_string()));
    }

    let mut ewma = Ewma::new(alpha)?;
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            ewma.update(v).map_err(|_| {
                EwmaError::InvalidParameter(format!("values[{i}] is not finite ({v})"))
            })
        })
        .collect()
}

/// Same as [`calculate_array`], writing into a caller-provided buffer.
///
/// `out` must be exactly as long as `values`; it is left untouched on error.
pub fn calculate_into(values: &[f64], alpha: f64, out: &mut [f64]) -> Result<(), EwmaError> {
    if out.len() != values.len() {
        return Err(EwmaError::InvalidParameter(format!(
            "output buffer holds {} values, expected {}",
            out.len(),
            values.len()
        )));
    }
    let smoothed = calculate_array(values, alpha)?;
    out.copy_from_slice(&smoothed);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn concrete_scenario() {
        let got = calculate_array(&[2.0, 4.0, 4.0], 0.3).unwrap();
        let want = [2.0, 2.6, 3.02];
        assert_eq!(got.len(), want.len());
        for (g, w) in got.iter().zip(want) {
            assert!((g - w).abs() < 1e-9, "got={g} want={w}");
        }
    }

    #[test]
    fn matches_step_by_step_updates() {
        let mut rng = StdRng::seed_from_u64(2025);
        for _ in 0..20 {
            let n = rng.random_range(1..64);
            let values: Vec<f64> = (0..n).map(|_| rng.random_range(-1e3..1e3)).collect();
            let alpha = rng.random_range(0.001..=1.0);

            let batch = calculate_array(&values, alpha).unwrap();
            assert_eq!(batch.len(), values.len());

            for i in 0..values.len() {
                let mut fresh = Ewma::new(alpha).unwrap();
                let mut last = 0.0;
                for &v in &values[..=i] {
                    last = fresh.update(v).unwrap();
                }
                assert_eq!(batch[i], last, "index {i}");
            }
        }
    }

    #[test]
    fn empty_input_is_rejected() {
        assert!(matches!(
            calculate_array(&[], 0.3),
            Err(EwmaError::InvalidParameter(_))
        ));
    }

    #[test]
    fn invalid_alpha_is_rejected() {
        for alpha in [0.0, -0.2, 1.5] {
            assert!(calculate_array(&[1.0, 2.0], alpha).is_err());
        }
    }

    #[test]
    fn non_finite_element_fails_whole_batch() {
        let err = calculate_array(&[1.0, f64::NAN, 3.0], 0.5).unwrap_err();
        assert_eq!(
            err,
            EwmaError::InvalidParameter("values[1] is not finite (NaN)".to_string())
        );
    }

    #[test]
    fn calculate_into_fills_buffer() {
        let mut out = [0.0; 3];
        calculate_into(&[2.0, 4.0, 4.0], 0.5, &mut out).unwrap();
        assert_eq!(out, [2.0, 3.0, 3.5]);
    }

    #[test]
    fn calculate_into_leaves_buffer_untouched_on_error() {
        let mut out = [-1.0; 3];
        assert!(calculate_into(&[1.0, 2.0], 0.5, &mut out).is_err());
        assert!(calculate_into(&[1.0, 2.0, 3.0], 0.0, &mut out).is_err());
        assert!(calculate_into(&[1.0, f64::INFINITY, 3.0], 0.5, &mut out).is_err());
        assert_eq!(out, [-1.0; 3]);

        let mut empty: [f64; 0] = [];
        assert!(calculate_into(&[], 0.5, &mut empty).is_err());
    }
}
