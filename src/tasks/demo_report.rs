use crate::estimators::{Ewma, EwmaError, SmoothingFactor, calculate_array};
use crate::tasks::{AlphaSweep, SweepSeries};
use std::fmt::{Display, Formatter, Result};

/// Sparse signal: a near-zero baseline interrupted by large spikes.
pub const DEMO_SERIES: [f64; 22] = [
    0.000721, 0.000721, 13.0, 0.000721, 11.0, 0.000721, 0.000721, 0.000721, 17.0, 0.000721,
    0.000721, 0.000721, 0.000721, 13.3, 15.4, 0.000721, 0.000721, 0.000721, 17.5, 2.4, 0.000721,
    0.000721,
];

pub const DEMO_ALPHA: f64 = 0.3;

pub const DEMO_SWEEP_ALPHAS: [f64; 3] = [0.1, 0.3, 0.7];

/// Side-by-side view of one series smoothed three ways: sample by sample,
/// through the batch helper, and across a sweep of smoothing factors.
#[derive(Debug, Clone)]
pub struct DemoReport {
    values: Vec<f64>,
    alpha: SmoothingFactor,
    step_by_step: Vec<f64>,
    batch: Vec<f64>,
    sweep: Vec<SweepSeries>,
}

impl DemoReport {
    pub fn run(
        values: &[f64],
        alpha: f64,
        sweep_alphas: &[f64],
    ) -> std::result::Result<Self, EwmaError> {
        let mut ewma = Ewma::new(alpha)?;
        let step_by_step = values
            .iter()
            .map(|&v| ewma.update(v))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let batch = calculate_array(values, alpha)?;
        let sweep = AlphaSweep::new(sweep_alphas)?.run(values)?;

        Ok(Self {
            values: values.to_vec(),
            alpha: ewma.alpha(),
            step_by_step,
            batch,
            sweep,
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }
    pub fn alpha(&self) -> SmoothingFactor {
        self.alpha
    }
    pub fn step_by_step(&self) -> &[f64] {
        &self.step_by_step
    }
    pub fn batch(&self) -> &[f64] {
        &self.batch
    }
    pub fn sweep(&self) -> &[SweepSeries] {
        &self.sweep
    }
}

impl Display for DemoReport {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "EWMA smoothing")?;
        writeln!(f, "==============")?;
        writeln!(f)?;

        write!(f, "Samples:")?;
        for v in &self.values {
            write!(f, " {v:.7}")?;
        }
        writeln!(f)?;
        writeln!(f, "Alpha: {:.2}", self.alpha.value())?;
        writeln!(f)?;

        writeln!(f, "Incremental updates:")?;
        for (v, s) in self.values.iter().zip(&self.step_by_step) {
            writeln!(f, "{v:>12.7}\t{s:>7.3}")?;
        }
        writeln!(f)?;

        writeln!(f, "Batch:")?;
        for (i, (v, s)) in self.values.iter().zip(&self.batch).enumerate() {
            writeln!(f, "[{i:>2}] sample={v:>5.1}\tewma={s:>7.3}")?;
        }

        for series in &self.sweep {
            writeln!(f)?;
            writeln!(f, "Alpha = {:.1}:", series.alpha.value())?;
            for (v, s) in self.values.iter().zip(&series.outputs) {
                writeln!(f, "{v:>5.1},{s:>7.3}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incremental_and_batch_agree_on_demo_series() {
        let r = DemoReport::run(&DEMO_SERIES, DEMO_ALPHA, &DEMO_SWEEP_ALPHAS).unwrap();
        assert_eq!(r.step_by_step(), r.batch());
        assert_eq!(r.batch().len(), DEMO_SERIES.len());
        assert_eq!(r.sweep().len(), 3);
        assert_eq!(r.sweep()[1].outputs, r.batch());
    }

    #[test]
    fn demo_series_is_smoothed_below_spikes() {
        let r = DemoReport::run(&DEMO_SERIES, DEMO_ALPHA, &DEMO_SWEEP_ALPHAS).unwrap();
        assert_eq!(r.batch()[0], 0.000721);
        // 0.3 * 13 + 0.7 * 0.000721
        assert!((r.batch()[2] - 3.9005047).abs() < 1e-9);
        let max = r.batch().iter().cloned().fold(f64::MIN, f64::max);
        assert!(max < 17.5);
    }

    #[test]
    fn rendering_contains_every_section() {
        let r = DemoReport::run(&[2.0, 4.0, 4.0], 0.3, &[0.1, 0.7]).unwrap();
        let text = r.to_string();
        assert!(text.starts_with("EWMA smoothing\n"));
        assert!(text.contains("Alpha: 0.30\n"));
        assert!(text.contains("Incremental updates:\n"));
        assert!(text.contains("[ 1] sample=  4.0\tewma=  2.600\n"));
        assert!(text.contains("[ 2] sample=  4.0\tewma=  3.020\n"));
        assert!(text.contains("Alpha = 0.1:\n"));
        assert!(text.contains("Alpha = 0.7:\n"));
    }

    #[test]
    fn invalid_inputs_surface_errors() {
        assert!(DemoReport::run(&[], 0.3, &[0.1]).is_err());
        assert!(DemoReport::run(&[1.0], 0.0, &[0.1]).is_err());
        assert!(DemoReport::run(&[1.0], 0.3, &[]).is_err());
        assert!(DemoReport::run(&[1.0, f64::NAN], 0.3, &[0.1]).is_err());
    }
}
