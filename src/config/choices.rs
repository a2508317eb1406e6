use crate::estimators::SmoothingFactor;
use crate::evaluation::CurveFormat;
use crate::tasks::{DEMO_ALPHA, DEMO_SERIES, DEMO_SWEEP_ALPHAS};
use schemars::{JsonSchema, Schema, schema_for};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumDiscriminants, EnumIter, EnumMessage, EnumString, IntoStaticStr};

const DEFAULT_SEED: u64 = 42;
fn default_seed() -> u64 {
    DEFAULT_SEED
}
fn default_alpha() -> SmoothingFactor {
    SmoothingFactor::from_literal(DEMO_ALPHA)
}
fn default_sweep_alphas() -> Vec<SmoothingFactor> {
    DEMO_SWEEP_ALPHAS
        .iter()
        .map(|&a| SmoothingFactor::from_literal(a))
        .collect()
}
fn default_values() -> Vec<f64> {
    DEMO_SERIES.to_vec()
}
fn default_sample_frequency() -> u64 {
    1
}
fn default_baseline() -> f64 {
    0.000721
}
fn default_spike_probability() -> f64 {
    0.3
}
fn default_spike_min() -> f64 {
    2.0
}
fn default_spike_max() -> f64 {
    17.5
}
fn default_num_samples() -> u64 {
    100
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FixedSeriesParameters {
    #[serde(default = "default_values")]
    #[schemars(
        title = "Values",
        description = "Samples to smooth, in arrival order",
        default = "default_values"
    )]
    pub values: Vec<f64>,
}
impl Default for FixedSeriesParameters {
    fn default() -> Self {
        Self {
            values: default_values(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SpikeParameters {
    #[serde(default = "default_baseline")]
    #[schemars(
        title = "Baseline",
        description = "Value emitted between spikes",
        default = "default_baseline"
    )]
    pub baseline: f64,

    #[serde(default = "default_spike_probability")]
    #[schemars(
        title = "Spike probability",
        description = "Chance that a sample is a spike (0.0–1.0)",
        range(min = 0.0, max = 1.0),
        default = "default_spike_probability"
    )]
    pub spike_probability: f64,

    #[serde(default = "default_spike_min")]
    #[schemars(
        title = "Spike minimum",
        description = "Lower bound of spike values",
        default = "default_spike_min"
    )]
    pub spike_min: f64,

    #[serde(default = "default_spike_max")]
    #[schemars(
        title = "Spike maximum",
        description = "Upper bound of spike values",
        default = "default_spike_max"
    )]
    pub spike_max: f64,

    #[serde(default = "default_num_samples")]
    #[schemars(
        title = "Samples",
        description = "Number of samples to generate",
        range(min = 1),
        default = "default_num_samples"
    )]
    pub num_samples: u64,

    #[serde(default = "default_seed")]
    #[schemars(title = "Seed", description = "PRNG seed", default = "default_seed")]
    pub seed: u64,
}
impl Default for SpikeParameters {
    fn default() -> Self {
        Self {
            baseline: default_baseline(),
            spike_probability: default_spike_probability(),
            spike_min: default_spike_min(),
            spike_max: default_spike_max(),
            num_samples: default_num_samples(),
            seed: default_seed(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, EnumDiscriminants, PartialEq)]
#[serde(tag = "type", content = "params", rename_all = "kebab-case")]
#[strum_discriminants(name(StreamKind))]
#[strum_discriminants(derive(EnumIter, EnumString, Display, IntoStaticStr, EnumMessage))]
#[strum_discriminants(strum(serialize_all = "kebab-case"))]
pub enum StreamChoice {
    #[strum_discriminants(strum(
        message = "Fixed series",
        detailed_message = "Replay a given list of samples."
    ))]
    Fixed(FixedSeriesParameters),
    #[strum_discriminants(strum(
        message = "Spike generator",
        detailed_message = "Seeded baseline signal with random spikes."
    ))]
    Spikes(SpikeParameters),
}
impl Default for StreamChoice {
    fn default() -> Self {
        Self::Fixed(FixedSeriesParameters::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct OutputParameters {
    #[schemars(title = "Path", description = "File the smoothing curve is written to")]
    pub path: String,

    #[serde(default)]
    #[schemars(title = "Format", description = "csv, tsv or json")]
    pub format: CurveFormat,
}

/// Settings for one run of the `ewma` binary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DemoConfig {
    #[serde(default = "default_alpha")]
    #[schemars(
        with = "f64",
        title = "Alpha",
        description = "Smoothing factor in (0, 1]; higher reacts faster",
        range(min = 0.0, max = 1.0),
        default = "default_alpha"
    )]
    pub alpha: SmoothingFactor,

    #[serde(default = "default_sweep_alphas")]
    #[schemars(
        with = "Vec<f64>",
        title = "Sweep alphas",
        description = "Smoothing factors compared side by side",
        default = "default_sweep_alphas"
    )]
    pub sweep_alphas: Vec<SmoothingFactor>,

    #[serde(default)]
    #[schemars(title = "Stream", description = "Where samples come from")]
    pub stream: StreamChoice,

    #[serde(default = "default_sample_frequency")]
    #[schemars(
        title = "Sample frequency",
        description = "Record the running average every N samples",
        range(min = 1),
        default = "default_sample_frequency"
    )]
    pub sample_frequency: u64,

    #[serde(default)]
    #[schemars(
        title = "Max samples",
        description = "Upper bound on samples read; empty = whole stream"
    )]
    pub max_samples: Option<u64>,

    #[serde(default)]
    #[schemars(title = "Output", description = "Optional export of the smoothing curve")]
    pub output: Option<OutputParameters>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            alpha: default_alpha(),
            sweep_alphas: default_sweep_alphas(),
            stream: StreamChoice::default(),
            sample_frequency: default_sample_frequency(),
            max_samples: None,
            output: None,
        }
    }
}

impl DemoConfig {
    pub fn schema() -> Schema {
        schema_for!(DemoConfig)
    }

    pub fn sweep_values(&self) -> Vec<f64> {
        self.sweep_alphas.iter().map(|a| a.value()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::str::FromStr;
    use strum::EnumMessage;

    #[test]
    fn empty_object_applies_all_defaults() {
        let c: DemoConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(c, DemoConfig::default());
        assert_eq!(c.alpha.value(), 0.3);
        assert_eq!(c.sweep_values(), vec![0.1, 0.3, 0.7]);
        assert_eq!(c.sample_frequency, 1);
        assert_eq!(c.stream, StreamChoice::Fixed(FixedSeriesParameters::default()));
    }

    #[test]
    fn tagged_stream_serialization() {
        let choice = StreamChoice::Spikes(SpikeParameters::default());
        let v = serde_json::to_value(choice).unwrap();
        assert_eq!(v.get("type").and_then(Value::as_str), Some("spikes"));
        let params = v.get("params").and_then(Value::as_object).unwrap();
        assert_eq!(params["seed"].as_u64(), Some(42));
        assert_eq!(params["num_samples"].as_u64(), Some(100));
    }

    #[test]
    fn partial_spike_params_fill_in_defaults() {
        let c: DemoConfig = serde_json::from_value(json!({
            "alpha": 0.5,
            "stream": { "type": "spikes", "params": { "seed": 7 } },
            "output": { "path": "curve.tsv", "format": "tsv" }
        }))
        .unwrap();

        assert_eq!(c.alpha.value(), 0.5);
        match c.stream {
            StreamChoice::Spikes(p) => {
                assert_eq!(p.seed, 7);
                assert_eq!(p.spike_max, 17.5);
            }
            other => panic!("unexpected stream {other:?}"),
        }
        let out = c.output.unwrap();
        assert_eq!(out.path, "curve.tsv");
        assert_eq!(out.format, CurveFormat::Tsv);
    }

    #[test]
    fn schema_exposes_alpha_title_and_default() {
        let v = serde_json::to_value(DemoConfig::schema()).unwrap();
        let alpha = &v["properties"]["alpha"];
        assert_eq!(alpha["title"].as_str(), Some("Alpha"));
        assert_eq!(alpha["default"].as_f64(), Some(0.3));
    }

    #[test]
    fn stream_kinds_parse_and_carry_messages() {
        assert_eq!(StreamKind::from_str("spikes").unwrap(), StreamKind::Spikes);
        assert_eq!(StreamKind::Fixed.to_string(), "fixed");
        assert_eq!(StreamKind::Spikes.get_message(), Some("Spike generator"));
        assert_eq!(StreamKind::from(&StreamChoice::default()), StreamKind::Fixed);
    }

    #[test]
    fn out_of_range_alphas_fail_to_deserialize() {
        for bad in [
            json!({ "alpha": 0.0 }),
            json!({ "alpha": 1.5 }),
            json!({ "sweep_alphas": [0.1, 2.0] }),
        ] {
            assert!(serde_json::from_value::<DemoConfig>(bad.clone()).is_err(), "{bad}");
        }

        let c: DemoConfig = serde_json::from_value(json!({ "sweep_alphas": [1.0] })).unwrap();
        assert_eq!(c.sweep_values(), vec![1.0]);
        let back = serde_json::to_value(&c).unwrap();
        assert_eq!(back["alpha"].as_f64(), Some(0.3));
    }
}
