use anyhow::{Context, Result};
use ewma::config::{DemoConfig, build_stream, load_config};
use ewma::tasks::{DemoReport, SmoothingTask};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match std::env::args().nth(1).as_deref() {
        Some("--schema") => {
            println!("{}", serde_json::to_string_pretty(&DemoConfig::schema())?);
            return Ok(());
        }
        Some(path) => {
            load_config(path).with_context(|| format!("failed to load config from {path}"))?
        }
        None => DemoConfig::default(),
    };
    config.validate()?;

    let values = config.samples().context("failed to read samples")?;
    let report = DemoReport::run(&values, config.alpha.value(), &config.sweep_values())
        .context("failed to smooth samples")?;
    println!("{report}");

    let mut task = SmoothingTask::new(
        Box::new(config.build_estimator()),
        build_stream(config.stream.clone())?,
        config.max_samples,
        config.sample_frequency,
    )?;
    task.run()?;

    if let Some(output) = &config.output {
        task.curve()
            .export(&output.path, output.format)
            .with_context(|| format!("failed to export curve to {}", output.path))?;
        info!(
            path = %output.path,
            format = %output.format,
            rows = task.curve().len(),
            "curve exported"
        );
    }

    Ok(())
}
