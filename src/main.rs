// src/main.rs
mod alerts;
mod config;
mod error;
mod indicators;
mod macd;
mod report;
mod writer;

use anyhow::Result;
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::alerts::CrossoverAlerter;
use crate::config::AppConfig;
use crate::report::{ReportInputs, assemble_report};

#[derive(Parser, Debug)]
struct Cli {
    /// output CSV path, overrides report.output_file from the config
    #[arg(long)]
    output: Option<String>,

    /// number of sample points to generate, overrides report.sample_size
    #[arg(long)]
    samples: Option<usize>,

    /// seed for the sample-data generator (entropy-seeded when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// omit the close series, and with it the MACD columns and alerts
    #[arg(long, default_value_t = false)]
    skip_macd: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let cfg = AppConfig::new()?;
    let settings = cfg.indicator.validated()?;

    info!("Starting {} ({})", cfg.name, cfg.environment);

    let samples = cli.samples.unwrap_or(cfg.report.sample_size);
    let output = cli.output.unwrap_or_else(|| cfg.report.output_file.clone());

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let data = generate_sample_data(&mut rng, samples);

    info!("Computing TEMA/MACD report over {} sample points", samples);

    let inputs = ReportInputs {
        high: &data.high,
        low: &data.low,
        up: &data.up,
        down: &data.down,
        close: (!cli.skip_macd).then_some(data.close.as_slice()),
    };
    let report = assemble_report(inputs, &settings)?;

    if let Some(close) = inputs.close {
        let alerter = CrossoverAlerter::new(&settings, &cfg.alerts);
        alerter.evaluate(close)?;
    }

    writer::write_report(&report, &output)?;
    Ok(())
}

struct SampleData {
    high: Vec<f64>,
    low: Vec<f64>,
    up: Vec<f64>,
    down: Vec<f64>,
    close: Vec<f64>,
}

/// generate a random-walk close with highs/lows around it, plus uniform
/// up/down series (stand-ins for real market data)
fn generate_sample_data(rng: &mut impl Rng, n: usize) -> SampleData {
    let mut high = Vec::with_capacity(n);
    let mut low = Vec::with_capacity(n);
    let mut up = Vec::with_capacity(n);
    let mut down = Vec::with_capacity(n);
    let mut close = Vec::with_capacity(n);

    let mut price = 100.0 + rng.gen_range(-5.0..5.0);
    for _ in 0..n {
        // random walk small moves
        price = f64::max(price + rng.gen_range(-1.0..1.0), 0.01);
        high.push(price + rng.gen_range(0.0..2.0));
        low.push(f64::max(price - rng.gen_range(0.0..2.0), 0.01));
        up.push(rng.gen_range(0.0..10.0));
        down.push(rng.gen_range(0.0..10.0));
        close.push(price);
    }

    SampleData {
        high,
        low,
        up,
        down,
        close,
    }
}
