//! Offline forecast CLI
//!
//! Runs the same engine as `POST /api/predict` without a server or storage.
//!
//! ```sh
//! cargo run --bin forecast -- --method ema --window 3 10 20 30
//! cargo run --bin forecast -- --csv sales.csv --window 7
//! ```

use anyhow::{Context, Result, bail};
use clap::Parser;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use tracing::{Level, info};
use umkm_forecast::domain::forecasting::{self, DEFAULT_WINDOW};
use umkm_forecast::interfaces::dto::PredictResponse;

#[derive(Parser)]
#[command(author, version, about = "Predict the next revenue value of a series", long_about = None)]
struct Cli {
    /// Forecasting method (sma, ema)
    #[arg(short, long, default_value = "sma")]
    method: String,

    /// Window size (SMA trailing points, EMA default alpha)
    #[arg(short, long, default_value_t = DEFAULT_WINDOW, allow_negative_numbers = true)]
    window: i64,

    /// EMA smoothing factor, overrides the window-derived one
    #[arg(short, long)]
    alpha: Option<f64>,

    /// Sales CSV export; its `revenue` column is the series
    #[arg(long, conflicts_with = "values")]
    csv: Option<PathBuf>,

    /// Series values, oldest first
    #[arg(allow_negative_numbers = true)]
    values: Vec<f64>,
}

#[derive(Debug, Deserialize)]
struct RevenueRow {
    revenue: Option<f64>,
}

fn read_revenue_csv(path: &Path) -> Result<Vec<Option<f64>>> {
    let file = File::open(path).with_context(|| format!("Failed to open {:?}", path))?;
    let mut rdr = csv::Reader::from_reader(BufReader::new(file));

    let mut series = Vec::new();
    for result in rdr.deserialize() {
        let row: RevenueRow = result.context("Malformed CSV row")?;
        series.push(row.revenue);
    }
    Ok(series)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let series = match &cli.csv {
        Some(path) => read_revenue_csv(path)?,
        None => cli.values.iter().copied().map(Some).collect(),
    };
    if series.is_empty() {
        bail!("No values given. Pass numbers or --csv <FILE>.");
    }
    info!("Loaded {} points", series.len());

    let forecast = forecasting::predict(&series, &cli.method, cli.window, cli.alpha)?;
    let response = PredictResponse {
        predicted: forecast.predicted,
        method: forecast.method,
        window: cli.window,
        saved_id: None,
    };
    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
