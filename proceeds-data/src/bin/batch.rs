use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use proceeds_core::compute;
use proceeds_data::{ResultRow, ScenarioLoader, write_results};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Compute net proceeds for every scenario in a CSV file.
///
/// The input CSV has an optional `name` column, one column per cost input
/// (e.g. `sale_price`, `mortgage_payoff`, `agent_commission_percent`) and an
/// optional `closing_costs_mode` column (`percent` or `currency`). Results are
/// written as CSV to stdout or to `--output`.
#[derive(Parser, Debug)]
#[command(name = "proceeds-batch")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the CSV file containing scenarios
    #[arg(short, long)]
    file: PathBuf,

    /// Where to write the results CSV (stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Logs go to stderr so the results CSV can be piped from stdout.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();

    info!("loading scenarios from {}", args.file.display());

    let file = File::open(&args.file)
        .with_context(|| format!("Failed to open: {}", args.file.display()))?;

    let scenarios = ScenarioLoader::parse(file)
        .with_context(|| format!("Failed to parse CSV: {}", args.file.display()))?;

    info!("parsed {} scenarios", scenarios.len());

    let rows: Vec<ResultRow> = scenarios
        .iter()
        .map(|scenario| {
            let result = compute(&scenario.inputs, scenario.mode);
            debug!(name = %scenario.name, net_proceeds = %result.net_proceeds, "scenario computed");
            ResultRow::new(scenario, &result)
        })
        .collect();

    let written = match &args.output {
        Some(path) => {
            let out = File::create(path)
                .with_context(|| format!("Failed to create: {}", path.display()))?;
            write_results(out, &rows)
                .with_context(|| format!("Failed to write results: {}", path.display()))?
        }
        None => write_results(io::stdout().lock(), &rows).context("Failed to write results")?,
    };

    info!("wrote {} result rows", written);

    Ok(())
}
