use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod config;
mod workflow;

/// Resolves the encounters described by a scenario file against a roster of organisms.
#[derive(Debug, Parser)]
#[command(name = "foodweb", version, about)]
struct Cli {
    /// Directory of YAML roster files.
    #[arg(long, default_value = "foodweb-app/data/roster")]
    roster: PathBuf,

    /// Scenario file listing pairs and series to run.
    #[arg(long, default_value = "foodweb-app/data/scenario.yaml")]
    scenario: PathBuf,

    /// Directory under which a timestamped run directory is created.
    #[arg(long, default_value = "./data/runs")]
    output: PathBuf,

    /// Skip the per-series CSV encounter logs.
    #[arg(long)]
    no_log: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("foodweb=info")),
        )
        .init();

    let cli = Cli::parse();
    println!("--- Foodweb Encounter Runner ---");

    let roster = config::Roster::load(&cli.roster)?;
    let scenario = config::load_scenario(&cli.scenario)?;
    config::validate_scenario(&scenario, &roster)?;
    tracing::info!(
        pairs = scenario.pairs.len(),
        series = scenario.series.len(),
        schema_version = %scenario.schema_version,
        "scenario validated"
    );

    let output_dir = cli
        .output
        .join(format!("run_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S")));
    fs::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory: {:?}", output_dir))?;

    // Copy the scenario file to the output directory for traceability
    fs::copy(&cli.scenario, output_dir.join("scenario.yaml"))?;

    let pairs = workflow::run_pairs(&scenario.pairs, &roster)?;
    let log_dir = (!cli.no_log).then_some(output_dir.as_path());
    let series = workflow::run_series(&scenario, &roster, log_dir)?;

    let summary = workflow::RunSummary { pairs, series };
    workflow::write_summary(&summary, &output_dir)?;
    workflow::print_summary_report(&summary);

    println!("\nRun complete. Results are in {:?}", output_dir);

    Ok(())
}
