use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use tracing::debug;

use drros::report::{render_json, render_report, RunReport};
use drros::telemetry::init_tracing;
use drros::{Scenario, SimulationConfig};

/// Simulate greedy allocation of rescue resources to disaster incidents
#[derive(Parser)]
#[command(name = "drros", version)]
struct Cli {
    /// Path to a TOML or JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for scenario generation
    #[arg(long)]
    seed: Option<u64>,

    /// Number of incidents to generate
    #[arg(long)]
    incidents: Option<usize>,

    /// Number of resources to generate
    #[arg(long)]
    resources: Option<usize>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_json);

    let mut config = SimulationConfig::load(cli.config.as_deref()).context("failed to load configuration")?;
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    if let Some(count) = cli.incidents {
        config.incident_count = count;
    }
    if let Some(count) = cli.resources {
        config.resource_count = count;
    }
    debug!(?config, "configuration resolved");

    let mut scenario = Scenario::generate(&config)?;
    scenario.validate().context("generated scenario is invalid")?;
    let outcome = scenario.allocate();
    let report = RunReport::new(&scenario.incidents, &scenario.resources, &outcome);

    match cli.format {
        OutputFormat::Text => print!("{}", render_report(&report)?),
        OutputFormat::Json => println!("{}", render_json(&report)?),
    }
    Ok(())
}
