//! Hawking - pair entanglement entropy simulator
//! Command-line interface for the fixed-schedule and continuous-emission runs
//!
//! ## Environment Variables
//! - `HAWKING_SEED`: generator seed (default: system entropy)
//! - `HAWKING_ANGLE_SCALE`: rotation coefficient k1 (default: 0.1)
//! - `HAWKING_PHASE_SCALE`: interaction coefficient k2 (default: 0.2)
//! - `HAWKING_EMISSION_RATE`: emission probability per step (default: 0.5)
//! - `HAWKING_MAX_QUBITS`: register size limit (default: 24)
//! - `RUST_LOG`: log filter (default: hawking=info); logs go to stderr

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use colored::*;
use hawking_evolution::{EntropyEvolutionDriver, EntropyRecord, EvolutionParameters, entropy_values};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "hawking")]
#[command(author, version)]
#[command(about = "Hawking pair entanglement entropy simulator", long_about = None)]
struct Cli {
    #[command(flatten)]
    options: GlobalOptions,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct GlobalOptions {
    /// Generator seed
    #[arg(long, global = true, env = "HAWKING_SEED")]
    seed: Option<u64>,

    /// Rotation coefficient: angle = k1 * t
    #[arg(long, global = true, env = "HAWKING_ANGLE_SCALE")]
    angle_scale: Option<f64>,

    /// Interaction coefficient: phase = k2 * u
    #[arg(long, global = true, env = "HAWKING_PHASE_SCALE")]
    phase_scale: Option<f64>,

    /// Register size limit in qubits
    #[arg(long, global = true, env = "HAWKING_MAX_QUBITS")]
    max_qubits: Option<usize>,

    /// Print tagged records instead of bare entropy values
    #[arg(long, global = true, default_value_t = false)]
    records: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// One entropy per pair count n = 1..=N, fresh register each time
    Fixed {
        /// Largest number of pairs
        #[arg(short = 'n', long, value_name = "N")]
        max_pairs: usize,

        /// Evolution rounds per pair count
        #[arg(short, long, value_name = "T", default_value_t = 0)]
        timesteps: usize,
    },

    /// One entropy per timestep, pairs emitted at random
    Continuous {
        /// Number of timesteps
        #[arg(short = 't', long, value_name = "T")]
        total_time: usize,

        /// Emission probability per step
        #[arg(short, long, value_name = "P", env = "HAWKING_EMISSION_RATE")]
        emission_rate: Option<f64>,
    },
}

fn main() {
    // `.env` antes do parse para alimentar os fallbacks de ambiente do clap
    let defaults = EvolutionParameters::from_env();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hawking=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli, defaults) {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli, defaults: EvolutionParameters) -> anyhow::Result<()> {
    let mut params = resolve_parameters(&cli.options, defaults);
    if let Commands::Continuous {
        emission_rate: Some(rate),
        ..
    } = cli.command
    {
        params.emission_rate = rate;
    }
    tracing::debug!(?params, "resolved parameters");

    let mut driver = EntropyEvolutionDriver::new(params).context("invalid configuration")?;
    let emission_rate = driver.params().emission_rate;

    let records = match cli.command {
        Commands::Fixed { max_pairs, timesteps } => driver
            .run_fixed_schedule_with(max_pairs, timesteps, |_| std::ops::ControlFlow::Continue(()))
            .context("fixed-schedule run failed")?,
        Commands::Continuous { total_time, .. } => driver
            .run_continuous_emission_with(total_time, emission_rate, |_| {
                std::ops::ControlFlow::Continue(())
            })
            .context("continuous-emission run failed")?,
    };

    println!("{}", render(&records, cli.options.records)?);
    Ok(())
}

/// Flags da linha de comando sobrescrevem o ambiente
fn resolve_parameters(options: &GlobalOptions, defaults: EvolutionParameters) -> EvolutionParameters {
    EvolutionParameters {
        angle_scale: options.angle_scale.unwrap_or(defaults.angle_scale),
        phase_scale: options.phase_scale.unwrap_or(defaults.phase_scale),
        max_qubits: options.max_qubits.unwrap_or(defaults.max_qubits),
        seed: options.seed.or(defaults.seed),
        ..defaults
    }
}

fn render(records: &[EntropyRecord], tagged: bool) -> anyhow::Result<String> {
    let json = if tagged {
        serde_json::to_string(records)?
    } else {
        serde_json::to_string(&entropy_values(records))?
    };
    Ok(json)
}
