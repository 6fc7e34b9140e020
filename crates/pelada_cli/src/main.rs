//! Pelada CLI
//!
//! Balances a roster file into two teams and prints the result as JSON.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use pelada_core::api::{
    balance_request_schema, balance_response_schema, config_from_env, BalanceRequest,
    BalanceResponse,
};
use pelada_core::{Algorithm, BalancerConfig, Player, TeamBalancer};
use rand::Rng;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Parser)]
#[command(name = "pelada")]
#[command(about = "Split a pickup-soccer roster into two balanced teams", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Balance a roster file
    Balance {
        /// JSON file: an array of players or a full balance request
        #[arg(long)]
        roster: PathBuf,

        /// GENETIC (greedy split) or SIMULATED_ANNEALING
        #[arg(long)]
        algorithm: Option<Algorithm>,

        /// Seed for a replayable draw
        #[arg(long)]
        seed: Option<u64>,

        /// Balancer config JSON (falls back to PELADA_BALANCER_CONFIG_PATH)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Pretty-print the output
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Print the JSON Schema of the balance request or response
    Schema {
        #[arg(value_enum, default_value = "request")]
        kind: SchemaKind,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum SchemaKind {
    Request,
    Response,
}

/// A roster file holds either a bare player list or a whole request.
#[derive(Deserialize)]
#[serde(untagged)]
enum RosterFile {
    Players(Vec<Player>),
    Request(BalanceRequest),
}

impl RosterFile {
    fn into_request(self) -> BalanceRequest {
        match self {
            RosterFile::Players(players) => {
                BalanceRequest { players, algorithm: Algorithm::default(), seed: None }
            }
            RosterFile::Request(request) => request,
        }
    }
}

fn read_roster(path: &Path) -> Result<BalanceRequest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file {}", path.display()))?;
    let file: RosterFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse roster file {}", path.display()))?;
    Ok(file.into_request())
}

fn load_config(path: Option<&Path>) -> Result<BalancerConfig> {
    match path {
        Some(path) => BalancerConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => config_from_env().context("Failed to load config from environment"),
    }
}

fn run_balance(
    roster: &Path,
    algorithm: Option<Algorithm>,
    seed: Option<u64>,
    config: Option<&Path>,
) -> Result<BalanceResponse> {
    let mut request = read_roster(roster)?;
    if let Some(algorithm) = algorithm {
        request.algorithm = algorithm;
    }
    let seed = seed.or(request.seed).unwrap_or_else(|| rand::thread_rng().gen());

    let balancer = TeamBalancer::new(load_config(config)?)?;
    info!(
        "Balancing {} players from {} with {} (seed {})",
        request.players.len(),
        roster.display(),
        request.algorithm,
        seed
    );

    let result = balancer.balance_seeded(&request.players, request.algorithm, seed)?;
    Ok(BalanceResponse { result, seed })
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let out =
        if pretty { serde_json::to_string_pretty(value)? } else { serde_json::to_string(value)? };
    println!("{}", out);
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Balance { roster, algorithm, seed, config, pretty } => {
            let response = run_balance(&roster, algorithm, seed, config.as_deref())?;
            print_json(&response, pretty)?;
        }
        Commands::Schema { kind } => {
            let schema = match kind {
                SchemaKind::Request => balance_request_schema(),
                SchemaKind::Response => balance_response_schema(),
            };
            print_json(&schema, true)?;
        }
    }

    Ok(())
}
