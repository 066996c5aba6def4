//! WattWise CLI — the main entry point.
//!
//! Commands:
//! - `recommend` — Request an HVAC recommendation for a room
//! - `doctor`   — Diagnose endpoint and credential-store health

use clap::{Parser, Subcommand};

mod commands;
mod credentials;

#[derive(Parser)]
#[command(
    name = "wattwise",
    about = "WattWise — tier-aware HVAC recommendations from a local LLM",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Request an HVAC recommendation for the current room state
    Recommend(commands::recommend::RecommendArgs),

    /// Diagnose endpoint and credential-store health
    Doctor,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    match cli.command {
        Commands::Recommend(args) => commands::recommend::run(args).await,
        Commands::Doctor => commands::doctor::run().await,
    }
}
