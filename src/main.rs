mod api;
mod cli;
mod config;
mod models;
mod services;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

#[derive(Parser)]
#[command(name = "ouforge")]
#[command(about = "Over/Under predictions for NCAAB, NBA and WNBA games")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the training table from the historical ledger
    Features,
    /// Train the over/under model on the training table
    Train,
    /// Generate predictions for upcoming games
    Predict {
        /// NCAAB, NBA or WNBA; all leagues when omitted
        #[arg(short, long)]
        league: Option<String>,
    },
    /// Show a team's recent form from the ledger
    Team {
        #[arg(short, long)]
        name: String,
    },
    /// Start the API server
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let config = AppConfig::from_env()?;

    match cli.command {
        Some(Commands::Features) => {
            tracing::info!("Building training table...");
            cli::build_features(&config)?;
        }
        Some(Commands::Train) => {
            tracing::info!("Training model...");
            cli::train(&config)?;
        }
        Some(Commands::Predict { league }) => {
            tracing::info!("Generating predictions...");
            cli::generate_predictions(&config, league.as_deref()).await?;
        }
        Some(Commands::Team { name }) => {
            tracing::info!("Querying team: {}", name);
            cli::query_team(&config, &name)?;
        }
        Some(Commands::Serve { port }) => {
            tracing::info!("Starting OUForge API server on port {}", port);
            api::serve(config, port).await?;
        }
        None => {
            // Default to serving
            tracing::info!("Starting OUForge API server on port 3000");
            api::serve(config, 3000).await?;
        }
    }

    Ok(())
}
