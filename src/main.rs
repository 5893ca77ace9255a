use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use registrar::destination::Destination;
use registrar::ui::UiMode;

mod cmd;

#[derive(Parser)]
#[command(name = "registrar")]
#[command(version, about = "Company registration wizard for the tenant provisioning backend")]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Walk through the registration steps and submit a new company
    Register {
        /// Destination environment the registration is sent to
        #[arg(short, long, value_enum)]
        destination: Option<Destination>,

        /// Read a completed payload from a JSON file instead of prompting
        #[arg(long)]
        input: Option<PathBuf>,

        /// Output mode for the submission progress
        #[arg(long, value_enum, default_value = "full")]
        ui: UiMode,
    },
    /// List the configured destination environments
    Destinations,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Register { destination, input, ui } => {
            cmd::cmd_register(*destination, input.as_deref(), *ui).await?;
        }
        Commands::Destinations => cmd::cmd_destinations(),
    }

    Ok(())
}
