//! Percolate CLI - Command Line Operations for Threshold Estimation
//!
//! This is the operational entry point for the percolation library.
//!
//! # Commands
//!
//! - `percolate estimate <side> <trials>` - Run a Monte Carlo estimation of
//!   the percolation threshold and print summary statistics
//!
//! # Architecture
//!
//! As the service layer of the workspace, this crate orchestrates the
//! engine layer (`perc_sim`) behind a unified command-line interface.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

/// Percolation threshold estimation CLI
#[derive(Parser)]
#[command(name = "percolate")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the percolation threshold on an n-by-n grid
    Estimate {
        /// Grid side length n
        side: usize,

        /// Number of independent trials
        trials: usize,

        /// Seed for reproducible runs
        #[arg(short, long)]
        seed: Option<u64>,

        /// Run trials on the rayon thread pool
        #[arg(short, long)]
        parallel: bool,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Estimate {
            side,
            trials,
            seed,
            parallel,
        } => commands::estimate::run(side, trials, seed, parallel),
    }
}
