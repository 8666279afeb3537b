//! CLI error types.

use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Error, Debug)]
pub enum CliError {
    /// The estimator rejected the configuration.
    #[error("configuration error: {0}")]
    Config(#[from] perc_sim::mc::ConfigError),
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
