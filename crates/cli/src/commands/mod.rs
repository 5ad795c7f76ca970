//! Subcommand implementations.

use thiserror::Error;

use mn_roasters_site::RepositoryError;
use mn_roasters_site::config::ConfigError;

pub mod migrate;
pub mod seed;
pub mod stats;

/// Errors that can occur while running a command.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Database operation failed.
    #[error("Database error: {0}")]
    Repository(#[from] RepositoryError),

    /// A destructive command was run without `--yes`.
    #[error("Refusing to {0} without --yes")]
    ConfirmationRequired(&'static str),
}
