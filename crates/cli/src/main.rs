//! MN Roasters CLI - Database migrations and seed data.
//!
//! # Usage
//!
//! ```bash
//! # Create or upgrade the schema
//! mnr-cli migrate
//!
//! # Wipe every table and insert the sample rows (disposable databases only)
//! mnr-cli seed --yes
//!
//! # Show row counts
//! mnr-cli stats
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Reset the database to the fixed sample data
//! - `stats` - Print row counts per table

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mn_roasters_site::config::SiteConfig;

mod commands;

use commands::CommandError;

#[derive(Parser)]
#[command(name = "mnr-cli")]
#[command(author, version, about = "MN Roasters CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Delete all rows and insert the sample data
    Seed {
        /// Confirm that the target database may be wiped
        #[arg(long)]
        yes: bool,

        /// Apply migrations before seeding
        #[arg(long)]
        migrate: bool,
    },
    /// Show row counts for every table
    Stats,
}

/// Initialize tracing with `EnvFilter`.
///
/// Defaults to info level for our crates if `RUST_LOG` is not set. When
/// statement echo is on, sqlx's per-query events are let through as well.
fn init_tracing(echo: bool) {
    let default_filter = if echo {
        "mn_roasters_cli=info,mn_roasters_site=info,sqlx::query=debug"
    } else {
        "mn_roasters_cli=info,mn_roasters_site=info"
    };

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load configuration first so the echo flag can shape the log filter
    let config = SiteConfig::from_env();
    init_tracing(config.as_ref().is_ok_and(|c| c.database.is_echo()));

    let result = match config {
        Ok(config) => run(cli, config).await,
        Err(e) => Err(CommandError::from(e)),
    };

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: SiteConfig) -> Result<(), CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run(&config).await?,
        Commands::Seed { yes, migrate } => commands::seed::run(&config, yes, migrate).await?,
        Commands::Stats => commands::stats::run(&config).await?,
    }
    Ok(())
}
