//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! mnr-cli migrate
//! ```
//!
//! # Environment Variables
//!
//! - `ROASTERS_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! # Migration Files
//!
//! Migrations live in `crates/site/migrations/` and are embedded at build time.

use mn_roasters_site::config::SiteConfig;
use mn_roasters_site::db;

use super::CommandError;

/// Run all pending migrations.
///
/// # Errors
///
/// Returns an error if the database is unreachable or a migration fails.
pub async fn run(config: &SiteConfig) -> Result<(), CommandError> {
    tracing::info!("Connecting to database...");
    let pool = db::connect(&config.database).await?;

    tracing::info!("Running migrations...");
    db::run_migrations(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
