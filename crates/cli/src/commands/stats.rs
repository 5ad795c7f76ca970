//! Row counts per table.

use tracing::info;

use mn_roasters_site::config::SiteConfig;
use mn_roasters_site::db::{
    self, EntryRepository, ListRepository, RoasterRepository, UserRepository,
};

use super::CommandError;

/// Print the number of rows in every table.
///
/// # Errors
///
/// Returns an error if the database connection or a count query fails.
pub async fn run(config: &SiteConfig) -> Result<(), CommandError> {
    let pool = db::connect(&config.database).await?;

    let users = UserRepository::new(&pool).count().await?;
    let roasters = RoasterRepository::new(&pool).count().await?;
    let lists = ListRepository::new(&pool).count().await?;
    let entries = EntryRepository::new(&pool).count().await?;

    info!("Database Statistics");
    info!("===================");
    info!("Users: {users}");
    info!("Roasters: {roasters}");
    info!("Lists: {lists}");
    info!("Entries: {entries}");

    Ok(())
}
