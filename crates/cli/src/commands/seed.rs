//! Reset the database to the fixed sample data.
//!
//! Every row in `entries`, `lists`, `roasters` and `users` is deleted before
//! the sample rows are inserted, so the command insists on `--yes`.

use tracing::info;

use mn_roasters_site::config::SiteConfig;
use mn_roasters_site::db;

use super::CommandError;

/// Seed the database.
///
/// # Arguments
///
/// * `config` - Site configuration
/// * `confirmed` - The operator passed `--yes`
/// * `migrate_first` - Apply pending migrations before seeding
///
/// # Errors
///
/// Returns `CommandError::ConfirmationRequired` without `--yes`, or a
/// repository error if connecting or seeding fails.
pub async fn run(
    config: &SiteConfig,
    confirmed: bool,
    migrate_first: bool,
) -> Result<(), CommandError> {
    if !confirmed {
        return Err(CommandError::ConfirmationRequired("wipe and seed the database"));
    }

    let pool = db::connect(&config.database).await?;
    info!("Connected to database");

    if migrate_first {
        db::run_migrations(&pool).await?;
    }

    let report = db::reset_and_seed(&pool).await?;

    info!("Seeding complete!");
    info!(
        "  Removed: {} entries, {} lists, {} roasters, {} users",
        report.deleted.entries, report.deleted.lists, report.deleted.roasters, report.deleted.users
    );
    info!("  Roaster ID: {}", report.roaster_id);
    info!("  User ID: {}", report.user_id);
    info!("  List IDs: {:?}", report.list_ids);
    info!("  Entry ID: {}", report.entry_id);

    Ok(())
}
