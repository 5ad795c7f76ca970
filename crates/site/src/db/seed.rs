//! Destructive reset with fixed sample rows for demos and tests.
//!
//! [`reset_and_seed`] wipes all four tables and inserts one roaster, one
//! user, two lists and one entry. Only run it against a disposable database.

use sqlx::PgPool;
use tracing::{info, instrument, warn};

use mn_roasters_core::{EntryId, ListId, Password, RoasterId, UserId};

use super::{RepositoryError, entries, lists, roasters, users};
use crate::models::{NewEntry, NewList, NewRoaster, NewUser};

/// Name of the seeded roaster.
pub const SEED_ROASTER_NAME: &str = "City Girl Coffee Test";
/// Email of the seeded user.
pub const SEED_USER_EMAIL: &str = "admin@admin.com";
/// Names of the seeded lists, in insertion order. The entry goes on the first.
pub const SEED_LIST_NAMES: [&str; 2] = ["My Favorites", "My Roasters"];
/// Score of the seeded entry.
pub const SEED_ENTRY_SCORE: f64 = 5.0;
/// Note of the seeded entry.
pub const SEED_ENTRY_NOTE: &str = "lovely";

/// Row counts removed by the reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeletedRows {
    pub entries: u64,
    pub lists: u64,
    pub roasters: u64,
    pub users: u64,
}

/// IDs of the rows inserted by [`reset_and_seed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedReport {
    pub deleted: DeletedRows,
    pub roaster_id: RoasterId,
    pub user_id: UserId,
    pub list_ids: Vec<ListId>,
    pub entry_id: EntryId,
}

/// The sample roaster.
#[must_use]
pub fn seed_roaster() -> NewRoaster {
    NewRoaster {
        name: SEED_ROASTER_NAME.to_owned(),
        address: "1330 E Superior St, Duluth, MN 55805, USA".to_owned(),
        phone_number: Some("(800) 438-9228".to_owned()),
        hours: Some("Unavailable".to_owned()),
        website: Some("http://www.citygirlcoffee.com/".to_owned()),
        place_id: Some("ChIJAQDAwtZSrlIRBDSDAdzoufI".to_owned()),
        avg_user_rating: Some(3.5),
        lat: Some(46.799_842_9),
        lng: Some(-92.080_734_5),
    }
}

/// The sample user.
#[must_use]
pub fn seed_user() -> NewUser {
    NewUser {
        first_name: "Admin".to_owned(),
        last_name: "Admin".to_owned(),
        email: SEED_USER_EMAIL.to_owned(),
        password: Password::new("admin"),
    }
}

/// Clear every table and insert the sample rows.
///
/// Runs in a single transaction. Rows are deleted children first
/// (entries, lists, roasters, users) so no foreign key is ever violated,
/// and any failure rolls the whole reset back.
///
/// # Errors
///
/// Returns `RepositoryError` if any delete or insert fails; the database is
/// left as it was before the call.
#[instrument(skip(pool))]
pub async fn reset_and_seed(pool: &PgPool) -> Result<SeedReport, RepositoryError> {
    let mut tx = pool.begin().await?;

    let deleted = DeletedRows {
        entries: entries::delete_all(&mut *tx).await?,
        lists: lists::delete_all(&mut *tx).await?,
        roasters: roasters::delete_all(&mut *tx).await?,
        users: users::delete_all(&mut *tx).await?,
    };
    if deleted != DeletedRows::default() {
        warn!(?deleted, "Cleared existing rows");
    }

    let roaster = roasters::insert(&mut *tx, &seed_roaster()).await?;
    let user = users::insert(&mut *tx, &seed_user()).await?;

    let mut list_ids = Vec::with_capacity(SEED_LIST_NAMES.len());
    for name in SEED_LIST_NAMES {
        let list = lists::insert(&mut *tx, &NewList::new(name, user.user_id)).await?;
        list_ids.push(list.list_id);
    }

    let favorites = *list_ids.first().ok_or(RepositoryError::NotFound)?;
    let entry = entries::insert(
        &mut *tx,
        &NewEntry {
            list_id: favorites,
            roaster_id: roaster.roaster_id,
            score: Some(SEED_ENTRY_SCORE),
            note: Some(SEED_ENTRY_NOTE.to_owned()),
        },
    )
    .await?;

    tx.commit().await?;

    info!(
        roaster_id = %roaster.roaster_id,
        user_id = %user.user_id,
        entry_id = %entry.entry_id,
        "Seeded example data"
    );

    Ok(SeedReport {
        deleted,
        roaster_id: roaster.roaster_id,
        user_id: user.user_id,
        list_ids,
        entry_id: entry.entry_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_roaster_fields() {
        let roaster = seed_roaster();
        assert_eq!(roaster.name, "City Girl Coffee Test");
        assert_eq!(roaster.address, "1330 E Superior St, Duluth, MN 55805, USA");
        assert_eq!(roaster.place_id.as_deref(), Some("ChIJAQDAwtZSrlIRBDSDAdzoufI"));
        assert_eq!(roaster.avg_user_rating, Some(3.5));
    }

    #[test]
    fn test_seed_roaster_fits_column_widths() {
        let roaster = seed_roaster();
        assert!(roaster.name.len() <= 100);
        assert!(roaster.address.len() <= 100);
        assert!(roaster.phone_number.unwrap_or_default().len() <= 20);
        assert!(roaster.place_id.unwrap_or_default().len() <= 50);
    }

    #[test]
    fn test_seed_user_fields() {
        let user = seed_user();
        assert_eq!(user.email, "admin@admin.com");
        assert_eq!(user.first_name, "Admin");
        assert!(user.password.matches("admin"));
    }

    #[test]
    fn test_seed_lists_favorites_first() {
        assert_eq!(SEED_LIST_NAMES, ["My Favorites", "My Roasters"]);
    }
}
