//! Roaster repository for database operations.

use sqlx::{PgExecutor, PgPool};
use tracing::{debug, instrument};

use mn_roasters_core::RoasterId;

use super::RepositoryError;
use crate::models::{NewRoaster, Roaster};

/// Repository for roaster database operations.
pub struct RoasterRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RoasterRepository<'a> {
    /// Create a new roaster repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new roaster.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ValueTooLong` if a field exceeds its column width.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self, new), fields(name = %new.name))]
    pub async fn create(&self, new: &NewRoaster) -> Result<Roaster, RepositoryError> {
        insert(self.pool, new).await
    }

    /// Get a roaster by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: RoasterId) -> Result<Option<Roaster>, RepositoryError> {
        let roaster = sqlx::query_as::<_, Roaster>(
            r"
            SELECT roaster_id, name, address, phone_number, hours, website,
                   place_id, avg_user_rating, lat, lng
            FROM roasters
            WHERE roaster_id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(roaster)
    }

    /// Get all roasters, ordered by name.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Roaster>, RepositoryError> {
        let roasters = sqlx::query_as::<_, Roaster>(
            r"
            SELECT roaster_id, name, address, phone_number, hours, website,
                   place_id, avg_user_rating, lat, lng
            FROM roasters
            ORDER BY name, roaster_id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(roasters)
    }

    /// Replace every column of an existing roaster.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the roaster doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self, changes))]
    pub async fn update(
        &self,
        id: RoasterId,
        changes: &NewRoaster,
    ) -> Result<Roaster, RepositoryError> {
        let roaster = sqlx::query_as::<_, Roaster>(
            r"
            UPDATE roasters
            SET name = $2, address = $3, phone_number = $4, hours = $5,
                website = $6, place_id = $7, avg_user_rating = $8, lat = $9, lng = $10
            WHERE roaster_id = $1
            RETURNING roaster_id, name, address, phone_number, hours, website,
                      place_id, avg_user_rating, lat, lng
            ",
        )
        .bind(id)
        .bind(&changes.name)
        .bind(&changes.address)
        .bind(&changes.phone_number)
        .bind(&changes.hours)
        .bind(&changes.website)
        .bind(&changes.place_id)
        .bind(changes.avg_user_rating)
        .bind(changes.lat)
        .bind(changes.lng)
        .fetch_optional(self.pool)
        .await?;

        roaster.ok_or(RepositoryError::NotFound)
    }

    /// Count all roasters.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM roasters")
            .fetch_one(self.pool)
            .await?;
        Ok(count.0)
    }

    /// Delete a roaster by ID.
    ///
    /// Entries that reference the roaster are not removed; delete them first.
    ///
    /// # Returns
    ///
    /// Returns `true` if the roaster was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKeyViolation` if entries still reference the roaster.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: RoasterId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM roasters WHERE roaster_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Insert a roaster through any executor (pool or open transaction).
pub(crate) async fn insert<'e, E>(executor: E, new: &NewRoaster) -> Result<Roaster, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let roaster = sqlx::query_as::<_, Roaster>(
        r"
        INSERT INTO roasters
            (name, address, phone_number, hours, website, place_id, avg_user_rating, lat, lng)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING roaster_id, name, address, phone_number, hours, website,
                  place_id, avg_user_rating, lat, lng
        ",
    )
    .bind(&new.name)
    .bind(&new.address)
    .bind(&new.phone_number)
    .bind(&new.hours)
    .bind(&new.website)
    .bind(&new.place_id)
    .bind(new.avg_user_rating)
    .bind(new.lat)
    .bind(new.lng)
    .fetch_one(executor)
    .await?;

    debug!(roaster_id = %roaster.roaster_id, "Inserted roaster");
    Ok(roaster)
}

/// Delete every roaster. Entries must already be gone.
pub(crate) async fn delete_all<'e, E>(executor: E) -> Result<u64, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM roasters").execute(executor).await?;
    Ok(result.rows_affected())
}
