//! Entry repository for database operations.
//!
//! Entries are reached from both sides: `list_by_list` walks List→Entries and
//! `list_by_roaster` walks Roaster→Entries. Both are plain queries on the
//! foreign-key column.

use sqlx::{PgExecutor, PgPool};
use tracing::{debug, instrument};

use mn_roasters_core::{EntryId, ListId, RoasterId};

use super::RepositoryError;
use crate::models::{Entry, EntryDetail, NewEntry};

/// Repository for entry database operations.
pub struct EntryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EntryRepository<'a> {
    /// Create a new entry repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKeyViolation` if the list or roaster doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self, new), fields(list_id = %new.list_id, roaster_id = %new.roaster_id))]
    pub async fn create(&self, new: &NewEntry) -> Result<Entry, RepositoryError> {
        insert(self.pool, new).await
    }

    /// Get an entry by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: EntryId) -> Result<Option<Entry>, RepositoryError> {
        let entry = sqlx::query_as::<_, Entry>(
            r"
            SELECT entry_id, list_id, roaster_id, score, note
            FROM entries
            WHERE entry_id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(entry)
    }

    /// Get an entry together with its roaster name, list name and author.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_detail(&self, id: EntryId) -> Result<Option<EntryDetail>, RepositoryError> {
        let detail = sqlx::query_as::<_, EntryDetail>(
            r"
            SELECT e.entry_id, e.score, e.note,
                   r.roaster_id, r.name AS roaster_name,
                   l.list_id, l.list_name, l.user_id AS author_id
            FROM entries e
            JOIN roasters r ON r.roaster_id = e.roaster_id
            JOIN lists l ON l.list_id = e.list_id
            WHERE e.entry_id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(detail)
    }

    /// Get all entries on a list, in creation order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_list(&self, list_id: ListId) -> Result<Vec<Entry>, RepositoryError> {
        let entries = sqlx::query_as::<_, Entry>(
            r"
            SELECT entry_id, list_id, roaster_id, score, note
            FROM entries
            WHERE list_id = $1
            ORDER BY entry_id
            ",
        )
        .bind(list_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Get all entries for a roaster across every list, in creation order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_roaster(
        &self,
        roaster_id: RoasterId,
    ) -> Result<Vec<Entry>, RepositoryError> {
        let entries = sqlx::query_as::<_, Entry>(
            r"
            SELECT entry_id, list_id, roaster_id, score, note
            FROM entries
            WHERE roaster_id = $1
            ORDER BY entry_id
            ",
        )
        .bind(roaster_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    /// Change the score and note of an entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the entry doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self, note))]
    pub async fn update(
        &self,
        id: EntryId,
        score: Option<f64>,
        note: Option<&str>,
    ) -> Result<Entry, RepositoryError> {
        let entry = sqlx::query_as::<_, Entry>(
            r"
            UPDATE entries
            SET score = $2, note = $3
            WHERE entry_id = $1
            RETURNING entry_id, list_id, roaster_id, score, note
            ",
        )
        .bind(id)
        .bind(score)
        .bind(note)
        .fetch_optional(self.pool)
        .await?;

        entry.ok_or(RepositoryError::NotFound)
    }

    /// Count all entries.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM entries")
            .fetch_one(self.pool)
            .await?;
        Ok(count.0)
    }

    /// Delete an entry by ID.
    ///
    /// # Returns
    ///
    /// Returns `true` if the entry was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: EntryId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM entries WHERE entry_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete every entry for a roaster, so the roaster itself can be deleted.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self))]
    pub async fn delete_by_roaster(&self, roaster_id: RoasterId) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM entries WHERE roaster_id = $1")
            .bind(roaster_id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

/// Insert an entry through any executor (pool or open transaction).
pub(crate) async fn insert<'e, E>(executor: E, new: &NewEntry) -> Result<Entry, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let entry = sqlx::query_as::<_, Entry>(
        r"
        INSERT INTO entries (list_id, roaster_id, score, note)
        VALUES ($1, $2, $3, $4)
        RETURNING entry_id, list_id, roaster_id, score, note
        ",
    )
    .bind(new.list_id)
    .bind(new.roaster_id)
    .bind(new.score)
    .bind(&new.note)
    .fetch_one(executor)
    .await?;

    debug!(entry_id = %entry.entry_id, "Inserted entry");
    Ok(entry)
}

/// Delete every entry.
pub(crate) async fn delete_all<'e, E>(executor: E) -> Result<u64, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM entries").execute(executor).await?;
    Ok(result.rows_affected())
}
