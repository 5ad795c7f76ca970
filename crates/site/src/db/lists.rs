//! List repository for database operations.

use sqlx::{PgExecutor, PgPool};
use tracing::{debug, instrument};

use mn_roasters_core::{ListId, UserId};

use super::RepositoryError;
use crate::models::{List, NewList};

/// Repository for list database operations.
pub struct ListRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ListRepository<'a> {
    /// Create a new list repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new list for an existing user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKeyViolation` if the owning user doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self, new), fields(user_id = %new.user_id))]
    pub async fn create(&self, new: &NewList) -> Result<List, RepositoryError> {
        insert(self.pool, new).await
    }

    /// Get a list by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ListId) -> Result<Option<List>, RepositoryError> {
        let list = sqlx::query_as::<_, List>(
            r"
            SELECT list_id, list_name, user_id
            FROM lists
            WHERE list_id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(list)
    }

    /// Get all lists owned by a user, in creation order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_by_user(&self, user_id: UserId) -> Result<Vec<List>, RepositoryError> {
        let lists = sqlx::query_as::<_, List>(
            r"
            SELECT list_id, list_name, user_id
            FROM lists
            WHERE user_id = $1
            ORDER BY list_id
            ",
        )
        .bind(user_id)
        .fetch_all(self.pool)
        .await?;

        Ok(lists)
    }

    /// Rename a list.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the list doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self))]
    pub async fn rename(&self, id: ListId, list_name: &str) -> Result<List, RepositoryError> {
        let list = sqlx::query_as::<_, List>(
            r"
            UPDATE lists
            SET list_name = $2
            WHERE list_id = $1
            RETURNING list_id, list_name, user_id
            ",
        )
        .bind(id)
        .bind(list_name)
        .fetch_optional(self.pool)
        .await?;

        list.ok_or(RepositoryError::NotFound)
    }

    /// Count all lists.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM lists")
            .fetch_one(self.pool)
            .await?;
        Ok(count.0)
    }

    /// Delete a list by ID.
    ///
    /// # Returns
    ///
    /// Returns `true` if the list was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKeyViolation` if the list still has entries.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: ListId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM lists WHERE list_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Insert a list through any executor (pool or open transaction).
pub(crate) async fn insert<'e, E>(executor: E, new: &NewList) -> Result<List, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let list = sqlx::query_as::<_, List>(
        r"
        INSERT INTO lists (list_name, user_id)
        VALUES ($1, $2)
        RETURNING list_id, list_name, user_id
        ",
    )
    .bind(&new.list_name)
    .bind(new.user_id)
    .fetch_one(executor)
    .await?;

    debug!(list_id = %list.list_id, "Inserted list");
    Ok(list)
}

/// Delete every list. Entries must already be gone.
pub(crate) async fn delete_all<'e, E>(executor: E) -> Result<u64, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM lists").execute(executor).await?;
    Ok(result.rows_affected())
}
