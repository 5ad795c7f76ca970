//! User repository for database operations.
//!
//! Emails are not unique, so lookups by email return every match.

use sqlx::{PgExecutor, PgPool};
use tracing::{debug, instrument};

use mn_roasters_core::UserId;

use super::RepositoryError;
use crate::models::{NewUser, User};

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ValueTooLong` if a field exceeds its column width.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self, new), fields(email = %new.email))]
    pub async fn create(&self, new: &NewUser) -> Result<User, RepositoryError> {
        insert(self.pool, new).await
    }

    /// Get a user by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        let user = sqlx::query_as::<_, User>(
            r"
            SELECT user_id, first_name, last_name, email, password
            FROM users
            WHERE user_id = $1
            ",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Get every user with the given email address, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_email(&self, email: &str) -> Result<Vec<User>, RepositoryError> {
        let users = sqlx::query_as::<_, User>(
            r"
            SELECT user_id, first_name, last_name, email, password
            FROM users
            WHERE email = $1
            ORDER BY user_id
            ",
        )
        .bind(email)
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Find the first user whose email and password both match.
    ///
    /// Passwords are compared as plaintext.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    #[instrument(skip(self, password))]
    pub async fn find_by_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<User>, RepositoryError> {
        let user = self
            .find_by_email(email)
            .await?
            .into_iter()
            .find(|user| user.password.matches(password));

        debug!(found = user.is_some(), "Credential lookup");
        Ok(user)
    }

    /// Get all users, ordered by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<User>, RepositoryError> {
        let users = sqlx::query_as::<_, User>(
            r"
            SELECT user_id, first_name, last_name, email, password
            FROM users
            ORDER BY user_id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Count all users.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;
        Ok(count.0)
    }

    /// Delete a user by ID.
    ///
    /// # Returns
    ///
    /// Returns `true` if the user was deleted, `false` if it didn't exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::ForeignKeyViolation` if the user still owns lists.
    /// Returns `RepositoryError::Database` for other database errors.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: UserId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE user_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}

/// Insert a user through any executor (pool or open transaction).
pub(crate) async fn insert<'e, E>(executor: E, new: &NewUser) -> Result<User, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let user = sqlx::query_as::<_, User>(
        r"
        INSERT INTO users (first_name, last_name, email, password)
        VALUES ($1, $2, $3, $4)
        RETURNING user_id, first_name, last_name, email, password
        ",
    )
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(&new.email)
    .bind(&new.password)
    .fetch_one(executor)
    .await?;

    debug!(user_id = %user.user_id, "Inserted user");
    Ok(user)
}

/// Delete every user. Lists must already be gone.
pub(crate) async fn delete_all<'e, E>(executor: E) -> Result<u64, RepositoryError>
where
    E: PgExecutor<'e>,
{
    let result = sqlx::query("DELETE FROM users").execute(executor).await?;
    Ok(result.rows_affected())
}
