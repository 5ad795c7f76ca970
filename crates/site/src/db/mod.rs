//! Database operations for the review site `PostgreSQL`.
//!
//! # Database: `MNroasters`
//!
//! ## Tables
//!
//! - `users` - Site accounts (plaintext password, see [`mn_roasters_core::Password`])
//! - `roasters` - Coffee roasting businesses
//! - `lists` - Named collections owned by a user
//! - `entries` - A score and note for one roaster on one list
//!
//! Relationships are navigated with explicit reverse-lookup queries
//! (`ListRepository::list_by_user`, `EntryRepository::list_by_roaster`, ...),
//! never through cached back-references.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/site/migrations/` and run via:
//! ```bash
//! cargo run -p mn-roasters-cli -- migrate
//! ```

use std::str::FromStr;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use sqlx::error::ErrorKind;
use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgDatabaseError, PgPoolOptions};
use sqlx::{ConnectOptions, Connection, PgPool};
use thiserror::Error;
use tracing::{info, instrument};

use crate::config::DEFAULT_MAX_CONNECTIONS;

pub mod entries;
pub mod lists;
pub mod roasters;
pub mod seed;
pub mod users;

pub use entries::EntryRepository;
pub use lists::ListRepository;
pub use roasters::RoasterRepository;
pub use seed::{SeedReport, reset_and_seed};
pub use users::UserRepository;

/// Embedded migrations from `crates/site/migrations/`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// `PostgreSQL` SQLSTATE for `string_data_right_truncation`.
const VALUE_TOO_LONG: &str = "22001";

/// Errors that can occur during database operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The store could not be reached or the connection string is invalid.
    #[error("connection error: {0}")]
    Connection(#[source] sqlx::Error),

    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),

    /// Applying migrations failed.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A referenced row does not exist, or a referenced row still has children.
    #[error("foreign key violation: {constraint}")]
    ForeignKeyViolation {
        /// Name of the violated constraint.
        constraint: String,
    },

    /// A required column was null.
    #[error("not-null violation: {column}")]
    NotNullViolation {
        /// Name of the offending column.
        column: String,
    },

    /// A value exceeded its column's storage width.
    #[error("value too long for column")]
    ValueTooLong,

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,
}

impl RepositoryError {
    /// Returns `true` for foreign-key and not-null violations.
    #[must_use]
    pub const fn is_constraint_violation(&self) -> bool {
        matches!(
            self,
            Self::ForeignKeyViolation { .. } | Self::NotNullViolation { .. }
        )
    }
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        let sqlx::Error::Database(db_err) = &err else {
            return match err {
                sqlx::Error::RowNotFound => Self::NotFound,
                other => Self::Database(other),
            };
        };

        match db_err.kind() {
            ErrorKind::ForeignKeyViolation => Self::ForeignKeyViolation {
                constraint: db_err.constraint().unwrap_or("unknown").to_owned(),
            },
            ErrorKind::NotNullViolation => Self::NotNullViolation {
                column: db_err
                    .try_downcast_ref::<PgDatabaseError>()
                    .and_then(PgDatabaseError::column)
                    .unwrap_or("unknown")
                    .to_owned(),
            },
            _ if db_err.code().as_deref() == Some(VALUE_TOO_LONG) => Self::ValueTooLong,
            _ => Self::Database(err),
        }
    }
}

/// Connection settings for [`connect`].
#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    url: SecretString,
    echo: bool,
    max_connections: u32,
}

impl DatabaseOptions {
    /// Options for the given connection string, with statement logging off.
    #[must_use]
    pub fn new(url: SecretString) -> Self {
        Self {
            url,
            echo: false,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }

    /// Log every executed SQL statement.
    #[must_use]
    pub fn echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Set the pool size.
    #[must_use]
    pub fn max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// The connection string.
    #[must_use]
    pub const fn url(&self) -> &SecretString {
        &self.url
    }

    /// Whether statement logging is on.
    #[must_use]
    pub const fn is_echo(&self) -> bool {
        self.echo
    }

    /// The configured pool size.
    #[must_use]
    pub const fn pool_size(&self) -> u32 {
        self.max_connections
    }

    /// Parse the connection string and apply the statement-logging setting.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Connection` if the connection string cannot be
    /// parsed.
    pub fn connect_options(&self) -> Result<PgConnectOptions, RepositoryError> {
        let connect_options = PgConnectOptions::from_str(self.url.expose_secret())
            .map_err(RepositoryError::Connection)?;

        if self.echo {
            Ok(connect_options)
        } else {
            Ok(connect_options.disable_statement_logging())
        }
    }
}

/// Bind the data layer to a live `PostgreSQL` database.
///
/// Statements are logged by sqlx through `tracing` (target `sqlx::query`)
/// when `echo` is set, and not at all otherwise. Repositories keep no
/// in-memory copies of rows, so there is no change tracking to disable.
///
/// Call once at process start and share the returned pool.
///
/// A single connection is opened and closed before the pool is built, so an
/// unreachable server reports the driver error (e.g. connection refused)
/// instead of `PoolTimedOut`.
///
/// # Errors
///
/// Returns `RepositoryError::Connection` if the connection string cannot be
/// parsed or the database cannot be reached.
#[instrument(skip(options), fields(echo = options.echo))]
pub async fn connect(options: &DatabaseOptions) -> Result<PgPool, RepositoryError> {
    let connect_options = options.connect_options()?;

    connect_options
        .connect()
        .await
        .map_err(RepositoryError::Connection)?
        .close()
        .await
        .map_err(RepositoryError::Connection)?;

    let pool = PgPoolOptions::new()
        .max_connections(options.max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(connect_options)
        .await
        .map_err(RepositoryError::Connection)?;

    info!("Connected to the database");
    Ok(pool)
}

/// Apply all pending migrations.
///
/// # Errors
///
/// Returns `RepositoryError::Migration` if a migration fails to apply.
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<(), RepositoryError> {
    MIGRATOR.run(pool).await?;
    info!("Migrations applied");
    Ok(())
}
