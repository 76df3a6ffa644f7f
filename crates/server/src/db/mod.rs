//! Data access for the HomeFlame API.
//!
//! Each table is owned by one store trait, so services only ever see the
//! trait object and never a concrete backend:
//!
//! - [`UserStore`] - `users`, the credential store
//! - [`ContactMessageStore`] - `contact_messages`
//! - [`SubscriptionStore`] - `subscriptions`
//!
//! Two backends implement every trait: `PostgreSQL` (`Pg*Store`) and an
//! in-process one ([`memory`]) used by tests and `HOMEFLAME_STORE=memory`.
//!
//! # Migrations
//!
//! Migrations are stored in `crates/server/migrations/` and run via:
//! ```bash
//! cargo run -p homeflame-cli -- migrate
//! ```

pub mod contact_messages;
pub mod memory;
pub mod subscriptions;
pub mod users;

use std::sync::Arc;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

pub use contact_messages::{ContactMessageStore, PgContactMessageStore};
pub use memory::{MemoryContactMessageStore, MemorySubscriptionStore, MemoryUserStore};
pub use subscriptions::{PgSubscriptionStore, SubscriptionStore};
pub use users::{PgUserStore, UserStore};

/// Errors returned by store operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Constraint violation (e.g., unique email).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

impl RepositoryError {
    /// Map a unique-constraint violation to `Conflict`, anything else to `Database`.
    pub(crate) fn from_insert(err: sqlx::Error, conflict: &str) -> Self {
        if let sqlx::Error::Database(ref db_err) = err
            && db_err.is_unique_violation()
        {
            return Self::Conflict(conflict.to_owned());
        }
        Self::Database(err)
    }
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// The full set of stores the services run against.
///
/// Cheap to clone; every store is behind an `Arc`.
#[derive(Clone)]
pub struct Stores {
    pub users: Arc<dyn UserStore>,
    pub contact_messages: Arc<dyn ContactMessageStore>,
    pub subscriptions: Arc<dyn SubscriptionStore>,
    pool: Option<PgPool>,
}

impl Stores {
    /// Stores backed by a `PostgreSQL` pool.
    #[must_use]
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUserStore::new(pool.clone())),
            contact_messages: Arc::new(PgContactMessageStore::new(pool.clone())),
            subscriptions: Arc::new(PgSubscriptionStore::new(pool.clone())),
            pool: Some(pool),
        }
    }

    /// Empty in-process stores. Nothing survives a restart.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            users: Arc::new(MemoryUserStore::new()),
            contact_messages: Arc::new(MemoryContactMessageStore::new()),
            subscriptions: Arc::new(MemorySubscriptionStore::new()),
            pool: None,
        }
    }

    /// Check that the backend is reachable.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the database does not answer.
    pub async fn ping(&self) -> Result<(), RepositoryError> {
        if let Some(pool) = &self.pool {
            sqlx::query("SELECT 1").execute(pool).await?;
        }
        Ok(())
    }
}
