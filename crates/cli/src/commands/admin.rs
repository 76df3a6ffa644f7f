//! Admin account management.
//!
//! Admin accounts are ordinary users with the `ADMIN` role, created through
//! the same hashing path as `/api/auth/register`.

use homeflame_core::{Email, Role};
use homeflame_server::db::{PgUserStore, create_pool};
use homeflame_server::services::{AuthError, AuthService};
use thiserror::Error;

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: HOMEFLAME_DATABASE_URL")]
    MissingDatabaseUrl,

    /// Database connection error.
    #[error("Database connection error: {0}")]
    Database(#[from] sqlx::Error),

    /// Empty name or password.
    #[error("{0} must not be blank")]
    Blank(&'static str),

    /// Account creation failed.
    #[error(transparent)]
    Auth(AuthError),
}

/// Create an admin account.
///
/// An existing account with the same email is reported and left untouched.
///
/// # Errors
///
/// Returns `AdminError` if input is invalid or the account cannot be stored.
pub async fn create_admin(email: &Email, name: &str, password: &str) -> Result<(), AdminError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AdminError::Blank("name"));
    }
    if password.trim().is_empty() {
        return Err(AdminError::Blank("password"));
    }

    let database_url = super::database_url().ok_or(AdminError::MissingDatabaseUrl)?;

    tracing::info!("Connecting to database...");
    let pool = create_pool(&database_url).await?;
    let users = PgUserStore::new(pool);

    match AuthService::new(&users)
        .register(name, email, password, Role::Admin)
        .await
    {
        Ok(user) => {
            tracing::info!(
                "Admin account created successfully! ID: {}, Email: {}",
                user.id,
                user.email
            );
            Ok(())
        }
        Err(AuthError::EmailTaken) => {
            tracing::warn!("Account already exists: {}", email);
            Ok(())
        }
        Err(e) => Err(AdminError::Auth(e)),
    }
}
