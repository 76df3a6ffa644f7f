//! Message store: contact form submissions.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use homeflame_core::{ContactMessageId, Email};

use super::RepositoryError;
use crate::models::{ContactMessage, NewContactMessage};

/// Data access for contact messages.
#[async_trait]
pub trait ContactMessageStore: Send + Sync {
    /// Store a message and return it with its assigned ID.
    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, RepositoryError>;

    /// All messages in insertion order.
    async fn list_all(&self) -> Result<Vec<ContactMessage>, RepositoryError>;
}

#[derive(sqlx::FromRow)]
struct ContactMessageRow {
    id: ContactMessageId,
    name: String,
    email: Email,
    message: String,
    created_at: DateTime<Utc>,
}

impl From<ContactMessageRow> for ContactMessage {
    fn from(row: ContactMessageRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            message: row.message,
            created_at: row.created_at,
        }
    }
}

/// `PostgreSQL` implementation of [`ContactMessageStore`].
#[derive(Clone)]
pub struct PgContactMessageStore {
    pool: PgPool,
}

impl PgContactMessageStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactMessageStore for PgContactMessageStore {
    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, RepositoryError> {
        let row = sqlx::query_as::<_, ContactMessageRow>(
            r"
            INSERT INTO contact_messages (name, email, message)
            VALUES ($1, $2, $3)
            RETURNING id, name, email, message, created_at
            ",
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
        let rows = sqlx::query_as::<_, ContactMessageRow>(
            r"
            SELECT id, name, email, message, created_at
            FROM contact_messages
            ORDER BY id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(ContactMessage::from).collect())
    }
}
