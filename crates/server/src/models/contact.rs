//! Contact form messages.

use chrono::{DateTime, Utc};
use serde::Serialize;

use homeflame_core::{ContactMessageId, Email};

/// A message submitted through the public contact form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    pub email: Email,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A contact message before it has been stored.
#[derive(Debug, Clone)]
pub struct NewContactMessage {
    pub name: String,
    pub email: Email,
    pub message: String,
}
