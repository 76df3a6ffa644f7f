//! Contact service: stores and lists contact form messages.

use tracing::info;

use crate::db::{ContactMessageStore, RepositoryError};
use crate::models::{ContactMessage, NewContactMessage};

/// Contact message service.
pub struct ContactService<'a> {
    messages: &'a dyn ContactMessageStore,
}

impl<'a> ContactService<'a> {
    #[must_use]
    pub const fn new(messages: &'a dyn ContactMessageStore) -> Self {
        Self { messages }
    }

    /// Store a message unconditionally.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub async fn submit(
        &self,
        message: NewContactMessage,
    ) -> Result<ContactMessage, RepositoryError> {
        let saved = self.messages.create(message).await?;
        info!(message_id = %saved.id, "Contact message stored");
        Ok(saved)
    }

    /// Every stored message, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub async fn list_all(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
        self.messages.list_all().await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use homeflame_core::Email;

    use super::*;
    use crate::db::MemoryContactMessageStore;

    fn message(body: &str) -> NewContactMessage {
        NewContactMessage {
            name: "Grace".to_owned(),
            email: Email::parse("grace@example.com").unwrap(),
            message: body.to_owned(),
        }
    }

    #[tokio::test]
    async fn test_submitted_message_is_listed_in_order() {
        let store = MemoryContactMessageStore::new();
        let contact = ContactService::new(&store);

        let first = contact.submit(message("first")).await.unwrap();
        let second = contact.submit(message("second")).await.unwrap();
        assert_ne!(first.id, second.id);

        let listed = contact.list_all().await.unwrap();
        assert_eq!(listed, vec![first, second]);

        // Repeated reads keep the same order.
        assert_eq!(contact.list_all().await.unwrap(), listed);
    }
}
