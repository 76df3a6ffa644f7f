//! In-process stores.
//!
//! Records live in insertion-ordered vectors behind a `parking_lot::RwLock`.
//! IDs are assigned sequentially from 1, the same as a fresh `BIGSERIAL`.
//! Locks are never held across an `.await`.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;

use homeflame_core::{ContactMessageId, Email, Role, SubscriptionId, UserId};

use super::{ContactMessageStore, RepositoryError, SubscriptionStore, UserStore};
use crate::models::{
    ContactMessage, NewContactMessage, NewSubscription, NewUser, Subscription, User,
};

fn next_id(len: usize) -> i64 {
    i64::try_from(len).map_or(i64::MAX, |n| n + 1)
}

/// In-memory [`UserStore`].
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn get_by_email(&self, email: &Email) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.read().iter().find(|u| &u.email == email).cloned())
    }

    async fn get_by_id(&self, id: UserId) -> Result<Option<User>, RepositoryError> {
        Ok(self.users.read().iter().find(|u| u.id == id).cloned())
    }

    async fn list_by_role(&self, role: Role) -> Result<Vec<User>, RepositoryError> {
        Ok(self
            .users
            .read()
            .iter()
            .filter(|u| u.role == role)
            .cloned()
            .collect())
    }

    async fn create(&self, user: NewUser) -> Result<User, RepositoryError> {
        let mut users = self.users.write();

        if users.iter().any(|u| u.email == user.email) {
            return Err(RepositoryError::Conflict("email already exists".to_owned()));
        }

        let created = User {
            id: UserId::new(next_id(users.len())),
            name: user.name,
            email: user.email,
            password: user.password_hash,
            role: user.role,
            created_at: Utc::now(),
        };
        users.push(created.clone());

        Ok(created)
    }
}

/// In-memory [`ContactMessageStore`].
#[derive(Default)]
pub struct MemoryContactMessageStore {
    messages: RwLock<Vec<ContactMessage>>,
}

impl MemoryContactMessageStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactMessageStore for MemoryContactMessageStore {
    async fn create(&self, message: NewContactMessage) -> Result<ContactMessage, RepositoryError> {
        let mut messages = self.messages.write();

        let created = ContactMessage {
            id: ContactMessageId::new(next_id(messages.len())),
            name: message.name,
            email: message.email,
            message: message.message,
            created_at: Utc::now(),
        };
        messages.push(created.clone());

        Ok(created)
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
        Ok(self.messages.read().clone())
    }
}

/// In-memory [`SubscriptionStore`].
#[derive(Default)]
pub struct MemorySubscriptionStore {
    subscriptions: RwLock<Vec<Subscription>>,
}

impl MemorySubscriptionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SubscriptionStore for MemorySubscriptionStore {
    async fn create(
        &self,
        subscription: NewSubscription,
    ) -> Result<Subscription, RepositoryError> {
        let mut subscriptions = self.subscriptions.write();

        let created = Subscription {
            id: SubscriptionId::new(next_id(subscriptions.len())),
            user_id: subscription.user_id,
            chef_id: subscription.chef_id,
            chef_name: subscription.chef_name,
            plan_type: subscription.plan_type,
            start_date: subscription.start_date,
            active: subscription.active,
        };
        subscriptions.push(created.clone());

        Ok(created)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Subscription>, RepositoryError> {
        Ok(self
            .subscriptions
            .read()
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn list_by_chef(&self, chef_id: UserId) -> Result<Vec<Subscription>, RepositoryError> {
        Ok(self
            .subscriptions
            .read()
            .iter()
            .filter(|s| s.chef_id == chef_id)
            .cloned()
            .collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.subscriptions.read().len() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use homeflame_core::SubscriptionPlan;

    use super::*;

    fn new_user(email: &str) -> NewUser {
        NewUser {
            name: "Test".to_owned(),
            email: Email::parse(email).unwrap(),
            password_hash: "hash".to_owned(),
            role: Role::User,
        }
    }

    #[tokio::test]
    async fn test_user_ids_are_sequential() {
        let store = MemoryUserStore::new();
        let a = store.create(new_user("a@example.com")).await.unwrap();
        let b = store.create(new_user("b@example.com")).await.unwrap();

        assert_eq!(a.id, UserId::new(1));
        assert_eq!(b.id, UserId::new(2));
        assert_eq!(store.get_by_id(b.id).await.unwrap(), Some(b));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let store = MemoryUserStore::new();
        store.create(new_user("a@example.com")).await.unwrap();

        let err = store.create(new_user("a@example.com")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_list_by_role_keeps_registration_order() {
        let store = MemoryUserStore::new();
        for email in ["a@example.com", "b@example.com", "c@example.com"] {
            let mut user = new_user(email);
            if email != "b@example.com" {
                user.role = Role::Chef;
            }
            store.create(user).await.unwrap();
        }

        let chefs = store.list_by_role(Role::Chef).await.unwrap();
        let emails: Vec<&str> = chefs.iter().map(|u| u.email.as_str()).collect();
        assert_eq!(emails, ["a@example.com", "c@example.com"]);
        assert!(store.list_by_role(Role::Admin).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_subscriptions_filter_by_side() {
        let store = MemorySubscriptionStore::new();
        for (user, chef) in [(1, 2), (3, 2), (1, 4)] {
            store
                .create(NewSubscription {
                    user_id: UserId::new(user),
                    chef_id: UserId::new(chef),
                    chef_name: "Chef".to_owned(),
                    plan_type: SubscriptionPlan::Weekly,
                    start_date: Utc::now(),
                    active: true,
                })
                .await
                .unwrap();
        }

        assert_eq!(store.list_by_user(UserId::new(1)).await.unwrap().len(), 2);
        assert_eq!(store.list_by_chef(UserId::new(2)).await.unwrap().len(), 2);
        assert!(store.list_by_chef(UserId::new(1)).await.unwrap().is_empty());
        assert_eq!(store.count().await.unwrap(), 3);
    }
}
