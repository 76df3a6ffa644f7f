//! Subscription service.

use chrono::Utc;
use thiserror::Error;
use tracing::info;

use homeflame_core::{SubscriptionPlan, UserId};

use crate::db::{RepositoryError, SubscriptionStore, UserStore};
use crate::models::{NewSubscription, Subscription};

/// Errors from subscription operations.
#[derive(Debug, Error)]
pub enum SubscriptionError {
    /// Subscriber or chef does not exist. Which one is not reported.
    #[error("user or chef not found")]
    UserOrChefNotFound,

    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Creates and lists subscriptions.
pub struct SubscriptionService<'a> {
    users: &'a dyn UserStore,
    subscriptions: &'a dyn SubscriptionStore,
}

impl<'a> SubscriptionService<'a> {
    #[must_use]
    pub const fn new(users: &'a dyn UserStore, subscriptions: &'a dyn SubscriptionStore) -> Self {
        Self {
            users,
            subscriptions,
        }
    }

    /// Subscribe `user_id` to `chef_id`.
    ///
    /// The subscription starts now and is active. Repeat subscriptions to the
    /// same chef are allowed. The chef's role is not checked.
    ///
    /// # Errors
    ///
    /// Returns `SubscriptionError::UserOrChefNotFound` if either user is missing.
    pub async fn create(
        &self,
        user_id: UserId,
        chef_id: UserId,
        plan_type: SubscriptionPlan,
    ) -> Result<Subscription, SubscriptionError> {
        let user = self.users.get_by_id(user_id).await?;
        let chef = self.users.get_by_id(chef_id).await?;

        let (Some(_), Some(chef)) = (user, chef) else {
            return Err(SubscriptionError::UserOrChefNotFound);
        };

        let subscription = self
            .subscriptions
            .create(NewSubscription {
                user_id,
                chef_id,
                chef_name: chef.name,
                plan_type,
                start_date: Utc::now(),
                active: true,
            })
            .await?;

        info!(
            subscription_id = %subscription.id,
            %user_id,
            %chef_id,
            plan = %plan_type,
            "Subscription created"
        );
        Ok(subscription)
    }

    /// All subscriptions held by a user, active or not.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Subscription>, RepositoryError> {
        self.subscriptions.list_by_user(user_id).await
    }

    /// All subscriptions to a chef, active or not.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub async fn list_by_chef(&self, chef_id: UserId) -> Result<Vec<Subscription>, RepositoryError> {
        self.subscriptions.list_by_chef(chef_id).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Duration;
    use homeflame_core::{Email, Role};

    use super::*;
    use crate::db::{MemorySubscriptionStore, MemoryUserStore};
    use crate::models::NewUser;

    async fn seed_users(store: &MemoryUserStore) {
        for (name, email, role) in [
            ("Sub", "sub@example.com", Role::User),
            ("Chef Remy", "remy@example.com", Role::Chef),
        ] {
            store
                .create(NewUser {
                    name: name.to_owned(),
                    email: Email::parse(email).unwrap(),
                    password_hash: "hash".to_owned(),
                    role,
                })
                .await
                .unwrap();
        }
    }

    #[tokio::test]
    async fn test_create_starts_active_now() {
        let users = MemoryUserStore::new();
        let subscriptions = MemorySubscriptionStore::new();
        seed_users(&users).await;
        let service = SubscriptionService::new(&users, &subscriptions);

        let before = Utc::now();
        let sub = service
            .create(UserId::new(1), UserId::new(2), SubscriptionPlan::Weekly)
            .await
            .unwrap();

        assert!(sub.active);
        assert_eq!(sub.chef_name, "Chef Remy");
        assert!(sub.start_date >= before);
        assert!(sub.start_date - before < Duration::seconds(5));
    }

    #[tokio::test]
    async fn test_missing_user_or_chef_is_not_found() {
        let users = MemoryUserStore::new();
        let subscriptions = MemorySubscriptionStore::new();
        seed_users(&users).await;
        let service = SubscriptionService::new(&users, &subscriptions);

        for (user, chef) in [(999, 2), (1, 999)] {
            let err = service
                .create(UserId::new(user), UserId::new(chef), SubscriptionPlan::Monthly)
                .await
                .unwrap_err();
            assert!(matches!(err, SubscriptionError::UserOrChefNotFound));
        }
        assert_eq!(subscriptions.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_duplicate_subscriptions_allowed() {
        let users = MemoryUserStore::new();
        let subscriptions = MemorySubscriptionStore::new();
        seed_users(&users).await;
        let service = SubscriptionService::new(&users, &subscriptions);

        for _ in 0..2 {
            service
                .create(UserId::new(1), UserId::new(2), SubscriptionPlan::Weekly)
                .await
                .unwrap();
        }

        let mine = service.list_by_user(UserId::new(1)).await.unwrap();
        assert_eq!(mine.len(), 2);
        assert!(mine[0].id < mine[1].id);
        assert_eq!(service.list_by_chef(UserId::new(2)).await.unwrap(), mine);
    }
}
