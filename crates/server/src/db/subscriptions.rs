//! Subscription store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use homeflame_core::{SubscriptionId, SubscriptionPlan, UserId};

use super::RepositoryError;
use crate::models::{NewSubscription, Subscription};

/// Data access for subscriptions.
///
/// Both referenced users are expected to exist; the store itself does not
/// check that beyond the foreign keys of the `PostgreSQL` schema.
#[async_trait]
pub trait SubscriptionStore: Send + Sync {
    /// Store a subscription and return it with its assigned ID.
    async fn create(&self, subscription: NewSubscription)
    -> Result<Subscription, RepositoryError>;

    /// Subscriptions held by a user, in insertion order.
    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Subscription>, RepositoryError>;

    /// Subscriptions to a chef, in insertion order.
    async fn list_by_chef(&self, chef_id: UserId) -> Result<Vec<Subscription>, RepositoryError>;

    /// Number of subscriptions across all users.
    async fn count(&self) -> Result<u64, RepositoryError>;
}

#[derive(sqlx::FromRow)]
struct SubscriptionRow {
    id: SubscriptionId,
    user_id: UserId,
    chef_id: UserId,
    chef_name: String,
    plan_type: SubscriptionPlan,
    start_date: DateTime<Utc>,
    active: bool,
}

impl From<SubscriptionRow> for Subscription {
    fn from(row: SubscriptionRow) -> Self {
        Self {
            id: row.id,
            user_id: row.user_id,
            chef_id: row.chef_id,
            chef_name: row.chef_name,
            plan_type: row.plan_type,
            start_date: row.start_date,
            active: row.active,
        }
    }
}

/// `PostgreSQL` implementation of [`SubscriptionStore`].
#[derive(Clone)]
pub struct PgSubscriptionStore {
    pool: PgPool,
}

impl PgSubscriptionStore {
    #[must_use]
    pub const fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionStore for PgSubscriptionStore {
    async fn create(
        &self,
        subscription: NewSubscription,
    ) -> Result<Subscription, RepositoryError> {
        let row = sqlx::query_as::<_, SubscriptionRow>(
            r"
            INSERT INTO subscriptions (user_id, chef_id, chef_name, plan_type, start_date, active)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, user_id, chef_id, chef_name, plan_type, start_date, active
            ",
        )
        .bind(subscription.user_id)
        .bind(subscription.chef_id)
        .bind(&subscription.chef_name)
        .bind(subscription.plan_type)
        .bind(subscription.start_date)
        .bind(subscription.active)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Subscription>, RepositoryError> {
        let rows = sqlx::query_as::<_, SubscriptionRow>(
            r"
            SELECT id, user_id, chef_id, chef_name, plan_type, start_date, active
            FROM subscriptions
            WHERE user_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Subscription::from).collect())
    }

    async fn list_by_chef(&self, chef_id: UserId) -> Result<Vec<Subscription>, RepositoryError> {
        let rows = sqlx::query_as::<_, SubscriptionRow>(
            r"
            SELECT id, user_id, chef_id, chef_name, plan_type, start_date, active
            FROM subscriptions
            WHERE chef_id = $1
            ORDER BY id ASC
            ",
        )
        .bind(chef_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Subscription::from).collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM subscriptions")
            .fetch_one(&self.pool)
            .await?;

        u64::try_from(count)
            .map_err(|_| RepositoryError::DataCorruption(format!("negative row count: {count}")))
    }
}
