//! Subscription analytics.

use serde::Serialize;

use homeflame_core::UserId;

use crate::db::{RepositoryError, SubscriptionStore};

/// Flat revenue credited per subscription in the admin summary.
pub const REVENUE_PER_SUBSCRIPTION: u64 = 100;

/// Subscription counts for one chef.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChefAnalytics {
    pub chef_id: UserId,
    pub total_subscriptions: u64,
    /// Always equal to `total_subscriptions`; the `active` flag is not consulted.
    pub active_subscriptions: u64,
}

/// Platform-wide report for admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    pub total_subscriptions: u64,
    pub total_revenue: u64,
}

/// Derives counts from the subscription store.
pub struct AnalyticsService<'a> {
    subscriptions: &'a dyn SubscriptionStore,
}

impl<'a> AnalyticsService<'a> {
    #[must_use]
    pub const fn new(subscriptions: &'a dyn SubscriptionStore) -> Self {
        Self { subscriptions }
    }

    /// Count the subscriptions to a chef.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub async fn chef_analytics(&self, chef_id: UserId) -> Result<ChefAnalytics, RepositoryError> {
        let total = self.subscriptions.list_by_chef(chef_id).await?.len() as u64;

        Ok(ChefAnalytics {
            chef_id,
            total_subscriptions: total,
            active_subscriptions: total,
        })
    }

    /// Count all subscriptions and derive the revenue figure.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub async fn admin_summary(&self) -> Result<AdminSummary, RepositoryError> {
        let total = self.subscriptions.count().await?;

        Ok(AdminSummary {
            total_subscriptions: total,
            total_revenue: total.saturating_mul(REVENUE_PER_SUBSCRIPTION),
        })
    }
}
