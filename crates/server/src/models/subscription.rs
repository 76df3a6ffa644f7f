//! Chef subscriptions.

use chrono::{DateTime, Utc};
use serde::Serialize;

use homeflame_core::{SubscriptionId, SubscriptionPlan, UserId};

/// A user's subscription to a chef's meal plan.
///
/// Records are never updated once written; `active` keeps the value it was
/// created with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: SubscriptionId,
    /// Subscribing user.
    pub user_id: UserId,
    /// Chef being subscribed to.
    pub chef_id: UserId,
    /// Chef's display name at the time of subscribing.
    pub chef_name: String,
    pub plan_type: SubscriptionPlan,
    pub start_date: DateTime<Utc>,
    pub active: bool,
}

/// A subscription before it has been stored.
#[derive(Debug, Clone)]
pub struct NewSubscription {
    pub user_id: UserId,
    pub chef_id: UserId,
    pub chef_name: String,
    pub plan_type: SubscriptionPlan,
    pub start_date: DateTime<Utc>,
    pub active: bool,
}
