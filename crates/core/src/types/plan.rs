//! Subscription plan tiers.

use serde::{Deserialize, Serialize};

/// Billing cadence of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "subscription_plan", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubscriptionPlan {
    Weekly,
    Monthly,
}

impl std::fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weekly => write!(f, "WEEKLY"),
            Self::Monthly => write!(f, "MONTHLY"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let plan: SubscriptionPlan = serde_json::from_str("\"MONTHLY\"").unwrap();
        assert_eq!(plan, SubscriptionPlan::Monthly);
        assert_eq!(plan.to_string(), "MONTHLY");
        assert!(serde_json::from_str::<SubscriptionPlan>("\"YEARLY\"").is_err());
    }
}
