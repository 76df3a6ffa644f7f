//! User roles.

use serde::{Deserialize, Serialize};

/// Role a user registers with.
///
/// Roles carry no permissions in the API; they only describe the account.
/// A chef is the receiving side of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "user_role", rename_all = "SCREAMING_SNAKE_CASE")
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Regular subscriber.
    #[default]
    User,
    /// Home cook offering meal plans.
    Chef,
    /// Operator account.
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "USER"),
            Self::Chef => write!(f, "CHEF"),
            Self::Admin => write!(f, "ADMIN"),
        }
    }
}
