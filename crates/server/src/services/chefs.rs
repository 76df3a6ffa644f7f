//! Public chef directory.
//!
//! A chef is any user registered with the `CHEF` role.

use thiserror::Error;

use homeflame_core::{Role, UserId};

use crate::db::{RepositoryError, UserStore};
use crate::models::Chef;

/// Errors from chef lookups.
#[derive(Debug, Error)]
pub enum ChefError {
    /// No user with that ID, or the user is not a chef.
    #[error("chef not found")]
    NotFound,

    #[error("database error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Read-only view of the chefs on the platform.
pub struct ChefDirectory<'a> {
    users: &'a dyn UserStore,
}

impl<'a> ChefDirectory<'a> {
    #[must_use]
    pub const fn new(users: &'a dyn UserStore) -> Self {
        Self { users }
    }

    /// Every chef, in registration order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if the store fails.
    pub async fn list(&self) -> Result<Vec<Chef>, RepositoryError> {
        let chefs = self.users.list_by_role(Role::Chef).await?;
        Ok(chefs.into_iter().map(Chef::from).collect())
    }

    /// One chef by user ID.
    ///
    /// # Errors
    ///
    /// Returns `ChefError::NotFound` if the user is missing or holds another role.
    pub async fn get(&self, id: UserId) -> Result<Chef, ChefError> {
        match self.users.get_by_id(id).await? {
            Some(user) if user.role == Role::Chef => Ok(user.into()),
            _ => Err(ChefError::NotFound),
        }
    }
}
