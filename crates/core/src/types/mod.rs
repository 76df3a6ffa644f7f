//! Core types for HomeFlame.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod email;
pub mod id;
pub mod plan;
pub mod role;

pub use email::{Email, EmailError};
pub use id::*;
pub use plan::SubscriptionPlan;
pub use role::Role;
