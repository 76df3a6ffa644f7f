//! Business logic services.
//!
//! Services are constructed per request from the store trait objects held in
//! `AppState` and keep no state of their own.
//!
//! # Services
//!
//! - `auth` - Registration and password login
//! - `chefs` - Public chef directory
//! - `contact` - Contact form messages
//! - `subscriptions` - Chef subscriptions
//! - `analytics` - Subscription counts and the admin summary

pub mod analytics;
pub mod auth;
pub mod chefs;
pub mod contact;
pub mod subscriptions;

pub use analytics::{AdminSummary, AnalyticsService, ChefAnalytics};
pub use auth::{AuthError, AuthService};
pub use chefs::{ChefDirectory, ChefError};
pub use contact::ContactService;
pub use subscriptions::{SubscriptionError, SubscriptionService};
