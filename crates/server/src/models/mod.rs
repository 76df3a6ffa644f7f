//! Domain models for the HomeFlame API.
//!
//! Every model serializes with camelCase field names, which is the JSON
//! shape the web client consumes.

pub mod contact;
pub mod subscription;
pub mod user;

pub use contact::{ContactMessage, NewContactMessage};
pub use subscription::{NewSubscription, Subscription};
pub use user::{Chef, NewUser, User};
