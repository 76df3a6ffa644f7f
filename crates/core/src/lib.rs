//! HomeFlame Core - Shared domain types.
//!
//! This crate provides the types used by every HomeFlame component:
//! - `server` - HTTP API (auth, contact, subscriptions, analytics)
//! - `cli` - Command-line tools for migrations and account bootstrap
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP. Database encoding is available behind the `postgres` feature.
//!
//! # Modules
//!
//! - [`types`] - Typed IDs, emails, user roles and subscription plans

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
