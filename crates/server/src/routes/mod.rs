//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                          - Liveness check
//! GET  /health/ready                    - Readiness check (store reachable)
//!
//! # Auth
//! POST /api/auth/register               - Register an account
//! POST /api/auth/login                  - Check email/password
//!
//! # Contact
//! POST /api/contact                     - Submit a contact message
//! GET  /api/contact/admin/messages      - List contact messages
//!
//! # Subscriptions
//! POST /api/subscriptions               - Subscribe a user to a chef
//! GET  /api/subscriptions/user/{userId} - Subscriptions held by a user
//! GET  /api/subscriptions/chef/{chefId} - Subscriptions to a chef
//!
//! # Chefs
//! GET  /api/chefs                       - Chef directory
//! GET  /api/chefs/{chefId}              - One chef
//!
//! # Analytics
//! GET  /api/chef/analytics/{chefId}     - Per-chef subscription counts
//! GET  /api/admin/reports/summary       - Platform summary
//! ```
//!
//! No route requires authentication.

pub mod analytics;
pub mod auth;
pub mod chefs;
pub mod contact;
pub mod extract;
pub mod subscriptions;

use axum::{
    Router,
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::middleware::{cors_layer, request_id_middleware};
use crate::state::AppState;

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
}

/// Create the contact routes router.
pub fn contact_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(contact::submit))
        .route("/admin/messages", get(contact::list_messages))
}

/// Create the subscription routes router.
pub fn subscription_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(subscriptions::subscribe))
        .route("/user/{user_id}", get(subscriptions::by_user))
        .route("/chef/{chef_id}", get(subscriptions::by_chef))
}

/// Create the chef directory router.
pub fn chef_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(chefs::list_chefs))
        .route("/{chef_id}", get(chefs::get_chef))
}

/// Create the analytics routes router.
pub fn analytics_routes() -> Router<AppState> {
    Router::new()
        .route("/api/chef/analytics/{chef_id}", get(analytics::chef_analytics))
        .route("/api/admin/reports/summary", get(analytics::admin_summary))
}

/// Create all API routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/auth", auth_routes())
        .nest("/api/contact", contact_routes())
        .nest("/api/subscriptions", subscription_routes())
        .nest("/api/chefs", chef_routes())
        .merge(analytics_routes())
}

/// Build the complete application: health checks, API routes, and the
/// tracing/request-id/CORS middleware, bound to `state`.
pub fn app(state: AppState) -> Router {
    let cors = cors_layer(state.config());

    Router::new()
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .merge(routes())
        .layer(cors)
        .layer(from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                tracing::info_span!(
                    "request",
                    method = %request.method(),
                    uri = %request.uri(),
                    request_id = tracing::field::Empty,
                )
            }),
        )
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}

/// Readiness health check endpoint.
///
/// Returns 503 Service Unavailable if the store backend is not reachable.
async fn readiness(State(state): State<AppState>) -> StatusCode {
    match state.stores().ping().await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::warn!(error = %e, "Readiness check failed");
            StatusCode::SERVICE_UNAVAILABLE
        }
    }
}
