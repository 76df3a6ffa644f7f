//! Authentication route handlers.
//!
//! Registration and password login. Neither issues a session or token.

use axum::extract::State;
use serde::Deserialize;
use tracing::instrument;

use homeflame_core::Role;

use super::extract::{ApiJson, require_email, require_text};
use crate::error::{Result, add_breadcrumb};
use crate::models::User;
use crate::response::ApiResponse;
use crate::services::AuthService;
use crate::state::AppState;

/// Registration request body.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub role: Role,
}

/// Login request body.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Register a new account.
///
/// POST /api/auth/register
#[instrument(skip_all)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<RegisterRequest>,
) -> Result<ApiResponse<User>> {
    let name = require_text("name", &req.name)?;
    let email = require_email(&req.email)?;
    require_text("password", &req.password)?;

    let user = AuthService::new(state.users())
        .register(name, &email, &req.password, req.role)
        .await?;

    let user_id = user.id.to_string();
    add_breadcrumb("auth", "Registered account", Some(&[("user_id", user_id.as_str())]));
    Ok(ApiResponse::success(user, "Registration successful"))
}

/// Check an email/password pair.
///
/// POST /api/auth/login
#[instrument(skip_all)]
pub async fn login(
    State(state): State<AppState>,
    ApiJson(req): ApiJson<LoginRequest>,
) -> Result<ApiResponse<User>> {
    let email = require_email(&req.email)?;
    require_text("password", &req.password)?;

    let user = AuthService::new(state.users())
        .login(&email, &req.password)
        .await?;

    let user_id = user.id.to_string();
    add_breadcrumb("auth", "Logged in", Some(&[("user_id", user_id.as_str())]));
    Ok(ApiResponse::success(user, "Login successful"))
}
