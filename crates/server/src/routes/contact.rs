//! Contact form route handlers.

use axum::extract::State;
use serde::Deserialize;
use tracing::instrument;

use super::extract::{ApiJson, require_email, require_text};
use crate::error::Result;
use crate::models::{ContactMessage, NewContactMessage};
use crate::response::ApiResponse;
use crate::services::ContactService;
use crate::state::AppState;

/// Contact form data.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Submit a contact message.
///
/// POST /api/contact
#[instrument(skip_all)]
pub async fn submit(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<ContactForm>,
) -> Result<ApiResponse<ContactMessage>> {
    let message = NewContactMessage {
        name: require_text("name", &form.name)?.to_owned(),
        email: require_email(&form.email)?,
        message: require_text("message", &form.message)?.to_owned(),
    };

    let saved = ContactService::new(state.contact_messages())
        .submit(message)
        .await?;

    Ok(ApiResponse::success(saved, "Message sent successfully"))
}

/// List every contact message.
///
/// GET /api/contact/admin/messages
#[instrument(skip_all)]
pub async fn list_messages(
    State(state): State<AppState>,
) -> Result<ApiResponse<Vec<ContactMessage>>> {
    let messages = ContactService::new(state.contact_messages())
        .list_all()
        .await?;

    Ok(ApiResponse::success(messages, "Messages retrieved successfully"))
}
