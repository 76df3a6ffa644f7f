//! Unified error handling with Sentry integration.
//!
//! All route handlers return `Result<ApiResponse<T>, AppError>`. `AppError`
//! renders as the standard envelope. Business rejections (duplicate email,
//! bad login, unknown user) travel as HTTP 200 with the code in `statusCode`;
//! malformed input is a real 400 and server faults a real 500.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::RepositoryError;
use crate::response::ApiResponse;
use crate::services::{AuthError, ChefError, SubscriptionError};

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Subscription operation failed.
    #[error("Subscription error: {0}")]
    Subscription(#[from] SubscriptionError),

    /// Chef lookup failed.
    #[error("Chef error: {0}")]
    Chef(#[from] ChefError),

    /// Request failed input validation.
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl AppError {
    /// Status code reported inside the envelope.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Auth(AuthError::EmailTaken) | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Auth(AuthError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            Self::Subscription(SubscriptionError::UserOrChefNotFound)
            | Self::Chef(ChefError::NotFound) => StatusCode::NOT_FOUND,
            Self::Auth(AuthError::PasswordHash | AuthError::Repository(_))
            | Self::Subscription(SubscriptionError::Repository(_))
            | Self::Chef(ChefError::Repository(_))
            | Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Status code of the HTTP response itself.
    ///
    /// Business rejections are answered with 200 and the envelope carries the code.
    #[must_use]
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::Auth(AuthError::EmailTaken | AuthError::InvalidCredentials)
            | Self::Subscription(SubscriptionError::UserOrChefNotFound)
            | Self::Chef(ChefError::NotFound) => StatusCode::OK,
            _ => self.status_code(),
        }
    }

    /// Client-facing message. Server faults never leak their details.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Auth(AuthError::EmailTaken) => "Email already exists".to_owned(),
            Self::Auth(AuthError::InvalidCredentials) => "Invalid credentials".to_owned(),
            Self::Subscription(SubscriptionError::UserOrChefNotFound) => {
                "User or Chef not found".to_owned()
            }
            Self::Chef(ChefError::NotFound) => "Chef not found".to_owned(),
            Self::Validation(msg) => msg.clone(),
            _ => "Internal server error".to_owned(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let mut response = ApiResponse::error(status, self.client_message()).into_response();
        *response.status_mut() = self.http_status();
        response
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of actions
/// leading up to an error.
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn statuses(err: AppError) -> (StatusCode, StatusCode) {
        let envelope = err.status_code();
        let response = err.into_response();
        (envelope, response.status())
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::Validation("name must not be blank".to_string());
        assert_eq!(err.to_string(), "Validation failed: name must not be blank");
    }

    #[test]
    fn test_business_errors_use_http_200() {
        assert_eq!(
            statuses(AppError::Auth(AuthError::EmailTaken)),
            (StatusCode::BAD_REQUEST, StatusCode::OK)
        );
        assert_eq!(
            statuses(AppError::Auth(AuthError::InvalidCredentials)),
            (StatusCode::UNAUTHORIZED, StatusCode::OK)
        );
        assert_eq!(
            statuses(AppError::Subscription(SubscriptionError::UserOrChefNotFound)),
            (StatusCode::NOT_FOUND, StatusCode::OK)
        );
        assert_eq!(
            statuses(AppError::Chef(ChefError::NotFound)),
            (StatusCode::NOT_FOUND, StatusCode::OK)
        );
    }

    #[test]
    fn test_validation_and_faults_use_transport_status() {
        assert_eq!(
            statuses(AppError::Validation("bad".to_string())),
            (StatusCode::BAD_REQUEST, StatusCode::BAD_REQUEST)
        );
        assert_eq!(
            statuses(AppError::Database(RepositoryError::Conflict("dup".to_string()))),
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                StatusCode::INTERNAL_SERVER_ERROR
            )
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::Database(RepositoryError::DataCorruption("bad row".to_string()));
        assert_eq!(err.client_message(), "Internal server error");
    }
}
