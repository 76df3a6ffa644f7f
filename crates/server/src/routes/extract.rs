//! Request extractors and input checks.
//!
//! Axum's own rejections are plain text; these wrappers turn them into the
//! standard envelope with a 400 status.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use homeflame_core::Email;

use crate::error::AppError;

/// JSON body extractor that rejects with an [`AppError::Validation`].
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Path extractor that rejects with an [`AppError::Validation`].
pub struct ApiPath<T>(pub T);

impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::Validation(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Require a non-blank text field and return it trimmed.
pub fn require_text<'a>(field: &str, value: &'a str) -> Result<&'a str, AppError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AppError::Validation(format!("{field} must not be blank")));
    }
    Ok(trimmed)
}

/// Require a structurally valid email.
pub fn require_email(value: &str) -> Result<Email, AppError> {
    Email::parse(value).map_err(|e| AppError::Validation(format!("email: {e}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_require_text_trims() {
        assert_eq!(require_text("name", "  Ada ").unwrap(), "Ada");
        let err = require_text("name", " \t").unwrap_err();
        assert_eq!(err.client_message(), "name must not be blank");
    }

    #[test]
    fn test_require_email() {
        assert!(require_email("ada@example.com").is_ok());
        assert!(matches!(
            require_email("ada"),
            Err(AppError::Validation(msg)) if msg.starts_with("email:")
        ));
    }
}
