//! Uniform response envelope.
//!
//! Every API endpoint answers with the same JSON shape:
//!
//! ```json
//! {"success": true, "message": "...", "data": {...}, "statusCode": 200, "timestamp": "..."}
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Response envelope wrapping the payload of every API call.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: Option<T>,
    pub status_code: u16,
    pub timestamp: DateTime<Utc>,
}

impl<T: Serialize> ApiResponse<T> {
    /// A 200 envelope carrying `data`.
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            status_code: StatusCode::OK.as_u16(),
            timestamp: Utc::now(),
        }
    }
}

impl ApiResponse<()> {
    /// An error envelope with no data.
    pub fn error(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            status_code: status.as_u16(),
            timestamp: Utc::now(),
        }
    }
}

/// Sent with HTTP 200; the envelope's `statusCode` carries the outcome.
impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
