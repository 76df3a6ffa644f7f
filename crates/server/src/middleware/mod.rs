//! HTTP middleware stack.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (added in `main`, capture errors and transactions)
//! 2. `TraceLayer` (one span per request)
//! 3. Request ID (recorded on the span and echoed in the response)
//! 4. CORS

pub mod request_id;

use axum::http::{HeaderName, HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::config::ServerConfig;

pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};

/// Build the CORS layer from configuration.
///
/// `*` (the default) allows any origin, which is what the web client expects.
/// An origin that is not a valid header value falls back to `*` with a warning.
#[must_use]
pub fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origin = if config.cors_origin == "*" {
        AllowOrigin::from(Any)
    } else if let Ok(value) = HeaderValue::from_str(&config.cors_origin) {
        AllowOrigin::exact(value)
    } else {
        tracing::warn!(origin = %config.cors_origin, "Invalid CORS origin, allowing any");
        AllowOrigin::from(Any)
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, HeaderName::from_static(REQUEST_ID_HEADER)])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)])
}
