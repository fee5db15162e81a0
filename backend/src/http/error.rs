//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
///
/// Derivations never fail; these only cover requests that cannot be decoded
/// into a selection or that hit no route.
#[derive(Debug)]
pub enum AppError {
    /// No such route
    NotFound(String),
    /// Invalid request parameters
    BadRequest { message: String, details: Option<String> },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::BadRequest { message, details } => {
                let mut error = ApiError::new("BAD_REQUEST", message);
                if let Some(details) = details {
                    error = error.with_details(details);
                }
                (StatusCode::BAD_REQUEST, error)
            }
        };

        (status, Json(error)).into_response()
    }
}
