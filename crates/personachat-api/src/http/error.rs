//! Application error type mapping to HTTP status codes.
//!
//! Every error renders as `{"message": "..."}` JSON, the shape the web
//! client displays directly.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use personachat_types::error::{AuthError, ChatError};

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Chat orchestration errors.
    Chat(ChatError),
    /// Token errors.
    Auth(AuthError),
    /// Request validation error.
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<ChatError> for AppError {
    fn from(e: ChatError) -> Self {
        AppError::Chat(e)
    }
}

impl From<AuthError> for AppError {
    fn from(e: AuthError) -> Self {
        AppError::Auth(e)
    }
}

impl AppError {
    /// The HTTP status this error renders as.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Chat(ChatError::EmptyContent) => StatusCode::BAD_REQUEST,
            AppError::Chat(ChatError::SessionNotEmpty) => StatusCode::BAD_REQUEST,
            AppError::Chat(ChatError::SessionNotFound) => StatusCode::NOT_FOUND,
            AppError::Chat(ChatError::UserNotFound) => StatusCode::NOT_FOUND,
            AppError::Chat(ChatError::Upstream(_)) => StatusCode::BAD_GATEWAY,
            AppError::Chat(ChatError::Repository(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Auth(AuthError::MissingToken) => StatusCode::UNAUTHORIZED,
            AppError::Auth(AuthError::InvalidToken) => StatusCode::UNAUTHORIZED,
            AppError::Auth(AuthError::Encoding(_)) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match &self {
            AppError::Chat(ChatError::Upstream(e)) => {
                tracing::warn!(error = %e, "Upstream completion failure");
                "Error communicating with completion service".to_string()
            }
            AppError::Chat(ChatError::Repository(e)) => {
                tracing::error!(error = %e, "Storage failure");
                "Internal server error".to_string()
            }
            AppError::Chat(e) => e.to_string(),
            AppError::Auth(AuthError::MissingToken) => {
                "Not authorized, no token".to_string()
            }
            AppError::Auth(AuthError::InvalidToken) => {
                "Not authorized, token failed".to_string()
            }
            AppError::Auth(AuthError::Encoding(e)) => {
                tracing::error!(error = %e, "Token encoding failure");
                "Internal server error".to_string()
            }
            AppError::Validation(msg) => msg.clone(),
            AppError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal error");
                "Internal server error".to_string()
            }
        };

        (status, Json(json!({ "message": message }))).into_response()
    }
}
