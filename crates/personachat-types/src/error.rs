use thiserror::Error;

use crate::llm::LlmError;

/// Errors from repository operations (used by trait definitions in
/// personachat-core).
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database connection error")]
    Connection,

    #[error("query error: {0}")]
    Query(String),

    #[error("entity not found")]
    NotFound,
}

/// Errors from the chat orchestrator.
///
/// The taxonomy is flat: validation, not-found, upstream failure. None of
/// these are retried.
#[derive(Debug, Error)]
pub enum ChatError {
    #[error("message content is required")]
    EmptyContent,

    #[error("chat session not found")]
    SessionNotFound,

    #[error("user not found")]
    UserNotFound,

    #[error("session already has messages")]
    SessionNotEmpty,

    #[error("completion service error: {0}")]
    Upstream(#[from] LlmError),

    #[error("storage error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Errors from token issuance and verification.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no token provided")]
    MissingToken,

    #[error("token verification failed")]
    InvalidToken,

    #[error("token encoding failed: {0}")]
    Encoding(String),
}
