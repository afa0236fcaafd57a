//! Repository trait definitions for users, sessions, and messages.
//!
//! Implementations live in personachat-infra (e.g., `SqliteChatRepository`).
//! Uses native async fn in traits (RPITIT, Rust 2024 edition).

use personachat_types::chat::{ChatMessage, ChatSession};
use personachat_types::error::RepositoryError;
use personachat_types::persona::PersonaKind;
use personachat_types::user::User;
use uuid::Uuid;

/// Repository trait for user persistence.
pub trait UserRepository: Send + Sync {
    /// Persist a new user.
    fn create(
        &self,
        user: &User,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Get a user by id.
    fn find_by_id(
        &self,
        user_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;

    /// Get a user by their Google account id.
    fn find_by_google_id(
        &self,
        google_id: &str,
    ) -> impl std::future::Future<Output = Result<Option<User>, RepositoryError>> + Send;
}

/// Repository trait for chat session and message persistence.
pub trait ChatRepository: Send + Sync {
    /// Persist a new chat session.
    fn create_session(
        &self,
        session: &ChatSession,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Get a session by its unique id.
    fn get_session(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Option<ChatSession>, RepositoryError>> + Send;

    /// Find the most recently updated non-deleted session for a
    /// (user, persona) pair.
    fn find_active_session(
        &self,
        user_id: &Uuid,
        persona: PersonaKind,
    ) -> impl std::future::Future<Output = Result<Option<ChatSession>, RepositoryError>> + Send;

    /// Bump a session's `updated_at` to now.
    fn touch_session(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Append a message to a session.
    fn save_message(
        &self,
        message: &ChatMessage,
    ) -> impl std::future::Future<Output = Result<(), RepositoryError>> + Send;

    /// Get all messages for a session, ordered by timestamp ASC.
    fn get_messages(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, RepositoryError>> + Send;

    /// Get the last `limit` messages for a session, in chronological order.
    fn get_recent_messages(
        &self,
        session_id: &Uuid,
        limit: i64,
    ) -> impl std::future::Future<Output = Result<Vec<ChatMessage>, RepositoryError>> + Send;

    /// Get the total number of messages in a session.
    fn count_messages(
        &self,
        session_id: &Uuid,
    ) -> impl std::future::Future<Output = Result<u32, RepositoryError>> + Send;
}
