//! SQLite chat repository implementation.
//!
//! Implements `ChatRepository` from `personachat-core` using sqlx with split
//! read/write pools. Follows the same patterns as `SqliteUserRepository`:
//! raw queries, private Row structs, reader for SELECTs, writer for writes.

use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use personachat_core::chat::repository::ChatRepository;
use personachat_types::chat::{ChatMessage, ChatSession, Sender};
use personachat_types::error::RepositoryError;
use personachat_types::persona::PersonaKind;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `ChatRepository`.
pub struct SqliteChatRepository {
    pool: DatabasePool,
}

impl SqliteChatRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

// ---------------------------------------------------------------------------
// Private Row types for SQLite-to-domain mapping
// ---------------------------------------------------------------------------

struct ChatSessionRow {
    id: String,
    user_id: String,
    persona: String,
    created_at: String,
    updated_at: String,
    deleted_at: Option<String>,
}

impl ChatSessionRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            user_id: row.try_get("user_id")?,
            persona: row.try_get("persona")?,
            created_at: row.try_get("created_at")?,
            updated_at: row.try_get("updated_at")?,
            deleted_at: row.try_get("deleted_at")?,
        })
    }

    fn into_session(self) -> Result<ChatSession, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid session id: {e}")))?;
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| RepositoryError::Query(format!("invalid user_id: {e}")))?;
        let persona: PersonaKind = self
            .persona
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;
        let created_at = parse_datetime(&self.created_at)?;
        let updated_at = parse_datetime(&self.updated_at)?;
        let deleted_at = self.deleted_at.as_deref().map(parse_datetime).transpose()?;

        Ok(ChatSession {
            id,
            user_id,
            persona,
            created_at,
            updated_at,
            deleted_at,
        })
    }
}

struct ChatMessageRow {
    id: String,
    session_id: String,
    sender: String,
    content: String,
    timestamp: String,
}

impl ChatMessageRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            session_id: row.try_get("session_id")?,
            sender: row.try_get("sender")?,
            content: row.try_get("content")?,
            timestamp: row.try_get("timestamp")?,
        })
    }

    fn into_message(self) -> Result<ChatMessage, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid message id: {e}")))?;
        let session_id = Uuid::parse_str(&self.session_id)
            .map_err(|e| RepositoryError::Query(format!("invalid session_id: {e}")))?;
        let sender: Sender = self
            .sender
            .parse()
            .map_err(|e: String| RepositoryError::Query(e))?;
        let timestamp = parse_datetime(&self.timestamp)?;

        Ok(ChatMessage {
            id,
            session_id,
            sender,
            content: self.content,
            timestamp,
        })
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

fn rows_to_messages(
    rows: Vec<sqlx::sqlite::SqliteRow>,
) -> Result<Vec<ChatMessage>, RepositoryError> {
    let mut messages = Vec::with_capacity(rows.len());
    for row in &rows {
        let msg_row =
            ChatMessageRow::from_row(row).map_err(|e| RepositoryError::Query(e.to_string()))?;
        messages.push(msg_row.into_message()?);
    }
    Ok(messages)
}

// ---------------------------------------------------------------------------
// ChatRepository implementation
// ---------------------------------------------------------------------------

impl ChatRepository for SqliteChatRepository {
    async fn create_session(&self, session: &ChatSession) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO chat_sessions (id, user_id, persona, created_at, updated_at, deleted_at)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(session.id.to_string())
        .bind(session.user_id.to_string())
        .bind(session.persona.to_string())
        .bind(format_datetime(&session.created_at))
        .bind(format_datetime(&session.updated_at))
        .bind(session.deleted_at.as_ref().map(format_datetime))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn get_session(
        &self,
        session_id: &Uuid,
    ) -> Result<Option<ChatSession>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM chat_sessions WHERE id = ?")
            .bind(session_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let session_row = ChatSessionRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(session_row.into_session()?))
            }
            None => Ok(None),
        }
    }

    async fn find_active_session(
        &self,
        user_id: &Uuid,
        persona: PersonaKind,
    ) -> Result<Option<ChatSession>, RepositoryError> {
        let row = sqlx::query(
            r#"SELECT * FROM chat_sessions
               WHERE user_id = ? AND persona = ? AND deleted_at IS NULL
               ORDER BY updated_at DESC
               LIMIT 1"#,
        )
        .bind(user_id.to_string())
        .bind(persona.to_string())
        .fetch_optional(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let session_row = ChatSessionRow::from_row(&row)
                    .map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(session_row.into_session()?))
            }
            None => Ok(None),
        }
    }

    async fn touch_session(&self, session_id: &Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE chat_sessions SET updated_at = ? WHERE id = ?")
            .bind(format_datetime(&Utc::now()))
            .bind(session_id.to_string())
            .execute(&self.pool.writer)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    async fn save_message(&self, message: &ChatMessage) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO chat_messages (id, session_id, sender, content, timestamp)
               VALUES (?, ?, ?, ?, ?)"#,
        )
        .bind(message.id.to_string())
        .bind(message.session_id.to_string())
        .bind(message.sender.to_string())
        .bind(&message.content)
        .bind(format_datetime(&message.timestamp))
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn get_messages(&self, session_id: &Uuid) -> Result<Vec<ChatMessage>, RepositoryError> {
        let rows =
            sqlx::query("SELECT * FROM chat_messages WHERE session_id = ? ORDER BY timestamp ASC")
                .bind(session_id.to_string())
                .fetch_all(&self.pool.reader)
                .await
                .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows_to_messages(rows)
    }

    async fn get_recent_messages(
        &self,
        session_id: &Uuid,
        limit: i64,
    ) -> Result<Vec<ChatMessage>, RepositoryError> {
        // Newest `limit` messages, re-sorted into chronological order.
        let rows = sqlx::query(
            r#"SELECT * FROM (
                   SELECT * FROM chat_messages
                   WHERE session_id = ?
                   ORDER BY timestamp DESC
                   LIMIT ?
               ) ORDER BY timestamp ASC"#,
        )
        .bind(session_id.to_string())
        .bind(limit)
        .fetch_all(&self.pool.reader)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        rows_to_messages(rows)
    }

    async fn count_messages(&self, session_id: &Uuid) -> Result<u32, RepositoryError> {
        let row = sqlx::query("SELECT COUNT(*) as cnt FROM chat_messages WHERE session_id = ?")
            .bind(session_id.to_string())
            .fetch_one(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        let count: i64 = row
            .try_get("cnt")
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(count as u32)
    }
}
