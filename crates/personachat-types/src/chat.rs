//! Chat session and message types.
//!
//! Sessions associate a user with a persona's ongoing conversation;
//! messages are the append-only log of turns within a session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use std::fmt;
use std::str::FromStr;

use crate::persona::PersonaKind;

/// Who produced a message.
///
/// Maps to the CHECK constraint in the SQLite schema:
/// `CHECK (sender IN ('user', 'ai'))`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

impl fmt::Display for Sender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sender::User => write!(f, "user"),
            Sender::Ai => write!(f, "ai"),
        }
    }
}

impl FromStr for Sender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Sender::User),
            "ai" => Ok(Sender::Ai),
            other => Err(format!("invalid sender: '{other}'")),
        }
    }
}

/// A chat session between a user and a persona.
///
/// Lookup logic expects one active (non-deleted) session per
/// (user, persona) pair and always takes the most recently updated one;
/// uniqueness is not enforced, and soft-deleted sessions may accumulate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub id: Uuid,
    pub user_id: Uuid,
    pub persona: PersonaKind,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

/// A single turn within a session.
///
/// Append-only. Display ordering is by `timestamp` ascending, with an
/// exact-timestamp tie placing `user` before `ai`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: Uuid,
    pub session_id: Uuid,
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sender_roundtrip() {
        for sender in [Sender::User, Sender::Ai] {
            let s = sender.to_string();
            let parsed: Sender = s.parse().unwrap();
            assert_eq!(sender, parsed);
        }
    }

    #[test]
    fn test_sender_serde() {
        let json = serde_json::to_string(&Sender::Ai).unwrap();
        assert_eq!(json, "\"ai\"");
        let parsed: Sender = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Sender::Ai);
    }

    #[test]
    fn test_chat_session_serialize() {
        let session = ChatSession {
            id: Uuid::now_v7(),
            user_id: Uuid::now_v7(),
            persona: PersonaKind::Friend,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            deleted_at: None,
        };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"persona\":\"friend\""));
    }
}
