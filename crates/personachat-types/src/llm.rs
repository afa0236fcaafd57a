//! Completion request/response types for the upstream LLM provider.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role of a message in an LLM conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    System,
    User,
    Assistant,
}

impl fmt::Display for MessageRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageRole::System => write!(f, "system"),
            MessageRole::User => write!(f, "user"),
            MessageRole::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for MessageRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "system" => Ok(MessageRole::System),
            "user" => Ok(MessageRole::User),
            "assistant" => Ok(MessageRole::Assistant),
            other => Err(format!("invalid message role: '{other}'")),
        }
    }
}

/// A single message in an LLM conversation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: MessageRole,
    pub content: String,
}

/// Request to the provider for a (non-streaming) completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<String>,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
}

/// Response from the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub id: String,
    pub content: String,
    pub model: String,
    pub usage: Usage,
}

/// Token usage for a completion.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

/// Errors from provider operations.
///
/// Nothing is retried; every variant is terminal for the request that
/// triggered it.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("provider error: {message}")]
    Provider { message: String },

    #[error("deserialization error: {0}")]
    Deserialization(String),

    #[error("rate limited")]
    RateLimited,

    #[error("provider overloaded: {0}")]
    Overloaded(String),

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("context length exceeded")]
    ContextLengthExceeded,

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_role_roundtrip() {
        for role in [MessageRole::System, MessageRole::User, MessageRole::Assistant] {
            let s = role.to_string();
            let parsed: MessageRole = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_completion_request_serialization_skips_none() {
        let request = CompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![Message {
                role: MessageRole::User,
                content: "hi".to_string(),
            }],
            system: None,
            max_tokens: 150,
            temperature: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("system"));
        assert!(!json.contains("temperature"));
    }

    #[test]
    fn test_llm_error_display() {
        let err = LlmError::Provider {
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "provider error: boom");
    }
}
