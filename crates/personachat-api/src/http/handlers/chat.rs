//! Chat endpoints: persona catalog, session lifecycle, messaging.
//!
//! Response shapes match what the web client renders:
//! - start -> the session with its embedded messages
//! - message -> the assistant reply plus the persisted exchange
//! - history -> session metadata plus ordered messages
//! - first-message -> the stored greeting

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use personachat_core::persona;
use personachat_types::chat::{ChatMessage, Sender};
use personachat_types::persona::{PersonaCard, PersonaKind};

use crate::http::error::AppError;
use crate::http::extractors::auth::CurrentUser;
use crate::state::AppState;

/// One message as rendered in responses.
#[derive(Debug, Serialize)]
pub struct MessageView {
    pub sender: Sender,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl From<&ChatMessage> for MessageView {
    fn from(m: &ChatMessage) -> Self {
        Self {
            sender: m.sender,
            content: m.content.clone(),
            timestamp: m.timestamp,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StartSessionResponse {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(rename = "personaType")]
    pub persona_type: PersonaKind,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
    pub messages: Vec<MessageView>,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct SendMessageResponse {
    /// The assistant reply text.
    pub content: String,
    /// The persisted exchange: user turn then assistant turn.
    pub messages: Vec<MessageView>,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    #[serde(rename = "sessionId")]
    pub session_id: Uuid,
    #[serde(rename = "personaType")]
    pub persona_type: PersonaKind,
    pub messages: Vec<MessageView>,
}

#[derive(Debug, Serialize)]
pub struct FirstMessageResponse {
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// GET /api/chat/personas - the persona catalog. Public.
pub async fn list_personas() -> Json<Vec<PersonaCard>> {
    Json(persona::cards())
}

/// POST /api/chat/{persona}/start - find or create the session for this
/// persona and return it with its messages.
pub async fn start_session(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(persona): Path<String>,
) -> Result<Json<StartSessionResponse>, AppError> {
    let persona: PersonaKind = persona
        .parse()
        .map_err(|_| AppError::Validation(format!("Invalid persona type: '{persona}'")))?;

    let (session, messages) = state.chat_service.start_session(user.id, persona).await?;

    Ok(Json(StartSessionResponse {
        id: session.id,
        persona_type: session.persona,
        created_at: session.created_at,
        updated_at: session.updated_at,
        messages: messages.iter().map(MessageView::from).collect(),
    }))
}

/// POST /api/chat/{session_id}/message - send a user message and get the
/// assistant reply.
pub async fn send_message(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(session_id): Path<Uuid>,
    Json(body): Json<SendMessageRequest>,
) -> Result<Json<SendMessageResponse>, AppError> {
    let exchange = state
        .chat_service
        .send_message(user.id, session_id, &body.content)
        .await?;

    Ok(Json(SendMessageResponse {
        content: exchange.ai_message.content.clone(),
        messages: vec![
            MessageView::from(&exchange.user_message),
            MessageView::from(&exchange.ai_message),
        ],
    }))
}

/// GET /api/chat/{session_id} - full conversation history in display order.
pub async fn get_history(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(session_id): Path<Uuid>,
) -> Result<Json<HistoryResponse>, AppError> {
    let (session, messages) = state.chat_service.get_history(user.id, session_id).await?;

    Ok(Json(HistoryResponse {
        session_id: session.id,
        persona_type: session.persona,
        messages: messages.iter().map(MessageView::from).collect(),
    }))
}

/// POST /api/chat/{session_id}/first-message - store the persona's opening
/// greeting. Only valid while the session is empty.
pub async fn send_first_message(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Path(session_id): Path<Uuid>,
) -> Result<Json<FirstMessageResponse>, AppError> {
    let message = state
        .chat_service
        .send_first_message(user.id, session_id)
        .await?;

    Ok(Json(FirstMessageResponse {
        content: message.content,
        timestamp: message.timestamp,
    }))
}
