//! Chat orchestrator.
//!
//! `ChatService` coordinates the full conversation lifecycle: bootstrapping
//! a session for a (user, persona) pair, stitching recent history into a
//! completion prompt, forwarding it to the provider, and persisting the
//! user/assistant message pair.
//!
//! Generic over `ChatRepository`, `UserRepository`, and `LlmProvider` to
//! maintain clean architecture (personachat-core never depends on
//! personachat-infra).

use chrono::{Duration, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use personachat_types::chat::{ChatMessage, ChatSession, Sender};
use personachat_types::config::GlobalConfig;
use personachat_types::error::ChatError;
use personachat_types::llm::{CompletionRequest, Message, MessageRole};
use personachat_types::persona::PersonaKind;

use crate::chat::ordering::order_for_display;
use crate::chat::repository::{ChatRepository, UserRepository};
use crate::llm::provider::LlmProvider;
use crate::persona;

/// The persisted result of one `send_message` exchange.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub user_message: ChatMessage,
    pub ai_message: ChatMessage,
}

/// Orchestrates chat session lifecycle, prompt assembly, and message
/// persistence.
pub struct ChatService<C: ChatRepository, U: UserRepository, P: LlmProvider> {
    chat_repo: C,
    user_repo: U,
    provider: P,
    config: GlobalConfig,
}

impl<C: ChatRepository, U: UserRepository, P: LlmProvider> ChatService<C, U, P> {
    pub fn new(chat_repo: C, user_repo: U, provider: P, config: GlobalConfig) -> Self {
        Self {
            chat_repo,
            user_repo,
            provider,
            config,
        }
    }

    /// Access the user repository (used by the auth layer to resolve users).
    pub fn user_repo(&self) -> &U {
        &self.user_repo
    }

    /// Find or create the session for a (user, persona) pair, and return it
    /// with its messages in display order.
    ///
    /// Takes the most recently updated non-deleted session when several
    /// exist, so repeated calls for the same pair return the same session.
    pub async fn start_session(
        &self,
        user_id: Uuid,
        persona: PersonaKind,
    ) -> Result<(ChatSession, Vec<ChatMessage>), ChatError> {
        if self.user_repo.find_by_id(&user_id).await?.is_none() {
            return Err(ChatError::UserNotFound);
        }

        let session = match self.chat_repo.find_active_session(&user_id, persona).await? {
            Some(existing) => existing,
            None => {
                let now = Utc::now();
                let session = ChatSession {
                    id: Uuid::now_v7(),
                    user_id,
                    persona,
                    created_at: now,
                    updated_at: now,
                    deleted_at: None,
                };
                self.chat_repo.create_session(&session).await?;
                info!(session_id = %session.id, persona = %persona, "Chat session created");
                session
            }
        };

        let messages = order_for_display(self.chat_repo.get_messages(&session.id).await?);
        Ok((session, messages))
    }

    /// Forward a user message to the completion provider and persist the
    /// resulting pair.
    ///
    /// The user message is stored before the provider call, so a provider
    /// failure (or a crash mid-exchange) can leave an unanswered user
    /// message behind. The assistant reply is timestamped one second after
    /// the user message.
    pub async fn send_message(
        &self,
        user_id: Uuid,
        session_id: Uuid,
        content: &str,
    ) -> Result<Exchange, ChatError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(ChatError::EmptyContent);
        }

        let session = self.owned_session(user_id, session_id).await?;

        let history = self
            .chat_repo
            .get_recent_messages(&session_id, self.config.history_window as i64)
            .await?;

        let request = self.build_request(session.persona, &history, content);

        let user_timestamp = Utc::now();
        let user_message = ChatMessage {
            id: Uuid::now_v7(),
            session_id,
            sender: Sender::User,
            content: content.to_string(),
            timestamp: user_timestamp,
        };
        self.chat_repo.save_message(&user_message).await?;

        let response = self.provider.complete(&request).await.map_err(|e| {
            warn!(session_id = %session_id, error = %e, "Completion call failed");
            ChatError::Upstream(e)
        })?;

        let ai_message = ChatMessage {
            id: Uuid::now_v7(),
            session_id,
            sender: Sender::Ai,
            content: response.content,
            timestamp: user_timestamp + Duration::seconds(1),
        };
        self.chat_repo.save_message(&ai_message).await?;
        self.chat_repo.touch_session(&session_id).await?;

        info!(
            session_id = %session_id,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "Exchange completed"
        );

        Ok(Exchange {
            user_message,
            ai_message,
        })
    }

    /// All messages of an owned session, in display order.
    pub async fn get_history(
        &self,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<(ChatSession, Vec<ChatMessage>), ChatError> {
        let session = self.owned_session(user_id, session_id).await?;
        let messages = order_for_display(self.chat_repo.get_messages(&session_id).await?);
        Ok((session, messages))
    }

    /// Store a random persona greeting as the session's opening `ai`
    /// message. Rejected once any message exists.
    pub async fn send_first_message(
        &self,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<ChatMessage, ChatError> {
        let session = self.owned_session(user_id, session_id).await?;

        if self.chat_repo.count_messages(&session_id).await? > 0 {
            return Err(ChatError::SessionNotEmpty);
        }

        let greeting = persona::random_greeting(session.persona);
        let message = ChatMessage {
            id: Uuid::now_v7(),
            session_id,
            sender: Sender::Ai,
            content: greeting.to_string(),
            timestamp: Utc::now(),
        };
        self.chat_repo.save_message(&message).await?;

        Ok(message)
    }

    /// Load a session and verify ownership.
    ///
    /// A session owned by another user (or soft-deleted) is reported as
    /// missing, never as someone else's data.
    async fn owned_session(
        &self,
        user_id: Uuid,
        session_id: Uuid,
    ) -> Result<ChatSession, ChatError> {
        match self.chat_repo.get_session(&session_id).await? {
            Some(session) if session.user_id == user_id && session.deleted_at.is_none() => {
                Ok(session)
            }
            _ => Err(ChatError::SessionNotFound),
        }
    }

    /// Prompt assembly: persona system prompt, then the history turns mapped
    /// to user/assistant roles, then the new user turn.
    fn build_request(
        &self,
        persona: PersonaKind,
        history: &[ChatMessage],
        new_content: &str,
    ) -> CompletionRequest {
        let mut messages: Vec<Message> = history
            .iter()
            .map(|m| Message {
                role: match m.sender {
                    Sender::User => MessageRole::User,
                    Sender::Ai => MessageRole::Assistant,
                },
                content: m.content.clone(),
            })
            .collect();

        messages.push(Message {
            role: MessageRole::User,
            content: new_content.to_string(),
        });

        CompletionRequest {
            model: self.config.model.clone(),
            messages,
            system: Some(persona::system_prompt(persona).to_string()),
            max_tokens: self.config.max_tokens,
            temperature: Some(self.config.temperature),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use personachat_types::error::RepositoryError;
    use personachat_types::llm::{CompletionResponse, LlmError, Usage};
    use personachat_types::user::User;

    /// In-memory repositories backing the orchestrator tests.
    #[derive(Default)]
    struct MemStore {
        users: Mutex<Vec<User>>,
        sessions: Mutex<Vec<ChatSession>>,
        messages: Mutex<Vec<ChatMessage>>,
    }

    impl UserRepository for &MemStore {
        async fn create(&self, user: &User) -> Result<(), RepositoryError> {
            self.users.lock().unwrap().push(user.clone());
            Ok(())
        }

        async fn find_by_id(&self, user_id: &Uuid) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.id == *user_id)
                .cloned())
        }

        async fn find_by_google_id(
            &self,
            google_id: &str,
        ) -> Result<Option<User>, RepositoryError> {
            Ok(self
                .users
                .lock()
                .unwrap()
                .iter()
                .find(|u| u.google_id == google_id)
                .cloned())
        }
    }

    impl ChatRepository for &MemStore {
        async fn create_session(&self, session: &ChatSession) -> Result<(), RepositoryError> {
            self.sessions.lock().unwrap().push(session.clone());
            Ok(())
        }

        async fn get_session(
            &self,
            session_id: &Uuid,
        ) -> Result<Option<ChatSession>, RepositoryError> {
            Ok(self
                .sessions
                .lock()
                .unwrap()
                .iter()
                .find(|s| s.id == *session_id)
                .cloned())
        }

        async fn find_active_session(
            &self,
            user_id: &Uuid,
            persona: PersonaKind,
        ) -> Result<Option<ChatSession>, RepositoryError> {
            let sessions = self.sessions.lock().unwrap();
            Ok(sessions
                .iter()
                .filter(|s| {
                    s.user_id == *user_id && s.persona == persona && s.deleted_at.is_none()
                })
                .max_by_key(|s| s.updated_at)
                .cloned())
        }

        async fn touch_session(&self, session_id: &Uuid) -> Result<(), RepositoryError> {
            let mut sessions = self.sessions.lock().unwrap();
            let session = sessions
                .iter_mut()
                .find(|s| s.id == *session_id)
                .ok_or(RepositoryError::NotFound)?;
            session.updated_at = Utc::now();
            Ok(())
        }

        async fn save_message(&self, message: &ChatMessage) -> Result<(), RepositoryError> {
            self.messages.lock().unwrap().push(message.clone());
            Ok(())
        }

        async fn get_messages(
            &self,
            session_id: &Uuid,
        ) -> Result<Vec<ChatMessage>, RepositoryError> {
            let mut msgs: Vec<ChatMessage> = self
                .messages
                .lock()
                .unwrap()
                .iter()
                .filter(|m| m.session_id == *session_id)
                .cloned()
                .collect();
            msgs.sort_by_key(|m| m.timestamp);
            Ok(msgs)
        }

        async fn get_recent_messages(
            &self,
            session_id: &Uuid,
            limit: i64,
        ) -> Result<Vec<ChatMessage>, RepositoryError> {
            let mut msgs = self.get_messages(session_id).await?;
            let skip = msgs.len().saturating_sub(limit as usize);
            Ok(msgs.split_off(skip))
        }

        async fn count_messages(&self, session_id: &Uuid) -> Result<u32, RepositoryError> {
            Ok(self.get_messages(session_id).await?.len() as u32)
        }
    }

    /// Provider stub that records the last request and returns a canned
    /// reply (or a canned failure).
    struct StubProvider {
        reply: &'static str,
        fail: bool,
        last_request: Mutex<Option<CompletionRequest>>,
    }

    impl StubProvider {
        fn replying(reply: &'static str) -> Self {
            Self {
                reply,
                fail: false,
                last_request: Mutex::new(None),
            }
        }

        fn failing() -> Self {
            Self {
                reply: "",
                fail: true,
                last_request: Mutex::new(None),
            }
        }
    }

    impl LlmProvider for &StubProvider {
        fn name(&self) -> &str {
            "stub"
        }

        async fn complete(
            &self,
            request: &CompletionRequest,
        ) -> Result<CompletionResponse, LlmError> {
            *self.last_request.lock().unwrap() = Some(request.clone());
            if self.fail {
                return Err(LlmError::Overloaded("stub outage".to_string()));
            }
            Ok(CompletionResponse {
                id: "cmpl-test".to_string(),
                content: self.reply.to_string(),
                model: request.model.clone(),
                usage: Usage {
                    input_tokens: 42,
                    output_tokens: 7,
                },
            })
        }
    }

    fn service<'a>(
        store: &'a MemStore,
        provider: &'a StubProvider,
    ) -> ChatService<&'a MemStore, &'a MemStore, &'a StubProvider> {
        ChatService::new(store, store, provider, GlobalConfig::default())
    }

    async fn seed_user(store: &MemStore) -> Uuid {
        let user = User {
            id: Uuid::now_v7(),
            google_id: "g-1".to_string(),
            email: "u@example.com".to_string(),
            name: "U".to_string(),
            profile_pic: None,
            created_at: Utc::now(),
        };
        store.create(&user).await.unwrap();
        user.id
    }

    #[tokio::test]
    async fn test_start_session_creates_then_reuses() {
        let store = MemStore::default();
        let provider = StubProvider::replying("hi");
        let svc = service(&store, &provider);
        let user_id = seed_user(&store).await;

        let (first, messages) = svc
            .start_session(user_id, PersonaKind::Therapist)
            .await
            .unwrap();
        assert!(messages.is_empty());

        let (second, _) = svc
            .start_session(user_id, PersonaKind::Therapist)
            .await
            .unwrap();
        assert_eq!(first.id, second.id);

        // A different persona gets its own session.
        let (other, _) = svc
            .start_session(user_id, PersonaKind::Coach)
            .await
            .unwrap();
        assert_ne!(first.id, other.id);
    }

    #[tokio::test]
    async fn test_start_session_unknown_user() {
        let store = MemStore::default();
        let provider = StubProvider::replying("hi");
        let svc = service(&store, &provider);

        let err = svc
            .start_session(Uuid::now_v7(), PersonaKind::Friend)
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::UserNotFound));
    }

    #[tokio::test]
    async fn test_send_message_persists_pair() {
        let store = MemStore::default();
        let provider = StubProvider::replying("Hello from the stub!");
        let svc = service(&store, &provider);
        let user_id = seed_user(&store).await;
        let (session, _) = svc.start_session(user_id, PersonaKind::Friend).await.unwrap();

        let exchange = svc
            .send_message(user_id, session.id, "What's up?")
            .await
            .unwrap();
        assert_eq!(exchange.ai_message.content, "Hello from the stub!");

        let (_, messages) = svc.get_history(user_id, session.id).await.unwrap();
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].sender, Sender::User);
        assert_eq!(messages[0].content, "What's up?");
        assert_eq!(messages[1].sender, Sender::Ai);
        assert!(messages[0].timestamp <= messages[1].timestamp);
    }

    #[tokio::test]
    async fn test_send_message_prompt_shape() {
        let store = MemStore::default();
        let provider = StubProvider::replying("ok");
        let svc = service(&store, &provider);
        let user_id = seed_user(&store).await;
        let (session, _) = svc
            .start_session(user_id, PersonaKind::Scientist)
            .await
            .unwrap();

        svc.send_message(user_id, session.id, "first").await.unwrap();
        svc.send_message(user_id, session.id, "second").await.unwrap();

        let request = provider.last_request.lock().unwrap().clone().unwrap();
        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.max_tokens, 150);
        assert!(request.system.as_deref().unwrap().contains("Dr. Sara"));
        // 2 history turns from the first exchange + the new user turn.
        assert_eq!(request.messages.len(), 3);
        assert_eq!(request.messages[0].role, MessageRole::User);
        assert_eq!(request.messages[1].role, MessageRole::Assistant);
        assert_eq!(request.messages[2].content, "second");
    }

    #[tokio::test]
    async fn test_send_message_rejects_empty() {
        let store = MemStore::default();
        let provider = StubProvider::replying("ok");
        let svc = service(&store, &provider);
        let user_id = seed_user(&store).await;
        let (session, _) = svc.start_session(user_id, PersonaKind::Friend).await.unwrap();

        let err = svc.send_message(user_id, session.id, "   ").await.unwrap_err();
        assert!(matches!(err, ChatError::EmptyContent));

        let (_, messages) = svc.get_history(user_id, session.id).await.unwrap();
        assert!(messages.is_empty());
    }

    #[tokio::test]
    async fn test_send_message_provider_failure_keeps_user_message() {
        let store = MemStore::default();
        let provider = StubProvider::failing();
        let svc = service(&store, &provider);
        let user_id = seed_user(&store).await;
        let (session, _) = svc.start_session(user_id, PersonaKind::Friend).await.unwrap();

        let err = svc
            .send_message(user_id, session.id, "are you there?")
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::Upstream(_)));

        // The user message was written before the provider call; no
        // assistant turn followed.
        let (_, messages) = svc.get_history(user_id, session.id).await.unwrap();
        assert_eq!(messages.len(), 1);
        assert_eq!(messages[0].sender, Sender::User);
    }

    #[tokio::test]
    async fn test_foreign_session_is_not_found() {
        let store = MemStore::default();
        let provider = StubProvider::replying("ok");
        let svc = service(&store, &provider);
        let owner = seed_user(&store).await;
        let intruder = seed_user(&store).await;
        let (session, _) = svc.start_session(owner, PersonaKind::Friend).await.unwrap();

        let err = svc.get_history(intruder, session.id).await.unwrap_err();
        assert!(matches!(err, ChatError::SessionNotFound));

        let err = svc
            .send_message(intruder, session.id, "hello?")
            .await
            .unwrap_err();
        assert!(matches!(err, ChatError::SessionNotFound));
    }

    #[tokio::test]
    async fn test_first_message_only_on_empty_session() {
        let store = MemStore::default();
        let provider = StubProvider::replying("ok");
        let svc = service(&store, &provider);
        let user_id = seed_user(&store).await;
        let (session, _) = svc.start_session(user_id, PersonaKind::Boss).await.unwrap();

        let greeting = svc.send_first_message(user_id, session.id).await.unwrap();
        assert_eq!(greeting.sender, Sender::Ai);
        assert!(crate::persona::greeting_pool(PersonaKind::Boss)
            .contains(&greeting.content.as_str()));

        let err = svc.send_first_message(user_id, session.id).await.unwrap_err();
        assert!(matches!(err, ChatError::SessionNotEmpty));
    }

    #[tokio::test]
    async fn test_history_window_limits_prompt() {
        let store = MemStore::default();
        let provider = StubProvider::replying("ok");
        let config = GlobalConfig {
            history_window: 4,
            ..GlobalConfig::default()
        };
        let svc = ChatService::new(&store, &store, &provider, config);
        let user_id = seed_user(&store).await;
        let (session, _) = svc.start_session(user_id, PersonaKind::Friend).await.unwrap();

        for i in 0..5 {
            svc.send_message(user_id, session.id, &format!("turn {i}"))
                .await
                .unwrap();
        }

        let request = provider.last_request.lock().unwrap().clone().unwrap();
        // 4 history messages + the new user turn.
        assert_eq!(request.messages.len(), 5);
        // The window holds the most recent turns.
        assert_eq!(request.messages[4].content, "turn 4");
    }
}
