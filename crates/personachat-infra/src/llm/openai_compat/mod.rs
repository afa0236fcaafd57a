//! OpenAI-compatible LLM provider implementation.
//!
//! A single [`OpenAiCompatibleProvider`] serves the official OpenAI API and
//! any endpoint speaking the same chat completions protocol via a
//! configurable base URL.
//!
//! Uses [`async_openai`] for type-safe request/response handling.

pub mod config;

use async_openai::config::OpenAIConfig;
use async_openai::types::chat::{
    ChatCompletionRequestAssistantMessage, ChatCompletionRequestAssistantMessageContent,
    ChatCompletionRequestMessage, ChatCompletionRequestSystemMessage,
    ChatCompletionRequestSystemMessageContent, ChatCompletionRequestUserMessage,
    ChatCompletionRequestUserMessageContent, CreateChatCompletionRequest,
};
use async_openai::Client;
use secrecy::ExposeSecret;

use personachat_core::llm::provider::LlmProvider;
use personachat_types::llm::{
    CompletionRequest, CompletionResponse, LlmError, MessageRole, Usage,
};

use self::config::OpenAiCompatConfig;

/// Unified provider for any OpenAI-compatible chat completions API.
///
/// # API Key Security
///
/// Does NOT derive Debug to prevent accidental exposure of the API key
/// stored inside the `async_openai::Client`.
pub struct OpenAiCompatibleProvider {
    client: Client<OpenAIConfig>,
    provider_name: String,
    model: String,
}

impl OpenAiCompatibleProvider {
    /// Create a new OpenAI-compatible provider from a configuration.
    pub fn new(config: OpenAiCompatConfig) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.api_key.expose_secret())
            .with_api_base(&config.base_url);

        Self {
            client: Client::with_config(openai_config),
            provider_name: config.provider_name,
            model: config.model,
        }
    }

    /// Create an OpenAI provider against `https://api.openai.com/v1`.
    pub fn openai(api_key: secrecy::SecretString, model: &str) -> Self {
        Self::new(config::openai_defaults(api_key, model))
    }

    /// Create a provider against a custom OpenAI-compatible base URL.
    pub fn custom(base_url: &str, api_key: secrecy::SecretString, model: &str) -> Self {
        Self::new(config::custom_defaults(base_url, api_key, model))
    }

    /// Build a [`CreateChatCompletionRequest`] from a generic [`CompletionRequest`].
    fn build_request(
        &self,
        request: &CompletionRequest,
    ) -> Result<CreateChatCompletionRequest, LlmError> {
        let mut messages: Vec<ChatCompletionRequestMessage> = Vec::new();

        // System message
        if let Some(ref system) = request.system {
            messages.push(ChatCompletionRequestMessage::System(
                ChatCompletionRequestSystemMessage {
                    content: ChatCompletionRequestSystemMessageContent::Text(system.clone()),
                    name: None,
                },
            ));
        }

        // Conversation messages
        for msg in &request.messages {
            let oai_msg = match msg.role {
                MessageRole::System => ChatCompletionRequestMessage::System(
                    ChatCompletionRequestSystemMessage {
                        content: ChatCompletionRequestSystemMessageContent::Text(
                            msg.content.clone(),
                        ),
                        name: None,
                    },
                ),
                MessageRole::User => ChatCompletionRequestMessage::User(
                    ChatCompletionRequestUserMessage {
                        content: ChatCompletionRequestUserMessageContent::Text(
                            msg.content.clone(),
                        ),
                        name: None,
                    },
                ),
                MessageRole::Assistant => {
                    #[allow(deprecated)]
                    ChatCompletionRequestMessage::Assistant(
                        ChatCompletionRequestAssistantMessage {
                            content: Some(ChatCompletionRequestAssistantMessageContent::Text(
                                msg.content.clone(),
                            )),
                            refusal: None,
                            name: None,
                            audio: None,
                            tool_calls: None,
                            function_call: None,
                        },
                    )
                }
            };
            messages.push(oai_msg);
        }

        // Use the model from the request if set, otherwise fall back to config default
        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        Ok(CreateChatCompletionRequest {
            model,
            messages,
            max_completion_tokens: Some(request.max_tokens),
            temperature: request.temperature.map(|t| t as f32),
            ..Default::default()
        })
    }
}

impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let oai_request = self.build_request(request)?;

        let response = self
            .client
            .chat()
            .create(oai_request)
            .await
            .map_err(map_openai_error)?;

        // Extract content from the first choice
        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone())
            .unwrap_or_default();

        let usage = response
            .usage
            .map(|u| Usage {
                input_tokens: u.prompt_tokens,
                output_tokens: u.completion_tokens,
            })
            .unwrap_or_default();

        Ok(CompletionResponse {
            id: response.id,
            content,
            model: response.model,
            usage,
        })
    }
}

/// Map an `async_openai::error::OpenAIError` to an [`LlmError`].
fn map_openai_error(err: async_openai::error::OpenAIError) -> LlmError {
    use async_openai::error::OpenAIError;

    match &err {
        OpenAIError::ApiError(api_err) => {
            let code = api_err.code.as_deref().unwrap_or("");
            let error_type = api_err.r#type.as_deref().unwrap_or("");

            if code == "authentication_error"
                || error_type == "authentication_error"
                || api_err.message.contains("Incorrect API key")
                || api_err.message.contains("Invalid API key")
            {
                LlmError::AuthenticationFailed
            } else if code == "rate_limit_exceeded" || error_type == "rate_limit_error" {
                LlmError::RateLimited
            } else if code == "context_length_exceeded"
                || api_err.message.contains("maximum context length")
            {
                LlmError::ContextLengthExceeded
            } else if code == "server_error" || error_type == "overloaded_error" {
                LlmError::Overloaded(api_err.message.clone())
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::Reqwest(reqwest_err) => {
            if let Some(status) = reqwest_err.status() {
                match status.as_u16() {
                    401 => LlmError::AuthenticationFailed,
                    429 => LlmError::RateLimited,
                    529 => LlmError::Overloaded(err.to_string()),
                    _ => LlmError::Provider {
                        message: err.to_string(),
                    },
                }
            } else {
                LlmError::Provider {
                    message: err.to_string(),
                }
            }
        }
        OpenAIError::JSONDeserialize(_, content) => {
            LlmError::Deserialization(format!("failed to parse response: {content}"))
        }
        OpenAIError::InvalidArgument(msg) => LlmError::InvalidRequest(msg.clone()),
        _ => LlmError::Provider {
            message: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use personachat_types::llm::Message;
    use secrecy::SecretString;

    fn test_provider() -> OpenAiCompatibleProvider {
        OpenAiCompatibleProvider::openai(SecretString::from("sk-test"), "gpt-3.5-turbo")
    }

    #[test]
    fn test_openai_factory() {
        let provider = test_provider();
        assert_eq!(provider.name(), "openai");
        assert_eq!(provider.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_custom_factory() {
        let provider = OpenAiCompatibleProvider::custom(
            "https://gateway.example.com/v1",
            SecretString::from("sk-test"),
            "gpt-4o-mini",
        );
        assert_eq!(provider.name(), "openai-compatible");
    }

    #[test]
    fn test_build_request_messages() {
        let provider = test_provider();
        let request = CompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![
                Message {
                    role: MessageRole::User,
                    content: "Hello".to_string(),
                },
                Message {
                    role: MessageRole::Assistant,
                    content: "Hi there!".to_string(),
                },
            ],
            system: Some("Be helpful".to_string()),
            max_tokens: 150,
            temperature: Some(0.7),
        };

        let oai_req = provider.build_request(&request).unwrap();
        assert_eq!(oai_req.model, "gpt-3.5-turbo");
        // 1 system + 2 conversation = 3 messages
        assert_eq!(oai_req.messages.len(), 3);
        assert_eq!(oai_req.max_completion_tokens, Some(150));
        assert!(oai_req.stream.is_none());
    }

    #[test]
    fn test_build_request_empty_model_uses_default() {
        let provider = test_provider();
        let request = CompletionRequest {
            model: String::new(),
            messages: vec![],
            system: None,
            max_tokens: 150,
            temperature: None,
        };

        let oai_req = provider.build_request(&request).unwrap();
        assert_eq!(oai_req.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_map_openai_error_api_auth() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Incorrect API key provided".to_string(),
            r#type: Some("authentication_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::AuthenticationFailed));
    }

    #[test]
    fn test_map_openai_error_rate_limit() {
        use async_openai::error::{ApiError, OpenAIError};
        let api_err = ApiError {
            message: "Rate limit exceeded".to_string(),
            r#type: Some("rate_limit_error".to_string()),
            param: None,
            code: None,
        };
        let err = map_openai_error(OpenAIError::ApiError(api_err));
        assert!(matches!(err, LlmError::RateLimited));
    }

    #[test]
    fn test_map_openai_error_invalid_argument() {
        use async_openai::error::OpenAIError;
        let err = map_openai_error(OpenAIError::InvalidArgument("bad arg".to_string()));
        assert!(matches!(err, LlmError::InvalidRequest(_)));
    }
}
