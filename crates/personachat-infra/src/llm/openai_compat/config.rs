//! Configuration for OpenAI-compatible providers.

use secrecy::SecretString;

/// Configuration for an OpenAI-compatible LLM provider.
///
/// Used to construct an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name (e.g., "openai").
    pub provider_name: String,
    /// Base URL for the API (e.g., "https://api.openai.com/v1").
    pub base_url: String,
    /// API key for authentication.
    pub api_key: SecretString,
    /// Default model identifier used when a request leaves the model empty.
    pub model: String,
}

/// OpenAI default configuration.
///
/// Base URL: `https://api.openai.com/v1`
pub fn openai_defaults(api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai".into(),
        base_url: "https://api.openai.com/v1".into(),
        api_key,
        model: model.into(),
    }
}

/// Configuration for an arbitrary OpenAI-compatible endpoint.
///
/// Used when a deployment points at a proxy or a self-hosted gateway
/// instead of api.openai.com.
pub fn custom_defaults(base_url: &str, api_key: SecretString, model: &str) -> OpenAiCompatConfig {
    OpenAiCompatConfig {
        provider_name: "openai-compatible".into(),
        base_url: base_url.trim_end_matches('/').into(),
        api_key,
        model: model.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_defaults() {
        let config = openai_defaults(SecretString::from("sk-test"), "gpt-3.5-turbo");
        assert_eq!(config.provider_name, "openai");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-3.5-turbo");
    }

    #[test]
    fn test_custom_defaults_trims_trailing_slash() {
        let config = custom_defaults(
            "https://gateway.example.com/v1/",
            SecretString::from("sk-test"),
            "gpt-4o-mini",
        );
        assert_eq!(config.provider_name, "openai-compatible");
        assert_eq!(config.base_url, "https://gateway.example.com/v1");
        assert_eq!(config.model, "gpt-4o-mini");
    }
}
