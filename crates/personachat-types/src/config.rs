//! Global configuration types for personachat.
//!
//! `GlobalConfig` represents the top-level `config.toml` that controls the
//! completion model, sampling parameters, and history window.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the service.
///
/// Loaded from `{data_dir}/config.toml`. All fields have sensible defaults,
/// so a missing or partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Completion model identifier.
    #[serde(default = "default_model")]
    pub model: String,

    /// Sampling temperature for every completion call.
    #[serde(default = "default_temperature")]
    pub temperature: f64,

    /// Maximum tokens the provider may generate per reply.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// How many recent messages are stitched into the prompt.
    #[serde(default = "default_history_window")]
    pub history_window: u32,

    /// Override the provider base URL (any OpenAI-compatible endpoint).
    #[serde(default)]
    pub base_url: Option<String>,
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_tokens() -> u32 {
    150
}

fn default_history_window() -> u32 {
    10
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            history_window: default_history_window(),
            base_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_config_default_values() {
        let config = GlobalConfig::default();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.max_tokens, 150);
        assert_eq!(config.history_window, 10);
        assert!(config.base_url.is_none());
    }

    #[test]
    fn test_global_config_deserialize_empty_uses_defaults() {
        let config: GlobalConfig = toml::from_str("").unwrap();
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert!((config.temperature - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_global_config_deserialize_partial() {
        let config: GlobalConfig = toml::from_str(
            r#"
model = "gpt-4o-mini"
history_window = 20
"#,
        )
        .unwrap();
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.history_window, 20);
        assert_eq!(config.max_tokens, 150);
    }
}
