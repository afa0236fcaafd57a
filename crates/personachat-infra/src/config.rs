//! Global configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.personachat/` in
//! production) and deserializes it into [`GlobalConfig`]. Falls back to
//! defaults when the file is missing or malformed.

use std::path::Path;

use personachat_types::config::GlobalConfig;

/// Load global configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`GlobalConfig::default()`].
/// - If the file exists but fails to parse, logs a warning and returns the default.
/// - If the file exists and parses successfully, returns the parsed config.
pub async fn load_global_config(data_dir: &Path) -> GlobalConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return GlobalConfig::default();
        }
    };

    match toml::from_str::<GlobalConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            GlobalConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_global_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.model, "gpt-3.5-turbo");
        assert_eq!(config.max_tokens, 150);
        assert_eq!(config.history_window, 10);
        assert!(config.base_url.is_none());
    }

    #[tokio::test]
    async fn load_global_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(
            &config_path,
            r#"
model = "gpt-4o-mini"
temperature = 0.5
max_tokens = 300
history_window = 20
base_url = "https://gateway.example.com/v1"
"#,
        )
        .await
        .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.max_tokens, 300);
        assert_eq!(config.history_window, 20);
        assert_eq!(
            config.base_url.as_deref(),
            Some("https://gateway.example.com/v1")
        );
    }

    #[tokio::test]
    async fn load_global_config_partial_toml_fills_defaults() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "model = \"gpt-4o\"\n")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.max_tokens, 150);
        assert_eq!(config.history_window, 10);
    }

    #[tokio::test]
    async fn load_global_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        tokio::fs::write(&config_path, "this is not { valid toml !!!")
            .await
            .unwrap();

        let config = load_global_config(tmp.path()).await;
        assert_eq!(config.model, "gpt-3.5-turbo");
    }
}
