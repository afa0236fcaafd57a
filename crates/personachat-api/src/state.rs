//! Application state wiring all services together.
//!
//! The chat service is generic over repository and provider traits, but
//! AppState pins it to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::SecretString;

use personachat_core::chat::service::ChatService;
use personachat_infra::auth::JwtCodec;
use personachat_infra::config::load_global_config;
use personachat_infra::llm::OpenAiCompatibleProvider;
use personachat_infra::sqlite::chat::SqliteChatRepository;
use personachat_infra::sqlite::pool::{database_url, resolve_data_dir, DatabasePool};
use personachat_infra::sqlite::user::SqliteUserRepository;
use personachat_types::config::GlobalConfig;

/// Concrete type alias for the service generics pinned to infra implementations.
pub type ConcreteChatService =
    ChatService<SqliteChatRepository, SqliteUserRepository, OpenAiCompatibleProvider>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub chat_service: Arc<ConcreteChatService>,
    pub jwt: JwtCodec,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize the application state from the environment: resolve the
    /// data directory, load config.toml, read secrets, connect to the DB.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_global_config(&data_dir).await;

        let api_key = std::env::var("OPENAI_API_KEY")
            .map(SecretString::from)
            .map_err(|_| anyhow::anyhow!("OPENAI_API_KEY is not set"))?;
        let jwt_secret = std::env::var("PERSONACHAT_JWT_SECRET")
            .map(SecretString::from)
            .map_err(|_| anyhow::anyhow!("PERSONACHAT_JWT_SECRET is not set"))?;

        Self::build(data_dir, config, api_key, jwt_secret).await
    }

    /// Wire services against an explicit data directory and secrets.
    pub async fn build(
        data_dir: PathBuf,
        config: GlobalConfig,
        api_key: SecretString,
        jwt_secret: SecretString,
    ) -> anyhow::Result<Self> {
        let db_pool = DatabasePool::new(&database_url(&data_dir)).await?;

        let provider = match config.base_url.as_deref() {
            Some(base_url) => OpenAiCompatibleProvider::custom(base_url, api_key, &config.model),
            None => OpenAiCompatibleProvider::openai(api_key, &config.model),
        };

        let chat_service = ChatService::new(
            SqliteChatRepository::new(db_pool.clone()),
            SqliteUserRepository::new(db_pool.clone()),
            provider,
            config,
        );

        Ok(Self {
            chat_service: Arc::new(chat_service),
            jwt: JwtCodec::new(jwt_secret),
            data_dir,
            db_pool,
        })
    }
}
