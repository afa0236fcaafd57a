//! Database pool with split reader/writer connections in WAL mode.
//!
//! SQLite allows only one writer at a time. This module provides a
//! `DatabasePool` with a multi-connection reader pool for concurrent reads
//! and a single-connection writer pool for serialized writes. Both use WAL
//! journal mode and enforce foreign keys.

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Split read/write pool for SQLite with WAL mode.
///
/// - `reader`: Multi-connection pool (up to 8) for concurrent SELECT queries.
/// - `writer`: Single-connection pool for serialized INSERT/UPDATE/DELETE.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Create a new DatabasePool with split reader/writer connections.
    ///
    /// Runs migrations automatically on the writer pool. Both pools use WAL
    /// journal mode, foreign key enforcement, and a 5-second busy timeout.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let base_opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true)
            .busy_timeout(std::time::Duration::from_secs(5))
            .create_if_missing(true);

        let read_opts = base_opts.clone().read_only(true);
        let write_opts = base_opts;

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(write_opts)
            .await?;

        // Run migrations on writer before opening reader pool
        sqlx::migrate!("../../migrations").run(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(read_opts)
            .await?;

        Ok(Self { reader, writer })
    }
}

/// Resolve the data directory from `PERSONACHAT_DATA_DIR`, falling back to
/// `~/.personachat`.
pub fn resolve_data_dir() -> PathBuf {
    std::env::var("PERSONACHAT_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".personachat")
        })
}

/// The sqlite URL for the database file inside a data directory.
pub fn database_url(data_dir: &Path) -> String {
    format!(
        "sqlite://{}?mode=rwc",
        data_dir.join("personachat.db").display()
    )
}
