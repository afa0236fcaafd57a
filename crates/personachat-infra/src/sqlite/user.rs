//! SQLite user repository implementation.
//!
//! Implements `UserRepository` from `personachat-core` using sqlx with split
//! read/write pools: raw queries, a private Row struct, reader for SELECTs,
//! writer for INSERTs.

use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use personachat_core::chat::repository::UserRepository;
use personachat_types::error::RepositoryError;
use personachat_types::user::User;

use super::pool::DatabasePool;

/// SQLite-backed implementation of `UserRepository`.
pub struct SqliteUserRepository {
    pool: DatabasePool,
}

impl SqliteUserRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }
}

/// Internal row type for mapping SQLite rows to the domain User.
struct UserRow {
    id: String,
    google_id: String,
    email: String,
    name: String,
    profile_pic: Option<String>,
    created_at: String,
}

impl UserRow {
    fn from_row(row: &sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self {
            id: row.try_get("id")?,
            google_id: row.try_get("google_id")?,
            email: row.try_get("email")?,
            name: row.try_get("name")?,
            profile_pic: row.try_get("profile_pic")?,
            created_at: row.try_get("created_at")?,
        })
    }

    fn into_user(self) -> Result<User, RepositoryError> {
        let id = Uuid::parse_str(&self.id)
            .map_err(|e| RepositoryError::Query(format!("invalid user id: {e}")))?;
        let created_at = parse_datetime(&self.created_at)?;

        Ok(User {
            id,
            google_id: self.google_id,
            email: self.email,
            name: self.name,
            profile_pic: self.profile_pic,
            created_at,
        })
    }
}

fn parse_datetime(s: &str) -> Result<DateTime<Utc>, RepositoryError> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| RepositoryError::Query(format!("invalid datetime: {e}")))
}

impl UserRepository for SqliteUserRepository {
    async fn create(&self, user: &User) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO users (id, google_id, email, name, profile_pic, created_at)
               VALUES (?, ?, ?, ?, ?, ?)"#,
        )
        .bind(user.id.to_string())
        .bind(&user.google_id)
        .bind(&user.email)
        .bind(&user.name)
        .bind(&user.profile_pic)
        .bind(user.created_at.to_rfc3339())
        .execute(&self.pool.writer)
        .await
        .map_err(|e| RepositoryError::Query(e.to_string()))?;

        Ok(())
    }

    async fn find_by_id(&self, user_id: &Uuid) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let user_row =
                    UserRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(user_row.into_user()?))
            }
            None => Ok(None),
        }
    }

    async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query("SELECT * FROM users WHERE google_id = ?")
            .bind(google_id)
            .fetch_optional(&self.pool.reader)
            .await
            .map_err(|e| RepositoryError::Query(e.to_string()))?;

        match row {
            Some(row) => {
                let user_row =
                    UserRow::from_row(&row).map_err(|e| RepositoryError::Query(e.to_string()))?;
                Ok(Some(user_row.into_user()?))
            }
            None => Ok(None),
        }
    }
}
