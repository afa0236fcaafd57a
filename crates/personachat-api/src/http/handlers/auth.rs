//! Google login endpoint.
//!
//! POST /api/auth/google
//!
//! Upserts the user by their Google account id and returns a bearer token
//! plus the public profile. The profile payload is trusted as sent by the
//! client; token verification against Google's servers is not performed.

use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use personachat_core::chat::repository::UserRepository;
use personachat_types::user::{User, UserProfile};

use crate::http::error::AppError;
use crate::state::AppState;

/// Request body carrying the Google profile payload.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleLoginRequest {
    pub google_id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub profile_pic: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct GoogleLoginResponse {
    pub token: String,
    pub user: UserProfile,
}

/// POST /api/auth/google - log in (or register) with a Google profile.
pub async fn google_login(
    State(state): State<AppState>,
    Json(body): Json<GoogleLoginRequest>,
) -> Result<Json<GoogleLoginResponse>, AppError> {
    if body.google_id.trim().is_empty() || body.email.trim().is_empty() {
        return Err(AppError::Validation(
            "googleId and email are required".to_string(),
        ));
    }

    let repo = state.chat_service.user_repo();

    let user = match repo
        .find_by_google_id(&body.google_id)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))?
    {
        Some(existing) => existing,
        None => {
            let user = User {
                id: Uuid::now_v7(),
                google_id: body.google_id.clone(),
                email: body.email.clone(),
                name: body.name.clone(),
                profile_pic: body.profile_pic.clone(),
                created_at: Utc::now(),
            };
            repo.create(&user)
                .await
                .map_err(|e| AppError::Internal(e.to_string()))?;
            tracing::info!(user_id = %user.id, "User registered");
            user
        }
    };

    let token = state.jwt.issue(&user.id)?;

    Ok(Json(GoogleLoginResponse {
        token,
        user: UserProfile::from(&user),
    }))
}
