//! Bearer token authentication extractor.
//!
//! Extracts the JWT from `Authorization: Bearer <token>`, verifies it, and
//! loads the user it was issued for. Handlers taking [`CurrentUser`] are
//! authenticated; the rest are public.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use personachat_core::chat::repository::UserRepository;
use personachat_types::error::{AuthError, ChatError};
use personachat_types::user::User;

use crate::http::error::AppError;
use crate::state::AppState;

/// The authenticated user. Extracting this validates the bearer token.
pub struct CurrentUser(pub User);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = extract_bearer_token(parts)?;
        let user_id = state.jwt.verify(token)?;

        // A valid token for a deleted user reads as a missing user, not an
        // auth failure.
        let user = state
            .chat_service
            .user_repo()
            .find_by_id(&user_id)
            .await
            .map_err(|e| AppError::Internal(e.to_string()))?
            .ok_or(AppError::Chat(ChatError::UserNotFound))?;

        Ok(CurrentUser(user))
    }
}

/// Pull the token out of the `Authorization: Bearer <token>` header.
fn extract_bearer_token(parts: &Parts) -> Result<&str, AuthError> {
    let header = parts
        .headers
        .get("authorization")
        .ok_or(AuthError::MissingToken)?;

    let value = header.to_str().map_err(|_| AuthError::InvalidToken)?;
    let token = value
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingToken)?
        .trim();

    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }

    Ok(token)
}
