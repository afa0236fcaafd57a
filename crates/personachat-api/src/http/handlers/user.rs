//! User profile endpoint.

use axum::Json;

use personachat_types::user::UserProfile;

use crate::http::extractors::auth::CurrentUser;

/// GET /api/users/profile - the authenticated user's public profile.
pub async fn get_profile(CurrentUser(user): CurrentUser) -> Json<UserProfile> {
    Json(UserProfile::from(&user))
}
