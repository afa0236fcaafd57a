//! User identity types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered user, created on first Google login.
///
/// Identity fields come from the Google profile payload; `google_id` is the
/// stable lookup key for repeat logins.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub google_id: String,
    pub email: String,
    pub name: String,
    pub profile_pic: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// The public view of a user returned by the API.
///
/// Omits `google_id`, matching the profile endpoint's field selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(rename = "profilePic")]
    pub profile_pic: Option<String>,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            name: user.name.clone(),
            email: user.email.clone(),
            profile_pic: user.profile_pic.clone(),
        }
    }
}
