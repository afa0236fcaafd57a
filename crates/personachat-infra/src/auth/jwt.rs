//! JWT issuance and verification.
//!
//! Tokens carry the user id as `sub` and expire after 30 days. HS256 with
//! a shared secret; the secret comes from the environment at startup and
//! never appears in config files.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use personachat_types::error::AuthError;

/// Token lifetime. Matches the session length the web client expects.
const TOKEN_TTL_DAYS: i64 = 30;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id.
    sub: String,
    /// Expiry as a unix timestamp.
    exp: i64,
}

/// Encodes and verifies bearer tokens for API access.
#[derive(Clone)]
pub struct JwtCodec {
    secret: SecretString,
}

impl JwtCodec {
    pub fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Issue a token for the given user, valid for 30 days.
    pub fn issue(&self, user_id: &Uuid) -> Result<String, AuthError> {
        let claims = Claims {
            sub: user_id.to_string(),
            exp: (Utc::now() + Duration::days(TOKEN_TTL_DAYS)).timestamp(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.secret.expose_secret().as_bytes()),
        )
        .map_err(|e| AuthError::Encoding(e.to_string()))
    }

    /// Verify a token and return the user id it was issued for.
    ///
    /// Expired, malformed, or wrongly-signed tokens all map to
    /// [`AuthError::InvalidToken`].
    pub fn verify(&self, token: &str) -> Result<Uuid, AuthError> {
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.expose_secret().as_bytes()),
            &Validation::default(),
        )
        .map_err(|_| AuthError::InvalidToken)?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec(secret: &str) -> JwtCodec {
        JwtCodec::new(SecretString::from(secret.to_string()))
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let codec = codec("test-secret");
        let user_id = Uuid::now_v7();

        let token = codec.issue(&user_id).unwrap();
        let verified = codec.verify(&token).unwrap();
        assert_eq!(verified, user_id);
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let user_id = Uuid::now_v7();
        let token = codec("secret-a").issue(&user_id).unwrap();

        let err = codec("secret-b").verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        let err = codec("test-secret").verify("not.a.token").unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }

    #[test]
    fn test_verify_rejects_expired() {
        let codec = codec("test-secret");
        let claims = Claims {
            sub: Uuid::now_v7().to_string(),
            exp: (Utc::now() - Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let err = codec.verify(&token).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken));
    }
}
