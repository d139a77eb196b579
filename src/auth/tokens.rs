//! JWT issuance and verification

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::{error, warn};

use super::models::Claims;
use crate::common::ApiError;

/// Token lifetime in seconds (one hour)
const TOKEN_TTL_SECS: i64 = 3600;

/// Issues and verifies signed, time-limited bearer tokens.
///
/// Constructed once with the signing secret from [`crate::common::AppConfig`];
/// nothing in here reads ambient process state.
pub struct TokenService {
    secret: String,
}

impl TokenService {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Produce a signed HS256 token embedding the user id, expiring in one hour
    pub fn issue(&self, user_id: &str) -> Result<String, ApiError> {
        let exp = (Utc::now() + Duration::seconds(TOKEN_TTL_SECS)).timestamp() as usize;
        let claims = Claims {
            sub: user_id.to_string(),
            exp,
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| {
            error!(error = %e, "Failed to sign token");
            ApiError::InternalServer("jwt error".to_string())
        })
    }

    /// Resolve a token back to its user id
    ///
    /// Fails on malformed input, a bad signature, or an expired `exp` claim.
    pub fn verify(&self, token: &str) -> Result<String, ApiError> {
        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &Validation::new(Algorithm::HS256),
        )
        .map_err(|e| {
            warn!(error = %e, "Token verification failed");
            ApiError::Unauthorized("Token is not valid".to_string())
        })?;

        Ok(decoded.claims.sub)
    }
}
