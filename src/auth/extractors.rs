//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::request::Parts,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::common::{ApiError, AppState};

/// Header carrying the bearer token. A custom header, not the Bearer scheme.
const AUTH_HEADER: &str = "x-auth-token";

/// Authenticated user extractor
///
/// Reads the `x-auth-token` header and verifies it with the TokenService,
/// attaching the resolved user id to the handler. Both a missing header and a
/// failed verification reject with 401.
#[derive(Debug)]
pub struct AuthedUser {
    pub id: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        let token = parts
            .headers
            .get(AUTH_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.trim().to_string());

        let token = match token {
            Some(t) if !t.is_empty() => t,
            _ => {
                warn!("Authentication failed: missing x-auth-token header");
                return Err(ApiError::Unauthorized(
                    "No token found, authorization denied".to_string(),
                ));
            }
        };

        let user_id = app_state.tokens.verify(&token)?;

        Ok(AuthedUser { id: user_id })
    }
}
