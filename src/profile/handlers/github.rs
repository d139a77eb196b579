// src/profile/handlers/github.rs

use axum::extract::{Extension, Json, Path};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::warn;

use crate::common::{ApiError, AppState};
use crate::services::github::GithubRepo;

/// GET /api/profiles/github/:username - List a user's latest public repos
///
/// Any upstream failure (unknown user, rate limit, network) collapses into the
/// same not-found response; the caller cannot tell them apart.
pub async fn github_repos(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Path(username): Path<String>,
) -> Result<Json<Vec<GithubRepo>>, ApiError> {
    let state = state_lock.read().await.clone();

    let repos = state.github.user_repos(&username).await.map_err(|e| {
        warn!(error = %e, username = %username, "GitHub lookup failed");
        ApiError::NotFound("No Github profile found".to_string())
    })?;

    Ok(Json(repos))
}
