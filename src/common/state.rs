// Application state shared across all modules

use sqlx::SqlitePool;
use std::sync::Arc;

use crate::auth::TokenService;
use crate::services::GithubService;

/// Application state containing the database pool and constructed services
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    pub tokens: Arc<TokenService>,
    pub github: Arc<GithubService>,
}
