//! Authentication routes

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers;

/// Creates and returns the authentication router
///
/// # Routes
/// - `POST /api/users` - Register a user, returns a token
/// - `POST /api/auth` - Authenticate a user, returns a token
/// - `GET /api/auth` - Get the authenticated user (token required)
pub fn auth_routes() -> Router {
    Router::new()
        .route("/api/users", post(handlers::register))
        .route(
            "/api/auth",
            get(handlers::current_user).post(handlers::login),
        )
}
