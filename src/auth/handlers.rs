// src/auth/handlers.rs

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::extractors::AuthedUser;
use super::models::{LoginRequest, RegisterRequest, TokenResponse, User};
use super::validators::{LoginValidator, RegisterValidator};
use crate::common::{
    generate_user_id, gravatar_url, safe_email_log, ApiError, AppState, Validator,
};

/// POST /api/users - Register a new user and return a token
pub async fn register(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let validation_result = RegisterValidator.validate(&request);
    if !validation_result.is_valid {
        warn!(
            errors = ?validation_result.errors,
            "Registration validation failed"
        );
        return Err(ApiError::from(validation_result));
    }

    // Validation guarantees these are present
    let name = request.name.unwrap_or_default().trim().to_string();
    let email = request.email.unwrap_or_default().trim().to_string();
    let password = request.password.unwrap_or_default();

    info!(email = %safe_email_log(&email), "Registering new user");

    let existing = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error checking for existing user");
            ApiError::DatabaseError(e)
        })?;

    if existing.is_some() {
        warn!(email = %safe_email_log(&email), "Registration rejected: email already taken");
        return Err(ApiError::DuplicateUser);
    }

    let avatar = gravatar_url(&email);

    let password_hash = bcrypt::hash(&password, bcrypt::DEFAULT_COST).map_err(|e| {
        error!(error = %e, "Password hashing failed");
        ApiError::InternalServer("hashing error".to_string())
    })?;

    let user_id = generate_user_id();

    sqlx::query(
        r#"
        INSERT INTO users (id, name, email, password_hash, avatar, created_at)
        VALUES (?, ?, ?, ?, ?, datetime('now'))
        "#,
    )
    .bind(&user_id)
    .bind(&name)
    .bind(&email)
    .bind(&password_hash)
    .bind(&avatar)
    .execute(&state.db)
    .await
    .map_err(|e| {
        error!(error = %e, user_id = %user_id, "Database error creating user");
        ApiError::DatabaseError(e)
    })?;

    let token = state.tokens.issue(&user_id)?;

    info!(user_id = %user_id, "User registered successfully");

    Ok(Json(TokenResponse { token }))
}

/// POST /api/auth - Authenticate a user and return a token
pub async fn login(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let validation_result = LoginValidator.validate(&request);
    if !validation_result.is_valid {
        warn!(errors = ?validation_result.errors, "Login validation failed");
        return Err(ApiError::from(validation_result));
    }

    let email = request.email.unwrap_or_default().trim().to_string();
    let password = request.password.unwrap_or_default();

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, "Database error during login lookup");
            ApiError::DatabaseError(e)
        })?;

    // Unknown email and bad password return the identical generic error, so a
    // caller cannot tell which accounts exist
    let user = match user {
        Some(u) => u,
        None => {
            warn!(email = %safe_email_log(&email), "Login failed: no such user");
            return Err(ApiError::InvalidCredentials);
        }
    };

    let matches = bcrypt::verify(&password, &user.password_hash).map_err(|e| {
        error!(error = %e, user_id = %user.id, "Password verification failed");
        ApiError::InternalServer("hashing error".to_string())
    })?;

    if !matches {
        warn!(user_id = %user.id, "Login failed: password mismatch");
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(&user.id)?;

    info!(user_id = %user.id, "User logged in");

    Ok(Json(TokenResponse { token }))
}

/// GET /api/auth - Get the authenticated user's record (without the hash)
pub async fn current_user(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(&authed.id)
        .fetch_one(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %authed.id, "Database error loading authenticated user");
            ApiError::DatabaseError(e)
        })?;

    Ok(Json(serde_json::json!({ "user": user })))
}
