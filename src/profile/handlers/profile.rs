// src/profile/handlers/profile.rs

use axum::extract::{Extension, Json, Path};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::super::models::{
    MessageResponse, ProfileEnvelope, ProfileResponse, UpsertProfileRequest,
};
use super::super::queries;
use super::super::validators::ProfileValidator;
use crate::auth::AuthedUser;
use crate::common::{generate_profile_id, parse_skills, ApiError, AppState, Validator};

/// GET /api/profiles/me - Get the authenticated user's profile
pub async fn my_profile(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<ProfileEnvelope>, ApiError> {
    let state = state_lock.read().await.clone();

    let profile = queries::profile_for_user(&state.db, &authed.id)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %authed.id, "Database error loading own profile");
            ApiError::DatabaseError(e)
        })?;

    profile
        .map(|profile| Json(ProfileEnvelope { profile }))
        .ok_or_else(|| ApiError::BadRequest("There is no profile for this user".to_string()))
}

/// POST /api/profiles - Create or update the authenticated user's profile
///
/// Sparse upsert: only the fields present in the request are written; absent
/// optional fields on an existing profile are left untouched.
pub async fn upsert_profile(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<UpsertProfileRequest>,
) -> Result<Json<ProfileEnvelope>, ApiError> {
    let state = state_lock.read().await.clone();

    let validation_result = ProfileValidator.validate(&request);
    if !validation_result.is_valid {
        warn!(
            user_id = %authed.id,
            errors = ?validation_result.errors,
            "Profile upsert validation failed"
        );
        return Err(ApiError::from(validation_result));
    }

    // Validation guarantees status and skills are present
    let status = request.status.unwrap_or_default().trim().to_string();
    let skills = parse_skills(&request.skills.unwrap_or_default());
    let skills_json = serde_json::to_string(&skills).unwrap_or_else(|_| "[]".to_string());

    let profile_id = generate_profile_id();

    sqlx::query(
        r#"
        INSERT INTO profiles (
            id, user_id, company, website, location, status, skills, bio,
            github_username, youtube, facebook, twitter, linkedin, instagram, updated_at
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, datetime('now'))
        ON CONFLICT(user_id) DO UPDATE SET
            company = COALESCE(excluded.company, company),
            website = COALESCE(excluded.website, website),
            location = COALESCE(excluded.location, location),
            status = excluded.status,
            skills = excluded.skills,
            bio = COALESCE(excluded.bio, bio),
            github_username = COALESCE(excluded.github_username, github_username),
            youtube = COALESCE(excluded.youtube, youtube),
            facebook = COALESCE(excluded.facebook, facebook),
            twitter = COALESCE(excluded.twitter, twitter),
            linkedin = COALESCE(excluded.linkedin, linkedin),
            instagram = COALESCE(excluded.instagram, instagram),
            updated_at = datetime('now')
        "#,
    )
    .bind(&profile_id)
    .bind(&authed.id)
    .bind(request.company.as_deref())
    .bind(request.website.as_deref())
    .bind(request.location.as_deref())
    .bind(&status)
    .bind(&skills_json)
    .bind(request.bio.as_deref())
    .bind(request.github_username.as_deref())
    .bind(request.youtube.as_deref())
    .bind(request.facebook.as_deref())
    .bind(request.twitter.as_deref())
    .bind(request.linkedin.as_deref())
    .bind(request.instagram.as_deref())
    .execute(&state.db)
    .await
    .map_err(|e| {
        error!(error = %e, user_id = %authed.id, "Database error upserting profile");
        ApiError::DatabaseError(e)
    })?;

    let profile = queries::profile_for_user(&state.db, &authed.id)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %authed.id, "Database error reloading upserted profile");
            ApiError::DatabaseError(e)
        })?
        .ok_or_else(|| ApiError::InternalServer("profile missing after upsert".to_string()))?;

    info!(user_id = %authed.id, "Profile upserted");

    Ok(Json(ProfileEnvelope { profile }))
}

/// GET /api/profiles - List all profiles (public)
pub async fn list_profiles(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<Vec<ProfileResponse>>, ApiError> {
    let state = state_lock.read().await.clone();

    let profiles = queries::all_profiles(&state.db).await.map_err(|e| {
        error!(error = %e, "Database error listing profiles");
        ApiError::DatabaseError(e)
    })?;

    Ok(Json(profiles))
}

/// GET /api/profiles/user/:user_id - Get a profile by user id (public)
///
/// A malformed id and an unknown id both come back as the same not-found
/// response; the route does not reveal which.
pub async fn profile_by_user(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Path(user_id): Path<String>,
) -> Result<Json<ProfileResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    let profile = queries::profile_for_user(&state.db, &user_id)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %user_id, "Database error loading profile by user id");
            ApiError::DatabaseError(e)
        })?;

    profile
        .map(Json)
        .ok_or_else(|| ApiError::BadRequest("Profile not found".to_string()))
}

/// DELETE /api/profiles - Delete the authenticated user's profile and account
///
/// Profile, nested lists, and the user record go in one transaction, so a
/// failure partway leaves nothing orphaned.
pub async fn delete_account(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<MessageResponse>, ApiError> {
    let state = state_lock.read().await.clone();

    info!(user_id = %authed.id, "Deleting user account and profile");

    let mut tx = state.db.begin().await.map_err(|e| {
        error!(error = %e, user_id = %authed.id, "Failed to open delete transaction");
        ApiError::DatabaseError(e)
    })?;

    for statement in [
        "DELETE FROM experiences WHERE user_id = ?",
        "DELETE FROM educations WHERE user_id = ?",
        "DELETE FROM profiles WHERE user_id = ?",
        "DELETE FROM users WHERE id = ?",
    ] {
        sqlx::query(statement)
            .bind(&authed.id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                error!(error = %e, user_id = %authed.id, "Database error during account deletion");
                ApiError::DatabaseError(e)
            })?;
    }

    tx.commit().await.map_err(|e| {
        error!(error = %e, user_id = %authed.id, "Failed to commit delete transaction");
        ApiError::DatabaseError(e)
    })?;

    info!(user_id = %authed.id, "User deleted");

    Ok(Json(MessageResponse {
        msg: "User deleted".to_string(),
    }))
}
