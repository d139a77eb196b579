// src/profile/handlers/experience.rs

use axum::extract::{Extension, Json, Path};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::super::models::{CreateExperienceRequest, ProfileEnvelope};
use super::super::queries;
use super::super::validators::ExperienceValidator;
use crate::auth::AuthedUser;
use crate::common::{generate_experience_id, ApiError, AppState, Validator};

/// PUT /api/profiles/experience - Add an experience entry to the user's profile
pub async fn add_experience(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<CreateExperienceRequest>,
) -> Result<Json<ProfileEnvelope>, ApiError> {
    let state = state_lock.read().await.clone();

    let validation_result = ExperienceValidator.validate(&request);
    if !validation_result.is_valid {
        warn!(
            user_id = %authed.id,
            errors = ?validation_result.errors,
            "Experience creation validation failed"
        );
        return Err(ApiError::from(validation_result));
    }

    ensure_profile_exists(&state, &authed.id).await?;

    let experience_id = generate_experience_id();

    // Validation guarantees title, company, and from are present
    sqlx::query(
        r#"
        INSERT INTO experiences (id, user_id, title, company, location, from_date, to_date, current, description)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&experience_id)
    .bind(&authed.id)
    .bind(request.title.unwrap_or_default().trim())
    .bind(request.company.unwrap_or_default().trim())
    .bind(request.location.as_deref())
    .bind(request.from_date.unwrap_or_default().trim())
    .bind(request.to_date.as_deref())
    .bind(request.current.unwrap_or(false))
    .bind(request.description.as_deref())
    .execute(&state.db)
    .await
    .map_err(|e| {
        error!(
            error = %e,
            user_id = %authed.id,
            experience_id = %experience_id,
            "Database error creating experience"
        );
        ApiError::DatabaseError(e)
    })?;

    info!(
        user_id = %authed.id,
        experience_id = %experience_id,
        "Experience added"
    );

    load_profile(&state, &authed.id).await
}

/// DELETE /api/profiles/experience/:exp_id - Remove an experience entry by id
///
/// An unknown id changes nothing and reports not-found.
pub async fn delete_experience(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(exp_id): Path<String>,
) -> Result<Json<ProfileEnvelope>, ApiError> {
    let state = state_lock.read().await.clone();

    let result = sqlx::query("DELETE FROM experiences WHERE id = ? AND user_id = ?")
        .bind(&exp_id)
        .bind(&authed.id)
        .execute(&state.db)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                user_id = %authed.id,
                experience_id = %exp_id,
                "Database error deleting experience"
            );
            ApiError::DatabaseError(e)
        })?;

    if result.rows_affected() == 0 {
        warn!(
            user_id = %authed.id,
            experience_id = %exp_id,
            "Experience not found for deletion"
        );
        return Err(ApiError::BadRequest("Experience not found".to_string()));
    }

    info!(
        user_id = %authed.id,
        experience_id = %exp_id,
        "Experience removed"
    );

    load_profile(&state, &authed.id).await
}

/// Nested entries hang off a profile; reject the write if none exists yet
pub(super) async fn ensure_profile_exists(state: &AppState, user_id: &str) -> Result<(), ApiError> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM profiles WHERE user_id = ?")
        .bind(user_id)
        .fetch_one(&state.db)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %user_id, "Database error checking profile existence");
            ApiError::DatabaseError(e)
        })?;

    if count == 0 {
        return Err(ApiError::BadRequest(
            "There is no profile for this user".to_string(),
        ));
    }

    Ok(())
}

pub(super) async fn load_profile(
    state: &AppState,
    user_id: &str,
) -> Result<Json<ProfileEnvelope>, ApiError> {
    let profile = queries::profile_for_user(&state.db, user_id)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %user_id, "Database error reloading profile");
            ApiError::DatabaseError(e)
        })?;

    profile
        .map(|profile| Json(ProfileEnvelope { profile }))
        .ok_or_else(|| ApiError::BadRequest("There is no profile for this user".to_string()))
}
