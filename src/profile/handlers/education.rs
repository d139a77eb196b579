// src/profile/handlers/education.rs

use axum::extract::{Extension, Json, Path};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::super::models::{CreateEducationRequest, ProfileEnvelope};
use super::super::validators::EducationValidator;
use super::experience::{ensure_profile_exists, load_profile};
use crate::auth::AuthedUser;
use crate::common::{generate_education_id, ApiError, AppState, Validator};

/// PUT /api/profiles/education - Add an education entry to the user's profile
pub async fn add_education(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Json(request): Json<CreateEducationRequest>,
) -> Result<Json<ProfileEnvelope>, ApiError> {
    let state = state_lock.read().await.clone();

    let validation_result = EducationValidator.validate(&request);
    if !validation_result.is_valid {
        warn!(
            user_id = %authed.id,
            errors = ?validation_result.errors,
            "Education creation validation failed"
        );
        return Err(ApiError::from(validation_result));
    }

    ensure_profile_exists(&state, &authed.id).await?;

    let education_id = generate_education_id();

    // Validation guarantees school, degree, fieldofstudy, and from are present
    sqlx::query(
        r#"
        INSERT INTO educations (id, user_id, school, degree, field_of_study, from_date, to_date, current, description)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&education_id)
    .bind(&authed.id)
    .bind(request.school.unwrap_or_default().trim())
    .bind(request.degree.unwrap_or_default().trim())
    .bind(request.field_of_study.unwrap_or_default().trim())
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
            education_id = %education_id,
            "Database error creating education"
        );
        ApiError::DatabaseError(e)
    })?;

    info!(
        user_id = %authed.id,
        education_id = %education_id,
        "Education added"
    );

    load_profile(&state, &authed.id).await
}

/// DELETE /api/profiles/education/:edu_id - Remove an education entry by id
///
/// An unknown id changes nothing and reports not-found.
pub async fn delete_education(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Path(edu_id): Path<String>,
) -> Result<Json<ProfileEnvelope>, ApiError> {
    let state = state_lock.read().await.clone();

    let result = sqlx::query("DELETE FROM educations WHERE id = ? AND user_id = ?")
        .bind(&edu_id)
        .bind(&authed.id)
        .execute(&state.db)
        .await
        .map_err(|e| {
            error!(
                error = %e,
                user_id = %authed.id,
                education_id = %edu_id,
                "Database error deleting education"
            );
            ApiError::DatabaseError(e)
        })?;

    if result.rows_affected() == 0 {
        warn!(
            user_id = %authed.id,
            education_id = %edu_id,
            "Education not found for deletion"
        );
        return Err(ApiError::BadRequest("Education not found".to_string()));
    }

    info!(
        user_id = %authed.id,
        education_id = %edu_id,
        "Education removed"
    );

    load_profile(&state, &authed.id).await
}
