// src/profile/queries.rs
//! Assembly of full profile responses from their backing rows

use sqlx::SqlitePool;

use super::models::{Education, Experience, Profile, ProfileResponse, ProfileUser, SocialLinks};
use crate::auth::User;

/// Load the assembled profile for a user, or None if they have no profile
pub async fn profile_for_user(
    db: &SqlitePool,
    user_id: &str,
) -> Result<Option<ProfileResponse>, sqlx::Error> {
    let profile = sqlx::query_as::<_, Profile>("SELECT * FROM profiles WHERE user_id = ?")
        .bind(user_id)
        .fetch_optional(db)
        .await?;

    match profile {
        Some(profile) => Ok(Some(assemble(db, profile).await?)),
        None => Ok(None),
    }
}

/// Load every profile, each with its user projection and nested lists
pub async fn all_profiles(db: &SqlitePool) -> Result<Vec<ProfileResponse>, sqlx::Error> {
    let profiles = sqlx::query_as::<_, Profile>("SELECT * FROM profiles ORDER BY updated_at DESC")
        .fetch_all(db)
        .await?;

    let mut responses = Vec::with_capacity(profiles.len());
    for profile in profiles {
        responses.push(assemble(db, profile).await?);
    }

    Ok(responses)
}

/// Join in the owning user and the newest-first nested lists
async fn assemble(db: &SqlitePool, profile: Profile) -> Result<ProfileResponse, sqlx::Error> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = ?")
        .bind(&profile.user_id)
        .fetch_one(db)
        .await?;

    // seq DESC renders entries most-recent-first, matching prepend semantics
    let experience = sqlx::query_as::<_, Experience>(
        "SELECT * FROM experiences WHERE user_id = ? ORDER BY seq DESC",
    )
    .bind(&profile.user_id)
    .fetch_all(db)
    .await?;

    let education = sqlx::query_as::<_, Education>(
        "SELECT * FROM educations WHERE user_id = ? ORDER BY seq DESC",
    )
    .bind(&profile.user_id)
    .fetch_all(db)
    .await?;

    let skills: Vec<String> = serde_json::from_str(&profile.skills).unwrap_or_default();

    Ok(ProfileResponse {
        id: profile.id,
        user: ProfileUser {
            id: user.id,
            name: user.name,
            avatar: user.avatar,
        },
        company: profile.company,
        website: profile.website,
        location: profile.location,
        status: profile.status,
        skills,
        bio: profile.bio,
        github_username: profile.github_username,
        social: SocialLinks {
            youtube: profile.youtube,
            facebook: profile.facebook,
            twitter: profile.twitter,
            linkedin: profile.linkedin,
            instagram: profile.instagram,
        },
        experience,
        education,
        updated_at: profile.updated_at,
    })
}
