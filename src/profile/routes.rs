// src/profile/routes.rs

use axum::{
    routing::{delete, get, put},
    Router,
};

use super::handlers::{education, experience, github, profile};

pub fn profile_routes() -> Router {
    Router::new()
        // Profile routes
        .route(
            "/api/profiles",
            get(profile::list_profiles)
                .post(profile::upsert_profile)
                .delete(profile::delete_account),
        )
        .route("/api/profiles/me", get(profile::my_profile))
        .route("/api/profiles/user/:user_id", get(profile::profile_by_user))
        // Experience routes
        .route("/api/profiles/experience", put(experience::add_experience))
        .route(
            "/api/profiles/experience/:exp_id",
            delete(experience::delete_experience),
        )
        // Education routes
        .route("/api/profiles/education", put(education::add_education))
        .route(
            "/api/profiles/education/:edu_id",
            delete(education::delete_education),
        )
        // GitHub lookup
        .route("/api/profiles/github/:username", get(github::github_repos))
}
