//! Tests for profile module
//!
//! These tests verify validators, skills normalization, and wire field naming
//! for profile, experience, and education payloads.

#[cfg(test)]
mod tests {
    use super::super::*;
    use crate::auth::{AuthedUser, TokenService};
    use crate::common::{migrations, parse_skills, AppState, Validator};
    use crate::services::GithubService;
    use axum::extract::{Extension, Json, Path};
    use sqlx::sqlite::SqlitePoolOptions;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    async fn test_state() -> Arc<RwLock<AppState>> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .expect("Failed to open in-memory database");
        migrations::run_migrations(&pool, false)
            .await
            .expect("Failed to run migrations");

        Arc::new(RwLock::new(AppState {
            db: pool,
            tokens: Arc::new(TokenService::new("test_secret_key")),
            github: Arc::new(GithubService::new(reqwest::Client::new(), None)),
        }))
    }

    async fn registered_user(state: &Arc<RwLock<AppState>>, email: &str) -> AuthedUser {
        let response = crate::auth::handlers::register(
            Extension(state.clone()),
            Json(crate::auth::models::RegisterRequest {
                name: Some("Test User".to_string()),
                email: Some(email.to_string()),
                password: Some("password123".to_string()),
            }),
        )
        .await
        .expect("Registration should succeed");

        let shared = state.read().await.clone();
        let id = shared
            .tokens
            .verify(&response.0.token)
            .expect("Registration token should verify");

        AuthedUser { id }
    }

    fn upsert_request() -> models::UpsertProfileRequest {
        models::UpsertProfileRequest {
            status: Some("Developer".to_string()),
            skills: Some("rust, sql".to_string()),
            company: Some("Acme".to_string()),
            website: None,
            location: None,
            bio: None,
            github_username: None,
            youtube: None,
            facebook: None,
            twitter: None,
            linkedin: None,
            instagram: None,
        }
    }

    fn experience_request() -> models::CreateExperienceRequest {
        models::CreateExperienceRequest {
            title: Some("Developer".to_string()),
            company: Some("Acme".to_string()),
            location: Some("Remote".to_string()),
            from_date: Some("2020-01-01".to_string()),
            to_date: Some("2022-12-31".to_string()),
            current: Some(false),
            description: None,
        }
    }

    // ============================================================================
    // Validator Tests
    // ============================================================================

    #[test]
    fn test_profile_validator_valid_data() {
        let request = models::UpsertProfileRequest {
            status: Some("Developer".to_string()),
            skills: Some("rust, sql".to_string()),
            company: None,
            website: None,
            location: None,
            bio: None,
            github_username: None,
            youtube: None,
            facebook: None,
            twitter: None,
            linkedin: None,
            instagram: None,
        };

        let result = validators::ProfileValidator.validate(&request);

        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_profile_validator_requires_status_and_skills() {
        let request = models::UpsertProfileRequest {
            status: None,
            skills: Some("   ".to_string()),
            company: Some("Acme".to_string()),
            website: None,
            location: None,
            bio: None,
            github_username: None,
            youtube: None,
            facebook: None,
            twitter: None,
            linkedin: None,
            instagram: None,
        };

        let result = validators::ProfileValidator.validate(&request);

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 2, "Both required fields should report");
        assert!(result.errors.iter().any(|e| e.field == "status"));
        assert!(result.errors.iter().any(|e| e.field == "skills"));
    }

    #[test]
    fn test_experience_validator_valid_data() {
        let result = validators::ExperienceValidator.validate(&experience_request());

        assert!(result.is_valid, "Valid experience data should pass");
        assert_eq!(result.errors.len(), 0);
    }

    #[test]
    fn test_experience_validator_aggregates_missing_fields() {
        let request = models::CreateExperienceRequest {
            title: None,
            company: Some("".to_string()),
            location: None,
            from_date: None,
            to_date: None,
            current: None,
            description: None,
        };

        let result = validators::ExperienceValidator.validate(&request);

        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors.iter().any(|e| e.field == "title"));
        assert!(result.errors.iter().any(|e| e.field == "company"));
        assert!(result.errors.iter().any(|e| e.field == "from"));
    }

    #[test]
    fn test_experience_validator_invalid_date_format() {
        let mut request = experience_request();
        request.from_date = Some("January 2020".to_string());

        let result = validators::ExperienceValidator.validate(&request);

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "from"));
    }

    #[test]
    fn test_experience_validator_to_before_from() {
        let mut request = experience_request();
        request.to_date = Some("2019-01-01".to_string());

        let result = validators::ExperienceValidator.validate(&request);

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "to"));
    }

    #[test]
    fn test_education_validator_requires_field_of_study() {
        let request = models::CreateEducationRequest {
            school: Some("Test University".to_string()),
            degree: Some("BSc".to_string()),
            field_of_study: None,
            from_date: Some("2016-09-01".to_string()),
            to_date: None,
            current: Some(true),
            description: None,
        };

        let result = validators::EducationValidator.validate(&request);

        assert!(!result.is_valid);
        assert!(result.errors.iter().any(|e| e.field == "fieldofstudy"));
    }

    // ============================================================================
    // Skills Normalization
    // ============================================================================

    #[test]
    fn test_skills_normalization() {
        let skills = parse_skills("a, b ,c");
        assert_eq!(skills, vec!["a", "b", "c"]);

        // Storage round trip through the JSON column representation
        let stored = serde_json::to_string(&skills).unwrap();
        let restored: Vec<String> = serde_json::from_str(&stored).unwrap();
        assert_eq!(restored, skills);
    }

    // ============================================================================
    // Wire Shape Tests
    // ============================================================================

    #[test]
    fn test_experience_serializes_wire_field_names() {
        let experience = models::Experience {
            id: "X_8MWQT2".to_string(),
            user_id: "U_ABC123".to_string(),
            title: "Developer".to_string(),
            company: "Acme".to_string(),
            location: None,
            from_date: "2020-01-01".to_string(),
            to_date: Some("2022-12-31".to_string()),
            current: false,
            description: None,
        };

        let value = serde_json::to_value(&experience).unwrap();

        assert_eq!(value["from"], "2020-01-01");
        assert_eq!(value["to"], "2022-12-31");
        assert!(value.get("from_date").is_none());
        assert!(value.get("user_id").is_none());
    }

    #[test]
    fn test_education_serializes_fieldofstudy() {
        let education = models::Education {
            id: "E_8MWQT2".to_string(),
            user_id: "U_ABC123".to_string(),
            school: "Test University".to_string(),
            degree: "BSc".to_string(),
            field_of_study: "Computer Science".to_string(),
            from_date: "2016-09-01".to_string(),
            to_date: None,
            current: true,
            description: None,
        };

        let value = serde_json::to_value(&education).unwrap();

        assert_eq!(value["fieldofstudy"], "Computer Science");
        assert!(value.get("field_of_study").is_none());
    }

    #[test]
    fn test_profile_response_shape() {
        let response = models::ProfileResponse {
            id: "P_K7NP3X".to_string(),
            user: models::ProfileUser {
                id: "U_ABC123".to_string(),
                name: "Test User".to_string(),
                avatar: Some("https://www.gravatar.com/avatar/abc".to_string()),
            },
            company: None,
            website: None,
            location: None,
            status: "Developer".to_string(),
            skills: vec!["rust".to_string()],
            bio: None,
            github_username: Some("octocat".to_string()),
            social: models::SocialLinks {
                youtube: None,
                facebook: None,
                twitter: Some("https://twitter.com/test".to_string()),
                linkedin: None,
                instagram: None,
            },
            experience: Vec::new(),
            education: Vec::new(),
            updated_at: None,
        };

        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["user"]["name"], "Test User");
        assert_eq!(value["githubusername"], "octocat");
        assert_eq!(value["social"]["twitter"], "https://twitter.com/test");
        assert!(value["social"].get("youtube").is_none());
        assert!(value.get("company").is_none(), "absent optionals are omitted");
        assert_eq!(value["skills"][0], "rust");
    }

    // ============================================================================
    // Persistence Tests
    // ============================================================================

    #[tokio::test]
    async fn test_own_profile_routes_wrap_profile_envelope() {
        let state = test_state().await;
        let authed = registered_user(&state, "envelope@example.com").await;

        let upserted = handlers::profile::upsert_profile(
            Extension(state.clone()),
            AuthedUser {
                id: authed.id.clone(),
            },
            Json(upsert_request()),
        )
        .await
        .expect("Upsert should succeed");

        let value = serde_json::to_value(&upserted.0).expect("Failed to serialize response");
        assert!(
            value.get("profile").is_some(),
            "Own-profile responses nest the payload under a profile key"
        );
        assert_eq!(value["profile"]["status"], "Developer");
        assert!(value.get("status").is_none(), "no top-level profile fields");

        let fetched = handlers::profile::my_profile(Extension(state.clone()), authed)
            .await
            .expect("Own profile lookup should succeed");

        let value = serde_json::to_value(&fetched.0).expect("Failed to serialize response");
        assert_eq!(value["profile"]["user"]["name"], "Test User");
        assert_eq!(value["profile"]["skills"][0], "rust");
    }

    #[tokio::test]
    async fn test_upsert_profile_is_idempotent() {
        let state = test_state().await;
        let authed = registered_user(&state, "idempotent@example.com").await;

        let first = handlers::profile::upsert_profile(
            Extension(state.clone()),
            AuthedUser {
                id: authed.id.clone(),
            },
            Json(upsert_request()),
        )
        .await
        .expect("First upsert should succeed");

        let second = handlers::profile::upsert_profile(
            Extension(state.clone()),
            AuthedUser {
                id: authed.id.clone(),
            },
            Json(upsert_request()),
        )
        .await
        .expect("Second upsert should succeed");

        let mut first = serde_json::to_value(&first.0).expect("Failed to serialize response");
        let mut second = serde_json::to_value(&second.0).expect("Failed to serialize response");

        // The write timestamp is the only field allowed to differ
        first["profile"].as_object_mut().unwrap().remove("updated_at");
        second["profile"].as_object_mut().unwrap().remove("updated_at");

        assert_eq!(first, second, "Repeating an identical upsert changes nothing");
        assert_eq!(first["profile"]["company"], "Acme");
    }

    #[tokio::test]
    async fn test_remove_experience_restores_previous_list() {
        let state = test_state().await;
        let authed = registered_user(&state, "experience@example.com").await;

        handlers::profile::upsert_profile(
            Extension(state.clone()),
            AuthedUser {
                id: authed.id.clone(),
            },
            Json(upsert_request()),
        )
        .await
        .expect("Upsert should succeed");

        let mut first_entry = experience_request();
        first_entry.title = Some("First Role".to_string());
        let with_first = handlers::experience::add_experience(
            Extension(state.clone()),
            AuthedUser {
                id: authed.id.clone(),
            },
            Json(first_entry),
        )
        .await
        .expect("Adding first experience should succeed");

        let mut second_entry = experience_request();
        second_entry.title = Some("Second Role".to_string());
        let with_second = handlers::experience::add_experience(
            Extension(state.clone()),
            AuthedUser {
                id: authed.id.clone(),
            },
            Json(second_entry),
        )
        .await
        .expect("Adding second experience should succeed");

        let with_second =
            serde_json::to_value(&with_second.0).expect("Failed to serialize response");

        // Newest entry listed first
        assert_eq!(with_second["profile"]["experience"][0]["title"], "Second Role");
        assert_eq!(with_second["profile"]["experience"][1]["title"], "First Role");

        let second_id = with_second["profile"]["experience"][0]["id"]
            .as_str()
            .expect("Experience entries carry an id")
            .to_string();

        let after_delete = handlers::experience::delete_experience(
            Extension(state.clone()),
            authed,
            Path(second_id),
        )
        .await
        .expect("Deleting an existing experience should succeed");

        let after_delete =
            serde_json::to_value(&after_delete.0).expect("Failed to serialize response");
        let with_first = serde_json::to_value(&with_first.0).expect("Failed to serialize response");

        assert_eq!(
            after_delete["profile"]["experience"],
            with_first["profile"]["experience"],
            "Removing the new entry restores the earlier list"
        );
    }
}
