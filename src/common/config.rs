// src/common/config.rs
//! Process configuration, read once at startup

use std::env;

/// Everything the application takes from the environment.
///
/// Loaded a single time in `main` and handed to the services that need it, so
/// no component reads ambient process state on its own.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub database_url: String,
    pub jwt_secret: String,
    pub github_token: Option<String>,
    /// Drop and recreate all tables at startup. Local development only.
    pub reset_db: bool,
    pub cors_origins: Vec<String>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(5000);

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://devconnect.db".to_string());

        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| "replace_with_strong_secret".to_string());

        let github_token = env::var("GITHUB_TOKEN").ok().filter(|t| !t.is_empty());

        let reset_db = env::var("RESET_DB").unwrap_or_else(|_| "false".to_string()) == "true";

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:3000".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        Self {
            port,
            database_url,
            jwt_secret,
            github_token,
            reset_db,
            cors_origins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_parses_overrides() {
        // Single test touching the process environment, so no parallel-test races
        env::set_var("PORT", "8123");
        env::set_var("RESET_DB", "true");
        env::set_var("CORS_ORIGINS", "http://a.test, http://b.test ,");

        let config = AppConfig::from_env();

        assert_eq!(config.port, 8123);
        assert!(config.reset_db);
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);

        env::remove_var("PORT");
        env::remove_var("RESET_DB");
        env::remove_var("CORS_ORIGINS");
    }
}
