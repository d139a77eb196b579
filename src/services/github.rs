// src/services/github.rs
//! GitHub REST API integration for public repository lookups

use reqwest::{header, Client};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

const GITHUB_API_BASE: &str = "https://api.github.com";

/// Fetches a user's public repositories from the GitHub REST API.
///
/// Holds the shared HTTP client and the optional access token from
/// [`crate::common::AppConfig`]; unauthenticated requests work but are subject
/// to much tighter rate limits.
#[derive(Debug, Clone)]
pub struct GithubService {
    client: Client,
    token: Option<String>,
}

/// Subset of the GitHub repository payload returned to callers
#[derive(Debug, Serialize, Deserialize)]
pub struct GithubRepo {
    pub id: i64,
    pub name: String,
    pub full_name: String,
    pub html_url: String,
    pub description: Option<String>,
    pub created_at: String,
    pub stargazers_count: i64,
    pub forks_count: i64,
    pub language: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum GithubError {
    #[error("GitHub API error: {0}")]
    ApiError(String),
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
}

impl GithubService {
    pub fn new(client: Client, token: Option<String>) -> Self {
        Self { client, token }
    }

    /// Get a user's first five repositories in creation order
    pub async fn user_repos(&self, username: &str) -> Result<Vec<GithubRepo>, GithubError> {
        debug!(username = %username, "Fetching GitHub repositories");

        let url = format!("{}/users/{}/repos", GITHUB_API_BASE, username);

        let mut request = self
            .client
            .get(&url)
            .query(&[("per_page", "5"), ("sort", "created:asc")])
            .header(header::USER_AGENT, "devconnect");

        if let Some(token) = &self.token {
            request = request.header(header::AUTHORIZATION, format!("token {}", token));
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            error!(%status, username = %username, "GitHub API returned an error");
            return Err(GithubError::ApiError(body));
        }

        let repos: Vec<GithubRepo> = response.json().await?;

        debug!(
            username = %username,
            repo_count = repos.len(),
            "Fetched GitHub repositories"
        );

        Ok(repos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_deserialization() {
        let payload = r#"
        [{
            "id": 42,
            "name": "devconnect",
            "full_name": "octocat/devconnect",
            "html_url": "https://github.com/octocat/devconnect",
            "description": null,
            "created_at": "2020-01-01T00:00:00Z",
            "stargazers_count": 7,
            "forks_count": 1,
            "language": "Rust",
            "extra_field_from_github": true
        }]
        "#;

        let repos: Vec<GithubRepo> = serde_json::from_str(payload).expect("Failed to parse repos");

        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].name, "devconnect");
        assert_eq!(repos[0].stargazers_count, 7);
        assert!(repos[0].description.is_none());
    }
}
