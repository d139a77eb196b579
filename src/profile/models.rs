// src/profile/models.rs

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ============================================================================
// Database Models
// ============================================================================

/// Profile row as stored. Skills are kept as a JSON array string in SQLite;
/// responses go out through [`ProfileResponse`], which expands them.
#[derive(Debug, Clone, FromRow)]
pub struct Profile {
    pub id: String,
    pub user_id: String,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub status: String,
    pub skills: String,
    pub bio: Option<String>,
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Experience {
    pub id: String,
    #[serde(skip_serializing)]
    pub user_id: String,
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    #[serde(rename = "from")]
    pub from_date: String,
    #[serde(rename = "to")]
    pub to_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Education {
    pub id: String,
    #[serde(skip_serializing)]
    pub user_id: String,
    pub school: String,
    pub degree: String,
    #[serde(rename = "fieldofstudy")]
    pub field_of_study: String,
    #[serde(rename = "from")]
    pub from_date: String,
    #[serde(rename = "to")]
    pub to_date: Option<String>,
    pub current: bool,
    pub description: Option<String>,
}

// ============================================================================
// Response Models
// ============================================================================

/// Owning user's display fields projected into profile responses
#[derive(Debug, Serialize)]
pub struct ProfileUser {
    pub id: String,
    pub name: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SocialLinks {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub facebook: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
}

/// Full profile as rendered on the wire: user name/avatar projected in,
/// skills expanded to an array, nested lists newest-first.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user: ProfileUser,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    pub status: String,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "githubusername", skip_serializing_if = "Option::is_none")]
    pub github_username: Option<String>,
    pub social: SocialLinks,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Envelope for the routes that return the caller's own profile:
/// `{"profile": {...}}`. The public by-user and list reads stay bare.
#[derive(Debug, Serialize)]
pub struct ProfileEnvelope {
    pub profile: ProfileResponse,
}

// ============================================================================
// Request Models
// ============================================================================

/// POST /api/profiles body. Only provided fields are written on update;
/// status and skills are required by the validator on every call.
#[derive(Debug, Deserialize)]
pub struct UpsertProfileRequest {
    pub status: Option<String>,
    /// Comma-separated, e.g. "rust, sql ,http"
    pub skills: Option<String>,
    pub company: Option<String>,
    pub website: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "githubusername")]
    pub github_username: Option<String>,
    pub youtube: Option<String>,
    pub facebook: Option<String>,
    pub twitter: Option<String>,
    pub linkedin: Option<String>,
    pub instagram: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateExperienceRequest {
    pub title: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "from")]
    pub from_date: Option<String>,
    #[serde(rename = "to")]
    pub to_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateEducationRequest {
    pub school: Option<String>,
    pub degree: Option<String>,
    #[serde(rename = "fieldofstudy")]
    pub field_of_study: Option<String>,
    #[serde(rename = "from")]
    pub from_date: Option<String>,
    #[serde(rename = "to")]
    pub to_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub msg: String,
}
