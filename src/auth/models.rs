//! Authentication data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// JWT claims structure
#[derive(Serialize, Deserialize, Debug)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}

/// User database model
///
/// The password hash never leaves the process: it is skipped on serialization.
#[derive(FromRow, Serialize, Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub avatar: Option<String>,
    pub created_at: Option<String>,
}

/// POST /api/users request body
///
/// All fields are optional at the deserialization layer so missing keys reach
/// the validator and come back as aggregated field errors, not a parse failure.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

/// POST /api/auth request body
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful registration/login response
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}
