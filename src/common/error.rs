// Error handling types for the API

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::fmt;
use tracing::error;

use super::validation::ValidationResult;

/// API error types
///
/// Every handler failure is translated into one of these; nothing is allowed to
/// escape as a bare panic or stack trace. Validation-style failures render an
/// `errors` array, everything else a single `msg` field.
#[derive(Debug)]
pub enum ApiError {
    Unauthorized(String),
    BadRequest(String),
    NotFound(String),
    InvalidCredentials,
    DuplicateUser,
    ValidationFailed(Vec<FieldError>),
    DatabaseError(sqlx::Error),
    InternalServer(String),
}

/// A single field-level validation message, rendered as `{"msg": ..., "param": ...}`
#[derive(Debug, Serialize)]
pub struct FieldError {
    pub msg: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param: Option<String>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            ApiError::BadRequest(msg) => write!(f, "Bad Request: {}", msg),
            ApiError::NotFound(msg) => write!(f, "Not Found: {}", msg),
            ApiError::InvalidCredentials => write!(f, "Invalid credentials"),
            ApiError::DuplicateUser => write!(f, "User already exists"),
            ApiError::ValidationFailed(errors) => {
                write!(f, "Validation failed: {} field error(s)", errors.len())
            }
            ApiError::DatabaseError(e) => write!(f, "Database Error: {}", e),
            ApiError::InternalServer(msg) => write!(f, "Internal Server Error: {}", msg),
        }
    }
}

#[derive(Serialize)]
struct MsgBody {
    msg: String,
}

#[derive(Serialize)]
struct ErrorsBody {
    errors: Vec<FieldError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::Unauthorized(msg) => {
                (StatusCode::UNAUTHORIZED, Json(MsgBody { msg })).into_response()
            }
            ApiError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(MsgBody { msg })).into_response()
            }
            ApiError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(MsgBody { msg })).into_response()
            }
            ApiError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                Json(ErrorsBody {
                    errors: vec![FieldError {
                        msg: "Invalid Credentials".to_string(),
                        param: None,
                    }],
                }),
            )
                .into_response(),
            ApiError::DuplicateUser => (
                StatusCode::BAD_REQUEST,
                Json(ErrorsBody {
                    errors: vec![FieldError {
                        msg: "User already exists".to_string(),
                        param: None,
                    }],
                }),
            )
                .into_response(),
            ApiError::ValidationFailed(errors) => {
                (StatusCode::BAD_REQUEST, Json(ErrorsBody { errors })).into_response()
            }
            ApiError::DatabaseError(e) => {
                error!(error = %e, "Database error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MsgBody {
                        msg: "Server error".to_string(),
                    }),
                )
                    .into_response()
            }
            ApiError::InternalServer(msg) => {
                error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MsgBody {
                        msg: "Server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

/// Convert an invalid ValidationResult into the aggregated 400 response
impl From<ValidationResult> for ApiError {
    fn from(result: ValidationResult) -> Self {
        if result.is_valid {
            ApiError::InternalServer(
                "Validation result was valid but converted to error".to_string(),
            )
        } else {
            let errors = result
                .errors
                .into_iter()
                .map(|e| FieldError {
                    msg: e.message,
                    param: Some(e.field),
                })
                .collect();
            ApiError::ValidationFailed(errors)
        }
    }
}
