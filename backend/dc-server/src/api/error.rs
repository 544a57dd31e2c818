//! REST API error types
//!
//! These errors are designed to produce consistent JSON responses
//! with appropriate HTTP status codes.

use dc_auth::{AuthError, Unauthenticated};
use dc_core::{CoreError, FieldError};
use dc_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;
use tokio::task::JoinError;

pub const PROFILE_NOT_FOUND_MESSAGE: &str = "There is no profile for this user";
pub const GITHUB_NOT_FOUND_MESSAGE: &str = "No GitHub profile found";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field details
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "PROFILE_NOT_FOUND", "VALIDATION_ERROR")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Field name when a single field is at fault
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Every rejected field of a validation failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// The owner has no profile (400)
    #[error("Profile not found {location}")]
    ProfileNotFound { location: ErrorLocation },

    /// One or more input fields rejected (400)
    #[error("Validation failed: {errors:?} {location}")]
    ValidationFailed {
        errors: Vec<FieldError>,
        location: ErrorLocation,
    },

    /// Session guard refused the request (401)
    #[error("Unauthenticated: {reason:?} {location}")]
    Unauthenticated {
        reason: Unauthenticated,
        location: ErrorLocation,
    },

    /// Third-party call failed; reported to the client as not found (404)
    #[error("Upstream unavailable: {message} {location}")]
    UpstreamUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Persistence failed (500)
    #[error("Storage unavailable: {message} {location}")]
    StorageUnavailable {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn unauthenticated(reason: Unauthenticated) -> Self {
        ApiError::Unauthenticated {
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_not_found() -> Self {
        ApiError::ProfileNotFound {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn field(field: &str, message: &str) -> Self {
        ApiError::ValidationFailed {
            errors: vec![FieldError::new(field, message)],
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn general(message: &str) -> Self {
        ApiError::ValidationFailed {
            errors: vec![FieldError::general(message)],
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        match &self {
            ApiError::StorageUnavailable { .. } | ApiError::Internal { .. } => {
                log::error!("{}", self)
            }
            _ => log::warn!("{}", self),
        }

        let (status, body) = match self {
            ApiError::ProfileNotFound { .. } => (
                StatusCode::BAD_REQUEST,
                body(
                    "PROFILE_NOT_FOUND",
                    PROFILE_NOT_FOUND_MESSAGE.to_string(),
                    None,
                    None,
                ),
            ),
            ApiError::ValidationFailed { errors, .. } => {
                let message = errors
                    .first()
                    .map(|e| e.message.clone())
                    .unwrap_or_else(|| "Validation failed".to_string());
                let field = errors.first().and_then(|e| e.field.clone());
                (
                    StatusCode::BAD_REQUEST,
                    body("VALIDATION_ERROR", message, field, Some(errors)),
                )
            }
            ApiError::Unauthenticated { reason, .. } => (
                StatusCode::UNAUTHORIZED,
                body(reason.code(), reason.message().to_string(), None, None),
            ),
            ApiError::UpstreamUnavailable { .. } => (
                StatusCode::NOT_FOUND,
                body(
                    "NOT_FOUND",
                    GITHUB_NOT_FOUND_MESSAGE.to_string(),
                    None,
                    None,
                ),
            ),
            // Don't expose internal details to clients
            ApiError::StorageUnavailable { .. } | ApiError::Internal { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                body("INTERNAL_ERROR", "Server error".to_string(), None, None),
            ),
            ApiError::BadRequest { message, .. } => (
                StatusCode::BAD_REQUEST,
                body("BAD_REQUEST", message, None, None),
            ),
        };

        (status, Json(ApiErrorResponse { error: body })).into_response()
    }
}

fn body(
    code: &str,
    message: String,
    field: Option<String>,
    errors: Option<Vec<FieldError>>,
) -> ApiErrorBody {
    ApiErrorBody {
        code: code.to_string(),
        message,
        field,
        errors,
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::ProfileNotFound { .. } => ApiError::profile_not_found(),
            DbError::DuplicateEmail { .. } => ApiError::field("email", "User already exists"),
            // The token outlived its user
            DbError::OwnerNotFound { .. } => ApiError::unauthenticated(Unauthenticated::InvalidToken),
            DbError::Rejected(core) => ApiError::from(core),
            other => ApiError::StorageUnavailable {
                message: other.to_string(),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert sqlx errors to API errors
impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        ApiError::StorageUnavailable {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { errors, .. } => ApiError::ValidationFailed {
                errors,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::Uuid { source, .. } => ApiError::BadRequest {
                message: format!("Invalid UUID format: {}", source),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Token issuing and password hashing failures are server faults
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        ApiError::Internal {
            message: format!("{}: {}", e.error_code(), e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// A blocking task that panicked or was cancelled
impl From<JoinError> for ApiError {
    #[track_caller]
    fn from(e: JoinError) -> Self {
        ApiError::Internal {
            message: format!("Blocking task failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(e: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: e.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
