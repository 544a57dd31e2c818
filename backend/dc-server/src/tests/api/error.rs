use crate::ApiError;

use dc_auth::{AuthError, Unauthenticated};
use dc_core::{CoreError, FieldError, parse_id};
use dc_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;
use uuid::Uuid;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_profile_not_found_returns_400_with_fixed_message() {
    let (status, json) = body_json(ApiError::profile_not_found()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "PROFILE_NOT_FOUND");
    assert_eq!(json["error"]["message"], "There is no profile for this user");
}

#[tokio::test]
async fn test_validation_error_lists_every_field() {
    let error = ApiError::ValidationFailed {
        errors: vec![
            FieldError::new("status", "Status is required"),
            FieldError::new("skills", "Skills is required"),
        ],
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "status");
    assert_eq!(json["error"]["message"], "Status is required");
    assert_eq!(json["error"]["errors"].as_array().unwrap().len(), 2);
    assert_eq!(json["error"]["errors"][1]["field"], "skills");
}

#[tokio::test]
async fn test_general_validation_error_has_null_field_entry() {
    let (status, json) = body_json(ApiError::general("Invalid credentials")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].get("field").is_none());
    assert!(json["error"]["errors"][0]["field"].is_null());
    assert_eq!(json["error"]["errors"][0]["message"], "Invalid credentials");
}

#[tokio::test]
async fn test_unauthenticated_returns_401_with_reason_code() {
    let (status, json) = body_json(ApiError::unauthenticated(Unauthenticated::NoToken)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "NO_TOKEN");
    assert_eq!(json["error"]["message"], "No token, authorization denied");

    let (status, json) = body_json(ApiError::unauthenticated(Unauthenticated::InvalidToken)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "INVALID_TOKEN");
    assert_eq!(json["error"]["message"], "Token is not valid");
}

#[tokio::test]
async fn test_upstream_failure_is_reported_as_not_found() {
    let error = ApiError::UpstreamUnavailable {
        message: "connection refused".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["message"], "No GitHub profile found");
}

#[tokio::test]
async fn test_storage_failure_hides_cause() {
    let error = ApiError::StorageUnavailable {
        message: "database is locked".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], "Server error");
}

#[test]
fn test_db_profile_not_found_maps_to_profile_not_found() {
    let error: ApiError = DbError::ProfileNotFound {
        owner_id: Uuid::new_v4(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert!(matches!(error, ApiError::ProfileNotFound { .. }));
}

#[test]
fn test_db_duplicate_email_maps_to_email_field_error() {
    let error: ApiError = DbError::DuplicateEmail {
        email: "a@b.io".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    match error {
        ApiError::ValidationFailed { errors, .. } => {
            assert_eq!(errors, vec![FieldError::new("email", "User already exists")]);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_db_owner_not_found_maps_to_invalid_token() {
    let error: ApiError = DbError::OwnerNotFound {
        owner_id: Uuid::new_v4(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert!(matches!(
        error,
        ApiError::Unauthenticated {
            reason: Unauthenticated::InvalidToken,
            ..
        }
    ));
}

#[test]
fn test_db_rejected_fields_map_to_validation_failure() {
    let error: ApiError = DbError::Rejected(CoreError::Validation {
        errors: vec![FieldError::new("status", "Status is required")],
        location: ErrorLocation::from(Location::caller()),
    })
    .into();

    match error {
        ApiError::ValidationFailed { errors, .. } => {
            assert_eq!(errors, vec![FieldError::new("status", "Status is required")]);
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_malformed_id_maps_to_bad_request() {
    let error: ApiError = parse_id("not-a-uuid").unwrap_err().into();
    assert!(matches!(error, ApiError::BadRequest { .. }));

    let error: ApiError = CoreError::Validation {
        errors: vec![FieldError::general("x")],
        location: ErrorLocation::from(Location::caller()),
    }
    .into();
    assert!(matches!(error, ApiError::ValidationFailed { .. }));
}

#[tokio::test]
async fn test_cancelled_task_is_internal_error() {
    let handle = tokio::spawn(std::future::pending::<()>());
    handle.abort();
    let join_error = handle.await.unwrap_err();

    let (status, json) = body_json(join_error.into()).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_auth_failure_is_internal_and_keeps_its_code() {
    let error: ApiError = AuthError::PasswordHash {
        message: "bad params".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    match error {
        ApiError::Internal { message, .. } => {
            assert!(message.starts_with("PASSWORD_HASH_FAILED: "));
        }
        other => panic!("unexpected {other:?}"),
    }
}
