use crate::{ApiError, AppState, AuthUser, GithubClient};

use dc_auth::{TokenCodec, Unauthenticated};
use dc_config::GithubConfig;

use std::time::Duration;

use axum::extract::FromRequestParts;
use chrono::{TimeDelta, Utc};
use googletest::prelude::*;
use http::Request;
use sqlx::SqlitePool;
use uuid::Uuid;

const SECRET: &[u8] = b"auth-user-extractor-test-secret-0123456789";

fn state() -> AppState {
    // Never queried by the extractor
    let pool = SqlitePool::connect_lazy("sqlite::memory:").unwrap();
    let tokens = TokenCodec::with_hs256(SECRET, Duration::from_secs(3600));
    let github = GithubClient::new(&GithubConfig::default()).unwrap();
    AppState::new(pool, tokens, github)
}

async fn extract(state: &AppState, authorization: Option<&str>) -> std::result::Result<AuthUser, ApiError> {
    let mut builder = Request::builder().uri("/api/v1/profiles/me");
    if let Some(value) = authorization {
        builder = builder.header("Authorization", value);
    }
    let (mut parts, _) = builder.body(()).unwrap().into_parts();
    AuthUser::from_request_parts(&mut parts, state).await
}

fn reason(result: std::result::Result<AuthUser, ApiError>) -> Option<Unauthenticated> {
    match result {
        Err(ApiError::Unauthenticated { reason, .. }) => Some(reason),
        _ => None,
    }
}

#[tokio::test]
async fn given_valid_bearer_token_when_extracting_then_user_id_is_resolved() {
    // Given
    let state = state();
    let user_id = Uuid::new_v4();
    let issued = state.tokens.issue(user_id).unwrap();

    // When
    let result = extract(&state, Some(&format!("Bearer {}", issued.token))).await;

    // Then
    let AuthUser(resolved) = result.unwrap();
    assert_that!(resolved, eq(user_id));
}

#[tokio::test]
async fn given_no_header_when_extracting_then_no_token() {
    let state = state();

    let result = extract(&state, None).await;

    assert_that!(reason(result), some(eq(Unauthenticated::NoToken)));
}

#[tokio::test]
async fn given_garbage_token_when_extracting_then_invalid_token() {
    let state = state();

    let result = extract(&state, Some("Bearer not.a.jwt")).await;

    assert_that!(reason(result), some(eq(Unauthenticated::InvalidToken)));
}

#[tokio::test]
async fn given_expired_token_when_extracting_then_invalid_token() {
    // Given
    let state = state();
    let issued = state
        .tokens
        .issue_at(Uuid::new_v4(), Utc::now() - TimeDelta::hours(2))
        .unwrap();

    // When
    let result = extract(&state, Some(&format!("Bearer {}", issued.token))).await;

    // Then
    assert_that!(reason(result), some(eq(Unauthenticated::InvalidToken)));
}

#[tokio::test]
async fn given_token_signed_with_other_secret_when_extracting_then_invalid_token() {
    // Given
    let state = state();
    let foreign = TokenCodec::with_hs256(b"some-other-secret-which-is-long-enough", Duration::from_secs(3600));
    let issued = foreign.issue(Uuid::new_v4()).unwrap();

    // When
    let result = extract(&state, Some(&format!("Bearer {}", issued.token))).await;

    // Then
    assert_that!(reason(result), some(eq(Unauthenticated::InvalidToken)));
}
