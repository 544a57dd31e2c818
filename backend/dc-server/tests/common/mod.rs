#![allow(dead_code)]

//! Test infrastructure for dc-server API tests

use dc_auth::TokenCodec;
use dc_config::GithubConfig;
use dc_core::User;
use dc_db::UserRepository;
use dc_server::{AppState, GithubClient, build_router};

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use sqlx::{SqlitePool, sqlite::SqlitePoolOptions};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &[u8] = b"dc-server-integration-test-secret-0123456789";

/// In-memory SQLite. One connection, so every query sees the same database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database");

    dc_db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// AppState whose GitHub client points at `github_base_url`
pub async fn create_test_app_state_with_github(github_base_url: &str) -> AppState {
    let pool = create_test_pool().await;
    let tokens = TokenCodec::with_hs256(TEST_SECRET, Duration::from_secs(3600));
    let github = GithubClient::new(&GithubConfig {
        api_base_url: github_base_url.to_string(),
        timeout_secs: 2,
        ..GithubConfig::default()
    })
    .expect("Failed to build GitHub client");

    AppState::new(pool, tokens, github)
}

/// AppState with an unreachable GitHub upstream
pub async fn create_test_app_state() -> AppState {
    create_test_app_state_with_github("http://127.0.0.1:9").await
}

/// Insert a user directly and issue a token for them
pub async fn create_test_user(state: &AppState, name: &str) -> (Uuid, String) {
    let email = format!("{}@test.local", name.to_lowercase().replace(' ', "."));
    let user = User::new(name.to_string(), &email, "not-a-real-hash".to_string());
    UserRepository::create(&state.pool, &user)
        .await
        .expect("Failed to create test user");

    let issued = state.tokens.issue(user.id).expect("Failed to issue token");
    (user.id, issued.token)
}

/// Drive one request through the router and decode the JSON body
pub async fn send(
    state: &AppState,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(json) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .unwrap();

    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}

/// Create a profile for `token`'s owner with the two required fields
pub async fn create_test_profile(state: &AppState, token: &str, status: &str, skills: &str) {
    let (code, body) = send(
        state,
        "POST",
        "/api/v1/profiles",
        Some(token),
        Some(serde_json::json!({ "status": status, "skills": skills })),
    )
    .await;
    assert_eq!(code, StatusCode::OK, "profile creation failed: {body}");
}
