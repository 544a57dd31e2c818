//! Identity REST API handlers

use crate::{ApiError, ApiResult, AppState, RegisterRequest, TokenResponse};

use dc_auth::hash_password;
use dc_core::User;
use dc_db::UserRepository;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::info;

/// POST /api/v1/identities
///
/// Register a new user and sign them in
pub async fn register(
    State(state): State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(req) = payload?;
    let registration = req.validate()?;

    if UserRepository::find_by_email(&state.pool, &registration.email)
        .await?
        .is_some()
    {
        return Err(ApiError::field("email", "User already exists"));
    }

    let password = registration.password;
    let password_hash = tokio::task::spawn_blocking(move || hash_password(&password)).await??;
    let user = User::new(registration.name, &registration.email, password_hash);

    // The unique index still catches a concurrent registration of the same address
    UserRepository::create(&state.pool, &user).await?;

    let issued = state.tokens.issue(user.id)?;
    info!("Registered user {}", user.id);

    Ok(Json(issued.into()))
}
