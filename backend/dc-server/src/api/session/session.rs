//! Session REST API handlers
//!
//! Login exchanges credentials for a session token; the current session
//! resolves a token back to its user.

use crate::{ApiError, ApiResult, AppState, AuthUser, LoginRequest, SessionResponse, TokenResponse};

use dc_auth::{Unauthenticated, verify_password};
use dc_db::UserRepository;

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use log::info;

const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// GET /api/v1/session
pub async fn get_session(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<SessionResponse>> {
    // A valid token whose user has since been deleted no longer identifies anyone
    let user = UserRepository::find_by_id(&state.pool, user_id)
        .await?
        .ok_or_else(|| ApiError::unauthenticated(Unauthenticated::InvalidToken))?;

    Ok(Json(SessionResponse { user: user.into() }))
}

/// POST /api/v1/session
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(req) = payload?;
    let (email, password) = req.validate()?;

    let user = UserRepository::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| ApiError::general(INVALID_CREDENTIALS))?;

    let stored_hash = user.password_hash.clone();
    let matches =
        tokio::task::spawn_blocking(move || verify_password(&password, &stored_hash)).await??;
    if !matches {
        return Err(ApiError::general(INVALID_CREDENTIALS));
    }

    let issued = state.tokens.issue(user.id)?;
    info!("User {} logged in", user.id);

    Ok(Json(issued.into()))
}
