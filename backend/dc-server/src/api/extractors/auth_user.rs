//! Axum extractor guarding mutating endpoints

use crate::{ApiError, AppState};

use dc_auth::SessionGuard;

use std::future::Future;

use axum::{extract::FromRequestParts, http::header::AUTHORIZATION, http::request::Parts};
use uuid::Uuid;

/// The caller's user id, resolved from the `Authorization: Bearer` header.
///
/// Runs before the body is read, so a rejected request never reaches the store.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .map(|v| v.to_str().unwrap_or_default());

            match SessionGuard::authenticate(&state.tokens, header) {
                Ok(user_id) => {
                    log::debug!("Authenticated user {}", user_id);
                    Ok(AuthUser(user_id))
                }
                Err(reason) => {
                    log::warn!(
                        "Rejected {} {}: {}",
                        parts.method,
                        parts.uri.path(),
                        reason.code()
                    );
                    Err(ApiError::unauthenticated(reason))
                }
            }
        }
    }
}
